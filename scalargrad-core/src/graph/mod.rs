//! # Computation Graph (`graph`)
//!
//! The [`Graph`] is an arena holding every scalar node created while an
//! expression is evaluated. Nodes are addressed by [`NodeId`] (their index in
//! the arena), so node identity is index equality and shared operands need no
//! reference counting.
//!
//! Because a node can only consume nodes that already exist, every operand id
//! is strictly smaller than the id of the node consuming it. The arena checks
//! this on insertion, which makes the operand relation acyclic by construction.
//!
//! The node storage sits behind a `RefCell` so operators can take `&Graph`
//! and be chained freely through the [`Var`] handle. A `Graph` is therefore
//! not `Sync`: build and differentiate each graph on a single thread.

use crate::error::ScalarGradError;
use crate::node::{NodeData, NodeId};
use std::cell::{Ref, RefCell};

pub mod accessors;
pub mod autograd_methods;
pub mod create;
pub mod debug;
pub mod var;

pub use var::Var;

/// Arena of scalar nodes forming one computation graph.
#[derive(Default)]
pub struct Graph {
    pub(crate) nodes: RefCell<Vec<NodeData>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: RefCell::new(Vec::new()),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Drops every node in the arena.
    ///
    /// Ids issued before the call must not be used afterwards. Ids past the
    /// new end of the arena are rejected, but an old id can alias a node
    /// created after the clear.
    pub fn clear(&mut self) {
        let dropped = self.nodes.get_mut().len();
        self.nodes.get_mut().clear();
        log::debug!("Graph cleared ({} nodes dropped)", dropped);
    }

    /// Validates that `id` refers to a node of this graph.
    pub(crate) fn check_id(&self, id: NodeId, operation: &str) -> Result<(), ScalarGradError> {
        let len = self.len();
        if id.0 >= len {
            return Err(ScalarGradError::invalid_argument(
                operation,
                format!("node {} does not belong to this graph ({} nodes)", id, len),
            ));
        }
        Ok(())
    }

    /// Read guard over the node storage.
    pub(crate) fn read_nodes(&self) -> Ref<'_, Vec<NodeData>> {
        self.nodes.borrow()
    }

    /// Appends a node, enforcing that all of its operands already exist.
    pub(crate) fn push_node(&self, data: NodeData) -> Result<NodeId, ScalarGradError> {
        debug_assert_eq!(data.operands.len(), data.op.arity());
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        if let Some(&operand) = data.operands.iter().find(|operand| operand.0 >= id.0) {
            return Err(ScalarGradError::invalid_argument(
                "push_node",
                format!("operand {} does not exist yet (next id is {})", operand, id),
            ));
        }
        log::trace!(
            "Graph: created node {} = {} [{}] {:?}",
            id,
            data.value,
            data.op,
            data.operands
        );
        nodes.push(data);
        Ok(id)
    }
}
