//! Read-only queries over the graph.
//!
//! These are the hooks an external renderer needs: enumerate the nodes and
//! edges reachable from a terminal node, and read each node's label, value,
//! gradient and operation tag.

use super::Graph;
use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::node::{NodeData, NodeId, Operation};

impl Graph {
    /// Runs `f` on the node `id`, failing if the id is unknown.
    fn with_node<R>(
        &self,
        id: NodeId,
        operation: &str,
        f: impl FnOnce(&NodeData) -> R,
    ) -> Result<R, ScalarGradError> {
        self.check_id(id, operation)?;
        Ok(f(&self.read_nodes()[id.0]))
    }

    /// Returns the forward value of a node.
    pub fn value_of(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.with_node(id, "value_of", |node| node.value)
    }

    /// Returns the gradient accumulated on a node by the last backward pass.
    pub fn gradient_of(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.with_node(id, "gradient_of", |node| node.grad)
    }

    pub fn operation_of(&self, id: NodeId) -> Result<Operation, ScalarGradError> {
        self.with_node(id, "operation_of", |node| node.op)
    }

    pub fn label_of(&self, id: NodeId) -> Result<String, ScalarGradError> {
        self.with_node(id, "label_of", |node| node.label.clone())
    }

    /// Returns the operands of a node in recording order, repeats included.
    pub fn operands_of(&self, id: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        self.with_node(id, "operands_of", |node| node.operands.clone())
    }

    /// Returns a copy of the full node record.
    pub fn node(&self, id: NodeId) -> Result<NodeData, ScalarGradError> {
        self.with_node(id, "node", NodeData::clone)
    }

    /// Replaces the diagnostic label of a node. Labels never affect computation.
    pub fn set_label(&self, id: NodeId, label: impl Into<String>) -> Result<(), ScalarGradError> {
        self.check_id(id, "set_label")?;
        self.nodes.borrow_mut()[id.0].label = label.into();
        Ok(())
    }

    /// Every node reachable from `root`, operands before their dependents.
    pub fn reachable_from(&self, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        topological_sort(self, root)
    }

    /// Every edge reachable from `root` as `(operand, dependent)` pairs.
    ///
    /// A node recording the same operand twice yields two identical edges.
    pub fn edges_from(&self, root: NodeId) -> Result<Vec<(NodeId, NodeId)>, ScalarGradError> {
        let order = topological_sort(self, root)?;
        let nodes = self.read_nodes();
        let edges = order
            .iter()
            .flat_map(|&dependent| {
                nodes[dependent.0]
                    .operands
                    .iter()
                    .map(move |&operand| (operand, dependent))
            })
            .collect();
        Ok(edges)
    }
}

#[cfg(test)]
#[path = "accessors_test.rs"]
mod tests;
