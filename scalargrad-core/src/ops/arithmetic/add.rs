use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeData, NodeId, Operation};
use crate::ops::Operand;

// --- Forward Operation ---

/// Adds two scalars and records an `Add` node.
///
/// Backward: both operands receive the output gradient unchanged.
///
/// # Errors
/// `InvalidArgument` if a node operand does not belong to `graph`.
pub fn add_op(
    graph: &Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let (a, b) = graph.resolve_pair(a.into(), b.into(), "add")?;
    let value = graph.value_of(a)? + graph.value_of(b)?;
    graph.push_node(NodeData::with_operands(value, Operation::Add, vec![a, b]))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
