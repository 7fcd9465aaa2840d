use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeData, NodeId, Operation};
use crate::ops::Operand;

// --- Forward Operation ---

/// Multiplies two scalars and records a `Mul` node.
///
/// Backward: each operand receives the output gradient scaled by the other
/// operand's value. `x * x` records `x` twice, so `x` collects both terms.
///
/// # Errors
/// `InvalidArgument` if a node operand does not belong to `graph`.
pub fn mul_op(
    graph: &Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let (a, b) = graph.resolve_pair(a.into(), b.into(), "mul")?;
    let value = graph.value_of(a)? * graph.value_of(b)?;
    graph.push_node(NodeData::with_operands(value, Operation::Mul, vec![a, b]))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
