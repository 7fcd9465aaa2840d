use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeData, NodeId, Operation};
use crate::ops::Operand;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// Backward: the output gradient passes through when `a > 0`, otherwise
/// `a` receives nothing (the subgradient at 0 is taken as 0). A `NaN` input
/// passes through unchanged and yields a `NaN` gradient.
pub fn relu_op(graph: &Graph, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
    let a = graph.resolve(a.into(), "relu")?;
    let input = graph.value_of(a)?;
    let value = if input > 0.0 || input.is_nan() { input } else { 0.0 };
    graph.push_node(NodeData::with_operands(value, Operation::Relu, vec![a]))
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
