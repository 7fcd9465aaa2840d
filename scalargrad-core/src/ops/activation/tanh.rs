use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeData, NodeId, Operation};
use crate::ops::Operand;

// --- Forward Operation ---

/// Hyperbolic tangent of a scalar.
///
/// Backward: `a` receives `(1 - tanh(a)^2)` times the output gradient.
pub fn tanh_op(graph: &Graph, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
    let a = graph.resolve(a.into(), "tanh")?;
    let value = graph.value_of(a)?.tanh();
    graph.push_node(NodeData::with_operands(value, Operation::Tanh, vec![a]))
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
