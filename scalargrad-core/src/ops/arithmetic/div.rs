use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::Operand;

/// Divides `a` by `b`, recorded as `a * b**-1`.
///
/// A zero divisor is not an error: the result follows IEEE-754 and the
/// value (and later the gradients) become `inf` or `NaN`.
///
/// # Errors
/// `InvalidArgument` if a node operand does not belong to `graph`.
pub fn div_op(
    graph: &Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let (a, b) = graph.resolve_pair(a.into(), b.into(), "div")?;
    let reciprocal = pow_op(graph, b, -1.0)?;
    mul_op(graph, a, reciprocal)
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
