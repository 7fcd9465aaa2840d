use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::Operand;

/// Subtracts `b` from `a`, recorded as `a + (b * -1)`.
///
/// # Errors
/// `InvalidArgument` if a node operand does not belong to `graph`.
pub fn sub_op(
    graph: &Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let (a, b) = graph.resolve_pair(a.into(), b.into(), "sub")?;
    let negated = neg_op(graph, b)?;
    add_op(graph, a, negated)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
