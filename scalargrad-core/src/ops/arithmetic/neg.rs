use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::mul_op;
use crate::ops::Operand;

/// Negates a scalar, recorded as `a * -1`.
pub fn neg_op(graph: &Graph, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
    mul_op(graph, a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
