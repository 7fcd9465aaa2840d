use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeData, NodeId, Operation};
use crate::ops::Operand;

/// Natural exponential of a scalar. Its derivative is its own value.
pub fn exp_op(graph: &Graph, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
    let a = graph.resolve(a.into(), "exp")?;
    let value = graph.value_of(a)?.exp();
    graph.push_node(NodeData::with_operands(value, Operation::Exp, vec![a]))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
