use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeData, NodeId, Operation};
use crate::ops::Operand;

// --- Forward Operation ---

/// Raises `base` to a constant `exponent` and records a `Pow` node.
///
/// Backward: `base` receives `exponent * base^(exponent - 1)` times the
/// output gradient.
///
/// # Errors
/// `InvalidArgument` if `exponent` is a node (differentiating with respect to
/// the exponent is not supported) or if `base` does not belong to `graph`.
pub fn pow_op(
    graph: &Graph,
    base: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let exponent = match exponent.into() {
        Operand::Literal(exponent) => exponent,
        Operand::Node(id) => {
            return Err(ScalarGradError::invalid_argument(
                "pow",
                format!("exponent must be a numeric literal, got node {}", id),
            ));
        }
    };
    let base = graph.resolve(base.into(), "pow")?;
    let value = graph.value_of(base)?.powf(exponent);
    graph.push_node(NodeData::with_operands(
        value,
        Operation::Pow { exponent },
        vec![base],
    ))
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
