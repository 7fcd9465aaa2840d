use crate::error::ScalarGradError;
use crate::graph::Var;
use crate::node::NodeId;
use num_traits::ToPrimitive;

/// Input accepted by every operator: an existing node or a numeric literal.
///
/// Literals are promoted to unlabeled leaves when the operator runs, except
/// for the exponent of [`pow_op`](crate::ops::pow_op), which must stay a
/// literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Literal(f64),
}

impl Operand {
    /// Builds a literal from any primitive numeric type.
    ///
    /// # Errors
    /// `InvalidArgument` if the value has no `f64` representation.
    pub fn numeric<N: ToPrimitive>(value: N) -> Result<Self, ScalarGradError> {
        value.to_f64().map(Operand::Literal).ok_or_else(|| {
            ScalarGradError::invalid_argument(
                "numeric",
                "literal cannot be represented as f64",
            )
        })
    }
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<Var<'_>> for Operand {
    fn from(var: Var<'_>) -> Self {
        Operand::Node(var.id())
    }
}

impl From<&Var<'_>> for Operand {
    fn from(var: &Var<'_>) -> Self {
        Operand::Node(var.id())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Literal(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Literal(f64::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Literal(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_conversions() {
        assert_eq!(Operand::from(2.5_f64), Operand::Literal(2.5));
        assert_eq!(Operand::from(-1.5_f32), Operand::Literal(-1.5));
        assert_eq!(Operand::from(3_i32), Operand::Literal(3.0));
    }

    #[test]
    fn test_numeric_from_integer_types() -> Result<(), ScalarGradError> {
        assert_eq!(Operand::numeric(7_u64)?, Operand::Literal(7.0));
        assert_eq!(Operand::numeric(-4_i64)?, Operand::Literal(-4.0));
        assert_eq!(Operand::numeric(1_u8)?, Operand::Literal(1.0));
        Ok(())
    }

    #[test]
    fn test_node_conversion() {
        let id = NodeId(3);
        assert_eq!(Operand::from(id), Operand::Node(id));
        assert_eq!(Operand::from(&id), Operand::Node(id));
    }
}
