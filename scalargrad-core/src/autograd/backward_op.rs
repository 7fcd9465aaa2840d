use crate::node::{NodeData, NodeId, Operation};

/// Applies the propagation rule of node `id`.
///
/// Reads the node's upstream gradient from `grads[id]` and adds the chain-rule
/// contribution of every recorded edge into `grads[operand]`. Values are read
/// from `nodes`, which are never modified here.
///
/// `grads` must cover every index up to `id`; operands always have smaller
/// indices than the node consuming them.
pub(crate) fn propagate(nodes: &[NodeData], grads: &mut [f64], id: NodeId) {
    let node = &nodes[id.0];
    let upstream = grads[id.0];
    match node.op {
        Operation::Leaf => {}
        Operation::Add => {
            for operand in &node.operands {
                grads[operand.0] += upstream;
            }
        }
        Operation::Mul => {
            let (a, b) = (node.operands[0], node.operands[1]);
            let (a_value, b_value) = (nodes[a.0].value, nodes[b.0].value);
            grads[a.0] += b_value * upstream;
            grads[b.0] += a_value * upstream;
        }
        Operation::Pow { exponent } => {
            let base = node.operands[0];
            grads[base.0] += pow_local_gradient(nodes[base.0].value, exponent) * upstream;
        }
        Operation::Tanh => {
            let input = node.operands[0];
            grads[input.0] += (1.0 - node.value * node.value) * upstream;
        }
        Operation::Exp => {
            let input = node.operands[0];
            grads[input.0] += node.value * upstream;
        }
        Operation::Relu => {
            let input = node.operands[0];
            let input_value = nodes[input.0].value;
            if input_value > 0.0 {
                grads[input.0] += upstream;
            } else if input_value.is_nan() {
                grads[input.0] += f64::NAN;
            }
        }
    }
}

/// d(base^exponent)/d(base).
///
/// A zero exponent makes the node constant, so its local gradient is exactly
/// zero even where `base^-1` would be infinite.
fn pow_local_gradient(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        0.0
    } else {
        exponent * base.powf(exponent - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn leaf(value: f64) -> NodeData {
        NodeData::leaf(value, String::new())
    }

    #[test]
    fn test_leaf_rule_is_noop() {
        let nodes = vec![leaf(2.0)];
        let mut grads = vec![1.0];
        propagate(&nodes, &mut grads, NodeId(0));
        assert_eq!(grads, vec![1.0]);
    }

    #[test]
    fn test_mul_rule_counts_each_edge() {
        // x * x with x = 3: both edges contribute 3 * upstream.
        let nodes = vec![
            leaf(3.0),
            NodeData::with_operands(9.0, Operation::Mul, vec![NodeId(0), NodeId(0)]),
        ];
        let mut grads = vec![0.0, 2.0];
        propagate(&nodes, &mut grads, NodeId(1));
        assert_relative_eq!(grads[0], 12.0);
    }

    #[test]
    fn test_pow_rule() {
        let nodes = vec![
            leaf(2.0),
            NodeData::with_operands(8.0, Operation::Pow { exponent: 3.0 }, vec![NodeId(0)]),
        ];
        let mut grads = vec![0.0, 1.0];
        propagate(&nodes, &mut grads, NodeId(1));
        assert_relative_eq!(grads[0], 12.0);
    }

    #[test]
    fn test_pow_zero_exponent_has_zero_gradient() {
        assert_eq!(pow_local_gradient(0.0, 0.0), 0.0);
        assert_eq!(pow_local_gradient(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_relu_rule_blocks_non_positive_input() {
        let nodes = vec![
            leaf(-0.5),
            NodeData::with_operands(0.0, Operation::Relu, vec![NodeId(0)]),
        ];
        let mut grads = vec![0.0, 1.0];
        propagate(&nodes, &mut grads, NodeId(1));
        assert_eq!(grads[0], 0.0);
    }
}
