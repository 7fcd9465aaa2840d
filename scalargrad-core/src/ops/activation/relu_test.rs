use super::*;
use crate::autograd::backward;

#[test]
fn test_relu_positive() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.5, "a");
    let b = relu_op(&graph, a)?;
    assert_eq!(graph.value_of(b)?, 1.5);
    backward(&graph, b)?;
    assert_eq!(graph.gradient_of(a)?, 1.0);
    Ok(())
}

#[test]
fn test_relu_negative() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(-0.5, "a");
    let b = relu_op(&graph, a)?;
    assert_eq!(graph.value_of(b)?, 0.0);
    backward(&graph, b)?;
    assert_eq!(graph.gradient_of(a)?, 0.0);
    Ok(())
}

#[test]
fn test_relu_at_zero_has_zero_gradient() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(0.0, "a");
    let b = relu_op(&graph, a)?;
    assert_eq!(graph.operation_of(b)?, Operation::Relu);
    backward(&graph, b)?;
    assert_eq!(graph.gradient_of(a)?, 0.0);
    Ok(())
}

#[test]
fn test_relu_propagates_nan() -> Result<(), ScalarGradError> {
    let graph = Graph::new();
    let a = graph.leaf(f64::NAN, "a");
    let b = relu_op(&graph, a)?;
    assert!(graph.value_of(b)?.is_nan());
    backward(&graph, b)?;
    assert!(graph.gradient_of(a)?.is_nan());
    Ok(())
}
