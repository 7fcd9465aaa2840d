use crate::autograd::backward::backward;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Graph error during intermediate calculation: {0}")]
    GraphError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

// Map ScalarGradError to GradCheckError::GraphError
impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Step and tolerances for [`check_grad`].
///
/// An analytical gradient `a` passes against a numerical one `n` when
/// `|a - n| <= abs_tol + rel_tol * |n|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    pub epsilon: f64,
    pub abs_tol: f64,
    pub rel_tol: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-5,
            abs_tol: 1e-4,
            rel_tol: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and
/// returns the output node. The output is differentiated once; then for each
/// input the function is re-evaluated at `x + epsilon` and `x - epsilon` on
/// new graphs to estimate `(f(x+e) - f(x-e)) / 2e`.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    // --- 1. Initial Forward and Backward Pass ---
    let graph = Graph::with_capacity(inputs.len());
    let leaves = create_inputs(&graph, inputs);
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    backward(&graph, output).map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Compare each input ---
    for (input_index, &leaf) in leaves.iter().enumerate() {
        let analytical_grad = graph.gradient_of(leaf)?;

        let loss_plus = evaluate(&func, inputs, input_index, config.epsilon)?;
        let loss_minus = evaluate(&func, inputs, input_index, -config.epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        let tolerance = config.abs_tol + config.rel_tol * numerical_grad.abs();
        log::trace!(
            "check_grad: input {} analytical {} numerical {} (diff {})",
            input_index,
            analytical_grad,
            numerical_grad,
            difference
        );
        if difference > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

fn create_inputs(graph: &Graph, inputs: &[f64]) -> Vec<NodeId> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, &value)| graph.leaf(value, format!("x{}", i)))
        .collect()
}

/// Evaluates `func` with input `index` shifted by `delta`.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut shifted = inputs.to_vec();
    shifted[index] += delta;
    let graph = Graph::with_capacity(shifted.len());
    let leaves = create_inputs(&graph, &shifted);
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.value_of(output)?)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
