use super::*;
use crate::ops::{add_op, div_op, exp_op, mul_op, neg_op, pow_op, relu_op, sub_op, tanh_op};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One randomly chosen operator application, replayed identically on every
/// graph `check_grad` builds.
#[derive(Debug, Clone, Copy)]
enum Step {
    Add(usize, usize),
    Sub(usize, usize),
    Mul(usize, usize),
    Neg(usize),
    /// a / (1 + b^2), keeps the divisor away from zero.
    Div(usize, usize),
    Pow(usize, f64),
    /// (1 + a^2)^-0.5, keeps the base positive for a fractional exponent.
    InvSqrt(usize),
    Tanh(usize),
    /// exp(tanh(a)), keeps the exponential bounded.
    Exp(usize),
    Relu(usize),
}

fn random_program(rng: &mut StdRng, num_inputs: usize, num_steps: usize) -> Vec<Step> {
    let mut program = Vec::with_capacity(num_steps);
    for step in 0..num_steps {
        let pool = num_inputs + step;
        let a = rng.gen_range(0..pool);
        let b = rng.gen_range(0..pool);
        let op = match rng.gen_range(0..10) {
            0 => Step::Add(a, b),
            1 => Step::Sub(a, b),
            2 => Step::Mul(a, b),
            3 => Step::Neg(a),
            4 => Step::Div(a, b),
            5 => Step::Pow(a, if rng.gen_bool(0.5) { 2.0 } else { 3.0 }),
            6 => Step::InvSqrt(a),
            7 => Step::Tanh(a),
            8 => Step::Exp(a),
            _ => Step::Relu(a),
        };
        program.push(op);
    }
    program
}

fn run_program(
    graph: &Graph,
    leaves: &[NodeId],
    program: &[Step],
) -> Result<NodeId, ScalarGradError> {
    let mut pool = leaves.to_vec();
    for step in program {
        let node = match *step {
            Step::Add(a, b) => add_op(graph, pool[a], pool[b])?,
            Step::Sub(a, b) => sub_op(graph, pool[a], pool[b])?,
            Step::Mul(a, b) => mul_op(graph, pool[a], pool[b])?,
            Step::Neg(a) => neg_op(graph, pool[a])?,
            Step::Div(a, b) => {
                let b_squared = mul_op(graph, pool[b], pool[b])?;
                let divisor = add_op(graph, b_squared, 1.0)?;
                div_op(graph, pool[a], divisor)?
            }
            Step::Pow(a, exponent) => pow_op(graph, pool[a], exponent)?,
            Step::InvSqrt(a) => {
                let squared = pow_op(graph, pool[a], 2.0)?;
                let shifted = add_op(graph, squared, 1.0)?;
                pow_op(graph, shifted, -0.5)?
            }
            Step::Tanh(a) => tanh_op(graph, pool[a])?,
            Step::Exp(a) => {
                let squashed = tanh_op(graph, pool[a])?;
                exp_op(graph, squashed)?
            }
            Step::Relu(a) => relu_op(graph, pool[a])?,
        };
        pool.push(node);
    }
    // Sum the whole pool so every input stays connected to the output.
    let mut total = pool[0];
    for &node in &pool[1..] {
        total = add_op(graph, total, node)?;
    }
    Ok(total)
}

#[test]
fn test_check_grad_random_expressions() {
    let config = GradCheckConfig::default();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let inputs: Vec<f64> = (0..3).map(|_| rng.gen_range(-1.5..1.5)).collect();
        let program = random_program(&mut rng, inputs.len(), 6);
        let result = check_grad(
            |graph, leaves| run_program(graph, leaves, &program),
            &inputs,
            &config,
        );
        assert!(
            result.is_ok(),
            "seed {} inputs {:?} program {:?}: {:?}",
            seed,
            inputs,
            program,
            result
        );
    }
}

#[test]
fn test_check_grad_neuron() -> Result<(), GradCheckError> {
    // tanh(x1*w1 + x2*w2 + b)
    let func = |graph: &Graph, leaves: &[NodeId]| {
        let x1w1 = mul_op(graph, leaves[0], leaves[1])?;
        let x2w2 = mul_op(graph, leaves[2], leaves[3])?;
        let sum = add_op(graph, x1w1, x2w2)?;
        let n = add_op(graph, sum, leaves[4])?;
        tanh_op(graph, n)
    };
    check_grad(func, &[2.0, -3.0, 0.0, 1.0, 6.8813735870195432], &GradCheckConfig::default())
}

#[test]
fn test_check_grad_detects_detached_value() {
    // The output is built from a value copied out of the graph, so the
    // analytical gradient is 0 while the numerical one is 3.
    let func = |graph: &Graph, leaves: &[NodeId]| {
        let detached = graph.constant(graph.value_of(leaves[0])? * 3.0);
        add_op(graph, detached, 0.0)
    };
    let result = check_grad(func, &[1.0], &GradCheckConfig::default());
    match result {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(analytical_grad, 0.0);
            assert!((numerical_grad - 3.0).abs() < 1e-6);
        }
        other => panic!("expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_reports_forward_error() {
    let func = |graph: &Graph, leaves: &[NodeId]| pow_op(graph, leaves[0], leaves[1]);
    let result = check_grad(func, &[2.0, 3.0], &GradCheckConfig::default());
    assert!(matches!(
        result,
        Err(GradCheckError::ForwardPassError(ScalarGradError::InvalidArgument { .. }))
    ));
}

#[test]
fn test_check_grad_non_finite_analytical() {
    // 1/x at x = 0: both shifted evaluations are finite but the analytical
    // gradient is not.
    let func = |graph: &Graph, leaves: &[NodeId]| div_op(graph, 1.0, leaves[0]);
    let result = check_grad(func, &[0.0], &GradCheckConfig::default());
    assert!(matches!(
        result,
        Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
    ));
}
