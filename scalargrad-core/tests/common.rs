use scalargrad_core::ops::{add_op, div_op, mul_op, sub_op};
use scalargrad_core::{Graph, NodeId, ScalarGradError};

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Nodes of `L = w*x + b` with w = 7, x = 5, b = 2.
#[allow(dead_code)]
pub struct WeightedSum {
    pub w: NodeId,
    pub x: NodeId,
    pub b: NodeId,
    pub wx: NodeId,
    pub loss: NodeId,
}

#[allow(dead_code)]
pub fn build_weighted_sum(graph: &Graph) -> Result<WeightedSum, ScalarGradError> {
    let w = graph.leaf(7.0, "w");
    let x = graph.leaf(5.0, "x");
    let b = graph.leaf(2.0, "b");
    let wx = mul_op(graph, w, x)?;
    graph.set_label(wx, "wx")?;
    let loss = add_op(graph, wx, b)?;
    graph.set_label(loss, "L")?;
    Ok(WeightedSum { w, x, b, wx, loss })
}

/// Nodes of `L = w1*x1 - w2/x2 + b` with w1 = 7, x1 = 5, w2 = 8, x2 = 7, b = 2.
#[allow(dead_code)]
pub struct DifferenceOfTerms {
    pub w1: NodeId,
    pub x1: NodeId,
    pub w2: NodeId,
    pub x2: NodeId,
    pub b: NodeId,
    pub loss: NodeId,
}

#[allow(dead_code)]
pub fn build_difference_of_terms(graph: &Graph) -> Result<DifferenceOfTerms, ScalarGradError> {
    let w1 = graph.leaf(7.0, "w1");
    let x1 = graph.leaf(5.0, "x1");
    let w2 = graph.leaf(8.0, "w2");
    let x2 = graph.leaf(7.0, "x2");
    let b = graph.leaf(2.0, "b");
    let w1x1 = mul_op(graph, w1, x1)?;
    let w2x2 = div_op(graph, w2, x2)?;
    let diff = sub_op(graph, w1x1, w2x2)?;
    let loss = add_op(graph, diff, b)?;
    graph.set_label(loss, "L")?;
    Ok(DifferenceOfTerms {
        w1,
        x1,
        w2,
        x2,
        b,
        loss,
    })
}
