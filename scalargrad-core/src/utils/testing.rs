use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that each listed node holds the expected gradient within `tolerance`.
/// Panics on the first mismatch or on an id unknown to `graph`.
pub fn check_gradients_near(graph: &Graph, expected: &[(NodeId, f64)], tolerance: f64) {
    for (i, &(id, expected_grad)) in expected.iter().enumerate() {
        let actual = graph
            .gradient_of(id)
            .unwrap_or_else(|e| panic!("Failed to read gradient of node {}: {}", id, e));
        let diff = (actual - expected_grad).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at entry {} (node {} '{}'): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                id,
                graph.label_of(id).unwrap_or_default(),
                actual,
                expected_grad,
                diff,
                tolerance
            );
        }
    }
}
