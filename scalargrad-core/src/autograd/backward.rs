use crate::autograd::backward_op::propagate;
use crate::autograd::graph::sort_nodes;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use log::{debug, trace, warn};

/// Options controlling a backward pass.
///
/// The defaults give the plain contract: seed 1.0 and reset the reachable
/// gradients first, so every node ends up holding exactly d(root)/d(node).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackwardOptions {
    /// Gradient written into the root before propagation.
    pub seed: f64,
    /// When false, the gradients of this pass are added to whatever the
    /// reachable nodes already hold instead of replacing it.
    pub reset_gradients: bool,
}

impl Default for BackwardOptions {
    fn default() -> Self {
        BackwardOptions {
            seed: 1.0,
            reset_gradients: true,
        }
    }
}

impl BackwardOptions {
    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = seed;
        self
    }

    /// Sum gradients across passes, e.g. to differentiate the sum of several
    /// losses one root at a time.
    pub fn accumulate(mut self) -> Self {
        self.reset_gradients = false;
        self
    }
}

/// Performs the backward pass from `root` with default options.
///
/// # Errors
/// `InvalidArgument` if `root` does not belong to `graph`.
pub fn backward(graph: &Graph, root: NodeId) -> Result<(), ScalarGradError> {
    backward_with(graph, root, BackwardOptions::default())
}

/// Performs the backward pass from `root`.
///
/// The pass computes its gradients in a scratch buffer and only then writes
/// them into the nodes. Propagation therefore never reads gradient left over
/// from an earlier pass, even in accumulate mode. Nodes not reachable from
/// `root` are not touched.
pub fn backward_with(
    graph: &Graph,
    root: NodeId,
    options: BackwardOptions,
) -> Result<(), ScalarGradError> {
    graph.check_id(root, "backward")?;
    let mut nodes = graph.nodes.borrow_mut();
    let sorted_nodes = sort_nodes(&nodes, root)?;
    debug!(
        "Backward from node {}: {} reachable nodes, seed {}",
        root,
        sorted_nodes.len(),
        options.seed
    );

    // Every reachable id is <= root.
    let mut grads = vec![0.0; root.0 + 1];
    grads[root.0] = options.seed;
    for &node_id in sorted_nodes.iter().rev() {
        trace!("Backward: propagating node {} [{}]", node_id, nodes[node_id.0].op);
        propagate(&nodes, &mut grads, node_id);
    }

    let mut non_finite = 0usize;
    for &node_id in &sorted_nodes {
        let node = &mut nodes[node_id.0];
        if options.reset_gradients {
            node.grad = grads[node_id.0];
        } else {
            node.grad += grads[node_id.0];
        }
        if !node.grad.is_finite() {
            non_finite += 1;
        }
    }
    if non_finite > 0 {
        warn!(
            "Backward from node {} produced {} non-finite gradients",
            root, non_finite
        );
    }
    debug!("Backward from node {} done", root);
    Ok(())
}

/// Zeros the gradient of every node reachable from `root`.
pub fn reset_gradients(graph: &Graph, root: NodeId) -> Result<(), ScalarGradError> {
    graph.check_id(root, "reset_gradients")?;
    let mut nodes = graph.nodes.borrow_mut();
    let sorted_nodes = sort_nodes(&nodes, root)?;
    for node_id in sorted_nodes {
        nodes[node_id.0].grad = 0.0;
    }
    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
