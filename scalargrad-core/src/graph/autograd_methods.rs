use super::Graph;
use crate::autograd::backward::{self, BackwardOptions};
use crate::error::ScalarGradError;
use crate::node::NodeId;

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// After the call every node reachable from `root` holds
    /// d(root)/d(node) in its gradient; unreachable nodes are untouched.
    /// Gradients of the reachable nodes are reset first, so repeated calls on
    /// the same root give the same result. See [`Graph::backward_with`] to
    /// accumulate instead.
    ///
    /// # Errors
    /// `InvalidArgument` if `root` does not belong to this graph.
    pub fn backward(&self, root: NodeId) -> Result<(), ScalarGradError> {
        backward::backward(self, root)
    }

    /// Performs the backward pass with explicit options.
    pub fn backward_with(
        &self,
        root: NodeId,
        options: BackwardOptions,
    ) -> Result<(), ScalarGradError> {
        backward::backward_with(self, root, options)
    }

    /// Zeros the gradients of every node reachable from `root`.
    pub fn reset_gradients(&self, root: NodeId) -> Result<(), ScalarGradError> {
        backward::reset_gradients(self, root)
    }

    /// Zeros every gradient in the arena.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }
}
