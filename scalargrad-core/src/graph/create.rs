use super::{Graph, Var};
use crate::error::ScalarGradError;
use crate::node::{NodeData, NodeId};
use crate::ops::Operand;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

impl Graph {
    /// Creates a leaf node (no operands, zero gradient).
    pub fn leaf(&self, value: f64, label: impl Into<String>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(NodeData::leaf(value, label.into()));
        log::trace!("Graph: created leaf {} = {}", id, value);
        id
    }

    /// Creates an unlabeled leaf, as used for literals promoted to nodes.
    pub fn constant(&self, value: f64) -> NodeId {
        self.leaf(value, String::new())
    }

    /// Creates a leaf node and returns a handle to it.
    pub fn var(&self, value: f64, label: impl Into<String>) -> Var<'_> {
        let id = self.leaf(value, label);
        Var::new(self, id)
    }

    /// Returns a handle to an existing node.
    pub fn handle(&self, id: NodeId) -> Result<Var<'_>, ScalarGradError> {
        self.check_id(id, "handle")?;
        Ok(Var::new(self, id))
    }

    /// Creates a leaf with a value drawn uniformly from `[low, high)`.
    ///
    /// # Errors
    /// `InvalidArgument` if the bounds are not finite, `low >= high`, or the
    /// width of the range overflows `f64`.
    pub fn leaf_uniform<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        low: f64,
        high: f64,
        label: impl Into<String>,
    ) -> Result<NodeId, ScalarGradError> {
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(ScalarGradError::invalid_argument(
                "leaf_uniform",
                format!("invalid range [{}, {})", low, high),
            ));
        }
        let value = Uniform::new(low, high).sample(rng);
        Ok(self.leaf(value, label))
    }

    /// Creates a leaf with a value drawn from a normal distribution.
    ///
    /// # Errors
    /// `InvalidArgument` if `std_dev` is negative or either parameter is not finite.
    pub fn leaf_randn<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mean: f64,
        std_dev: f64,
        label: impl Into<String>,
    ) -> Result<NodeId, ScalarGradError> {
        if !mean.is_finite() {
            return Err(ScalarGradError::invalid_argument(
                "leaf_randn",
                format!("mean must be finite, got {}", mean),
            ));
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| ScalarGradError::invalid_argument("leaf_randn", e.to_string()))?;
        Ok(self.leaf(normal.sample(rng), label))
    }

    /// Resolves both operands of a binary operator. Node ids are checked
    /// before any literal is promoted, so a rejected call adds no node.
    pub(crate) fn resolve_pair(
        &self,
        a: Operand,
        b: Operand,
        operation: &str,
    ) -> Result<(NodeId, NodeId), ScalarGradError> {
        for operand in [a, b] {
            if let Operand::Node(id) = operand {
                self.check_id(id, operation)?;
            }
        }
        Ok((self.resolve(a, operation)?, self.resolve(b, operation)?))
    }

    /// Turns an operand into a node id, promoting literals to fresh leaves.
    pub(crate) fn resolve(
        &self,
        operand: Operand,
        operation: &str,
    ) -> Result<NodeId, ScalarGradError> {
        match operand {
            Operand::Node(id) => {
                self.check_id(id, operation)?;
                Ok(id)
            }
            Operand::Literal(value) => Ok(self.constant(value)),
        }
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
