//! `Var`: a copyable handle pairing a graph with one of its nodes, so that
//! expressions can be written with ordinary operators (`w * x + b`).
//!
//! Operator traits cannot return `Result`, so the impls here panic when the
//! two operands come from different graphs. Use the `*_op` functions in
//! [`crate::ops`] for the fallible path.

use super::Graph;
use crate::error::ScalarGradError;
use crate::node::{NodeId, Operation};
use crate::ops::activation::{exp_op, relu_op, tanh_op};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Handle to a node of a [`Graph`].
#[derive(Clone, Copy)]
pub struct Var<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Var<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Var { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Forward value of the node.
    pub fn value(&self) -> f64 {
        self.graph.read_nodes()[self.id.0].value
    }

    /// Gradient written by the last backward pass.
    pub fn grad(&self) -> f64 {
        self.graph.read_nodes()[self.id.0].grad
    }

    pub fn op(&self) -> Operation {
        self.graph.read_nodes()[self.id.0].op
    }

    pub fn label(&self) -> String {
        self.graph.read_nodes()[self.id.0].label.clone()
    }

    /// Sets the label and returns the handle, for `let wx = (w * x).labeled("wx");`.
    pub fn labeled(self, label: impl Into<String>) -> Self {
        self.graph.nodes.borrow_mut()[self.id.0].label = label.into();
        self
    }

    pub fn operands(&self) -> Vec<Var<'g>> {
        self.graph.read_nodes()[self.id.0]
            .operands
            .iter()
            .map(|&id| Var::new(self.graph, id))
            .collect()
    }

    /// Raises the node to a constant power.
    pub fn pow(self, exponent: f64) -> Var<'g> {
        self.wrap("pow", pow_op(self.graph, self, exponent))
    }

    pub fn tanh(self) -> Var<'g> {
        self.wrap("tanh", tanh_op(self.graph, self))
    }

    pub fn exp(self) -> Var<'g> {
        self.wrap("exp", exp_op(self.graph, self))
    }

    pub fn relu(self) -> Var<'g> {
        self.wrap("relu", relu_op(self.graph, self))
    }

    /// Runs the backward pass with this node as root.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.graph.backward(self.id)
    }

    fn assert_same_graph(&self, other: &Var<'_>, operation: &str) {
        assert!(
            std::ptr::eq(self.graph, other.graph),
            "cannot {} nodes {} and {} from different graphs",
            operation,
            self.id,
            other.id
        );
    }

    fn wrap(&self, operation: &str, result: Result<NodeId, ScalarGradError>) -> Var<'g> {
        match result {
            Ok(id) => Var::new(self.graph, id),
            Err(e) => panic!("Scalar {} operation failed: {}", operation, e),
        }
    }
}

// --- std::ops: a + b, a - b, a * b, a / b with Var or f64 on either side ---

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident, $name:literal) => {
        impl<'g> $trait for Var<'g> {
            type Output = Var<'g>;

            fn $method(self, rhs: Var<'g>) -> Var<'g> {
                self.assert_same_graph(&rhs, $name);
                self.wrap($name, $op_fn(self.graph, self, rhs))
            }
        }

        impl<'g> $trait<f64> for Var<'g> {
            type Output = Var<'g>;

            fn $method(self, rhs: f64) -> Var<'g> {
                self.wrap($name, $op_fn(self.graph, self, rhs))
            }
        }

        impl<'g> $trait<Var<'g>> for f64 {
            type Output = Var<'g>;

            fn $method(self, rhs: Var<'g>) -> Var<'g> {
                rhs.wrap($name, $op_fn(rhs.graph, self, rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, "add");
impl_binary_op!(Sub, sub, sub_op, "sub");
impl_binary_op!(Mul, mul, mul_op, "mul");
impl_binary_op!(Div, div, div_op, "div");

impl<'g> Neg for Var<'g> {
    type Output = Var<'g>;

    fn neg(self) -> Var<'g> {
        self.wrap("neg", neg_op(self.graph, self))
    }
}

impl fmt::Display for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.value())
    }
}

impl fmt::Debug for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.read_nodes();
        let node = &nodes[self.id.0];
        f.debug_struct("Var")
            .field("id", &self.id)
            .field("label", &node.label)
            .field("value", &node.value)
            .field("grad", &node.grad)
            .field("op", &node.op)
            .finish()
    }
}

#[cfg(test)]
#[path = "var_test.rs"]
mod tests;
