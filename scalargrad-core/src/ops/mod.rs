//! # Scalar Operations Module (`ops`)
//!
//! Graph-building operators. Every operator computes a forward value from its
//! operands, appends one node to the [`Graph`](crate::graph::Graph) recording
//! those operands, and tags it with the [`Operation`](crate::node::Operation)
//! whose rule the backward engine applies later.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a fallible function (`add_op`,
//!   `pow_op`, ...) taking the graph and its operands as [`Operand`]s, so both
//!   node ids and raw numeric literals are accepted. Literals become fresh
//!   unlabeled leaves.
//! - **Compositions:** `neg_op`, `sub_op` and `div_op` are defined through
//!   `add_op`, `mul_op` and `pow_op`, so only those three carry arithmetic
//!   gradient rules of their own.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow, div.
//! - [`activation`]: tanh, exp, relu.

pub mod activation;
pub mod arithmetic;
pub mod operand;

pub use activation::{exp_op, relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use operand::Operand;
