//! # Autograd (`autograd`)
//!
//! The backward engine. Given a terminal node it:
//!
//! 1. sorts every node reachable from it so that operands come before the
//!    nodes consuming them ([`graph::topological_sort`]);
//! 2. seeds the terminal node's gradient with 1;
//! 3. walks the order in reverse, applying each node's propagation rule
//!    ([`backward_op::propagate`]) to push gradient into its operands.
//!
//! [`grad_check`] verifies the rules against central finite differences.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward::{backward, backward_with, reset_gradients, BackwardOptions};
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::topological_sort;
