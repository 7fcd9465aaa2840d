//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over scalar `f64` values.
//!
//! Evaluating an expression builds a directed acyclic graph of nodes inside a
//! [`Graph`] arena; one backward traversal from a chosen node then fills in the
//! gradient of that node with respect to every node it depends on.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let w = graph.var(7.0, "w");
//! let x = graph.var(5.0, "x");
//! let b = graph.var(2.0, "b");
//! let loss = (w * x + b).labeled("L");
//! loss.backward().unwrap();
//! assert_eq!(w.grad(), 5.0);
//! assert_eq!(x.grad(), 7.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod utils;

// Re-export the main types so they are reachable as `scalargrad_core::Graph` etc.
pub use autograd::{BackwardOptions, GradCheckConfig, GradCheckError};
pub use error::ScalarGradError;
pub use graph::{Graph, Var};
pub use node::{NodeData, NodeId, Operation};
pub use ops::Operand;
