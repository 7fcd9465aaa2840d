use std::fmt;

/// Identifier of a node inside a [`Graph`](crate::graph::Graph) arena.
///
/// Identity is the arena index: two nodes holding the same value are still
/// distinct entities. Ids are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag identifying the rule that produced a node.
///
/// The tag doubles as the node's propagation rule: the backward engine
/// dispatches on it in [`propagate`](crate::autograd::backward_op::propagate).
/// Negation, subtraction and division are built from `Add`, `Mul` and `Pow`
/// and never appear as tags of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// User-created constant or variable.
    Leaf,
    Add,
    Mul,
    /// Power with a constant exponent.
    Pow { exponent: f64 },
    Tanh,
    Exp,
    Relu,
}

impl Operation {
    /// Number of operands a node with this tag records.
    pub fn arity(&self) -> usize {
        match self {
            Operation::Leaf => 0,
            Operation::Add | Operation::Mul => 2,
            Operation::Pow { .. } | Operation::Tanh | Operation::Exp | Operation::Relu => 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Operation::Leaf)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Leaf => Ok(()),
            Operation::Add => write!(f, "+"),
            Operation::Mul => write!(f, "*"),
            Operation::Pow { exponent } => write!(f, "**{}", exponent),
            Operation::Tanh => write!(f, "tanh"),
            Operation::Exp => write!(f, "exp"),
            Operation::Relu => write!(f, "relu"),
        }
    }
}

/// Storage record for a single scalar node in the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Forward value, fixed at construction.
    pub(crate) value: f64,
    /// Accumulated d(root)/d(this node). Only the backward engine and the
    /// explicit reset helpers write to it.
    pub(crate) grad: f64,
    pub(crate) op: Operation,
    /// Ordered operands. The same id may appear twice (`x * x`); each
    /// occurrence is one edge and contributes its own gradient term.
    pub(crate) operands: Vec<NodeId>,
    pub(crate) label: String,
}

impl NodeData {
    pub(crate) fn leaf(value: f64, label: String) -> Self {
        NodeData {
            value,
            grad: 0.0,
            op: Operation::Leaf,
            operands: Vec::new(),
            label,
        }
    }

    pub(crate) fn with_operands(value: f64, op: Operation, operands: Vec<NodeId>) -> Self {
        NodeData {
            value,
            grad: 0.0,
            op,
            operands,
            label: String::new(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> Operation {
        self.op
    }

    pub fn operands(&self) -> &[NodeId] {
        &self.operands
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
