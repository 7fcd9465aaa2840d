use super::Graph;
use std::fmt;

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.read_nodes();
        writeln!(f, "Graph ({} nodes) {{", nodes.len())?;
        for (index, node) in nodes.iter().enumerate() {
            write!(f, "  #{}", index)?;
            if !node.label.is_empty() {
                write!(f, " {}", node.label)?;
            }
            write!(f, " | data {:.4} | grad {:.4}", node.value, node.grad)?;
            if !node.op.is_leaf() {
                let operands: Vec<String> =
                    node.operands.iter().map(|operand| operand.to_string()).collect();
                write!(f, " | {} ({})", node.op, operands.join(", "))?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
