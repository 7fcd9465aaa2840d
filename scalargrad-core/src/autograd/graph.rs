use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeData, NodeId};
use std::collections::HashSet;

/// Builds a topological sort of the nodes reachable from `root`.
///
/// Every node appears after all of its operands; `root` is last. Nodes shared
/// by several dependents appear once.
///
/// # Errors
/// `InvalidArgument` if `root` does not belong to `graph`.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
    graph.check_id(root, "topological_sort")?;
    let nodes = graph.read_nodes();
    sort_nodes(&nodes, root)
}

/// Depth-first post-order over operands, driven by an explicit stack so long
/// chains do not exhaust the call stack.
///
/// Each stack frame holds a node and the position of the next operand to
/// visit. Visited nodes are keyed by id, so repeated edges (`x * x`) and
/// shared subexpressions are expanded once.
pub(crate) fn sort_nodes(
    nodes: &[NodeData],
    root: NodeId,
) -> Result<Vec<NodeId>, ScalarGradError> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited.insert(root);

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        let operands = &nodes[node.0].operands;
        if next < operands.len() {
            frame.1 += 1;
            let operand = operands[next];
            if operand >= node {
                return Err(ScalarGradError::CycleDetected {
                    node: node.0,
                    operand: operand.0,
                });
            }
            if visited.insert(operand) {
                stack.push((operand, 0));
            }
        } else {
            sorted_list.push(node);
            stack.pop();
        }
    }

    Ok(sorted_list)
}
