//! # Weighted sum with a gradient listing
//!
//! Builds `L = w1*x1 - w2/x2 + b`, runs the backward pass and prints every
//! node and edge reachable from `L`, which is the data a graph renderer needs.
//!
//! `cargo run --example weighted_sum_graph`

use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let graph = Graph::new();
    let w1 = graph.var(7.0, "w1");
    let x1 = graph.var(5.0, "x1");
    let w2 = graph.var(8.0, "w2");
    let x2 = graph.var(7.0, "x2");
    let b = graph.var(2.0, "b");

    let w1x1 = (w1 * x1).labeled("w1x1");
    let w2x2 = (w2 / x2).labeled("w2/x2");
    let loss = (w1x1 - w2x2 + b).labeled("L");
    loss.backward()?;

    println!("{} -> {:?}", loss, graph);

    println!("Nodes:");
    for id in graph.reachable_from(loss.id())? {
        let node = graph.node(id)?;
        println!(
            "  {} {:>6} | data {:>8.4} | grad {:>8.4} | {}",
            id,
            node.label(),
            node.value(),
            node.grad(),
            node.op()
        );
    }
    println!("Edges:");
    for (operand, dependent) in graph.edges_from(loss.id())? {
        println!("  {} -> {}", operand, dependent);
    }
    Ok(())
}
