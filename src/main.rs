use adjgraph::graph::*;
use log::info;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    // Info for this crate unless RUST_LOG says otherwise
    env_logger::Builder::new()
        .filter_module("adjgraph", log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let mut g = DirectedGraph::new();
    for (u, v) in [("A", "B"), ("A", "C"), ("B", "C"), ("C", "A"), ("C", "D")] {
        g.add_edge(u, v)?;
    }
    g.add_vertex("E")?;
    g.add_edge("D", "D")?;
    info!(
        "built a graph of {} vertices and {} edges",
        g.vertex_size(),
        g.edge_size()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Adjacency list:")?;
    g.print_adjacency_list(&mut out)?;
    writeln!(out)?;
    writeln!(out, "Adjacency matrix:")?;
    g.print_adjacency_matrix(&mut out)?;

    let mut labels = DirectedGraph::<Label>::new();
    labels.add_edge(Label::from(10), Label::from("v2"))?;
    labels.add_edge(Label::from("v10"), Label::from(2))?;
    if let Err(e) = labels.add_vertex(Label::from(None::<&str>)) {
        info!("refused as expected: {}", e);
    }
    writeln!(out)?;
    writeln!(out, "Mixed labels:")?;
    labels.print_adjacency_matrix(&mut out)?;
    Ok(())
}
