//! Conversions between [DirectedGraph] and `petgraph` graphs.
use crate::graph::*;
use petgraph::{graph::DiGraph, visit::EdgeRef, Directed, Graph};

impl<K: VertexLabel> DirectedGraph<K> {
    /// Copies the graph into a `petgraph` graph weighted by labels.
    ///
    /// Nodes are added in the natural order of their labels,
    /// so `NodeIndex::new(i)` is the `i`-th row of [DirectedGraph::adjacency_matrix].
    pub fn to_petgraph(&self) -> DiGraph<K, ()> {
        let m = self.adjacency_matrix();
        let mut res = DiGraph::with_capacity(m.len(), self.edge_size());
        let nodes: Vec<_> = m.vertices().iter().map(|v| res.add_node(v.clone())).collect();
        for (i, row) in m.cells().iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if *cell == 1 {
                    res.add_edge(nodes[i], nodes[j], ());
                }
            }
        }
        res
    }

    /// Builds a graph out of a `petgraph` graph whose node weights are labels.
    ///
    /// Edge weights are dropped and parallel edges collapse.
    pub fn try_from_petgraph<E>(graph: &Graph<K, E, Directed>) -> Result<Self> {
        let mut res = Self::with_capacity(graph.node_count());
        for n in graph.node_indices() {
            res.add_vertex(graph[n].clone())?;
        }
        for e in graph.edge_references() {
            res.add_edge(graph[e.source()].clone(), graph[e.target()].clone())?;
        }
        Ok(res)
    }
}
