//! A directed graph with two interchangeable projections: adjacency list and adjacency matrix.
//!
//! # The container
//!
//! [`graph::DirectedGraph`] maps every known vertex to the set of its successors.
//! Vertices are arbitrary labels implementing [`graph::VertexLabel`],
//! e.g. integers, strings or the dynamic [`graph::Label`].
//! Labels are validated when they enter the graph,
//! so a missing label is rejected with [`graph::GraphError::InvalidLabel`].
//!
//! # Projections
//!
//! Both projections are computed on demand and never stored.
//! The matrix orders its vertices naturally, i.e., numbers numerically and
//! strings by collation, ignoring case and accents, with embedded digits compared by value.
//!
//! ```rust
//! use adjgraph::graph::*;
//!
//! let mut g = DirectedGraph::new();
//! g.add_edge("v10", "v2").unwrap();
//! let m = g.adjacency_matrix();
//! assert_eq!(m.vertices(), &["v2", "v10"]);
//! assert!(m.has_edge(&"v10", &"v2"));
//! ```
//!
//! # Printing
//!
//! [`display`] renders both projections as text into any `std::io::Write`.

pub mod display;
pub mod graph;
