//! The directed graph, its vertex labels and its projections.
//!
//! # `DirectedGraph`
//!
//! It owns a mapping from each vertex to the set of its out-neighbors.
//! Every neighbor is itself a vertex, because adding an edge adds both endpoints.
//! Parallel edges collapse into one while self-loops are kept.
//!
//! # `AdjacencyMatrix`
//!
//! A square 0/1 matrix over the naturally sorted vertices,
//! rebuilt from the mapping on every request.
//!
//! # `SharedGraph`
//!
//! A cloneable handle to a graph behind a reader-writer lock.

mod label;
pub use self::label::*;
mod error;
pub use self::error::*;
mod directed;
pub use self::directed::*;
mod matrix;
pub use self::matrix::*;
mod shared;
pub use self::shared::*;
mod petgraph_bridge;

#[cfg(test)]
pub use self::tests::*;
