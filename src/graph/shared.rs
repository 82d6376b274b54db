use crate::graph::*;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable handle to a [DirectedGraph] shared between threads.
///
/// Projections run concurrently under the read lock.
/// Insertions are serialized under the write lock.
/// Each insertion keeps the graph consistent, so a poisoned lock is simply taken over.
pub struct SharedGraph<K>
where
    K: VertexLabel,
{
    inner: Arc<RwLock<DirectedGraph<K>>>,
}

impl<K: VertexLabel> Clone for SharedGraph<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: VertexLabel> Default for SharedGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexLabel> From<DirectedGraph<K>> for SharedGraph<K> {
    fn from(graph: DirectedGraph<K>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }
}

impl<K: VertexLabel> SharedGraph<K> {
    pub fn new() -> Self {
        DirectedGraph::new().into()
    }

    fn read(&self) -> RwLockReadGuard<'_, DirectedGraph<K>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DirectedGraph<K>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [DirectedGraph::add_vertex].
    pub fn add_vertex(&self, v: K) -> Result<bool> {
        self.write().add_vertex(v)
    }

    /// See [DirectedGraph::add_edge].
    pub fn add_edge(&self, source: K, sink: K) -> Result<bool> {
        self.write().add_edge(source, sink)
    }

    pub fn adjacency_list(&self) -> AdjacencyList<K> {
        self.read().adjacency_list()
    }

    pub fn adjacency_matrix(&self) -> AdjacencyMatrix<K> {
        self.read().adjacency_matrix()
    }

    /// Runs `f` against the graph under the read lock.
    pub fn with_graph<R>(&self, f: impl FnOnce(&DirectedGraph<K>) -> R) -> R {
        f(&self.read())
    }

    /// A detached copy of the current graph.
    pub fn snapshot(&self) -> DirectedGraph<K> {
        self.read().clone()
    }
}
