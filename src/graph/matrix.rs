use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;

/// A square 0/1 matrix over a fixed order of vertices.
///
/// `cells()[i][j]` is 1 iff there is an edge from `vertices()[i]` to `vertices()[j]`.
#[derive(Clone)]
pub struct AdjacencyMatrix<K>
where
    K: VertexLabel,
{
    vertices: Vec<K>,
    positions: BiHashMap<usize, K, RandomState, RandomState>,
    cells: Vec<Vec<u8>>,
}

impl<K: VertexLabel> AdjacencyMatrix<K> {
    /// Lays out `edges` over `vertices`, in the given order.
    ///
    /// A vertex listed more than once keeps its first position only.
    /// Edges touching a vertex out of `vertices` are ignored.
    pub fn new<'a, I>(vertices: Vec<K>, edges: I) -> Self
    where
        I: Iterator<Item = (&'a K, &'a K)>,
        K: 'a,
    {
        let mut positions = BiHashMap::with_capacity_and_hashers(
            vertices.len(),
            RandomState::new(),
            RandomState::new(),
        );
        let mut kept = Vec::with_capacity(vertices.len());
        for v in vertices {
            if positions.insert_no_overwrite(kept.len(), v.clone()).is_ok() {
                kept.push(v);
            }
        }
        let vertices = kept;
        let n = vertices.len();
        let mut cells = vec![vec![0u8; n]; n];
        for (src, snk) in edges {
            if let (Some(i), Some(j)) = (positions.get_by_right(src), positions.get_by_right(snk))
            {
                cells[*i][*j] = 1;
            }
        }
        Self {
            vertices,
            positions,
            cells,
        }
    }

    /// Vertices in the order of rows and of columns.
    pub fn vertices(&self) -> &[K] {
        &self.vertices
    }

    pub fn cells(&self) -> &[Vec<u8>] {
        &self.cells
    }

    pub fn into_parts(self) -> (Vec<K>, Vec<Vec<u8>>) {
        (self.vertices, self.cells)
    }

    /// Number of vertices, i.e., both the number of rows and that of columns.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Position of a vertex in rows and columns.
    pub fn index_of(&self, v: &K) -> Option<usize> {
        self.positions.get_by_right(v).copied()
    }

    /// The vertex at a position.
    pub fn vertex_at(&self, i: usize) -> Option<&K> {
        self.positions.get_by_left(&i)
    }

    pub fn row(&self, i: usize) -> Option<&[u8]> {
        self.cells.get(i).map(|r| r.as_slice())
    }

    /// The cell for an edge from `source` to `sink`, if both are present.
    pub fn get(&self, source: &K, sink: &K) -> Option<u8> {
        let i = self.index_of(source)?;
        let j = self.index_of(sink)?;
        Some(self.cells[i][j])
    }

    pub fn has_edge(&self, source: &K, sink: &K) -> bool {
        self.get(source, sink) == Some(1)
    }

    /// Total number of 1's, i.e., number of edges.
    pub fn ones(&self) -> usize {
        self.cells
            .iter()
            .map(|r| r.iter().filter(|x| **x == 1).count())
            .sum()
    }
}

impl<K: VertexLabel> PartialEq for AdjacencyMatrix<K> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.cells == other.cells
    }
}

impl<K: VertexLabel> Eq for AdjacencyMatrix<K> {}

impl<K: VertexLabel> std::fmt::Debug for AdjacencyMatrix<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyMatrix {{")?;
        for (v, row) in self.vertices.iter().zip(self.cells.iter()) {
            writeln!(f, "  {}: {:?}", v.display(), row)?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn lookups() {
        let g = DirectedGraph::try_from_edges(vec![("b", "a"), ("a", "a")]).unwrap();
        let m = g.adjacency_matrix();
        assert_eq!(m.len(), 2);
        assert_eq!(m.index_of(&"a"), Some(0));
        assert_eq!(m.index_of(&"b"), Some(1));
        assert_eq!(m.index_of(&"c"), None);
        assert_eq!(m.vertex_at(1), Some(&"b"));
        assert_eq!(m.vertex_at(2), None);
        assert_eq!(m.row(1), Some(&[1u8, 0][..]));
        assert_eq!(m.get(&"a", &"a"), Some(1));
        assert_eq!(m.get(&"a", &"b"), Some(0));
        assert_eq!(m.get(&"a", &"c"), None);
        assert!(m.has_edge(&"b", &"a"));
        assert!(!m.has_edge(&"a", &"b"));
    }

    #[test]
    fn edges_outside_vertices_are_ignored() {
        let edges = vec![("a", "b"), ("a", "z")];
        let m = AdjacencyMatrix::new(vec!["a", "b"], edges.iter().map(|(x, y)| (x, y)));
        assert_eq!(m.into_parts(), (vec!["a", "b"], vec![vec![0, 1], vec![0, 0]]));
    }

    #[test]
    fn repeated_vertices_keep_first_position() {
        let edges = vec![("b", "a"), ("a", "a")];
        let m = AdjacencyMatrix::new(
            vec!["a", "b", "a", "b"],
            edges.iter().map(|(x, y)| (x, y)),
        );
        assert_eq!(m.len(), 2);
        assert_eq!(m.vertices(), &["a", "b"]);
        assert_eq!(m.index_of(&"a"), Some(0));
        assert_eq!(m.index_of(&"b"), Some(1));
        assert_eq!(m.vertex_at(0), Some(&"a"));
        assert_eq!(m.vertex_at(1), Some(&"b"));
        assert_eq!(m.vertex_at(2), None);
        assert_eq!(m.ones(), 2);
        assert_eq!(m.into_parts(), (vec!["a", "b"], vec![vec![1, 0], vec![1, 0]]));
    }

    #[test]
    fn debug() {
        let g = DirectedGraph::try_from_edges(vec![(1, 2)]).unwrap();
        let trial = format!("{:?}", g.adjacency_matrix());
        assert_eq!(trial, "AdjacencyMatrix {\n  1: [0, 1]\n  2: [0, 0]\n}\n");
    }
}
