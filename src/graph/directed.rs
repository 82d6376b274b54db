use crate::graph::*;
use ahash::RandomState;
use log::{debug, trace, warn};
use std::collections::{hash_map::Entry, HashMap, HashSet};

/// Snapshot of a graph as a mapping from each vertex to its out-neighbors.
pub type AdjacencyList<K> = HashMap<K, Vec<K>, RandomState>;

type Successors<K> = HashSet<K, RandomState>;

/// A directed graph over labelled vertices, stored as adjacency sets.
///
/// Every vertex, isolated or not, is a key of the mapping.
/// Adding an edge adds its endpoints, so no neighbor is ever dangling.
/// The same ordered pair is never connected twice, while self-loops are fine.
/// Nothing can be removed.
///
/// |                      | Complexity                      |
/// | -------------------- | ------------------------------- |
/// | `add_vertex`         | $O(1)$                          |
/// | `add_edge`           | $O(1)$                          |
/// | `vertex_size`        | $O(1)$                          |
/// | `edge_size`          | $O(1)$                          |
/// | `contains_vertex`    | $O(1)$                          |
/// | `contains_edge`      | $O(1)$                          |
/// | `adjacency_list`     | $O(\|V\| + \|E\|)$              |
/// | `adjacency_matrix`   | $O(\|V\|^2)$                    |
/// | `sorted_vertices`    | $O(\|V\| \log \|V\|)$           |
#[derive(Clone)]
pub struct DirectedGraph<K>
where
    K: VertexLabel,
{
    adjacency: HashMap<K, Successors<K>, RandomState>,
    edge_size: usize,
}

impl<K: VertexLabel> Default for DirectedGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexLabel> PartialEq for DirectedGraph<K> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_size == other.edge_size && self.adjacency == other.adjacency
    }
}

impl<K: VertexLabel> Eq for DirectedGraph<K> {}

impl<K: VertexLabel> std::fmt::Debug for DirectedGraph<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DirectedGraph {{")?;
        for (v, succ) in self.sorted_adjacency_list() {
            writeln!(f, "{}:", v.display())?;
            for w in succ.iter() {
                writeln!(f, "  -> {}", w.display())?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

fn empty_successors<K>() -> Successors<K> {
    HashSet::with_hasher(RandomState::new())
}

impl<K: VertexLabel> DirectedGraph<K> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity_and_hasher(vertices, RandomState::new()),
            edge_size: 0,
        }
    }

    /// Builds a graph from directed edges.
    ///
    /// Fails on the first invalid label.
    pub fn try_from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut res = Self::new();
        for (source, sink) in edges {
            res.add_edge(source, sink)?;
        }
        Ok(res)
    }

    /// Adds a vertex without any out-edge, unless it is already present.
    ///
    /// Returns whether the vertex is new.
    pub fn add_vertex(&mut self, v: K) -> Result<bool> {
        check_label(&v)?;
        Ok(self.insert_vertex(v))
    }

    /// Adds a directed edge from `source` to `sink`, together with any missing endpoint.
    ///
    /// Returns whether the edge is new.
    /// Both labels are checked before the graph is touched.
    pub fn add_edge(&mut self, source: K, sink: K) -> Result<bool> {
        check_label(&source)?;
        check_label(&sink)?;
        self.insert_vertex(source.clone());
        self.insert_vertex(sink.clone());
        trace!("add edge {} -> {}", source.display(), sink.display());
        let inserted = self
            .adjacency
            .entry(source)
            .or_insert_with(empty_successors)
            .insert(sink);
        if inserted {
            self.edge_size += 1;
        }
        Ok(inserted)
    }

    fn insert_vertex(&mut self, v: K) -> bool {
        match self.adjacency.entry(v) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                trace!("add vertex {}", e.key().display());
                e.insert(empty_successors());
                true
            }
        }
    }

    pub fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_size(&self) -> usize {
        self.edge_size
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_vertex(&self, v: &K) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn contains_edge(&self, source: &K, sink: &K) -> bool {
        self.adjacency
            .get(source)
            .map_or(false, |succ| succ.contains(sink))
    }

    /// Iterates over vertices without any specific order.
    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.adjacency.keys())
    }

    /// Iterates over edges, as `(source, sink)`, without any specific order.
    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = (&K, &K)> + '_> {
        let it = self
            .adjacency
            .iter()
            .flat_map(|(src, succ)| succ.iter().map(move |snk| (src, snk)));
        Box::new(it)
    }

    /// Iterates over out-neighbors of a vertex without any specific order.
    ///
    /// An unknown vertex has no neighbors.
    pub fn out_neighbors(&self, v: &K) -> Box<dyn Iterator<Item = &K> + '_> {
        match self.adjacency.get(v) {
            Some(succ) => Box::new(succ.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Number of out-edges of a vertex.
    pub fn out_degree(&self, v: &K) -> usize {
        self.adjacency.get(v).map_or(0, |succ| succ.len())
    }

    /// All vertices in the natural order, see [natural_cmp].
    pub fn sorted_vertices(&self) -> Vec<K> {
        let mut res: Vec<K> = self.adjacency.keys().cloned().collect();
        sort_naturally(&mut res);
        res
    }

    /// A snapshot of the adjacency mapping.
    ///
    /// Neighbors are listed in no specific order.
    /// The snapshot is detached from the graph.
    pub fn adjacency_list(&self) -> AdjacencyList<K> {
        let mut res = HashMap::with_capacity_and_hasher(self.adjacency.len(), RandomState::new());
        for (v, succ) in self.adjacency.iter() {
            res.insert(v.clone(), succ.iter().cloned().collect());
        }
        res
    }

    /// Vertices, each with its out-neighbors, all in the natural order.
    pub fn sorted_adjacency_list(&self) -> Vec<(K, Vec<K>)> {
        self.sorted_vertices()
            .into_iter()
            .map(|v| {
                let mut succ: Vec<K> = self.out_neighbors(&v).cloned().collect();
                sort_naturally(&mut succ);
                (v, succ)
            })
            .collect()
    }

    /// Builds the adjacency matrix over the naturally sorted vertices.
    ///
    /// It is recomputed on every call.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix<K> {
        debug!(
            "build adjacency matrix of {} vertices and {} edges",
            self.vertex_size(),
            self.edge_size()
        );
        AdjacencyMatrix::new(self.sorted_vertices(), self.iter_edges())
    }
}

fn check_label<K: VertexLabel>(v: &K) -> Result<()> {
    v.validate().map_err(|e| {
        warn!("{}", e);
        e
    })
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck_macros::*;

    fn sorted<K: VertexLabel>(mut xs: Vec<K>) -> Vec<K> {
        sort_naturally(&mut xs);
        xs
    }

    #[test]
    fn empty_graph() {
        let g = DirectedGraph::<&str>::new();
        assert!(g.is_empty());
        assert_eq!(g.vertex_size(), 0);
        assert_eq!(g.edge_size(), 0);
        assert!(g.adjacency_list().is_empty());
        let m = g.adjacency_matrix();
        assert!(m.is_empty());
        assert!(m.cells().is_empty());
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = DirectedGraph::new();
        assert!(g.add_vertex("A").unwrap());
        assert!(!g.add_vertex("A").unwrap());
        assert_eq!(g.vertex_size(), 1);
        assert_eq!(g.out_degree(&"A"), 0);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut g = DirectedGraph::new();
        assert!(g.add_edge("A", "B").unwrap());
        assert!(!g.add_edge("A", "B").unwrap());
        assert_eq!(g.out_degree(&"A"), 1);
        assert_eq!(g.edge_size(), 1);
        assert!(g.contains_edge(&"A", &"B"));
        assert!(!g.contains_edge(&"B", &"A"));
    }

    #[test]
    fn add_vertex_keeps_existing_edges() {
        let mut g = DirectedGraph::new();
        g.add_edge(1, 2).unwrap();
        g.add_vertex(1).unwrap();
        assert!(g.contains_edge(&1, &2));
    }

    #[test]
    fn self_loop() {
        let mut g = DirectedGraph::new();
        g.add_edge("D", "D").unwrap();
        assert_eq!(g.vertex_size(), 1);
        assert_eq!(g.edge_size(), 1);
        let m = g.adjacency_matrix();
        let i = m.index_of(&"D").unwrap();
        assert_eq!(m.cells()[i][i], 1);
    }

    #[test]
    fn invalid_labels_are_refused() {
        let mut g = DirectedGraph::<Label>::new();
        assert!(matches!(
            g.add_vertex(Label::Unset),
            Err(GraphError::InvalidLabel { .. })
        ));
        assert!(matches!(
            g.add_vertex(Label::from(None::<i32>)),
            Err(GraphError::InvalidLabel { .. })
        ));
        assert!(g.add_vertex(Label::from(0)).unwrap());
        assert!(g.add_vertex(Label::from("")).unwrap());
        assert_eq!(g.vertex_size(), 2);

        let mut g = DirectedGraph::<Option<&str>>::new();
        assert!(g.add_vertex(None).is_err());
        assert!(g.add_vertex(Some("")).is_ok());
    }

    #[test]
    fn failed_edge_leaves_graph_untouched() {
        let mut g = DirectedGraph::<Label>::new();
        assert!(g.add_edge(Label::from("A"), Label::Unset).is_err());
        assert!(g.add_edge(Label::Unset, Label::from("A")).is_err());
        assert!(g.is_empty());
        assert_eq!(g.edge_size(), 0);
    }

    #[test]
    fn try_from_edges_stops_at_invalid_label() {
        let edges = vec![(Some("A"), Some("B")), (Some("B"), None)];
        assert!(DirectedGraph::try_from_edges(edges).is_err());
        let g = DirectedGraph::try_from_edges(vec![("A", "B"), ("B", "C")]).unwrap();
        assert_eq!(g.sorted_vertices(), vec!["A", "B", "C"]);
    }

    #[test]
    fn natural_vertex_order() {
        let mut g = DirectedGraph::new();
        for v in ["B", "A", "C10", "C2"] {
            g.add_vertex(v).unwrap();
        }
        assert_eq!(g.adjacency_matrix().vertices(), &["A", "B", "C2", "C10"]);
    }

    #[test]
    fn numeric_vertex_order() {
        let mut g = DirectedGraph::new();
        for v in [10u32, 2, 33, 1] {
            g.add_vertex(v).unwrap();
        }
        assert_eq!(g.sorted_vertices(), vec![1, 2, 10, 33]);
    }

    #[test]
    fn end_to_end() {
        let g = DirectedGraph::try_from_edges(vec![
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("C", "A"),
            ("C", "D"),
        ])
        .unwrap();

        let list = g.adjacency_list();
        assert_eq!(list.len(), 4);
        assert_eq!(sorted(list[&"A"].clone()), vec!["B", "C"]);
        assert_eq!(sorted(list[&"B"].clone()), vec!["C"]);
        assert_eq!(sorted(list[&"C"].clone()), vec!["A", "D"]);
        assert!(list[&"D"].is_empty());

        let m = g.adjacency_matrix();
        assert_eq!(m.vertices(), &["A", "B", "C", "D"]);
        let oracle: Vec<Vec<u8>> = vec![
            vec![0, 1, 1, 0],
            vec![0, 0, 1, 0],
            vec![1, 0, 0, 1],
            vec![0, 0, 0, 0],
        ];
        assert_eq!(m.cells(), oracle.as_slice());
        assert_eq!(m.ones(), 5);
    }

    #[test]
    fn adjacency_list_is_a_snapshot() {
        let mut g = DirectedGraph::new();
        g.add_edge("A", "B").unwrap();
        let mut list = g.adjacency_list();
        list.get_mut(&"A").unwrap().push("Z");
        list.insert("Y", vec![]);
        assert!(!g.contains_vertex(&"Z"));
        assert!(!g.contains_vertex(&"Y"));
        assert_eq!(g.out_degree(&"A"), 1);
    }

    #[test]
    fn sorted_adjacency_list() {
        let g = DirectedGraph::try_from_edges(vec![("x", "v10"), ("x", "v2"), ("a", "x")])
            .unwrap();
        let trial = g.sorted_adjacency_list();
        let oracle = vec![
            ("a", vec!["x"]),
            ("v2", vec![]),
            ("v10", vec![]),
            ("x", vec!["v2", "v10"]),
        ];
        assert_eq!(trial, oracle);
    }

    #[test]
    fn debug_lists_sorted_vertices() {
        let g = DirectedGraph::try_from_edges(vec![(2, 1), (1, 1)]).unwrap();
        let trial = format!("{:?}", g);
        assert_eq!(trial, "DirectedGraph {\n1:\n  -> 1\n2:\n  -> 1\n}\n");
    }

    #[quickcheck]
    fn no_dangling_neighbors(ops: Ops) -> bool {
        let g = ops.build();
        let dangling = g
            .iter_edges()
            .any(|(src, snk)| !g.contains_vertex(src) || !g.contains_vertex(snk));
        !dangling
    }

    #[quickcheck]
    fn edges_are_counted_once(ops: Ops) -> bool {
        let g = ops.build();
        let counted = g.iter_edges().count();
        counted == g.edge_size()
    }

    #[quickcheck]
    fn replaying_is_idempotent(ops: Ops) -> bool {
        let once = ops.build();
        let mut twice = ops.build();
        for op in ops.iter() {
            match op {
                Op::AddVertex(v) => {
                    assert!(!twice.add_vertex(v.clone()).unwrap());
                }
                Op::AddEdge((u, v)) => {
                    assert!(!twice.add_edge(u.clone(), v.clone()).unwrap());
                }
            }
        }
        once == twice
    }

    #[quickcheck]
    fn list_and_matrix_agree(ops: Ops) -> bool {
        let g = ops.build();
        let list = g.adjacency_list();
        let m = g.adjacency_matrix();
        let vs = m.vertices();
        for (i, u) in vs.iter().enumerate() {
            for (j, v) in vs.iter().enumerate() {
                let in_list = list[u].contains(v);
                if (m.cells()[i][j] == 1) != in_list {
                    return false;
                }
            }
        }
        vs.len() == list.len()
    }

    #[quickcheck]
    fn matrix_is_deterministic(ops: Ops) -> bool {
        let g = ops.build();
        g.adjacency_matrix() == g.adjacency_matrix()
    }

    #[quickcheck]
    fn insertion_order_does_not_matter(ops: Ops) -> bool {
        let forward = ops.build();
        let mut backward = Ops {
            ops: ops.ops.clone(),
        };
        backward.ops.reverse();
        let backward = backward.build();
        forward == backward && forward.adjacency_matrix() == backward.adjacency_matrix()
    }
}
