//! Text renderings of both projections of a [DirectedGraph].
//!
//! ```rust
//! use adjgraph::graph::*;
//!
//! let g = DirectedGraph::try_from_edges(vec![("A", "B"), ("B", "B")]).unwrap();
//! let mut buf = vec![];
//! g.print_adjacency_list(&mut buf).unwrap();
//! assert_eq!(String::from_utf8(buf).unwrap(), "A -> B\nB -> B\n");
//!
//! assert_eq!(
//!     g.matrix_display().to_string(),
//!     "     A  B\n  A  0  1\n  B  0  1\n",
//! );
//! ```
use crate::graph::*;

mod options;
pub use self::options::*;

/// Adjacency list, one vertex per line, e.g. `A -> B, C` or `D -> ∅`.
///
/// Vertices and their neighbors are listed in the natural order.
pub struct AdjacencyListDisplay<'a, K>
where
    K: VertexLabel,
{
    graph: &'a DirectedGraph<K>,
    options: PrintOptions,
}

/// Adjacency matrix with a header row of vertices and one labelled row per vertex.
///
/// Every label and every cell is right-aligned to [PrintOptions::cell_width].
pub struct AdjacencyMatrixDisplay<'a, K>
where
    K: VertexLabel,
{
    graph: &'a DirectedGraph<K>,
    options: PrintOptions,
}

impl<'a, K: VertexLabel> AdjacencyListDisplay<'a, K> {
    pub fn new(graph: &'a DirectedGraph<K>) -> Self {
        Self {
            graph,
            options: PrintOptions::default(),
        }
    }

    pub fn options(mut self, options: PrintOptions) -> Self {
        self.options = options;
        self
    }
}

impl<'a, K: VertexLabel> AdjacencyMatrixDisplay<'a, K> {
    pub fn new(graph: &'a DirectedGraph<K>) -> Self {
        Self {
            graph,
            options: PrintOptions::default(),
        }
    }

    pub fn options(mut self, options: PrintOptions) -> Self {
        self.options = options;
        self
    }
}

impl<'a, K: VertexLabel> std::fmt::Display for AdjacencyListDisplay<'a, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let opts = &self.options;
        for (v, succ) in self.graph.sorted_adjacency_list() {
            write!(f, "{}{}", v.display(), opts.arrow)?;
            if succ.is_empty() {
                writeln!(f, "{}", opts.empty_marker)?;
                continue;
            }
            for (i, w) in succ.iter().enumerate() {
                if i > 0 {
                    f.write_str(&opts.separator)?;
                }
                write!(f, "{}", w.display())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a, K: VertexLabel> std::fmt::Display for AdjacencyMatrixDisplay<'a, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.options.cell_width;
        let m = self.graph.adjacency_matrix();
        write!(f, "{:width$}", "", width = width)?;
        for v in m.vertices() {
            write!(f, "{:>width$}", v.display(), width = width)?;
        }
        writeln!(f)?;
        for (v, row) in m.vertices().iter().zip(m.cells().iter()) {
            write!(f, "{:>width$}", v.display(), width = width)?;
            for cell in row.iter() {
                write!(f, "{:>width$}", cell, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<K: VertexLabel> DirectedGraph<K> {
    pub fn list_display(&self) -> AdjacencyListDisplay<'_, K> {
        AdjacencyListDisplay::new(self)
    }

    pub fn matrix_display(&self) -> AdjacencyMatrixDisplay<'_, K> {
        AdjacencyMatrixDisplay::new(self)
    }

    /// Writes the adjacency list with default [PrintOptions].
    pub fn print_adjacency_list<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        self.print_adjacency_list_with(out, &PrintOptions::default())
    }

    pub fn print_adjacency_list_with<W>(
        &self,
        out: &mut W,
        options: &PrintOptions,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        write!(out, "{}", self.list_display().options(options.clone()))
    }

    /// Writes the adjacency matrix with default [PrintOptions].
    pub fn print_adjacency_matrix<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        self.print_adjacency_matrix_with(out, &PrintOptions::default())
    }

    pub fn print_adjacency_matrix_with<W>(
        &self,
        out: &mut W,
        options: &PrintOptions,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        write!(out, "{}", self.matrix_display().options(options.clone()))
    }
}
