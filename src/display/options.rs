/// Layout of printed projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Minimal width of labels and cells in a printed matrix.
    pub cell_width: usize,
    /// What a vertex without out-neighbors maps to in a printed list.
    pub empty_marker: String,
    /// Between two neighbors in a printed list.
    pub separator: String,
    /// Between a vertex and its neighbors in a printed list.
    pub arrow: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            cell_width: 3,
            empty_marker: "∅".to_owned(),
            separator: ", ".to_owned(),
            arrow: " -> ".to_owned(),
        }
    }
}

impl PrintOptions {
    pub fn cell_width(mut self, width: usize) -> Self {
        self.cell_width = width;
        self
    }

    pub fn empty_marker(mut self, marker: impl Into<String>) -> Self {
        self.empty_marker = marker.into();
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn arrow(mut self, arrow: impl Into<String>) -> Self {
        self.arrow = arrow.into();
        self
    }
}
