use super::{label_text, VertexLabel};
use thiserror::Error;

/// Errors raised while growing a graph.
///
/// Only insertion can fail, and only on a label which is refused by [VertexLabel::validate].
/// A failed insertion leaves the graph untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex label is missing or otherwise unusable.
    #[error("invalid vertex label `{label}`: {reason}")]
    InvalidLabel { label: String, reason: &'static str },
}

impl GraphError {
    pub(crate) fn invalid_label<K: VertexLabel>(label: &K, reason: &'static str) -> Self {
        GraphError::InvalidLabel {
            label: label_text(label),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
