use super::{GraphError, Result};
use icu_collator::{Collator, CollatorOptions, Numeric, Strength};
use std::cmp::Ordering;
use std::hash::Hash;

/// Identifiers of vertices.
///
/// A label must be comparable for equality and hashable, so that it can key the adjacency mapping,
/// and printable, so that projections can be rendered and naturally sorted.
///
/// Labels are checked by [VertexLabel::validate] whenever they enter a graph.
pub trait VertexLabel: Clone + Eq + Hash {
    /// Writes the label in its textual form.
    fn fmt_label(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result;

    /// Rejects labels which must not name a vertex.
    ///
    /// All labels are accepted by default.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// The numeric value of a label, if it is a number.
    ///
    /// Two numeric labels are ordered by their values rather than by their texts.
    fn as_number(&self) -> Option<f64> {
        None
    }

    /// Wraps the label into a `std::fmt::Display` value.
    ///
    /// Width and alignment flags of the format string are honoured.
    fn display(&self) -> LabelDisplay<'_, Self>
    where
        Self: Sized,
    {
        LabelDisplay(self)
    }
}

/// Renders a [VertexLabel] through `std::fmt::Display`.
pub struct LabelDisplay<'a, K>(&'a K);

impl<'a, K: VertexLabel> std::fmt::Display for LabelDisplay<'a, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.width().is_some() {
            // `pad` honours width and alignment only for a single string.
            f.pad(&label_text(self.0))
        } else {
            self.0.fmt_label(f)
        }
    }
}

/// The textual form of a label.
pub(crate) fn label_text<K: VertexLabel>(label: &K) -> String {
    label.display().to_string()
}

macro_rules! integer_labels {
    ($($t:ty),*) => {
        $(
            impl VertexLabel for $t {
                fn fmt_label(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self)
                }

                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

integer_labels!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl VertexLabel for String {
    fn fmt_label(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self)
    }
}

impl<'a> VertexLabel for &'a str {
    fn fmt_label(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self)
    }
}

impl VertexLabel for char {
    fn fmt_label(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// `None` stands for a missing label and never names a vertex.
impl<T: VertexLabel> VertexLabel for Option<T> {
    fn fmt_label(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Some(x) => x.fmt_label(f),
            None => f.write_str("None"),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Some(x) => x.validate(),
            None => Err(GraphError::invalid_label(self, "missing label")),
        }
    }

    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(|x| x.as_number())
    }
}

/// A dynamically typed label, either an integer or a text.
///
/// `Unset` is what a label becomes when its source value is absent.
/// It can be built and compared, but a graph refuses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Int(i64),
    Text(String),
    Unset,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Int(x) => write!(f, "{}", x),
            Label::Text(s) => f.write_str(s),
            Label::Unset => f.write_str("<unset>"),
        }
    }
}

impl VertexLabel for Label {
    fn fmt_label(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }

    fn validate(&self) -> Result<()> {
        match self {
            Label::Unset => Err(GraphError::invalid_label(self, "label is unset")),
            _ => Ok(()),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Label::Int(x) => Some(*x as f64),
            _ => None,
        }
    }
}

impl From<i64> for Label {
    fn from(x: i64) -> Self {
        Label::Int(x)
    }
}

impl From<i32> for Label {
    fn from(x: i32) -> Self {
        Label::Int(x.into())
    }
}

impl From<u32> for Label {
    fn from(x: u32) -> Self {
        Label::Int(x.into())
    }
}

impl From<&str> for Label {
    fn from(x: &str) -> Self {
        Label::Text(x.to_owned())
    }
}

impl From<String> for Label {
    fn from(x: String) -> Self {
        Label::Text(x)
    }
}

impl<T: Into<Label>> From<Option<T>> for Label {
    fn from(x: Option<T>) -> Self {
        x.map_or(Label::Unset, Into::into)
    }
}

/// Orders two labels the way projections list vertices.
///
/// Two numeric labels compare by value, and a numeric label goes before a textual one.
/// Two textual labels are compared by [natural_str_cmp].
/// Labels equal under these rules are ordered by their exact texts.
pub fn natural_cmp<K: VertexLabel>(a: &K, b: &K) -> Ordering {
    NaturalKey::of(a).cmp(&NaturalKey::of(b))
}

/// Sorts labels in place by [natural_cmp].
pub fn sort_naturally<K: VertexLabel>(labels: &mut [K]) {
    labels.sort_by_cached_key(NaturalKey::of);
}

thread_local! {
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);
        options.numeric = Some(Numeric::On);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// Compares two strings by the root collation,
/// ignoring case and accents and reading digit runs as numbers.
///
/// So `"v2" < "v10"`, `"a" == "A"` and `"éa" < "eb"`.
/// Leading zeros are ignored, so `"v01" == "v1"`.
/// Punctuation is not a sign, so `"-2" < "-10"`.
pub fn natural_str_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

#[derive(Debug)]
struct NaturalKey {
    number: Option<f64>,
    text: String,
}

impl NaturalKey {
    fn of<K: VertexLabel>(label: &K) -> Self {
        Self {
            number: label.as_number(),
            text: label_text(label),
        }
    }
}

impl PartialEq for NaturalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NaturalKey {}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let ord = match (self.number, other.number) {
            (Some(x), Some(y)) => x
                .total_cmp(&y)
                .then_with(|| natural_str_cmp(&self.text, &other.text)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => natural_str_cmp(&self.text, &other.text),
        };
        ord.then_with(|| self.text.cmp(&other.text))
    }
}
