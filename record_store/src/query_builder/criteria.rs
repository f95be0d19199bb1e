//! Search criteria and the wildcard/LIKE heuristic.

/// Comparison operator chosen for a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Like,
}

impl Comparison {
    /// Pattern matching when the value carries a SQL wildcard (`%` matches
    /// any run of characters, `_` exactly one), exact equality otherwise.
    pub fn for_value(value: &str) -> Self {
        if value.contains('%') || value.contains('_') {
            Comparison::Like
        } else {
            Comparison::Eq
        }
    }

    pub fn to_sql(&self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Like => "LIKE",
        }
    }
}

/// Column→value filter pairs supplied by a caller.
///
/// Entries keep their insertion order so composed SQL and bound parameters
/// line up deterministically. An empty `Criteria` means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    entries: Vec<(String, String)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.entries.push((column.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(column, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Criteria
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}
