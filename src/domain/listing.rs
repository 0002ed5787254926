//! Storage-facing description of a filtered, sorted list read.
//!
//! A [`RowQuery`] is the whole contract between the list services and the
//! storage layer: a set of case-insensitive substring criteria (ANDed
//! together, each one matching any of its columns), the columns to sort by
//! and whether the row's single reference association should be expanded.

/// Lower-cases `value` one character at a time.
///
/// Unlike `str::to_lowercase` the mapping of a character never depends on
/// its neighbours (a final `Σ` folds to `σ` like any other), so a needle
/// folds to the same text as its occurrence inside a longer value.
pub fn fold_case(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Returns `true` when `haystack` contains `needle` ignoring case.
///
/// `needle` is expected to be folded already, which is what [`SearchTerm`]
/// guarantees.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(needle)
}

/// Normalized case-insensitive filter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Builds a term from an optional user input.
    ///
    /// Absent, empty and whitespace-only values impose no constraint and
    /// yield `None`. Anything else is folded with [`fold_case`].
    pub fn parse(value: Option<&str>) -> Option<Self> {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| Self(fold_case(v)))
    }

    /// Borrow the lower-cased term.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks a column value against this term.
    pub fn matches(&self, value: &str) -> bool {
        contains_folded(value, &self.0)
    }
}

/// One filter: the term must be contained in at least one of `columns`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Criterion<C> {
    pub columns: Vec<C>,
    pub term: SearchTerm,
}

impl<C> Criterion<C> {
    pub fn new(columns: impl Into<Vec<C>>, term: SearchTerm) -> Self {
        Self {
            columns: columns.into(),
            term,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowQuery<C> {
    /// Criteria combined with logical AND.
    pub criteria: Vec<Criterion<C>>,
    /// Sort keys, most significant first. Storage appends the row id.
    pub order: Vec<C>,
    /// Load the optional reference association together with the rows.
    pub expand: bool,
}

impl<C> Default for RowQuery<C> {
    fn default() -> Self {
        Self {
            criteria: Vec::new(),
            order: Vec::new(),
            expand: false,
        }
    }
}

impl<C> RowQuery<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, criterion: Criterion<C>) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn order_by(mut self, columns: impl IntoIterator<Item = C>) -> Self {
        self.order.extend(columns);
        self
    }

    pub fn expand(mut self) -> Self {
        self.expand = true;
        self
    }
}
