//! Defines the parsed representation of a path expression.
use std::fmt;

/// A single traversal step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryStep {
    /// Selects a field directly on each root (e.g., `.book`).
    Child(String),
    /// Selects a field at any depth below each root (e.g., `..isbn`).
    Descendant(String),
}

impl QueryStep {
    /// The field name this step matches.
    pub fn field(&self) -> &str {
        match self {
            QueryStep::Child(field) | QueryStep::Descendant(field) => field,
        }
    }
}

impl fmt::Display for QueryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryStep::Child(field) => write!(f, ".{}", field),
            QueryStep::Descendant(field) => write!(f, "..{}", field),
        }
    }
}

/// An ordered sequence of steps, applied left to right.
///
/// A `Query` is built by concatenating the steps of one or more path
/// expressions. It holds no reference to the data it is executed against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    steps: Vec<QueryStep>,
}

impl Query {
    pub fn new(steps: Vec<QueryStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[QueryStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// An empty query never matches anything.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Appends the steps of `other` after this query's own steps.
    pub fn extend(&mut self, other: Query) {
        self.steps.extend(other.steps);
    }
}

impl From<Vec<QueryStep>> for Query {
    fn from(steps: Vec<QueryStep>) -> Self {
        Self::new(steps)
    }
}

impl IntoIterator for Query {
    type Item = QueryStep;
    type IntoIter = std::vec::IntoIter<QueryStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl fmt::Display for Query {
    /// Renders the canonical path, dropping the optional leading dot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                QueryStep::Child(field) if i == 0 => write!(f, "{}", field)?,
                _ => write!(f, "{}", step)?,
            }
        }
        Ok(())
    }
}
