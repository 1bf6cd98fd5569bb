/// Outcome of reading a single optional value from a source file.
///
/// Everything other than `Found` means "absent" to the document builder, but
/// the variants are kept apart so callers and tests can tell a missing file
/// from an empty one or from one that failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
    Empty,
    Malformed(String),
    Unreadable(String),
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Stable lower-case label, used for logs and metric tags.
    pub fn label(&self) -> &'static str {
        match self {
            Lookup::Found(_) => "found",
            Lookup::Missing => "missing",
            Lookup::Empty => "empty",
            Lookup::Malformed(_) => "malformed",
            Lookup::Unreadable(_) => "unreadable",
        }
    }
}
