/// Raw line count of a tabular file.
///
/// Lines are counted as text, not as CSV records, so a quoted field holding
/// a newline counts twice. The header is the first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowCount {
    Missing,
    Counted { lines: u64 },
    Unreadable(String),
}

impl RowCount {
    /// Data rows, i.e. lines minus the header. Header-only and empty files give 0.
    pub fn data_rows(&self) -> u64 {
        match self {
            RowCount::Counted { lines } => lines.saturating_sub(1),
            RowCount::Missing | RowCount::Unreadable(_) => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowCount::Missing => "missing",
            RowCount::Counted { .. } => "counted",
            RowCount::Unreadable(_) => "unreadable",
        }
    }
}
