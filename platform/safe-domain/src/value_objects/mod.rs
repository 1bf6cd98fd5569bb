pub mod lookup;
pub mod portfolio_snapshot;
pub mod row_count;
pub mod uptime;

use std::collections::BTreeMap;

/// One CSV data row keyed by header name.
pub type CsvRow = BTreeMap<String, String>;
