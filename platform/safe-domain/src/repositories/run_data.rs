use crate::value_objects::lookup::Lookup;
use crate::value_objects::row_count::RowCount;
use crate::value_objects::CsvRow;
use chrono::NaiveDateTime;

/// Read side of the bridge: the files written by the running trading process.
///
/// `file` is a bare file name resolved against the source's own base directory.
/// Implementations never fail the caller; every problem maps to an absent variant.
pub trait RunDataSource {
    fn latest_row(&self, file: &str) -> Lookup<CsvRow>;
    fn count_rows(&self, file: &str) -> RowCount;
    fn start_time(&self, file: &str) -> Lookup<NaiveDateTime>;
}
