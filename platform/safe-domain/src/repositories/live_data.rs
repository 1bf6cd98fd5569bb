use crate::entities::live_data::LiveDataDocument;
use std::path::Path;

pub trait LiveDataWriter {
    /// Replaces the whole file at `path`. Not atomic.
    fn write_live_data(&self, path: &Path, document: &LiveDataDocument) -> Result<(), String>;
}
