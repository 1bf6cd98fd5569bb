use safe_domain::entities::live_data::LiveDataDocument;
use safe_domain::repositories::live_data::LiveDataWriter;
use std::fs;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemLiveDataWriter;

impl FilesystemLiveDataWriter {
    pub fn new() -> Self {
        Self
    }
}

fn record_write_metrics(kind: &'static str, start: Instant, result: &Result<(), String>) {
    let result_label = if result.is_ok() { "ok" } else { "err" };
    metrics::counter!(
        "safe.infra.live_data.write.calls_total",
        "kind" => kind,
        "result" => result_label
    )
    .increment(1);
    metrics::histogram!("safe.infra.live_data.write_ms", "kind" => kind, "result" => result_label)
        .record(start.elapsed().as_millis() as f64);
}

impl LiveDataWriter for FilesystemLiveDataWriter {
    fn write_live_data(&self, path: &Path, document: &LiveDataDocument) -> Result<(), String> {
        let start = Instant::now();
        let result = document.to_json_pretty().and_then(|json| {
            fs::write(path, json)
                .map_err(|err| format!("failed to write live data {}: {}", path.display(), err))
        });
        record_write_metrics("live_data_json", start, &result);
        if result.is_ok() {
            tracing::info!(path = %path.display(), "live data written");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::FilesystemLiveDataWriter;
    use safe_domain::entities::live_data::LiveDataDocument;
    use safe_domain::repositories::live_data::LiveDataWriter;
    use safe_domain::value_objects::uptime::UptimeReport;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_tmp_path(name: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!("safe_{name}_{}_{}", std::process::id(), now))
    }

    fn document(total_decisions: u64) -> LiveDataDocument {
        LiveDataDocument {
            is_running: false,
            start_time: None,
            uptime: UptimeReport::zero(),
            portfolio: None,
            total_decisions,
            last_update: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn write_replaces_previous_contents() {
        let path = unique_tmp_path("live_data.json");
        fs::write(&path, "x".repeat(4096)).expect("seed file");

        let writer = FilesystemLiveDataWriter::new();
        writer
            .write_live_data(&path, &document(7))
            .expect("write live data");

        let text = fs::read_to_string(&path).expect("read back");
        let parsed: LiveDataDocument = serde_json::from_str(&text).expect("valid json");
        assert_eq!(parsed, document(7));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let path = unique_tmp_path("no_such_dir").join("live_data.json");
        let err = FilesystemLiveDataWriter::new()
            .write_live_data(&path, &document(0))
            .expect_err("expected write to fail");
        assert!(err.contains("failed to write live data"));
    }
}
