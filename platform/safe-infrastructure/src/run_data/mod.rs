use chrono::NaiveDateTime;
use safe_domain::repositories::run_data::RunDataSource;
use safe_domain::services::snapshot::parse_start_time;
use safe_domain::value_objects::lookup::Lookup;
use safe_domain::value_objects::row_count::RowCount;
use safe_domain::value_objects::CsvRow;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Reads the trading process output files from a single directory.
#[derive(Debug, Clone)]
pub struct FilesystemRunDataSource {
    base_dir: PathBuf,
}

impl FilesystemRunDataSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, file: &str) -> PathBuf {
        self.base_dir.join(file)
    }
}

fn record_read_metrics(kind: &'static str, start: Instant, outcome: &'static str) {
    metrics::counter!(
        "safe.infra.run_data.read.calls_total",
        "kind" => kind,
        "result" => outcome
    )
    .increment(1);
    metrics::histogram!("safe.infra.run_data.read_ms", "kind" => kind, "result" => outcome)
        .record(start.elapsed().as_millis() as f64);
}

impl RunDataSource for FilesystemRunDataSource {
    fn latest_row(&self, file: &str) -> Lookup<CsvRow> {
        let start = Instant::now();
        let path = self.resolve(file);
        let lookup = if !path.exists() {
            Lookup::Missing
        } else {
            match read_last_row(&path) {
                Ok(Some(row)) => Lookup::Found(row),
                Ok(None) => Lookup::Empty,
                Err(err) => {
                    tracing::warn!(file = %path.display(), error = %err, "failed to read CSV");
                    Lookup::Unreadable(err)
                }
            }
        };
        record_read_metrics("latest_row", start, lookup.label());
        tracing::debug!(file = %path.display(), outcome = lookup.label(), "latest row lookup");
        lookup
    }

    fn count_rows(&self, file: &str) -> RowCount {
        let start = Instant::now();
        let path = self.resolve(file);
        let count = if !path.exists() {
            RowCount::Missing
        } else {
            match count_lines(&path) {
                Ok(lines) => RowCount::Counted { lines },
                Err(err) => {
                    tracing::debug!(file = %path.display(), error = %err, "row count unavailable");
                    RowCount::Unreadable(err)
                }
            }
        };
        record_read_metrics("count_rows", start, count.label());
        count
    }

    fn start_time(&self, file: &str) -> Lookup<NaiveDateTime> {
        let start = Instant::now();
        let path = self.resolve(file);
        let lookup = if !path.exists() {
            Lookup::Missing
        } else {
            match fs::read_to_string(&path) {
                Ok(contents) => match parse_start_time(&contents) {
                    Ok(ts) => Lookup::Found(ts),
                    Err(err) => Lookup::Malformed(err),
                },
                Err(err) => Lookup::Unreadable(format!(
                    "failed to read start time {}: {}",
                    path.display(),
                    err
                )),
            }
        };
        if let Lookup::Malformed(reason) | Lookup::Unreadable(reason) = &lookup {
            tracing::debug!(file = %path.display(), reason = %reason, "start time unavailable");
        }
        record_read_metrics("start_time", start, lookup.label());
        lookup
    }
}

fn read_last_row(path: &Path) -> Result<Option<CsvRow>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|err| format!("failed to open CSV {}: {}", path.display(), err))?;
    let headers = reader
        .headers()
        .map_err(|err| format!("failed to parse CSV header: {}", err))?
        .clone();

    let mut last = None;
    for result in reader.records() {
        last = Some(result.map_err(|err| format!("failed to parse CSV row: {}", err))?);
    }

    Ok(last.map(|record| {
        headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }))
}

fn count_lines(path: &Path) -> Result<u64, String> {
    let file = File::open(path)
        .map_err(|err| format!("failed to open {}: {}", path.display(), err))?;
    let mut lines = 0u64;
    for line in BufReader::new(file).lines() {
        line.map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
        lines += 1;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::FilesystemRunDataSource;
    use safe_domain::repositories::run_data::RunDataSource;
    use safe_domain::value_objects::lookup::Lookup;
    use safe_domain::value_objects::row_count::RowCount;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_tmp_dir(name: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let dir =
            std::env::temp_dir().join(format!("safe_{name}_{}_{}", std::process::id(), now));
        fs::create_dir_all(&dir).expect("create tmp dir");
        dir
    }

    #[test]
    fn latest_row_returns_last_data_row() {
        let dir = unique_tmp_dir("latest_row");
        fs::write(
            dir.join("snap.csv"),
            "portfolio_value,return_pct,cycle_count,timestamp\n\
10000,0,1,2024-01-01T00:00:00\n\
10100.5,1.005,2,2024-01-01T00:05:00\n",
        )
        .expect("write csv");

        let source = FilesystemRunDataSource::new(&dir);
        let row = source.latest_row("snap.csv").found().expect("row");
        assert_eq!(row.get("portfolio_value").map(String::as_str), Some("10100.5"));
        assert_eq!(row.get("cycle_count").map(String::as_str), Some("2"));
        assert_eq!(
            row.get("timestamp").map(String::as_str),
            Some("2024-01-01T00:05:00")
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn latest_row_distinguishes_missing_and_empty() {
        let dir = unique_tmp_dir("latest_row_absent");
        fs::write(dir.join("header_only.csv"), "portfolio_value,return_pct\n").expect("write");
        fs::write(dir.join("blank.csv"), "").expect("write");

        let source = FilesystemRunDataSource::new(&dir);
        assert_eq!(source.latest_row("nope.csv"), Lookup::Missing);
        assert_eq!(source.latest_row("header_only.csv"), Lookup::Empty);
        assert_eq!(source.latest_row("blank.csv"), Lookup::Empty);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn latest_row_tolerates_short_rows() {
        let dir = unique_tmp_dir("latest_row_short");
        fs::write(
            dir.join("snap.csv"),
            "portfolio_value,return_pct,cycle_count,timestamp\n10200,2.0\n",
        )
        .expect("write csv");

        let row = FilesystemRunDataSource::new(&dir)
            .latest_row("snap.csv")
            .found()
            .expect("row");
        assert_eq!(row.len(), 2);
        assert!(row.get("cycle_count").is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn latest_row_reports_invalid_utf8_as_unreadable() {
        let dir = unique_tmp_dir("latest_row_utf8");
        fs::write(dir.join("snap.csv"), b"a,b\n\xff\xfe,1\n").expect("write csv");

        let lookup = FilesystemRunDataSource::new(&dir).latest_row("snap.csv");
        assert!(matches!(lookup, Lookup::Unreadable(_)));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn count_rows_counts_raw_lines() {
        let dir = unique_tmp_dir("count_rows");
        fs::write(dir.join("decisions.csv"), "a,b\n1,2\n3,4\n5,6\n").expect("write");
        fs::write(dir.join("no_trailing_newline.csv"), "a,b\n1,2\n3,4").expect("write");
        fs::write(dir.join("header.csv"), "a,b\n").expect("write");
        fs::write(dir.join("quoted.csv"), "a,b\n\"x\ny\",2\n").expect("write");

        let source = FilesystemRunDataSource::new(&dir);
        assert_eq!(source.count_rows("decisions.csv").data_rows(), 3);
        assert_eq!(source.count_rows("no_trailing_newline.csv").data_rows(), 2);
        assert_eq!(source.count_rows("header.csv"), RowCount::Counted { lines: 1 });
        assert_eq!(source.count_rows("header.csv").data_rows(), 0);
        // Line based, so the embedded newline counts as an extra row.
        assert_eq!(source.count_rows("quoted.csv").data_rows(), 2);
        assert_eq!(source.count_rows("missing.csv"), RowCount::Missing);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn start_time_parses_trimmed_content() {
        let dir = unique_tmp_dir("start_time");
        fs::write(dir.join("start.txt"), "2024-01-01 00:00:00\n").expect("write");
        fs::write(dir.join("bad.txt"), "yesterday").expect("write");

        let source = FilesystemRunDataSource::new(&dir);
        let ts = source.start_time("start.txt").found().expect("start time");
        assert_eq!(ts.to_string(), "2024-01-01 00:00:00");
        assert!(matches!(source.start_time("bad.txt"), Lookup::Malformed(_)));
        assert_eq!(source.start_time("absent.txt"), Lookup::Missing);

        let _ = fs::remove_dir_all(&dir);
    }
}
