use crate::config::{Config, FilesConfig};
use chrono::NaiveDateTime;
use safe_domain::entities::live_data::LiveDataDocument;
use safe_domain::repositories::live_data::LiveDataWriter;
use safe_domain::repositories::run_data::RunDataSource;
use safe_domain::services::snapshot::{assemble_document, SnapshotInputs};
use std::path::Path;

pub fn collect_inputs(source: &dyn RunDataSource, files: &FilesConfig) -> SnapshotInputs {
    let inputs = SnapshotInputs {
        portfolio_row: source.latest_row(&files.portfolio_csv),
        decisions: source.count_rows(&files.decisions_csv),
        start_time: source.start_time(&files.start_time),
    };
    tracing::debug!(
        portfolio = inputs.portfolio_row.label(),
        decisions = inputs.decisions.label(),
        start_time = inputs.start_time.label(),
        "collected run data"
    );
    inputs
}

/// Builds the document for `now` without touching the output file.
pub fn generate_live_data(
    source: &dyn RunDataSource,
    config: &Config,
    now: NaiveDateTime,
) -> LiveDataDocument {
    let inputs = collect_inputs(source, &config.files);
    let document = assemble_document(&inputs, &config.portfolio_defaults, now);

    let running = if document.is_running { "true" } else { "false" };
    metrics::counter!("safe.snapshot.generated_total", "running" => running).increment(1);
    metrics::gauge!("safe.snapshot.total_decisions").set(document.total_decisions as f64);
    metrics::gauge!("safe.snapshot.uptime_hours").set(document.uptime.total_hours);

    tracing::info!(
        is_running = document.is_running,
        total_decisions = document.total_decisions,
        has_portfolio = document.portfolio.is_some(),
        "live data generated"
    );
    document
}

/// Generates the document and overwrites `output` with it.
pub fn publish_live_data(
    source: &dyn RunDataSource,
    writer: &dyn LiveDataWriter,
    config: &Config,
    output: &Path,
    now: NaiveDateTime,
) -> Result<LiveDataDocument, String> {
    let document = generate_live_data(source, config, now);
    writer.write_live_data(output, &document)?;
    Ok(document)
}
