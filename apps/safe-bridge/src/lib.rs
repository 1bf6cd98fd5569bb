pub mod bootstrap;
pub mod obs;

use safe_application::config::{to_toml_pretty, Config, ResolvedPaths};
use safe_application::{live_data, reporting};
use safe_infrastructure::artifacts::FilesystemLiveDataWriter;
use safe_infrastructure::run_data::FilesystemRunDataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Write the output file and print the summary.
    Write,
    /// Print the document to stdout, leave the output file alone.
    DryRun,
    /// Print the effective configuration and exit.
    PrintConfig,
}

pub fn run(config: &Config, paths: &ResolvedPaths, mode: RunMode) -> Result<(), String> {
    if mode == RunMode::PrintConfig {
        print!("{}", to_toml_pretty(config)?);
        return Ok(());
    }

    let source = FilesystemRunDataSource::new(&paths.data_dir);
    let now = chrono::Local::now().naive_local();

    if mode == RunMode::DryRun {
        let document = live_data::generate_live_data(&source, config, now);
        println!("{}", document.to_json_pretty()?);
        return Ok(());
    }

    println!("{}", reporting::reading_banner(&paths.data_dir));
    let writer = FilesystemLiveDataWriter::new();
    let document =
        live_data::publish_live_data(&source, &writer, config, &paths.output_file, now)?;
    for line in reporting::summary_lines(&document, &paths.output_file) {
        println!("{line}");
    }
    Ok(())
}
