use clap::Parser;
use safe_bridge::bootstrap::{self, Overrides};
use safe_bridge::{obs, RunMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "safe-bridge")]
#[command(
    about = "Reads the SAFE paper-trading files and writes the live data JSON for the dashboard.",
    version
)]
#[command(
    after_help = "Examples:\n  safe-bridge\n  safe-bridge --data-dir ~/Step --output site/safe-live-data.json\n  safe-bridge --config bridge.toml --dry-run\n"
)]
struct Cli {
    /// Optional TOML config. Without it the built-in defaults are used.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the trading CSV and start-time files.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Output JSON path.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the JSON document instead of writing it.
    #[arg(long, conflicts_with = "print_config")]
    dry_run: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

fn main() {
    let cli = Cli::parse();
    let overrides = Overrides {
        config_path: cli.config,
        data_dir: cli.data_dir,
        output: cli.output,
    };

    let config = match bootstrap::load_config(&overrides) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = obs::init_tracing(&config.logging.level, config.logging.format) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let paths = bootstrap::resolve_paths(&config, &overrides);

    let mode = if cli.print_config {
        RunMode::PrintConfig
    } else if cli.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Write
    };

    if let Err(err) = safe_bridge::run(&config, &paths, mode) {
        tracing::error!(error = %err, "snapshot run failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
