use safe_application::config::LogFormat;

/// Installs the global subscriber. Logs go to stderr; stdout carries the summary.
pub fn init_tracing(log_level: &str, log_format: LogFormat) -> Result<(), String> {
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_level)
        .map_err(|err| format!("invalid log filter: {err}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    let result = match log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    result.map_err(|err| format!("failed to init tracing: {err}"))
}
