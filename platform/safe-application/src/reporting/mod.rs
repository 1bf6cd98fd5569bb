use safe_domain::entities::live_data::LiveDataDocument;
use std::path::Path;

pub fn reading_banner(data_dir: &Path) -> String {
    format!("Reading SAFE test data from {}...", data_dir.display())
}

/// Human summary printed after a successful write.
pub fn summary_lines(document: &LiveDataDocument, output: &Path) -> Vec<String> {
    let mut lines = vec![
        format!("Live data written to {}", output.display()),
        format!("   Running: {}", document.is_running),
    ];
    if !document.is_running {
        return lines;
    }

    let uptime = &document.uptime;
    lines.push(format!(
        "   Uptime: {}h {}m {}s",
        uptime.hours, uptime.minutes, uptime.seconds
    ));
    let cycles = document.portfolio.as_ref().map_or(0, |p| p.cycles);
    lines.push(format!("   Cycles: {cycles}"));
    lines.push(format!("   Decisions: {}", document.total_decisions));
    if let Some(portfolio) = &document.portfolio {
        lines.push(format!(
            "   Portfolio: ${:.2} ({:+.2}%)",
            portfolio.value, portfolio.return_pct
        ));
    }
    lines
}
