use colored::Colorize;

use crate::cli::context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::storage_summary::StorageSummary;

/// Execute the `visitlog status` command.
///
/// Displays the configuration, every audit file with its fill level,
/// and the file the next record will be written to.
pub fn execute() -> Result<()> {
    let config = context::load_config()?;
    let service = context::audit_service(&config)?;
    let summary = service.summary()?;

    output::header(&format!("visitlog v{}", env!("CARGO_PKG_VERSION")));
    output::plain(&format!(
        "  Config: v{} (format {})",
        config.visitlog.version.cyan(),
        config.visitlog.format_version
    ));
    output::plain(&format!(
        "  Directory: {}",
        service.persister.directory().display().to_string().cyan()
    ));
    output::plain(&format!(
        "  Records per file: {}",
        summary.capacity.to_string().cyan()
    ));
    output::plain(&format!(
        "  Extension: {}",
        service.manager.extension().cyan()
    ));

    print_files(&summary);

    output::plain("");
    output::success(&format!("Next record goes to {}", summary.next_file));

    Ok(())
}

/// Print the audit files section.
fn print_files(summary: &StorageSummary) {
    if summary.files.is_empty() {
        output::plain("");
        output::warning("No audit files yet");
        return;
    }

    output::header(&format!(
        "  Audit files ({}, {} records)",
        summary.files.len(),
        summary.total_entries()
    ));
    for file in &summary.files {
        let fill = format!("{}/{}", file.entries, summary.capacity);
        let fill = if file.entries >= summary.capacity {
            fill.yellow()
        } else {
            fill.green()
        };
        output::plain(&format!("  {} {:<16} {fill}", "•".dimmed(), file.name));
    }
}
