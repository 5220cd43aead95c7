use crate::cli::context;
use crate::cli::output;
use crate::config::app_config::{AppConfig, CONFIG_FILE, DEFAULT_CONFIG};
use crate::core::errors::{Result, VisitLogError};

/// Execute the `visitlog init` command.
///
/// Creates the visitlog directory, writes the default configuration
/// and creates the empty audit directory.
pub fn execute(verbose: bool) -> Result<()> {
    let visitlog_dir = context::visitlog_dir();

    if visitlog_dir.join(CONFIG_FILE).exists() {
        return Err(VisitLogError::InvalidConfig {
            detail: format!(
                "visitlog is already initialized here ({} exists)",
                visitlog_dir.display()
            ),
        });
    }

    output::header("visitlog — Initializing");

    std::fs::create_dir_all(visitlog_dir)?;
    output::success(&format!("Created {}/", visitlog_dir.display()));

    std::fs::write(visitlog_dir.join(CONFIG_FILE), DEFAULT_CONFIG)?;
    output::success(&format!("Generated {CONFIG_FILE} with defaults"));

    let config = AppConfig::parse(DEFAULT_CONFIG)?;
    let audit_dir = config.audit_dir(visitlog_dir);
    std::fs::create_dir_all(&audit_dir)?;
    output::success(&format!("Created {}/", audit_dir.display()));

    output::success("Ready.\n");
    print_next_steps(verbose, config.storage.max_entries);

    Ok(())
}

/// Print next steps after init.
fn print_next_steps(verbose: bool, max_entries: usize) {
    if output::is_quiet() {
        return;
    }

    println!("  Next steps:");
    println!("     1. Run 'visitlog add <name>' to record a visit");
    println!("     2. Run 'visitlog log' to see recorded visits");

    if verbose {
        println!();
        println!("  Files are rotated every {max_entries} records.");
        println!("  Edit storage.max_entries in {CONFIG_FILE} to change it.");
    }
}
