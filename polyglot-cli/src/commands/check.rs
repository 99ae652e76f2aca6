//! Check command: load catalogs and compile templates without writing.

use colored::Colorize;
use polyglot::SiteBuilder;
use polyglot::polyglot_i18n::MergeDiagnostic;
use std::path::Path;

use super::{load_config, open_log_file};
use crate::error::{CliError, CliResult};

/// Check the site described by `config_path`.
///
/// With `deny_backfill`, any key missing from a non-default locale is an error.
pub fn run(
    config_path: &Path,
    env_file: Option<&Path>,
    deny_backfill: bool,
    quiet: bool,
) -> CliResult<()> {
    let config = load_config(config_path, env_file)?;
    open_log_file(&config)?;

    let report = SiteBuilder::new(config).check()?;

    if !quiet {
        println!();
        println!(
            "  {} {} page(s) compile in {} locale(s)",
            "✓".green().bold(),
            report.templates,
            report.locales.len()
        );

        for merge in &report.reports {
            if merge.is_clean() {
                println!("  {} {}: complete", "→".dimmed(), merge.locale());
                continue;
            }

            println!(
                "  {} {}: {} missing",
                "!".yellow().bold(),
                merge.locale(),
                merge.backfill_count()
            );
            for diagnostic in merge.diagnostics() {
                let marker = match diagnostic {
                    MergeDiagnostic::Backfilled { .. } => "-".yellow(),
                    MergeDiagnostic::KindMismatch { .. } => "≠".red(),
                };
                println!("      {} {}", marker, diagnostic);
            }
        }
        println!();
    }

    let backfills = report.backfills();
    if deny_backfill && backfills > 0 {
        return Err(CliError::Validation(format!(
            "{} key(s) missing from non-default locales",
            backfills
        )));
    }
    Ok(())
}
