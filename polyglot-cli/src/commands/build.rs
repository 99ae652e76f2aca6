//! Build command: render the whole site.

use colored::Colorize;
use polyglot::{BuildSummary, SiteBuilder};
use std::path::{Path, PathBuf};

use super::{load_config, open_log_file};
use crate::error::CliResult;

/// Options that override the configuration file.
#[derive(Debug, Default)]
pub struct BuildOverrides {
    pub output: Option<PathBuf>,
    pub strict: bool,
}

/// Build the site described by `config_path`.
pub fn run(
    config_path: &Path,
    env_file: Option<&Path>,
    overrides: BuildOverrides,
    quiet: bool,
) -> CliResult<()> {
    let mut config = load_config(config_path, env_file)?;
    if let Some(output) = overrides.output {
        config.output_dir = output;
    }
    config.strict_mode |= overrides.strict;

    open_log_file(&config)?;

    if !quiet {
        println!();
        println!(
            "  {} Building {} into {}",
            "→".cyan().bold(),
            config.templates_dir.display(),
            config.output_dir.display()
        );
    }

    let summary = SiteBuilder::new(config).build()?;

    if !quiet {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &BuildSummary) {
    println!();
    println!(
        "  {} Built in {:.2}s",
        "✓".green().bold(),
        summary.duration.as_secs_f64()
    );
    println!();
    println!("  {} Locales:   {}", "→".dimmed(), summary.locales.join(", "));
    println!("  {} Pages:     {}", "→".dimmed(), summary.templates);
    println!("  {} Documents: {}", "→".dimmed(), summary.artifacts);
    println!("  {} Assets:    {}", "→".dimmed(), summary.static_files);
    println!("  {} Manifests: {}", "→".dimmed(), summary.manifests);

    if summary.backfills > 0 {
        println!(
            "  {} {} key(s) fell back to the default locale",
            "!".yellow().bold(),
            summary.backfills
        );
    }
    println!();
}
