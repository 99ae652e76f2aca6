//! Polyglot CLI
//!
//! Renders a multi-locale static site from Handlebars templates and JSON
//! translation catalogs.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;
use polyglot::polyglot_config::DEFAULT_CONFIG_FILE;
use polyglot_log::{Level, error};
use std::io;
use std::path::PathBuf;

mod commands;
mod error;

use commands::build::BuildOverrides;
use error::{CliResult, error_chain};

/// Polyglot - static site renderer for many locales
#[derive(Parser)]
#[command(name = "polyglot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site configuration file (TOML or JSON)
    #[arg(short, long, global = true, env = "POLYGLOT_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Load environment variables from this file instead of `.env`
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page in every locale and copy static assets
    #[command(visible_alias = "b")]
    Build {
        /// Output directory, overriding the configuration
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on variables missing from the render context
        #[arg(long)]
        strict: bool,
    },

    /// Load catalogs and compile templates without writing output
    Check {
        /// Fail if any non-default locale is missing keys
        #[arg(long)]
        deny_backfill: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
        polyglot_log::set_color(false);
    }
    if cli.verbose {
        polyglot_log::set_level(Level::Debug);
    } else if cli.quiet {
        polyglot_log::set_level(Level::Error);
    }

    if let Err(e) = run(cli) {
        let chain = error_chain(&e);
        error!(target: "polyglot::cli", "{}", chain.join(": "));
        polyglot_log::close_log_file();

        eprintln!("\n  {} {}", "Error:".red().bold(), chain[0]);
        for cause in &chain[1..] {
            eprintln!("    {} {}", "caused by:".dimmed(), cause);
        }
        eprintln!();
        std::process::exit(1);
    }

    polyglot_log::close_log_file();
}

fn run(cli: Cli) -> CliResult<()> {
    let env_file = cli.env_file.as_deref();

    match cli.command {
        Commands::Build { output, strict } => commands::build::run(
            &cli.config,
            env_file,
            BuildOverrides { output, strict },
            cli.quiet,
        ),

        Commands::Check { deny_backfill } => {
            commands::check::run(&cli.config, env_file, deny_backfill, cli.quiet)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "polyglot", &mut io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_flags_parse() {
        let cli = Cli::parse_from(["polyglot", "build", "-o", "public", "--strict", "-c", "site.toml"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        match cli.command {
            Commands::Build { output, strict } => {
                assert_eq!(output, Some(PathBuf::from("public")));
                assert!(strict);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["polyglot", "-v", "-q", "check"]).is_err());
    }
}
