use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use design_patterns::catalog::{self, Family};
use design_patterns::telemetry;
use design_patterns::CatalogConfig;

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Run the design pattern demos.")]
struct CommandLine {
    /// TOML config file (defaults to $PATTERNS_CONFIG, then built-in values)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log library events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available demos
    #[command(alias = "l")]
    List {
        #[arg(long, value_enum)]
        family: Option<Family>,
    },
    /// Run one or more demos by name
    #[command(alias = "r")]
    Run {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Run every demo
    #[command(alias = "a")]
    All {
        #[arg(long, value_enum)]
        family: Option<Family>,
    },
}

fn selected(family: Option<Family>) -> Vec<&'static catalog::Demo> {
    match family {
        Some(family) => catalog::by_family(family).collect(),
        None => catalog::all().iter().collect(),
    }
}

fn main() -> Result<()> {
    let cli = CommandLine::parse();
    telemetry::init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { family } => {
            for demo in selected(family) {
                writeln!(
                    out,
                    "{} {:<11} {}",
                    format!("{:<24}", demo.name).green(),
                    demo.family.to_string(),
                    demo.summary
                )?;
            }
        }
        Commands::Run { names } => {
            let demos = catalog::resolve(&names)?;
            let config = CatalogConfig::load(cli.config.as_deref())
                .context("Failed to load catalog config")?;
            catalog::run_sequence(demos, &mut out, &config)
                .context("Demo run failed")?;
        }
        Commands::All { family } => {
            let config = CatalogConfig::load(cli.config.as_deref())
                .context("Failed to load catalog config")?;
            catalog::run_sequence(selected(family), &mut out, &config)
                .context("Demo run failed")?;
        }
    }

    Ok(())
}
