// Pattern 1: Creational Patterns - Builder, Factory Method, Abstract Factory,
// Prototype, Singleton

use anyhow::{Context, Result};

use design_patterns::catalog::{self, Family};
use design_patterns::{telemetry, CatalogConfig};

fn main() -> Result<()> {
    telemetry::init_logging(false);
    let config = CatalogConfig::load(None).context("Failed to load catalog config")?;

    println!("Pattern 1: Creational Patterns");
    println!("===============================\n");

    let stdout = std::io::stdout();
    catalog::run_sequence(catalog::by_family(Family::Creational), &mut stdout.lock(), &config)?;
    Ok(())
}
