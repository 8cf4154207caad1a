// Pattern 3: Behavioral Patterns - Chain of Responsibility, Interpreter,
// Iterator, Mediator, Memento, Observer, State, Strategy, Template Method,
// Visitor

use anyhow::{Context, Result};

use design_patterns::catalog::{self, Family};
use design_patterns::{telemetry, CatalogConfig};

fn main() -> Result<()> {
    telemetry::init_logging(false);
    let config = CatalogConfig::load(None).context("Failed to load catalog config")?;

    println!("Pattern 3: Behavioral Patterns");
    println!("==============================\n");

    let stdout = std::io::stdout();
    catalog::run_sequence(catalog::by_family(Family::Behavioral), &mut stdout.lock(), &config)?;
    Ok(())
}
