// Pattern 2: Structural Patterns - Adapter, Bridge, Composite, Decorator,
// Facade, Proxy

use anyhow::{Context, Result};

use design_patterns::catalog::{self, Family};
use design_patterns::{telemetry, CatalogConfig};

fn main() -> Result<()> {
    telemetry::init_logging(false);
    let config = CatalogConfig::load(None).context("Failed to load catalog config")?;

    println!("Pattern 2: Structural Patterns");
    println!("==============================\n");

    let stdout = std::io::stdout();
    catalog::run_sequence(catalog::by_family(Family::Structural), &mut stdout.lock(), &config)?;
    Ok(())
}
