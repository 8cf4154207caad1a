// Singleton Pattern - one process-wide instance, created on first access
// The instance lives in a `OnceLock`, so first access is safe even when
// several threads race for it.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::config::CatalogConfig;
use crate::error::Result;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Singleton {
    // Sequence number of the construction that produced this instance.
    serial: usize,
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let serial = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::debug!(serial, "constructing singleton");
            Singleton { serial }
        })
    }

    pub fn serial(&self) -> usize {
        self.serial
    }

    /// How many times the instance has been constructed. Never above one.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn show_message(&self) -> &'static str {
        "Hello, I am a singleton instance."
    }
}

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let singleton = Singleton::instance();
    writeln!(out, "{}", singleton.show_message())?;
    Ok(())
}
