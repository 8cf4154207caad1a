// Proxy Pattern - stand in for an expensive object until it is needed
// The real image is loaded on the first display and reused afterwards.

use std::cell::OnceCell;
use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::transcript::Transcript;

pub trait Image {
    fn display(&self);
}

pub struct RealImage {
    filename: String,
    log: Transcript,
}

impl RealImage {
    /// Loading happens here, at construction.
    pub fn load(filename: &str, log: &Transcript) -> Self {
        tracing::debug!(filename, "loading image from disk");
        log.record(format!("Loading image: {}", filename));
        Self {
            filename: filename.to_string(),
            log: log.clone(),
        }
    }
}

impl Image for RealImage {
    fn display(&self) {
        self.log.record(format!("Displaying image: {}", self.filename));
    }
}

pub struct ProxyImage {
    filename: String,
    log: Transcript,
    real: OnceCell<RealImage>,
}

impl ProxyImage {
    pub fn new(filename: &str, log: &Transcript) -> Self {
        Self {
            filename: filename.to_string(),
            log: log.clone(),
            real: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.get().is_some()
    }
}

impl Image for ProxyImage {
    fn display(&self) {
        self.real
            .get_or_init(|| RealImage::load(&self.filename, &self.log))
            .display();
    }
}

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let log = Transcript::new();
    let image = ProxyImage::new("test.jpg", &log);
    image.display();
    image.display();
    log.flush_to(out)?;
    Ok(())
}
