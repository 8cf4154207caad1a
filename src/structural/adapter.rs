// Adapter Pattern - make an existing type fit the interface clients expect
// Two flavors: a concrete adapter owning one adaptee, and a generic adapter
// that wraps anything able to perform the specific request.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

/// Interface the client code is written against.
pub trait Target {
    fn request(&self) -> String;
}

/// Existing type with a useful but incompatible method.
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        "Adaptee's specific request".to_string()
    }
}

pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        self.adaptee.specific_request()
    }
}

// ============================================================================
// Example: Zero-cost adapter with generics
// ============================================================================

pub trait SpecificRequest {
    fn specific_request(&self) -> String;
}

impl SpecificRequest for Adaptee {
    fn specific_request(&self) -> String {
        Adaptee::specific_request(self)
    }
}

/// A legacy printer that shouts; adapted without writing a dedicated adapter.
pub struct LegacyPrinter {
    pub text: String,
}

impl SpecificRequest for LegacyPrinter {
    fn specific_request(&self) -> String {
        self.text.to_uppercase()
    }
}

pub struct GenericAdapter<T> {
    inner: T,
}

impl<T> GenericAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: SpecificRequest> Target for GenericAdapter<T> {
    fn request(&self) -> String {
        self.inner.specific_request()
    }
}

fn call(target: &dyn Target) -> String {
    target.request()
}

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let adapter = Adapter::new(Adaptee);
    writeln!(out, "{}", call(&adapter))?;

    let printer = GenericAdapter::new(LegacyPrinter {
        text: "legacy printer output".to_string(),
    });
    writeln!(out, "{}", call(&printer))?;
    Ok(())
}
