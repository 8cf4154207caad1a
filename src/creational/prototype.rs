// Prototype Pattern - new objects by copying an existing one
// A clone is fully independent of its source. Boxed prototypes clone through
// the trait object via `clone_box`.

use std::fmt;
use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

pub trait Prototype: fmt::Display {
    fn clone_box(&self) -> Box<dyn Prototype>;
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// Example: Attribute prototype, modified after cloning
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePrototype {
    attribute: String,
}

impl AttributePrototype {
    pub fn new(attribute: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn set_attribute(&mut self, attribute: &str) {
        self.attribute = attribute.to_string();
    }
}

impl fmt::Display for AttributePrototype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.attribute)
    }
}

impl Prototype for AttributePrototype {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }
}

// ============================================================================
// Example: Named prototypes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPrototype {
    name: String,
}

impl NamedPrototype {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl fmt::Display for NamedPrototype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Prototype for NamedPrototype {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_attribute(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let original = AttributePrototype::new("Original Attribute");
    let mut clone = original.clone();
    clone.set_attribute("Modified Attribute");

    writeln!(out, "Original Attribute: {}", original.attribute())?;
    writeln!(out, "Cloned Attribute: {}", clone.attribute())?;
    Ok(())
}

pub fn demo_named(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let prototypes: Vec<Box<dyn Prototype>> = vec![
        Box::new(NamedPrototype::new("Prototype1")),
        Box::new(NamedPrototype::new("Prototype2")),
    ];
    for prototype in &prototypes {
        let cloned = prototype.clone();
        writeln!(out, "{}", cloned)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_independent() {
        let original = AttributePrototype::new("Original Attribute");
        let mut clone = original.clone();
        clone.set_attribute("Modified Attribute");

        assert_eq!(original.attribute(), "Original Attribute");
        assert_eq!(clone.attribute(), "Modified Attribute");
    }

    #[test]
    fn test_clone_equals_source() {
        let original = NamedPrototype::new("Prototype1");
        assert_eq!(original.clone(), original);
    }

    #[test]
    fn test_boxed_clone_through_trait_object() {
        let boxed: Box<dyn Prototype> = Box::new(NamedPrototype::new("Prototype2"));
        let cloned = boxed.clone();
        assert_eq!(cloned.to_string(), "Prototype2");
    }

    #[test]
    fn test_demo_attribute() {
        let mut out = Vec::new();
        demo_attribute(&mut out, &CatalogConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Original Attribute: Original Attribute\nCloned Attribute: Modified Attribute\n"
        );
    }
}
