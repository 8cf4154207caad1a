// Factory Method Pattern - creators decide which concrete product to build
// Clients hold a creator and receive products only through their capability
// trait.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

// ============================================================================
// Example: Numbered products
// ============================================================================

pub trait Product {
    fn display(&self) -> String;
}

pub struct ConcreteProduct1;
pub struct ConcreteProduct2;

impl Product for ConcreteProduct1 {
    fn display(&self) -> String {
        "This is Concrete Product 1.".to_string()
    }
}

impl Product for ConcreteProduct2 {
    fn display(&self) -> String {
        "This is Concrete Product 2.".to_string()
    }
}

pub trait Creator {
    fn create_product(&self) -> Box<dyn Product>;
}

pub struct ConcreteCreator1;
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator1 {
    fn create_product(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

impl Creator for ConcreteCreator2 {
    fn create_product(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

// ============================================================================
// Example: Animal factories
// ============================================================================

pub trait Animal {
    fn make_sound(&self) -> &'static str;
}

pub struct Dog;
pub struct Cat;

impl Animal for Dog {
    fn make_sound(&self) -> &'static str {
        "Woof!"
    }
}

impl Animal for Cat {
    fn make_sound(&self) -> &'static str {
        "Meow!"
    }
}

pub trait AnimalFactory {
    fn create_animal(&self) -> Box<dyn Animal>;

    /// Creates an animal and lets it speak.
    fn speak(&self) -> &'static str {
        self.create_animal().make_sound()
    }
}

pub struct DogFactory;
pub struct CatFactory;

impl AnimalFactory for DogFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Dog)
    }
}

impl AnimalFactory for CatFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Cat)
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_product(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let creators: [&dyn Creator; 2] = [&ConcreteCreator1, &ConcreteCreator2];
    for creator in creators {
        writeln!(out, "{}", creator.create_product().display())?;
    }
    Ok(())
}

pub fn demo_animal(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let factories: Vec<Box<dyn AnimalFactory>> = vec![Box::new(DogFactory), Box::new(CatFactory)];
    for factory in &factories {
        writeln!(out, "{}", factory.create_animal().make_sound())?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
