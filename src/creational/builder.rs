// Builder Pattern - fluent construction and director-driven construction
// The fluent builder checks for required parts when `build` is called. The
// director fixes the order of steps and leaves what each step produces to the
// concrete builder.

use std::fmt;
use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};

// ============================================================================
// Example: Fluent pizza builder
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    dough: String,
    sauce: String,
    topping: String,
}

impl Pizza {
    pub fn dough(&self) -> &str {
        &self.dough
    }

    pub fn sauce(&self) -> &str {
        &self.sauce
    }

    pub fn topping(&self) -> &str {
        &self.topping
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Pizza with {} dough, {} sauce, and {} topping.",
            self.dough, self.sauce, self.topping
        )
    }
}

#[derive(Debug, Default)]
pub struct PizzaBuilder {
    dough: Option<String>,
    sauce: Option<String>,
    topping: Option<String>,
}

impl PizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dough(mut self, dough: impl Into<String>) -> Self {
        self.dough = Some(dough.into());
        self
    }

    pub fn with_sauce(mut self, sauce: impl Into<String>) -> Self {
        self.sauce = Some(sauce.into());
        self
    }

    pub fn with_topping(mut self, topping: impl Into<String>) -> Self {
        self.topping = Some(topping.into());
        self
    }

    pub fn build(self) -> Result<Pizza> {
        Ok(Pizza {
            dough: self.dough.ok_or(PatternError::MissingField("dough"))?,
            sauce: self.sauce.ok_or(PatternError::MissingField("sauce"))?,
            topping: self.topping.ok_or(PatternError::MissingField("topping"))?,
        })
    }
}

// ============================================================================
// Example: Director and car builders
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    engine: String,
    body: String,
}

impl Car {
    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Car with {} engine and {} body.", self.engine, self.body)
    }
}

pub trait CarBuilder {
    fn build_engine(&mut self);
    fn build_body(&mut self);

    /// Hands over the assembled car and resets the builder.
    fn take_car(&mut self) -> Car;
}

#[derive(Debug, Default)]
pub struct SportsCarBuilder {
    car: Car,
}

impl CarBuilder for SportsCarBuilder {
    fn build_engine(&mut self) {
        self.car.engine = "V8 Engine".to_string();
    }

    fn build_body(&mut self) {
        self.car.body = "Sporty Body".to_string();
    }

    fn take_car(&mut self) -> Car {
        std::mem::take(&mut self.car)
    }
}

#[derive(Debug, Default)]
pub struct EconomyCarBuilder {
    car: Car,
}

impl CarBuilder for EconomyCarBuilder {
    fn build_engine(&mut self) {
        self.car.engine = "1.2L Engine".to_string();
    }

    fn build_body(&mut self) {
        self.car.body = "Hatchback Body".to_string();
    }

    fn take_car(&mut self) -> Car {
        std::mem::take(&mut self.car)
    }
}

pub struct Director<B: CarBuilder> {
    builder: B,
}

impl<B: CarBuilder> Director<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn construct(&mut self) -> Car {
        self.builder.build_engine();
        self.builder.build_body();
        self.builder.take_car()
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_pizza(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let pizza = PizzaBuilder::new()
        .with_dough("thin")
        .with_sauce("tomato")
        .with_topping("cheese")
        .build()?;
    writeln!(out, "{}", pizza)?;
    Ok(())
}

pub fn demo_car(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let mut director = Director::new(SportsCarBuilder::default());
    writeln!(out, "{}", director.construct())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_builder() {
        let pizza = PizzaBuilder::new()
            .with_dough("thin")
            .with_sauce("tomato")
            .with_topping("cheese")
            .build()
            .unwrap();
        assert_eq!(
            pizza.to_string(),
            "Pizza with thin dough, tomato sauce, and cheese topping."
        );
    }

    #[test]
    fn test_order_of_calls_irrelevant() {
        let pizza = PizzaBuilder::new()
            .with_topping("olives")
            .with_dough("thick")
            .with_sauce("pesto")
            .build()
            .unwrap();
        assert_eq!(pizza.dough(), "thick");
        assert_eq!(pizza.sauce(), "pesto");
        assert_eq!(pizza.topping(), "olives");
    }

    #[test]
    fn test_last_call_wins() {
        let pizza = PizzaBuilder::new()
            .with_dough("thin")
            .with_dough("stuffed")
            .with_sauce("tomato")
            .with_topping("cheese")
            .build()
            .unwrap();
        assert_eq!(pizza.dough(), "stuffed");
    }

    #[test]
    fn test_missing_field() {
        let err = PizzaBuilder::new().with_dough("thin").build().unwrap_err();
        assert!(matches!(err, PatternError::MissingField("sauce")));
    }

    #[test]
    fn test_director_sports_car() {
        let car = Director::new(SportsCarBuilder::default()).construct();
        assert_eq!(car.engine(), "V8 Engine");
        assert_eq!(car.body(), "Sporty Body");
        assert_eq!(car.to_string(), "Car with V8 Engine engine and Sporty Body body.");
    }

    #[test]
    fn test_director_is_builder_agnostic() {
        let car = Director::new(EconomyCarBuilder::default()).construct();
        assert_eq!(car.body(), "Hatchback Body");
    }

    #[test]
    fn test_director_reusable() {
        let mut director = Director::new(SportsCarBuilder::default());
        assert_eq!(director.construct(), director.construct());
    }
}
