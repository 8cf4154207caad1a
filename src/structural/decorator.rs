// Decorator Pattern - wrap an object to add behavior while keeping its trait
// Each decorator owns the coffee it wraps and adds its part after delegating.
// Nesting order is the order the additions appear in.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple coffee".to_string()
    }

    fn cost(&self) -> f64 {
        2.0
    }
}

pub struct MilkDecorator {
    inner: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        Self { inner }
    }
}

impl Coffee for MilkDecorator {
    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.5
    }
}

pub struct SugarDecorator {
    inner: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        Self { inner }
    }
}

impl Coffee for SugarDecorator {
    fn description(&self) -> String {
        format!("{}, Sugar", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.2
    }
}

// ============================================================================
// Example: Classic coffee (cheaper base, "with ..." wording)
// ============================================================================

pub struct ClassicCoffee;

impl Coffee for ClassicCoffee {
    fn description(&self) -> String {
        "Simple coffee".to_string()
    }

    fn cost(&self) -> f64 {
        1.0
    }
}

/// Adds one named ingredient, described as ", with <ingredient>".
pub struct WithIngredient {
    inner: Box<dyn Coffee>,
    ingredient: &'static str,
    price: f64,
}

impl WithIngredient {
    pub fn milk(inner: Box<dyn Coffee>) -> Self {
        Self {
            inner,
            ingredient: "milk",
            price: 0.5,
        }
    }

    pub fn sugar(inner: Box<dyn Coffee>) -> Self {
        Self {
            inner,
            ingredient: "sugar",
            price: 0.2,
        }
    }
}

impl Coffee for WithIngredient {
    fn description(&self) -> String {
        format!("{}, with {}", self.inner.description(), self.ingredient)
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + self.price
    }
}

// ============================================================================
// Drivers
// ============================================================================

fn classic_receipt(coffee: &dyn Coffee) -> String {
    format!("Cost: {:.1}, Description: {}", coffee.cost(), coffee.description())
}

fn receipt(coffee: &dyn Coffee) -> String {
    format!("{} Cost: ${:.2}", coffee.description(), coffee.cost())
}

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    writeln!(out, "{}", receipt(coffee.as_ref()))?;

    coffee = Box::new(MilkDecorator::new(coffee));
    writeln!(out, "{}", receipt(coffee.as_ref()))?;

    coffee = Box::new(SugarDecorator::new(coffee));
    writeln!(out, "{}", receipt(coffee.as_ref()))?;

    coffee = Box::new(MilkDecorator::new(coffee));
    writeln!(out, "{}", receipt(coffee.as_ref()))?;
    Ok(())
}

pub fn demo_classic(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let mut coffee: Box<dyn Coffee> = Box::new(ClassicCoffee);
    writeln!(out, "{}", classic_receipt(coffee.as_ref()))?;

    coffee = Box::new(WithIngredient::milk(coffee));
    writeln!(out, "{}", classic_receipt(coffee.as_ref()))?;

    coffee = Box::new(WithIngredient::sugar(coffee));
    writeln!(out, "{}", classic_receipt(coffee.as_ref()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_nested_decorators() {
        let coffee = MilkDecorator::new(Box::new(SugarDecorator::new(Box::new(
            MilkDecorator::new(Box::new(SimpleCoffee)),
        ))));
        assert_eq!(coffee.description(), "Simple coffee, Milk, Sugar, Milk");
        assert!(approx_eq(coffee.cost(), 3.2));
    }

    #[test]
    fn test_nesting_order_sets_description_order() {
        let coffee = SugarDecorator::new(Box::new(MilkDecorator::new(Box::new(SimpleCoffee))));
        assert_eq!(coffee.description(), "Simple coffee, Milk, Sugar");
        let coffee = MilkDecorator::new(Box::new(SugarDecorator::new(Box::new(SimpleCoffee))));
        assert_eq!(coffee.description(), "Simple coffee, Sugar, Milk");
    }

    #[test]
    fn test_demo_last_line() {
        let mut out = Vec::new();
        demo(&mut out, &CatalogConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.lines().last(),
            Some("Simple coffee, Milk, Sugar, Milk Cost: $3.20")
        );
    }

    #[test]
    fn test_classic_wording() {
        let coffee = WithIngredient::sugar(Box::new(WithIngredient::milk(Box::new(ClassicCoffee))));
        assert_eq!(coffee.description(), "Simple coffee, with milk, with sugar");
        assert!(approx_eq(coffee.cost(), 1.7));
    }

    #[test]
    fn test_decorators_mix_across_families() {
        let coffee = WithIngredient::milk(Box::new(SugarDecorator::new(Box::new(SimpleCoffee))));
        assert_eq!(coffee.description(), "Simple coffee, Sugar, with milk");
        assert!(approx_eq(coffee.cost(), 2.7));
    }

    #[test]
    fn test_demo_classic_output() {
        let mut out = Vec::new();
        demo_classic(&mut out, &CatalogConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Cost: 1.0, Description: Simple coffee\n\
             Cost: 1.5, Description: Simple coffee, with milk\n\
             Cost: 1.7, Description: Simple coffee, with milk, with sugar\n"
        );
    }

    proptest! {
        #[test]
        fn prop_costs_accumulate(milks in prop::collection::vec(any::<bool>(), 0..20)) {
            let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
            let mut expected = 2.0;
            for milk in &milks {
                coffee = if *milk {
                    expected += 0.5;
                    Box::new(MilkDecorator::new(coffee))
                } else {
                    expected += 0.2;
                    Box::new(SugarDecorator::new(coffee))
                };
            }
            prop_assert!((coffee.cost() - expected).abs() < 1e-6);
            prop_assert_eq!(coffee.description().matches(", ").count(), milks.len());
        }
    }
}
