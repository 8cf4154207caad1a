// Abstract Factory Pattern - families of related products
// Each factory names its product types as associated types, so mixing an A
// from one family with a B from another is a type error rather than a
// runtime check.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

pub trait ProductA {
    fn display(&self) -> String;
}

pub trait ProductB {
    type Partner: ProductA;

    fn display(&self) -> String;

    /// Works only with the A product of its own family.
    fn collaborate(&self, partner: &Self::Partner) -> String;
}

pub struct ProductA1;
pub struct ProductA2;
pub struct ProductB1;
pub struct ProductB2;

impl ProductA for ProductA1 {
    fn display(&self) -> String {
        "Concrete Product A1".to_string()
    }
}

impl ProductA for ProductA2 {
    fn display(&self) -> String {
        "Concrete Product A2".to_string()
    }
}

impl ProductB for ProductB1 {
    type Partner = ProductA1;

    fn display(&self) -> String {
        "Concrete Product B1".to_string()
    }

    fn collaborate(&self, partner: &ProductA1) -> String {
        format!("B1 collaborating with {}", partner.display())
    }
}

impl ProductB for ProductB2 {
    type Partner = ProductA2;

    fn display(&self) -> String {
        "Concrete Product B2".to_string()
    }

    fn collaborate(&self, partner: &ProductA2) -> String {
        format!("B2 collaborating with {}", partner.display())
    }
}

pub trait AbstractFactory {
    type A: ProductA;
    type B: ProductB<Partner = Self::A>;

    fn create_product_a(&self) -> Self::A;
    fn create_product_b(&self) -> Self::B;
}

pub struct ConcreteFactory1;
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory1 {
    type A = ProductA1;
    type B = ProductB1;

    fn create_product_a(&self) -> ProductA1 {
        ProductA1
    }

    fn create_product_b(&self) -> ProductB1 {
        ProductB1
    }
}

impl AbstractFactory for ConcreteFactory2 {
    type A = ProductA2;
    type B = ProductB2;

    fn create_product_a(&self) -> ProductA2 {
        ProductA2
    }

    fn create_product_b(&self) -> ProductB2 {
        ProductB2
    }
}

/// Client code written once against any factory.
pub fn describe_family<F: AbstractFactory>(factory: &F) -> Vec<String> {
    let a = factory.create_product_a();
    let b = factory.create_product_b();
    vec![a.display(), b.display()]
}

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    for line in describe_family(&ConcreteFactory1)
        .into_iter()
        .chain(describe_family(&ConcreteFactory2))
    {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families() {
        assert_eq!(
            describe_family(&ConcreteFactory1),
            vec!["Concrete Product A1", "Concrete Product B1"]
        );
        assert_eq!(
            describe_family(&ConcreteFactory2),
            vec!["Concrete Product A2", "Concrete Product B2"]
        );
    }

    #[test]
    fn test_products_from_one_factory_collaborate() {
        let factory = ConcreteFactory2;
        let a = factory.create_product_a();
        let b = factory.create_product_b();
        assert_eq!(b.collaborate(&a), "B2 collaborating with Concrete Product A2");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        demo(&mut out, &CatalogConfig::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
    }
}
