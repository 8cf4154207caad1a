// Visitor Pattern - double dispatch over a closed set of element types
// Each element routes itself to the visitor method for its own type. Adding a
// new operation is a new visitor; adding a new element type touches every
// visitor.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};

// ============================================================================
// Example: Abstract elements A and B
// ============================================================================

pub trait Element {
    fn accept(&self, visitor: &mut dyn Visitor) -> String;
}

pub trait Visitor {
    fn visit_a(&mut self, element: &ConcreteElementA) -> String;
    fn visit_b(&mut self, element: &ConcreteElementB) -> String;
}

pub struct ConcreteElementA;
pub struct ConcreteElementB;

impl ConcreteElementA {
    pub fn operation_a(&self) -> &'static str {
        "ConcreteElementA operation"
    }
}

impl ConcreteElementB {
    pub fn operation_b(&self) -> &'static str {
        "ConcreteElementB operation"
    }
}

impl Element for ConcreteElementA {
    fn accept(&self, visitor: &mut dyn Visitor) -> String {
        visitor.visit_a(self)
    }
}

impl Element for ConcreteElementB {
    fn accept(&self, visitor: &mut dyn Visitor) -> String {
        visitor.visit_b(self)
    }
}

pub struct ConcreteVisitor;

impl Visitor for ConcreteVisitor {
    fn visit_a(&mut self, element: &ConcreteElementA) -> String {
        format!("Visitor is performing operation on {}", element.operation_a())
    }

    fn visit_b(&mut self, element: &ConcreteElementB) -> String {
        format!("Visitor is performing operation on {}", element.operation_b())
    }
}

// ============================================================================
// Example: Shopping cart items
// ============================================================================

pub trait ItemElement {
    fn accept(&self, visitor: &mut dyn ShoppingCartVisitor) -> u64;
}

pub trait ShoppingCartVisitor {
    fn visit_book(&mut self, book: &Book) -> u64;
    fn visit_fruit(&mut self, fruit: &Fruit) -> u64;
}

#[derive(Debug, Clone)]
pub struct Book {
    price: u32,
    isbn: String,
}

impl Book {
    pub fn new(price: u32, isbn: &str) -> Self {
        Self {
            price,
            isbn: isbn.to_string(),
        }
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

#[derive(Debug, Clone)]
pub struct Fruit {
    price_per_kg: u32,
    weight: u32,
    name: String,
}

impl Fruit {
    pub fn new(price_per_kg: u32, weight: u32, name: &str) -> Self {
        Self {
            price_per_kg,
            weight,
            name: name.to_string(),
        }
    }

    pub fn price_per_kg(&self) -> u32 {
        self.price_per_kg
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ItemElement for Book {
    fn accept(&self, visitor: &mut dyn ShoppingCartVisitor) -> u64 {
        visitor.visit_book(self)
    }
}

impl ItemElement for Fruit {
    fn accept(&self, visitor: &mut dyn ShoppingCartVisitor) -> u64 {
        visitor.visit_fruit(self)
    }
}

/// Prices each item and keeps a receipt line per visit.
#[derive(Debug, Default)]
pub struct PricingVisitor {
    receipt: Vec<String>,
}

impl PricingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receipt(&self) -> &[String] {
        &self.receipt
    }
}

impl ShoppingCartVisitor for PricingVisitor {
    fn visit_book(&mut self, book: &Book) -> u64 {
        let cost = u64::from(book.price());
        self.receipt
            .push(format!("Book ISBN::{} cost ={}", book.isbn(), cost));
        cost
    }

    fn visit_fruit(&mut self, fruit: &Fruit) -> u64 {
        // Two u32 factors always fit in a u64.
        let cost = u64::from(fruit.price_per_kg()) * u64::from(fruit.weight());
        self.receipt.push(format!("{} cost = {}", fruit.name(), cost));
        cost
    }
}

/// Total shipping weight in kg; books count as one kilogram each.
#[derive(Debug, Default)]
pub struct WeightVisitor;

impl ShoppingCartVisitor for WeightVisitor {
    fn visit_book(&mut self, _book: &Book) -> u64 {
        1
    }

    fn visit_fruit(&mut self, fruit: &Fruit) -> u64 {
        u64::from(fruit.weight())
    }
}

/// Runs `visitor` over every item, summing what each visit returns.
pub fn calculate(
    items: &[Box<dyn ItemElement>],
    visitor: &mut dyn ShoppingCartVisitor,
) -> Result<u64> {
    items.iter().try_fold(0u64, |total, item| {
        total
            .checked_add(item.accept(&mut *visitor))
            .ok_or(PatternError::ArithmeticOverflow { op: "+" })
    })
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_elements(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let elements: Vec<Box<dyn Element>> =
        vec![Box::new(ConcreteElementA), Box::new(ConcreteElementB)];
    let mut visitor = ConcreteVisitor;
    for element in &elements {
        writeln!(out, "{}", element.accept(&mut visitor))?;
    }
    Ok(())
}

pub fn demo_cart(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let items: Vec<Box<dyn ItemElement>> = vec![
        Box::new(Book::new(20, "1234")),
        Box::new(Book::new(100, "5678")),
        Box::new(Fruit::new(10, 2, "Banana")),
        Box::new(Fruit::new(5, 5, "Apple")),
    ];

    let mut pricing = PricingVisitor::new();
    let total = calculate(&items, &mut pricing)?;
    for line in pricing.receipt() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "Total Cost = {}", total)?;
    writeln!(out, "Shipping weight = {} kg", calculate(&items, &mut WeightVisitor)?)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> Vec<Box<dyn ItemElement>> {
        vec![
            Box::new(Book::new(20, "1234")),
            Box::new(Book::new(100, "5678")),
            Box::new(Fruit::new(10, 2, "Banana")),
            Box::new(Fruit::new(5, 5, "Apple")),
        ]
    }

    #[test]
    fn test_dispatch_reaches_matching_method() {
        let mut visitor = ConcreteVisitor;
        assert!(ConcreteElementA.accept(&mut visitor).ends_with("ConcreteElementA operation"));
        assert!(ConcreteElementB.accept(&mut visitor).ends_with("ConcreteElementB operation"));
    }

    #[test]
    fn test_cart_total() {
        let mut pricing = PricingVisitor::new();
        assert_eq!(calculate(&cart(), &mut pricing).unwrap(), 20 + 100 + 20 + 25);
        assert_eq!(pricing.receipt().len(), 4);
        assert_eq!(pricing.receipt()[0], "Book ISBN::1234 cost =20");
        assert_eq!(pricing.receipt()[3], "Apple cost = 25");
    }

    #[test]
    fn test_second_operation_same_elements() {
        assert_eq!(calculate(&cart(), &mut WeightVisitor).unwrap(), 1 + 1 + 2 + 5);
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(calculate(&[], &mut PricingVisitor::new()).unwrap(), 0);
    }

    #[test]
    fn test_largest_fruit_fits() {
        let fruit = Fruit::new(u32::MAX, u32::MAX, "Durian");
        let expected = u64::from(u32::MAX) * u64::from(u32::MAX);
        assert_eq!(fruit.accept(&mut PricingVisitor::new()), expected);
    }

    #[test]
    fn test_total_overflow_reported() {
        let items: Vec<Box<dyn ItemElement>> = vec![
            Box::new(Fruit::new(u32::MAX, u32::MAX, "Durian")),
            Box::new(Fruit::new(u32::MAX, u32::MAX, "Jackfruit")),
        ];
        assert!(matches!(
            calculate(&items, &mut PricingVisitor::new()),
            Err(PatternError::ArithmeticOverflow { op: "+" })
        ));
    }
}
