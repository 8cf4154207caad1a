// Strategy Pattern - interchangeable payment methods
// The cart knows how to total itself; how the total gets paid is decided per
// call by whichever strategy the caller hands in.

use std::fmt;
use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

// ============================================================================
// Strategy role and implementations
// ============================================================================

pub trait PaymentStrategy {
    fn name(&self) -> &str;

    /// Performs the payment and returns the confirmation line.
    fn pay(&self, amount: u64) -> String;
}

pub struct CreditCardPayment {
    name: String,
    card_number: String,
    date_of_expiry: String,
}

impl CreditCardPayment {
    pub fn new(name: &str, card_number: &str, date_of_expiry: &str) -> Self {
        Self {
            name: name.to_string(),
            card_number: card_number.to_string(),
            date_of_expiry: date_of_expiry.to_string(),
        }
    }

    fn masked_number(&self) -> String {
        let skip = self.card_number.chars().count().saturating_sub(4);
        let tail: String = self.card_number.chars().skip(skip).collect();
        format!("****{}", tail)
    }
}

// The full card number never reaches logs.
impl fmt::Debug for CreditCardPayment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CreditCardPayment")
            .field("name", &self.name)
            .field("card_number", &self.masked_number())
            .field("date_of_expiry", &self.date_of_expiry)
            .finish()
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn name(&self) -> &str {
        "credit card"
    }

    fn pay(&self, amount: u64) -> String {
        tracing::debug!(card = %self.masked_number(), expiry = %self.date_of_expiry, amount, "charging card");
        format!("{} paid with credit card.", amount)
    }
}

#[derive(Debug)]
pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn name(&self) -> &str {
        "PayPal"
    }

    fn pay(&self, amount: u64) -> String {
        tracing::debug!(email = %self.email, amount, "paypal transfer");
        format!("{} paid using PayPal.", amount)
    }
}

// ============================================================================
// Context: shopping cart
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    upc_code: String,
    price: u32,
}

impl Item {
    pub fn new(upc_code: &str, price: u32) -> Self {
        Self {
            upc_code: upc_code.to_string(),
            price,
        }
    }

    pub fn upc_code(&self) -> &str {
        &self.upc_code
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

#[derive(Debug, Default)]
pub struct ShoppingCart {
    items: Vec<Item>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item equal to `item`. Returns whether one was found.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of item prices, widened to `u64`. Overflowing it would take more
    /// than 2^32 maximum-price items.
    pub fn calculate_total(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.price)).sum()
    }

    pub fn pay(&self, method: &dyn PaymentStrategy) -> String {
        let amount = self.calculate_total();
        tracing::debug!(method = method.name(), amount, "paying cart");
        method.pay(amount)
    }
}

// ============================================================================
// Driver
// ============================================================================

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let mut cart = ShoppingCart::new();
    cart.add_item(Item::new("1234", 10));
    cart.add_item(Item::new("5678", 40));

    let card = CreditCardPayment::new("John Doe", "1234567890123456", "12/15");
    writeln!(out, "{}", cart.pay(&card))?;

    let paypal = PayPalPayment::new("myemail@example.com");
    writeln!(out, "{}", cart.pay(&paypal))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
