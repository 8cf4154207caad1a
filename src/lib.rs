//! # Design Patterns Catalog
//!
//! Runnable, testable renditions of the classic object-oriented patterns.
//!
//! ## Creational
//! - Builder (fluent builder, director)
//! - Factory Method (products, animals)
//! - Abstract Factory (associated-type families)
//! - Prototype (Clone, `clone_box`)
//! - Singleton (OnceLock)
//!
//! ## Structural
//! - Adapter (trait objects, generics)
//! - Bridge (shapes/colors, devices/remotes)
//! - Composite
//! - Decorator
//! - Facade
//! - Proxy (lazy loading)
//!
//! ## Behavioral
//! - Chain of Responsibility
//! - Interpreter
//! - Iterator (cursors over six containers)
//! - Mediator
//! - Memento
//! - Observer
//! - State (player, traffic light)
//! - Strategy
//! - Template Method
//! - Visitor
//!
//! Every demo is registered in [`catalog`]. Run them with:
//! ```bash
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run decorator proxy
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! cargo run --bin p3_behavioral
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod structural;
pub mod telemetry;
pub mod transcript;

pub use catalog::{Demo, Family};
pub use config::CatalogConfig;
pub use error::{PatternError, Result};
