//! Registry of every runnable demo.
//!
//! Names are stable, kebab-case and unique; the CLI and the per-family
//! binaries both resolve demos through this table.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;

use crate::behavioral::{
    chain_of_responsibility, interpreter, iterator, mediator, memento, observer, state, strategy,
    template_method, visitor,
};
use crate::config::CatalogConfig;
use crate::creational::{abstract_factory, builder, factory_method, prototype, singleton};
use crate::error::{PatternError, Result};
use crate::structural::{adapter, bridge, composite, decorator, facade, proxy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Family {
    Creational,
    Structural,
    Behavioral,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Family::Creational => "creational",
            Family::Structural => "structural",
            Family::Behavioral => "behavioral",
        };
        f.write_str(name)
    }
}

pub type DemoFn = fn(&mut dyn Write, &CatalogConfig) -> Result<()>;

pub struct Demo {
    pub name: &'static str,
    pub family: Family,
    pub summary: &'static str,
    pub run: DemoFn,
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("family", &self.family)
            .finish()
    }
}

impl Demo {
    pub fn execute(&self, out: &mut dyn Write, config: &CatalogConfig) -> Result<()> {
        tracing::debug!(demo = self.name, family = %self.family, "running demo");
        (self.run)(out, config)
    }
}

macro_rules! demo {
    ($name:literal, $family:ident, $summary:literal, $run:path) => {
        Demo {
            name: $name,
            family: Family::$family,
            summary: $summary,
            run: $run,
        }
    };
}

static DEMOS: &[Demo] = &[
    // Creational
    demo!("builder-pizza", Creational, "fluent builder with required parts", builder::demo_pizza),
    demo!("builder-car", Creational, "director driving a car builder", builder::demo_car),
    demo!("factory-method-product", Creational, "creators choosing a product", factory_method::demo_product),
    demo!("factory-method-animal", Creational, "animal factories", factory_method::demo_animal),
    demo!("abstract-factory", Creational, "families of compatible products", abstract_factory::demo),
    demo!("prototype-attribute", Creational, "clone then modify the clone", prototype::demo_attribute),
    demo!("prototype-named", Creational, "cloning through a trait object", prototype::demo_named),
    demo!("singleton", Creational, "one instance, created on first access", singleton::demo),
    // Structural
    demo!("adapter", Structural, "adaptee behind a target interface", adapter::demo),
    demo!("bridge-shape", Structural, "shapes bridged to colors", bridge::demo_shape),
    demo!("bridge-device", Structural, "devices bridged to remotes", bridge::demo_device),
    demo!("composite", Structural, "leaves and nested composites", composite::demo),
    demo!("decorator", Structural, "coffee with stacked add-ons", decorator::demo),
    demo!("decorator-classic", Structural, "coffee described \"with\" each add-on", decorator::demo_classic),
    demo!("facade-subsystems", Structural, "one call across three subsystems", facade::demo_subsystems),
    demo!("facade-computer", Structural, "computer boot sequence", facade::demo_computer),
    demo!("proxy", Structural, "image loaded lazily on first display", proxy::demo),
    // Behavioral
    demo!("chain", Behavioral, "request passed along a handler chain", chain_of_responsibility::demo),
    demo!("interpreter", Behavioral, "evaluate an arithmetic expression tree", interpreter::demo),
    demo!("iterator-aggregate", Behavioral, "cursor over a generic list", iterator::demo_aggregate),
    demo!("iterator-repositories", Behavioral, "cursors over six name containers", iterator::demo_repositories),
    demo!("mediator-chat", Behavioral, "users talking through a mediator", mediator::demo_chat),
    demo!("mediator-room", Behavioral, "chat room announcing senders", mediator::demo_room),
    demo!("memento-single", Behavioral, "save and restore one snapshot", memento::demo_single),
    demo!("memento-history", Behavioral, "restore from an indexed history", memento::demo_history),
    demo!("observer", Behavioral, "observers notified of state changes", observer::demo),
    demo!("state-player", Behavioral, "player switching start and stop", state::demo_player),
    demo!("state-traffic-light", Behavioral, "traffic light cycling colors", state::demo_traffic_light),
    demo!("strategy", Behavioral, "cart paid with interchangeable methods", strategy::demo),
    demo!("template-game", Behavioral, "games sharing one play skeleton", template_method::demo_game),
    demo!("template-data", Behavioral, "CSV and XML processing pipeline", template_method::demo_data),
    demo!("visitor-elements", Behavioral, "double dispatch over two elements", visitor::demo_elements),
    demo!("visitor-cart", Behavioral, "pricing a cart with visitors", visitor::demo_cart),
];

pub fn all() -> &'static [Demo] {
    DEMOS
}

pub fn by_family(family: Family) -> impl Iterator<Item = &'static Demo> {
    DEMOS.iter().filter(move |demo| demo.family == family)
}

pub fn find(name: &str) -> Result<&'static Demo> {
    DEMOS
        .iter()
        .find(|demo| demo.name == name)
        .ok_or_else(|| PatternError::UnknownDemo(name.to_string()))
}

/// Resolves every name before anything runs, so one typo fails the batch.
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Vec<&'static Demo>> {
    names.iter().map(|name| find(name.as_ref())).collect()
}

pub fn banner(demo: &Demo) -> String {
    format!(
        "{} {}",
        format!("=== {} ===", demo.name).bold().cyan(),
        format!("({})", demo.family).dimmed()
    )
}

/// Runs `demos` in order, each under its banner and followed by a blank line.
pub fn run_sequence<'a>(
    demos: impl IntoIterator<Item = &'a Demo>,
    out: &mut dyn Write,
    config: &CatalogConfig,
) -> Result<()> {
    for demo in demos {
        writeln!(out, "{}", banner(demo))?;
        demo.execute(out, config)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let names: HashSet<&str> = all().iter().map(|demo| demo.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_every_family_populated() {
        assert_eq!(by_family(Family::Creational).count(), 8);
        assert_eq!(by_family(Family::Structural).count(), 9);
        assert_eq!(by_family(Family::Behavioral).count(), 16);
    }

    #[test]
    fn test_find_unknown() {
        let err = find("flyweight").unwrap_err();
        assert!(matches!(err, PatternError::UnknownDemo(ref name) if name == "flyweight"));
    }

    #[test]
    fn test_resolve_fails_on_any_unknown() {
        assert!(resolve(&["singleton", "nope"]).is_err());
        assert_eq!(resolve(&["proxy", "chain"]).unwrap().len(), 2);
    }

    #[test]
    fn test_run_sequence_separates_demos() {
        let demos = resolve(&["factory-method-animal", "singleton"]).unwrap();
        let mut out = Vec::new();
        run_sequence(demos, &mut out, &CatalogConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("factory-method-animal"));
        assert!(text.contains("Woof!\nMeow!\n\n"));
        assert!(text.ends_with("Hello, I am a singleton instance.\n\n"));
    }

    #[test]
    fn test_execute_writes_output() {
        let mut out = Vec::new();
        find("singleton")
            .unwrap()
            .execute(&mut out, &CatalogConfig::default())
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello, I am a singleton instance.\n"
        );
    }
}
