use std::io::Write;

use design_patterns::catalog::{self, Family};
use design_patterns::{CatalogConfig, PatternError};
use tempfile::NamedTempFile;

fn fast_config() -> CatalogConfig {
    let mut config = CatalogConfig::default();
    config.traffic_light.tick_delay_ms = 0;
    config
}

fn run(name: &str, config: &CatalogConfig) -> String {
    let mut out = Vec::new();
    catalog::find(name)
        .unwrap()
        .execute(&mut out, config)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn every_demo_runs_and_prints() {
    let config = fast_config();
    for demo in catalog::all() {
        let mut out = Vec::new();
        demo.execute(&mut out, &config)
            .unwrap_or_else(|err| panic!("{} failed: {}", demo.name, err));
        assert!(!out.is_empty(), "{} printed nothing", demo.name);
    }
}

#[test]
fn every_name_resolves_to_itself() {
    for demo in catalog::all() {
        assert_eq!(catalog::find(demo.name).unwrap().name, demo.name);
    }
}

#[test]
fn families_partition_the_catalog() {
    let total: usize = [Family::Creational, Family::Structural, Family::Behavioral]
        .into_iter()
        .map(|family| catalog::by_family(family).count())
        .sum();
    assert_eq!(total, catalog::all().len());
}

#[test]
fn unknown_name_is_rejected_before_running() {
    let err = catalog::resolve(&["decorator", "flyweight"]).unwrap_err();
    assert!(matches!(err, PatternError::UnknownDemo(name) if name == "flyweight"));
}

#[test]
fn decorator_accumulates() {
    let text = run("decorator", &fast_config());
    assert!(text.contains("Simple coffee, Milk, Sugar, Milk Cost: $3.20"));
}

#[test]
fn classic_decorator_reads_with_each_addition() {
    let text = run("decorator-classic", &fast_config());
    assert_eq!(
        text.lines().last(),
        Some("Cost: 1.7, Description: Simple coffee, with milk, with sugar")
    );
}

#[test]
fn visitor_cart_total() {
    let text = run("visitor-cart", &fast_config());
    assert!(text.contains("Total Cost = 165"));
}

#[test]
fn proxy_loads_once() {
    let text = run("proxy", &fast_config());
    assert_eq!(text.matches("Loading image: test.jpg").count(), 1);
    assert_eq!(text.matches("Displaying image: test.jpg").count(), 2);
}

#[test]
fn traffic_light_uses_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[traffic_light]\nticks = 3\ntick_delay_ms = 0").unwrap();

    let config = CatalogConfig::from_file(file.path()).unwrap();
    assert_eq!(config.traffic_light.ticks, 3);

    let text = run("state-traffic-light", &config);
    assert!(text.contains("Red"));
    assert!(text.contains("Yellow"));
}

#[test]
fn malformed_config_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[traffic_light\nticks = ").unwrap();

    let err = CatalogConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, PatternError::ConfigParse(_)));
}

#[test]
fn explicit_config_path_wins() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[traffic_light]\nticks = 9").unwrap();

    let config = CatalogConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.traffic_light.ticks, 9);
}
