// Template Method Pattern - a fixed algorithm with pluggable steps
// Implementors supply the steps. The skeleton lives in an extension trait
// with a blanket impl, so no implementor can supply its own version of it.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

// ============================================================================
// Example: Games (initialize -> start -> end)
// ============================================================================

pub trait Game {
    fn initialize(&self) -> String;
    fn start_play(&self) -> String;
    fn end_play(&self) -> String;
}

pub trait PlayGame: Game {
    fn play(&self) -> Vec<String> {
        vec![self.initialize(), self.start_play(), self.end_play()]
    }
}

impl<T: Game + ?Sized> PlayGame for T {}

pub struct Cricket;
pub struct Football;

impl Game for Cricket {
    fn initialize(&self) -> String {
        "Cricket Game Initialized! Start playing.".to_string()
    }

    fn start_play(&self) -> String {
        "Cricket Game Started. Enjoy the game!".to_string()
    }

    fn end_play(&self) -> String {
        "Cricket Game Finished!".to_string()
    }
}

impl Game for Football {
    fn initialize(&self) -> String {
        "Football Game Initialized! Start playing.".to_string()
    }

    fn start_play(&self) -> String {
        "Football Game Started. Enjoy the game!".to_string()
    }

    fn end_play(&self) -> String {
        "Football Game Finished!".to_string()
    }
}

// ============================================================================
// Example: Data processors (read -> process -> write)
// ============================================================================

pub trait DataProcessor {
    /// Short name of the file format, e.g. "CSV".
    fn format(&self) -> &str;

    fn read_data(&self) -> String {
        format!("Reading data from {} file", self.format())
    }

    fn process_data(&self) -> String {
        format!("Processing data from {} file", self.format())
    }

    fn write_data(&self) -> String {
        format!("Writing data to {} file", self.format())
    }
}

pub trait Process: DataProcessor {
    fn process(&self) -> Vec<String> {
        tracing::debug!(format = self.format(), "running processing pipeline");
        vec![self.read_data(), self.process_data(), self.write_data()]
    }
}

impl<T: DataProcessor + ?Sized> Process for T {}

pub struct CsvDataProcessor;
pub struct XmlDataProcessor;

impl DataProcessor for CsvDataProcessor {
    fn format(&self) -> &str {
        "CSV"
    }
}

impl DataProcessor for XmlDataProcessor {
    fn format(&self) -> &str {
        "XML"
    }
}

// ============================================================================
// Drivers
// ============================================================================

fn write_blocks(out: &mut dyn Write, blocks: &[Vec<String>]) -> Result<()> {
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        for line in block {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

pub fn demo_game(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let games: Vec<Box<dyn Game>> = vec![Box::new(Cricket), Box::new(Football)];
    let blocks: Vec<Vec<String>> = games.iter().map(|game| game.play()).collect();
    write_blocks(out, &blocks)
}

pub fn demo_data(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let processors: Vec<Box<dyn DataProcessor>> =
        vec![Box::new(CsvDataProcessor), Box::new(XmlDataProcessor)];
    let blocks: Vec<Vec<String>> = processors.iter().map(|p| p.process()).collect();
    write_blocks(out, &blocks)
}

// ============================================================================
// Tests
// ============================================================================
