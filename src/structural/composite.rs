// Composite Pattern - treat single objects and groups uniformly
// A composite owns its children and visits them depth-first in insertion
// order. Owned children keep the tree acyclic.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

pub trait Component {
    /// Appends this component's lines, indented two spaces per level.
    fn operation(&self, depth: usize, lines: &mut Vec<String>);

    fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.operation(0, &mut lines);
        lines
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

pub struct Leaf {
    name: String,
}

impl Leaf {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Component for Leaf {
    fn operation(&self, depth: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}Leaf: {}", indent(depth), self.name));
    }
}

#[derive(Default)]
pub struct Composite {
    children: Vec<Box<dyn Component>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, component: impl Component + 'static) {
        self.children.push(Box::new(component));
    }

    /// Detaches the child at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Component>> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Composite {
    fn operation(&self, depth: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}Composite:", indent(depth)));
        for child in &self.children {
            child.operation(depth + 1, lines);
        }
    }
}

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let mut inner = Composite::new();
    inner.add(Leaf::new("Leaf 1"));
    inner.add(Leaf::new("Leaf 2"));

    let mut root = Composite::new();
    root.add(Leaf::new("Leaf 3"));
    root.add(inner);

    for line in root.render() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
