// Iterator Pattern - cursors over a family of containers
// A cursor walks a container once, front to back, without exposing how the
// container stores its elements.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList};
use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};

// ============================================================================
// Cursor and Aggregate roles
// ============================================================================

/// A finite, non-restartable walk over some container.
pub trait Cursor {
    type Item;

    fn has_next(&self) -> bool;

    /// Returns the next element, or `CursorExhausted` once the walk is over.
    fn take_next(&mut self) -> Result<Self::Item>;
}

/// Drives a cursor to the end, collecting everything it yields.
pub fn drain<C: Cursor + ?Sized>(cursor: &mut C) -> Result<Vec<C::Item>> {
    let mut items = Vec::new();
    while cursor.has_next() {
        items.push(cursor.take_next()?);
    }
    Ok(items)
}

// ============================================================================
// Example: Generic list aggregate
// ============================================================================

pub struct ListCursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Cursor for ListCursor<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.index < self.items.len()
    }

    fn take_next(&mut self) -> Result<&'a T> {
        let item = self
            .items
            .get(self.index)
            .ok_or(PatternError::CursorExhausted)?;
        self.index += 1;
        Ok(item)
    }
}

impl<'a, T> Iterator for ListCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.take_next().ok()
    }
}

#[derive(Debug, Default)]
pub struct ListAggregate<T> {
    items: Vec<T>,
}

impl<T> ListAggregate<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn create_cursor(&self) -> ListCursor<'_, T> {
        ListCursor {
            items: &self.items,
            index: 0,
        }
    }
}

// ============================================================================
// Example: One cursor type over any std collection
// ============================================================================

/// Adapts any exact-size iterator to the `Cursor` role.
pub struct CollectionCursor<I> {
    inner: I,
}

impl<I: ExactSizeIterator> CollectionCursor<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: ExactSizeIterator> Cursor for CollectionCursor<I> {
    type Item = I::Item;

    fn has_next(&self) -> bool {
        self.inner.len() > 0
    }

    fn take_next(&mut self) -> Result<I::Item> {
        self.inner.next().ok_or(PatternError::CursorExhausted)
    }
}

impl<I: ExactSizeIterator> Iterator for CollectionCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// A container of names that can hand out a cursor over them.
pub trait NameRepository {
    /// Human label for the backing container.
    fn label(&self) -> &'static str;

    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a str> + 'a>;
}

pub struct NameListRepository {
    names: Vec<String>,
}

pub struct NameSetRepository {
    names: HashSet<String>,
}

pub struct NameHashTableRepository {
    names: HashMap<u32, String>,
}

pub struct NameMapRepository {
    names: BTreeMap<u32, String>,
}

pub struct NameLinkedListRepository {
    names: LinkedList<String>,
}

pub struct NameTreeRepository {
    names: BTreeSet<String>,
}

fn owned<'a>(names: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    names.iter().map(|name| name.to_string())
}

fn keyed<'a>(names: &'a [&'a str]) -> impl Iterator<Item = (u32, String)> + 'a {
    (1..).zip(owned(names))
}

impl NameListRepository {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: owned(names).collect(),
        }
    }
}

impl NameSetRepository {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: owned(names).collect(),
        }
    }
}

impl NameHashTableRepository {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: keyed(names).collect(),
        }
    }
}

impl NameMapRepository {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: keyed(names).collect(),
        }
    }
}

impl NameLinkedListRepository {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: owned(names).collect(),
        }
    }
}

impl NameTreeRepository {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: owned(names).collect(),
        }
    }
}

impl NameRepository for NameListRepository {
    fn label(&self) -> &'static str {
        "List"
    }

    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a str> + 'a> {
        Box::new(CollectionCursor::new(self.names.iter().map(String::as_str)))
    }
}

// Hash order: unspecified, but stable for the lifetime of the set.
impl NameRepository for NameSetRepository {
    fn label(&self) -> &'static str {
        "Set"
    }

    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a str> + 'a> {
        Box::new(CollectionCursor::new(self.names.iter().map(String::as_str)))
    }
}

impl NameRepository for NameHashTableRepository {
    fn label(&self) -> &'static str {
        "HashTable"
    }

    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a str> + 'a> {
        Box::new(CollectionCursor::new(self.names.values().map(String::as_str)))
    }
}

// Key order.
impl NameRepository for NameMapRepository {
    fn label(&self) -> &'static str {
        "Map"
    }

    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a str> + 'a> {
        Box::new(CollectionCursor::new(self.names.values().map(String::as_str)))
    }
}

impl NameRepository for NameLinkedListRepository {
    fn label(&self) -> &'static str {
        "LinkedList"
    }

    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a str> + 'a> {
        Box::new(CollectionCursor::new(self.names.iter().map(String::as_str)))
    }
}

// Sorted order.
impl NameRepository for NameTreeRepository {
    fn label(&self) -> &'static str {
        "BinarySearchTree"
    }

    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a str> + 'a> {
        Box::new(CollectionCursor::new(self.names.iter().map(String::as_str)))
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_aggregate(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let mut aggregate = ListAggregate::new();
    aggregate.add("Item 1");
    aggregate.add("Item 2");
    aggregate.add("Item 3");

    let mut cursor = aggregate.create_cursor();
    while cursor.has_next() {
        writeln!(out, "{}", cursor.take_next()?)?;
    }
    Ok(())
}

pub fn demo_repositories(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let repositories: Vec<Box<dyn NameRepository>> = vec![
        Box::new(NameListRepository::new(&["John", "Jane", "Jack", "Jill"])),
        Box::new(NameSetRepository::new(&["Alice", "Bob", "Charlie", "Diana"])),
        Box::new(NameHashTableRepository::new(&["Tom", "Jerry", "Spike"])),
        Box::new(NameMapRepository::new(&["Max", "Bella", "Charlie"])),
        Box::new(NameLinkedListRepository::new(&["Oscar", "Olivia", "Oliver"])),
        Box::new(NameTreeRepository::new(&["George", "Gina", "Greg"])),
    ];

    for (i, repository) in repositories.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Names from {}:", repository.label())?;
        let mut cursor = repository.cursor();
        while cursor.has_next() {
            writeln!(out, "Name: {}", cursor.take_next()?)?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
