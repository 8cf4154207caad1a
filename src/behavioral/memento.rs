// Memento Pattern - snapshots an originator can be rolled back to
// Caretakers store snapshots without being able to look inside them.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};

// ============================================================================
// Originator and Memento
// ============================================================================

/// Immutable capture of an originator's state. The field is private to this
/// module, so caretakers can only hold and hand back snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Memento<S> {
    state: S,
}

#[derive(Debug, Default)]
pub struct Originator<S> {
    state: S,
}

impl<S: Clone> Originator<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn set_state(&mut self, state: S) {
        self.state = state;
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn save(&self) -> Memento<S> {
        Memento {
            state: self.state.clone(),
        }
    }

    /// Plain assignment; the snapshot's origin is not checked.
    pub fn restore(&mut self, memento: &Memento<S>) {
        self.state = memento.state.clone();
    }
}

// ============================================================================
// Caretakers
// ============================================================================

/// Keeps the most recent snapshot only.
#[derive(Debug)]
pub struct SingleSlot<S> {
    memento: Option<Memento<S>>,
}

impl<S> Default for SingleSlot<S> {
    fn default() -> Self {
        Self { memento: None }
    }
}

impl<S> SingleSlot<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, memento: Memento<S>) {
        self.memento = Some(memento);
    }

    pub fn get(&self) -> Option<&Memento<S>> {
        self.memento.as_ref()
    }
}

/// Keeps every snapshot, addressed by insertion position.
#[derive(Debug)]
pub struct History<S> {
    mementos: Vec<Memento<S>>,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self {
            mementos: Vec::new(),
        }
    }
}

impl<S> History<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, memento: Memento<S>) {
        self.mementos.push(memento);
    }

    pub fn get(&self, index: usize) -> Result<&Memento<S>> {
        self.mementos.get(index).ok_or(PatternError::SnapshotMissing {
            index,
            len: self.mementos.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_single(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let mut originator = Originator::new(String::new());
    let mut caretaker = SingleSlot::new();

    originator.set_state("State 1".to_string());
    caretaker.set(originator.save());
    originator.set_state("State 2".to_string());

    if let Some(memento) = caretaker.get() {
        originator.restore(memento);
    }
    writeln!(out, "Current state: {}", originator.state())?;
    Ok(())
}

pub fn demo_history(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let mut originator = Originator::new(String::new());
    let mut caretaker = History::new();

    let mut set = |originator: &mut Originator<String>, state: &str| -> Result<()> {
        originator.set_state(state.to_string());
        writeln!(out, "State set to: {}", state)?;
        Ok(())
    };

    set(&mut originator, "State #1")?;
    set(&mut originator, "State #2")?;
    caretaker.add(originator.save());
    set(&mut originator, "State #3")?;
    caretaker.add(originator.save());
    set(&mut originator, "State #4")?;

    writeln!(out, "Saved {} snapshots", caretaker.len())?;
    writeln!(out, "Current State: {}", originator.state())?;

    originator.restore(caretaker.get(0)?);
    tracing::debug!(index = 0, "restored snapshot");
    writeln!(out, "First saved State: {}", originator.state())?;

    originator.restore(caretaker.get(1)?);
    tracing::debug!(index = 1, "restored snapshot");
    writeln!(out, "Second saved State: {}", originator.state())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_slot_restore() {
        let mut originator = Originator::new("a".to_string());
        let mut caretaker = SingleSlot::new();
        caretaker.set(originator.save());
        originator.set_state("b".to_string());

        originator.restore(caretaker.get().unwrap());
        assert_eq!(originator.state(), "a");
    }

    #[test]
    fn test_single_slot_overwrites() {
        let mut originator = Originator::new(1);
        let mut caretaker = SingleSlot::new();
        caretaker.set(originator.save());
        originator.set_state(2);
        caretaker.set(originator.save());
        originator.set_state(3);

        originator.restore(caretaker.get().unwrap());
        assert_eq!(*originator.state(), 2);
    }

    #[test]
    fn test_empty_slot() {
        let caretaker: SingleSlot<u8> = SingleSlot::new();
        assert!(caretaker.get().is_none());
    }

    #[test]
    fn test_missing_index() {
        let mut history = History::new();
        history.add(Originator::new(7).save());
        let err = history.get(1).unwrap_err();
        assert!(matches!(err, PatternError::SnapshotMissing { index: 1, len: 1 }));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut originator = Originator::new(vec![1, 2]);
        let snapshot = originator.save();
        originator.set_state(vec![9]);
        originator.restore(&snapshot);
        assert_eq!(originator.state(), &vec![1, 2]);
    }

    #[test]
    fn test_demo_history_output() {
        let mut out = Vec::new();
        demo_history(&mut out, &CatalogConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Current State: State #4\n"));
        assert!(text.contains("First saved State: State #2\n"));
        assert!(text.contains("Second saved State: State #3\n"));
    }

    proptest! {
        #[test]
        fn prop_restore_index_yields_saved_state(states in prop::collection::vec(any::<i64>(), 1..32), pick in any::<prop::sample::Index>()) {
            let mut originator = Originator::new(0i64);
            let mut history = History::new();
            for state in &states {
                originator.set_state(*state);
                history.add(originator.save());
            }
            originator.set_state(i64::MIN);

            let index = pick.index(states.len());
            originator.restore(history.get(index).unwrap());
            prop_assert_eq!(*originator.state(), states[index]);
        }
    }
}
