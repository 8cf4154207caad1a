use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Shared, ordered record of the lines role objects produce.
///
/// Demos hand a clone to every participant that reports something (chat
/// users, observers, lazily loaded images) and flush it once the scenario is
/// over. Clones share the same buffer.
#[derive(Clone, Default, Debug)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, line: impl Into<String>) {
        self.lines.borrow_mut().push(line.into());
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Takes every recorded line, leaving the transcript empty.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    /// Writes and clears everything recorded so far.
    pub fn flush_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for line in self.drain() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
