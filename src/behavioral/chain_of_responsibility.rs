// Chain of Responsibility Pattern - pass a request along until someone takes it
// The chain is assembled once, tail first, and never changes afterwards.

use std::fmt;
use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    kind: String,
}

impl Request {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Terminal result of sending a request down a chain. Falling off the end
/// is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Handled { by: String, kind: String },
    Unhandled,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Handled { kind, .. } => write!(f, "Handled {} request", kind),
            Outcome::Unhandled => write!(f, "No handler found for request"),
        }
    }
}

pub trait Handler {
    fn handle(&self, request: &Request) -> Outcome;
}

/// Services one kind of request and forwards everything else.
pub struct KindHandler {
    name: String,
    accepts: String,
    next: Option<Box<dyn Handler>>,
}

impl KindHandler {
    pub fn new(name: &str, accepts: &str) -> Self {
        Self {
            name: name.to_string(),
            accepts: accepts.to_string(),
            next: None,
        }
    }

    pub fn with_next(mut self, next: impl Handler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }
}

impl Handler for KindHandler {
    fn handle(&self, request: &Request) -> Outcome {
        if request.kind() == self.accepts {
            return Outcome::Handled {
                by: self.name.clone(),
                kind: request.kind().to_string(),
            };
        }
        match &self.next {
            Some(next) => {
                tracing::trace!(handler = %self.name, kind = request.kind(), "passing request on");
                next.handle(request)
            }
            None => Outcome::Unhandled,
        }
    }
}

// ============================================================================
// Driver
// ============================================================================

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let handler3 = KindHandler::new("handler3", "Type1");
    let handler2 = KindHandler::new("handler2", "Type1").with_next(handler3);
    let handler1 = KindHandler::new("handler1", "Type1").with_next(handler2);

    for request in [Request::new("Type1"), Request::new("Type2")] {
        writeln!(out, "{}", handler1.handle(&request))?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
