// Observer Pattern - subscribers notified when a subject's state changes
// Observers pull the new state from the subject they are handed. The subject
// holds shared handles, so an observer stays alive while it is attached.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::transcript::Transcript;

pub trait Observer {
    fn update(&self, subject: &dyn Subject);
}

pub trait Subject {
    fn attach(&self, observer: Rc<dyn Observer>);

    /// Removes `observer` by identity. Returns whether it was attached.
    fn detach(&self, observer: &Rc<dyn Observer>) -> bool;

    fn notify_observers(&self);

    fn state(&self) -> String;
}

#[derive(Default)]
pub struct ConcreteSubject {
    observers: RefCell<Vec<Rc<dyn Observer>>>,
    state: RefCell<String>,
}

impl ConcreteSubject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the new state, then notifies every attached observer.
    pub fn set_state(&self, state: &str) {
        *self.state.borrow_mut() = state.to_string();
        self.notify_observers();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn is_attached(&self, observer: &Rc<dyn Observer>) -> bool {
        self.observers
            .borrow()
            .iter()
            .any(|attached| Rc::ptr_eq(attached, observer))
    }
}

impl Subject for ConcreteSubject {
    fn attach(&self, observer: Rc<dyn Observer>) {
        self.observers.borrow_mut().push(observer);
    }

    fn detach(&self, observer: &Rc<dyn Observer>) -> bool {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                observers.remove(index);
                true
            }
            None => false,
        }
    }

    fn notify_observers(&self) {
        // Iterate a snapshot so observers may attach or detach while being
        // notified, but skip anyone detached earlier in this round.
        let observers: Vec<Rc<dyn Observer>> = self.observers.borrow().clone();
        tracing::debug!(count = observers.len(), "notifying observers");
        for observer in observers {
            if self.is_attached(&observer) {
                observer.update(self);
            }
        }
    }

    fn state(&self) -> String {
        self.state.borrow().clone()
    }
}

pub struct ConcreteObserver {
    transcript: Transcript,
}

impl ConcreteObserver {
    pub fn new(transcript: &Transcript) -> Rc<Self> {
        Rc::new(Self {
            transcript: transcript.clone(),
        })
    }
}

impl Observer for ConcreteObserver {
    fn update(&self, subject: &dyn Subject) {
        self.transcript
            .record(format!("Observer updated with state: {}", subject.state()));
    }
}

// ============================================================================
// Driver
// ============================================================================

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let transcript = Transcript::new();
    let subject = ConcreteSubject::new();

    let observer1: Rc<dyn Observer> = ConcreteObserver::new(&transcript);
    let observer2: Rc<dyn Observer> = ConcreteObserver::new(&transcript);
    subject.attach(Rc::clone(&observer1));
    subject.attach(Rc::clone(&observer2));

    subject.set_state("State 1");
    subject.detach(&observer1);
    subject.set_state("State 2");

    transcript.flush_to(out)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_observer_notified() {
        let transcript = Transcript::new();
        let subject = ConcreteSubject::new();
        for _ in 0..3 {
            subject.attach(ConcreteObserver::new(&transcript));
        }
        subject.set_state("on");
        assert_eq!(transcript.len(), 3);
        assert!(transcript
            .lines()
            .iter()
            .all(|line| line == "Observer updated with state: on"));
    }

    #[test]
    fn test_detach_stops_updates() {
        let transcript = Transcript::new();
        let subject = ConcreteSubject::new();
        let observer: Rc<dyn Observer> = ConcreteObserver::new(&transcript);
        subject.attach(Rc::clone(&observer));

        assert!(subject.detach(&observer));
        assert!(!subject.detach(&observer));
        subject.set_state("ignored");
        assert!(transcript.is_empty());
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_detach_by_identity_not_value() {
        let transcript = Transcript::new();
        let subject = ConcreteSubject::new();
        let first: Rc<dyn Observer> = ConcreteObserver::new(&transcript);
        let second: Rc<dyn Observer> = ConcreteObserver::new(&transcript);
        subject.attach(Rc::clone(&first));
        subject.attach(Rc::clone(&second));

        subject.detach(&first);
        subject.set_state("x");
        assert_eq!(transcript.len(), 1);
    }

    // Detaches `target` from `subject` the first time it is notified.
    struct Unsubscriber {
        subject: Rc<ConcreteSubject>,
        target: RefCell<Option<Rc<dyn Observer>>>,
    }

    impl Observer for Unsubscriber {
        fn update(&self, _subject: &dyn Subject) {
            if let Some(target) = self.target.borrow_mut().take() {
                self.subject.detach(&target);
            }
        }
    }

    #[test]
    fn test_detached_mid_round_not_notified() {
        let transcript = Transcript::new();
        let subject = Rc::new(ConcreteSubject::new());
        let victim: Rc<dyn Observer> = ConcreteObserver::new(&transcript);
        let unsubscriber: Rc<dyn Observer> = Rc::new(Unsubscriber {
            subject: Rc::clone(&subject),
            target: RefCell::new(Some(Rc::clone(&victim))),
        });
        subject.attach(Rc::clone(&unsubscriber));
        subject.attach(Rc::clone(&victim));

        subject.set_state("after-detach");
        assert_eq!(subject.observer_count(), 1);
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_attached_mid_round_waits_for_next_round() {
        struct Recruiter {
            subject: Rc<ConcreteSubject>,
            recruit: RefCell<Option<Rc<dyn Observer>>>,
        }

        impl Observer for Recruiter {
            fn update(&self, _subject: &dyn Subject) {
                if let Some(recruit) = self.recruit.borrow_mut().take() {
                    self.subject.attach(recruit);
                }
            }
        }

        let transcript = Transcript::new();
        let subject = Rc::new(ConcreteSubject::new());
        let recruit: Rc<dyn Observer> = ConcreteObserver::new(&transcript);
        subject.attach(Rc::new(Recruiter {
            subject: Rc::clone(&subject),
            recruit: RefCell::new(Some(recruit)),
        }));

        subject.set_state("first");
        assert!(transcript.is_empty());
        subject.set_state("second");
        assert_eq!(transcript.lines(), vec!["Observer updated with state: second"]);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        demo(&mut out, &CatalogConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Observer updated with state: State 1\n\
             Observer updated with state: State 1\n\
             Observer updated with state: State 2\n"
        );
    }
}
