// Mediator Pattern - chat room broadcast
// Participants never talk to each other directly; they hand messages to the
// mediator, which fans them out to everybody except the sender.

use std::cell::RefCell;
use std::io::Write;
use std::rc::{Rc, Weak};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Roles
// ============================================================================

pub trait ChatMediator {
    fn add_user(&self, user: Rc<dyn Participant>);

    /// Delivers `message` to every registered participant except `sender`.
    /// Returns the number of deliveries made.
    fn send_message(&self, message: &str, sender: &dyn Participant) -> usize;
}

pub trait Participant {
    fn name(&self) -> &str;
    fn receive(&self, message: &str);
}

// ============================================================================
// Concrete mediator
// ============================================================================

#[derive(Default)]
pub struct ChatRoom {
    users: RefCell<Vec<Rc<dyn Participant>>>,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.borrow().is_empty()
    }
}

impl ChatMediator for ChatRoom {
    fn add_user(&self, user: Rc<dyn Participant>) {
        tracing::debug!(user = user.name(), "joined chat room");
        self.users.borrow_mut().push(user);
    }

    fn send_message(&self, message: &str, sender: &dyn Participant) -> usize {
        // Snapshot so a participant may register someone while receiving.
        let users = self.users.borrow().clone();

        let mut delivered = 0;
        for user in users
            .iter()
            .filter(|user| !std::ptr::addr_eq(Rc::as_ptr(*user), sender))
        {
            user.receive(message);
            delivered += 1;
        }
        tracing::debug!(from = sender.name(), delivered, "message broadcast");
        delivered
    }
}

// ============================================================================
// Concrete participant
// ============================================================================

pub struct ChatUser {
    name: String,
    mediator: Weak<dyn ChatMediator>,
    transcript: Transcript,
    announce_sends: bool,
}

impl ChatUser {
    pub fn new(name: &str, mediator: &Rc<dyn ChatMediator>, transcript: &Transcript) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            mediator: Rc::downgrade(mediator),
            transcript: transcript.clone(),
            announce_sends: false,
        })
    }

    /// Like `new`, but the user also records a "<name> sends:" line.
    pub fn announcing(
        name: &str,
        mediator: &Rc<dyn ChatMediator>,
        transcript: &Transcript,
    ) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            mediator: Rc::downgrade(mediator),
            transcript: transcript.clone(),
            announce_sends: true,
        })
    }

    /// Routes a message through the mediator. A user whose mediator is gone
    /// reaches nobody.
    pub fn send(&self, message: &str) -> usize {
        if self.announce_sends {
            self.transcript
                .record(format!("{} sends: {}", self.name, message));
        }
        match self.mediator.upgrade() {
            Some(mediator) => mediator.send_message(message, self),
            None => {
                tracing::warn!(user = %self.name, "mediator dropped, message discarded");
                0
            }
        }
    }
}

impl Participant for ChatUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str) {
        let verb = if self.announce_sends { "receives" } else { "received" };
        self.transcript
            .record(format!("{} {}: {}", self.name, verb, message));
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_chat(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let transcript = Transcript::new();
    let mediator: Rc<dyn ChatMediator> = Rc::new(ChatRoom::new());

    let user1 = ChatUser::new("User1", &mediator, &transcript);
    let user2 = ChatUser::new("User2", &mediator, &transcript);
    let user3 = ChatUser::new("User3", &mediator, &transcript);

    mediator.add_user(user1.clone());
    mediator.add_user(user2);
    mediator.add_user(user3);

    user1.send("Hello, everyone!");
    transcript.flush_to(out)?;
    Ok(())
}

pub fn demo_room(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let transcript = Transcript::new();
    let mediator: Rc<dyn ChatMediator> = Rc::new(ChatRoom::new());

    let names = ["Alice(user1)", "Bob(user2)", "Charlie(user3)", "Diana(user4)"];
    let users: Vec<Rc<ChatUser>> = names
        .iter()
        .map(|name| ChatUser::announcing(name, &mediator, &transcript))
        .collect();
    for user in &users {
        mediator.add_user(user.clone());
    }

    users[0].send("Hello everyone!");
    transcript.flush_to(out)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
