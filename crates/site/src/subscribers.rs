//! Newsletter subscriber set.
//!
//! Subscribers live only in process memory: the set starts empty, grows for
//! the lifetime of the process, and is lost on restart. The store is owned by
//! [`AppState`](crate::state::AppState) rather than being a global, so every
//! test can build its own.

use std::collections::HashSet;
use std::sync::RwLock;

use freshbasket_core::Email;
use thiserror::Error;

/// Subscriber store errors.
#[derive(Debug, Error)]
pub enum SubscriberStoreError {
    #[error("subscriber set lock poisoned")]
    LockPoisoned,
}

/// Result of adding an address to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// The address was not in the set and has been added.
    New,
    /// The address was already in the set; nothing changed.
    AlreadySubscribed,
}

/// Storage for newsletter subscribers.
pub trait SubscriberStore: Send + Sync {
    /// Add `email` to the set.
    ///
    /// The membership check and the insert happen atomically, so of several
    /// concurrent calls with the same address exactly one sees
    /// [`SubscribeOutcome::New`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage is unusable.
    fn subscribe(&self, email: Email) -> Result<SubscribeOutcome, SubscriberStoreError>;

    /// Whether `email` is in the set.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage is unusable.
    fn contains(&self, email: &Email) -> Result<bool, SubscriberStoreError>;

    /// All subscribers, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage is unusable.
    fn snapshot(&self) -> Result<Vec<Email>, SubscriberStoreError>;
}

/// Process-lifetime subscriber set.
#[derive(Debug, Default)]
pub struct InMemorySubscriberStore {
    emails: RwLock<HashSet<Email>>,
}

impl InMemorySubscriberStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubscriberStore for InMemorySubscriberStore {
    fn subscribe(&self, email: Email) -> Result<SubscribeOutcome, SubscriberStoreError> {
        let mut emails = self
            .emails
            .write()
            .map_err(|_| SubscriberStoreError::LockPoisoned)?;

        if emails.insert(email) {
            Ok(SubscribeOutcome::New)
        } else {
            Ok(SubscribeOutcome::AlreadySubscribed)
        }
    }

    fn contains(&self, email: &Email) -> Result<bool, SubscriberStoreError> {
        self.emails
            .read()
            .map(|emails| emails.contains(email))
            .map_err(|_| SubscriberStoreError::LockPoisoned)
    }

    fn snapshot(&self) -> Result<Vec<Email>, SubscriberStoreError> {
        let mut emails: Vec<Email> = self
            .emails
            .read()
            .map_err(|_| SubscriberStoreError::LockPoisoned)?
            .iter()
            .cloned()
            .collect();
        emails.sort();
        Ok(emails)
    }
}
