//! In-memory activity roster.
//!
//! Owns the mapping of activity name to [`Activity`] and enforces the
//! signup invariants: no duplicate signups, no removal of absent
//! participants, and the capacity bound where one is configured. The
//! roster is seeded once at startup ([`seed`]) and only its participant
//! lists mutate afterwards; activities are never created, renamed or
//! deleted at runtime.

mod error;
mod seed;

pub use error::RosterError;
pub use seed::seed;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::models::Activity;

/// The roster state proper. Handlers never touch this directly; they go
/// through a [`SharedRoster`] handle.
#[derive(Debug, Default)]
pub struct Roster {
    activities: IndexMap<String, Activity>,
}

impl Roster {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self { activities }
    }

    /// Full listing, activities in catalog order.
    pub fn activities(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    /// Sign `email` up for `activity`. Returns the updated participant
    /// count on success.
    pub fn signup(&mut self, activity: &str, email: &str) -> Result<usize, RosterError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or(RosterError::NotFound)?;

        if entry.participants.iter().any(|p| p == email) {
            return Err(RosterError::AlreadyRegistered);
        }
        if entry.max_participants > 0
            && entry.participants.len() >= entry.max_participants as usize
        {
            return Err(RosterError::CapacityExceeded);
        }

        entry.participants.push(email.to_string());
        Ok(entry.participants.len())
    }

    /// Remove `email` from `activity`, keeping the remaining participants
    /// in signup order. Returns the updated participant count on success.
    pub fn remove_participant(&mut self, activity: &str, email: &str) -> Result<usize, RosterError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or(RosterError::NotFound)?;

        let pos = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::ParticipantNotRegistered)?;

        entry.participants.remove(pos);
        Ok(entry.participants.len())
    }
}

/// Cloneable handle guarding the roster with one process-wide lock.
///
/// Every operation is a short in-memory critical section with no blocking
/// work inside it, so a single lock over the whole map keeps listings
/// consistent and serializes mutations. The handle is the axum router
/// state; clones share the same underlying roster.
#[derive(Clone, Debug)]
pub struct SharedRoster {
    inner: Arc<RwLock<Roster>>,
}

impl SharedRoster {
    pub fn new(roster: Roster) -> Self {
        Self {
            inner: Arc::new(RwLock::new(roster)),
        }
    }

    /// Snapshot of the full mapping for listing. Taken under the read
    /// lock, so it never observes a half-applied mutation.
    pub fn activities(&self) -> IndexMap<String, Activity> {
        self.read().activities().clone()
    }

    pub fn signup(&self, activity: &str, email: &str) -> Result<usize, RosterError> {
        self.write().signup(activity, email)
    }

    pub fn remove_participant(&self, activity: &str, email: &str) -> Result<usize, RosterError> {
        self.write().remove_participant(activity, email)
    }

    // A poisoned lock only means some handler panicked; the map itself
    // stays valid because each mutation is a single push or remove.
    fn read(&self) -> RwLockReadGuard<'_, Roster> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Roster> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
