//! Roster operations: list, enroll, unenroll.
//!
//! Each mutating call performs its membership check and its single mutation
//! under the target activity's lock (see [`crate::store`]).

use std::sync::Arc;

use crate::error::RosterError;
use crate::store::RosterStore;
use crate::types::{CapacityPolicy, Catalog, Email};

/// Applies validated membership changes to a shared [`RosterStore`].
#[derive(Debug, Clone)]
pub struct RosterManager {
    store: Arc<RosterStore>,
    policy: CapacityPolicy,
}

impl RosterManager {
    pub fn new(store: Arc<RosterStore>) -> Self {
        Self::with_policy(store, CapacityPolicy::default())
    }

    pub fn with_policy(store: Arc<RosterStore>, policy: CapacityPolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &Arc<RosterStore> {
        &self.store
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Snapshot of every activity. Never fails.
    pub fn list_all(&self) -> Catalog {
        self.store.get_all()
    }

    /// Append `email` to the activity's participants.
    ///
    /// Fails with `ActivityNotFound` or `AlreadyEnrolled`. Under
    /// [`CapacityPolicy::Enforce`] a full activity fails with `CapacityExceeded`.
    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<String, RosterError> {
        let email = Email::from(email);
        self.store.with_roster(activity_name, |slot| {
            if slot.participants.contains(&email) {
                return Err(RosterError::AlreadyEnrolled {
                    activity: slot.name.clone(),
                    email,
                });
            }
            if self.policy == CapacityPolicy::Enforce
                && slot.participants.len() >= slot.max_participants as usize
            {
                return Err(RosterError::CapacityExceeded {
                    activity: slot.name.clone(),
                    max_participants: slot.max_participants,
                });
            }
            let message = format!("Signed up {email} for {}", slot.name);
            tracing::debug!(activity = %slot.name, %email, "participant enrolled");
            slot.participants.push(email);
            Ok(message)
        })
    }

    /// Remove one occurrence of `email` from the activity's participants.
    ///
    /// Matches by value, not position. Fails with `ActivityNotFound` or `NotEnrolled`.
    pub fn unenroll(&self, activity_name: &str, email: &str) -> Result<String, RosterError> {
        let email = Email::from(email);
        self.store.with_roster(activity_name, |slot| {
            let Some(pos) = slot.participants.iter().position(|p| *p == email) else {
                return Err(RosterError::NotEnrolled {
                    activity: slot.name.clone(),
                    email,
                });
            };
            slot.participants.remove(pos);
            tracing::debug!(activity = %slot.name, %email, "participant unenrolled");
            Ok(format!("Unregistered {email} from {}", slot.name))
        })
    }
}
