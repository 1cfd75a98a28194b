//! In-memory roster store.
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart and rebuilt from the seed.
//! - The activity set is fixed at construction, so the name index is never locked.
//! - Each activity's participant list sits behind its own `Mutex`; a membership
//!   check and the mutation that depends on it run under one guard.
//! - [`RosterStore::get_all`] locks activities one at a time. Each list in the
//!   snapshot is consistent; the snapshot as a whole is not atomic.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::RosterError;
use crate::seed;
use crate::types::{Activity, ActivityName, ActivityView, Catalog, Email};

#[derive(Debug)]
struct Entry {
    name: ActivityName,
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Mutex<Vec<Email>>,
}

impl Entry {
    fn view(&self) -> ActivityView {
        ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.lock().clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Email>> {
        // A Vec is never left half-updated by push/remove, so a poisoned
        // guard still holds a valid roster.
        self.participants
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Authoritative `name -> Activity` mapping, seeded once.
#[derive(Debug)]
pub struct RosterStore {
    entries: Vec<Entry>,
    index: HashMap<ActivityName, usize>,
}

/// Exclusive access to one activity's roster, handed out by
/// [`RosterStore::with_roster`].
pub(crate) struct RosterSlot<'a> {
    pub(crate) name: &'a ActivityName,
    pub(crate) max_participants: u32,
    pub(crate) participants: &'a mut Vec<Email>,
}

impl RosterStore {
    /// Store populated from the built-in seed set.
    pub fn seeded() -> Self {
        // The built-in seed is covered by `seed::tests`; build without re-validating.
        Self::build(seed::default_activities())
    }

    /// Store populated from arbitrary activities, validated first.
    pub fn from_activities(activities: Vec<Activity>) -> Result<Self, RosterError> {
        seed::validate(&activities)?;
        Ok(Self::build(activities))
    }

    fn build(activities: Vec<Activity>) -> Self {
        let mut entries = Vec::with_capacity(activities.len());
        let mut index = HashMap::with_capacity(activities.len());
        for activity in activities {
            index.insert(activity.name.clone(), entries.len());
            entries.push(Entry {
                name: activity.name,
                description: activity.description,
                schedule: activity.schedule,
                max_participants: activity.max_participants,
                participants: Mutex::new(activity.participants),
            });
        }
        Self { entries, index }
    }

    /// Full current state in seed order.
    pub fn get_all(&self) -> Catalog {
        Catalog::new(
            self.entries
                .iter()
                .map(|entry| (entry.name.clone(), entry.view()))
                .collect(),
        )
    }

    /// Key lookup; `None` means the activity does not exist.
    pub fn get(&self, name: &str) -> Option<ActivityView> {
        self.entry(name).map(Entry::view)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Activity names in seed order.
    pub fn names(&self) -> Vec<ActivityName> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Run `f` with the named activity's roster locked.
    ///
    /// Returns `RosterError::ActivityNotFound` without calling `f` when the
    /// name is unknown.
    pub(crate) fn with_roster<T>(
        &self,
        name: &str,
        f: impl FnOnce(RosterSlot<'_>) -> Result<T, RosterError>,
    ) -> Result<T, RosterError> {
        let entry = self
            .entry(name)
            .ok_or_else(|| RosterError::ActivityNotFound {
                activity: ActivityName::from(name),
            })?;
        let mut guard = entry.lock();
        f(RosterSlot {
            name: &entry.name,
            max_participants: entry.max_participants,
            participants: &mut *guard,
        })
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::seeded()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
