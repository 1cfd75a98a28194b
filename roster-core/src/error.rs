//! Error types for roster-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{ActivityName, Email};

/// Caller-facing classification of request-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced activity does not exist.
    NotFound,
    /// The requested membership transition is invalid for the current roster.
    Conflict,
    /// The activity is full and the capacity policy is `Enforce`.
    CapacityExceeded,
}

/// All errors that can arise from roster operations and seed loading.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound { activity: ActivityName },

    #[error("Student {email} is already signed up for {activity}")]
    AlreadyEnrolled { activity: ActivityName, email: Email },

    #[error("Student {email} is not registered for {activity}")]
    NotEnrolled { activity: ActivityName, email: Email },

    #[error("Activity is full ({activity} allows {max_participants} participants)")]
    CapacityExceeded {
        activity: ActivityName,
        max_participants: u32,
    },

    /// Two seed entries share a name.
    #[error("duplicate activity in seed: {0}")]
    DuplicateActivity(ActivityName),

    /// A seed entry declares `max_participants: 0`.
    #[error("activity {0} must allow at least one participant")]
    InvalidCapacity(ActivityName),

    #[error("seed lists {email} twice for {activity}")]
    DuplicateSeedParticipant { activity: ActivityName, email: Email },

    #[error("seed file not found at {path}")]
    SeedNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (seed export path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load; includes file path and line context from serde_yaml.
    #[error("failed to parse seed at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl RosterError {
    /// `None` for startup errors that never reach a request caller.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            RosterError::ActivityNotFound { .. } => Some(ErrorKind::NotFound),
            RosterError::AlreadyEnrolled { .. } | RosterError::NotEnrolled { .. } => {
                Some(ErrorKind::Conflict)
            }
            RosterError::CapacityExceeded { .. } => Some(ErrorKind::CapacityExceeded),
            _ => None,
        }
    }
}
