//! Seed set: the activities a roster starts with.
//!
//! # File format
//!
//! ```yaml
//! activities:
//!   - name: Chess Club
//!     description: Learn strategies and compete in chess tournaments
//!     schedule: Fridays, 3:30 PM - 5:00 PM
//!     max_participants: 12
//!     participants:
//!       - michael@mergington.edu
//! ```
//!
//! A sequence (not a mapping) so that file order is roster order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::types::{Activity, ActivityName, Email};

/// On-disk shape of a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    pub activities: Vec<Activity>,
}

// ---------------------------------------------------------------------------
// 1. Built-in seed
// ---------------------------------------------------------------------------

/// The fixed activity set a default roster is created from.
pub fn default_activities() -> Vec<Activity> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Practice and compete in inter-school basketball games",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["james@mergington.edu"],
        ),
        activity(
            "Tennis Club",
            "Develop tennis skills and play friendly matches",
            "Tuesdays and Saturdays, 9:00 AM - 10:30 AM",
            10,
            &["lucas@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore painting, drawing and mixed media projects",
            "Thursdays, 3:30 PM - 5:00 PM",
            18,
            &["ava@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Rehearse and perform plays for the school community",
            "Wednesdays, 3:30 PM - 5:30 PM",
            25,
            &["ethan@mergington.edu", "isabella@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Sharpen argumentation and public speaking in competitive debates",
            "Tuesdays, 4:00 PM - 5:30 PM",
            12,
            &["liam@mergington.edu"],
        ),
        activity(
            "Science Club",
            "Run hands-on experiments and prepare for science fairs",
            "Fridays, 2:00 PM - 3:30 PM",
            20,
            &[],
        ),
    ]
}

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        name: ActivityName::from(name),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| Email::from(*p)).collect(),
    }
}

// ---------------------------------------------------------------------------
// 2. Load / export
// ---------------------------------------------------------------------------

/// Load activities from a YAML seed file.
///
/// Returns `RosterError::SeedNotFound` if absent,
/// `RosterError::Parse` (with path + line context) if malformed YAML.
/// Structural checks (unique names, positive capacity) happen in
/// [`validate`], which `RosterStore::from_activities` runs.
pub fn load_at(path: &Path) -> Result<Vec<Activity>, RosterError> {
    if !path.exists() {
        return Err(RosterError::SeedNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let file: SeedFile = serde_yaml::from_str(&contents).map_err(|e| RosterError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(file.activities)
}

/// Render activities in the seed file format.
pub fn to_yaml(activities: &[Activity]) -> Result<String, RosterError> {
    let file = SeedFile {
        activities: activities.to_vec(),
    };
    Ok(serde_yaml::to_string(&file)?)
}

// ---------------------------------------------------------------------------
// 3. Validation
// ---------------------------------------------------------------------------

/// Reject seeds that would break roster invariants from the start.
pub fn validate(activities: &[Activity]) -> Result<(), RosterError> {
    let mut seen = std::collections::HashSet::new();
    for activity in activities {
        if !seen.insert(&activity.name) {
            return Err(RosterError::DuplicateActivity(activity.name.clone()));
        }
        if activity.max_participants == 0 {
            return Err(RosterError::InvalidCapacity(activity.name.clone()));
        }
        let mut emails = std::collections::HashSet::new();
        for email in &activity.participants {
            if !emails.insert(email) {
                return Err(RosterError::DuplicateSeedParticipant {
                    activity: activity.name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
