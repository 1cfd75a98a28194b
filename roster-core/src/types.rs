//! Domain types for the activity roster.
//!
//! Activity names double as the external key; there is no surrogate id.
//! All types are serializable via serde (JSON on the wire, YAML for seed files).

use std::borrow::Borrow;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// The unique, human-readable name of an activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityName(pub String);

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ActivityName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ActivityName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for ActivityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ActivityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A participant identifier. Not validated for format; any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(pub String);

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Email {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Email {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Whether `enroll` checks `max_participants` before appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    /// Capacity is display metadata only; rosters may exceed it.
    #[default]
    Unchecked,
    /// Reject enrollments into a full activity.
    Enforce,
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityPolicy::Unchecked => write!(f, "unchecked"),
            CapacityPolicy::Enforce => write!(f, "enforce"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A seed record: one activity as it exists at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: ActivityName,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<Email>,
}

/// Public snapshot of one activity, keyed externally by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<Email>,
}

impl ActivityView {
    /// Free spots left; zero when the roster is at or over capacity.
    pub fn available_slots(&self) -> u32 {
        let enrolled = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(enrolled)
    }
}

/// Ordered `name -> ActivityView` snapshot of the whole roster.
///
/// Serializes as a map whose key order is seed order, and deserializes back
/// without reordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<(ActivityName, ActivityView)>,
}

impl Catalog {
    pub fn new(entries: Vec<(ActivityName, ActivityView)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ActivityView> {
        self.entries
            .iter()
            .find(|(n, _)| n.0 == name)
            .map(|(_, view)| view)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &ActivityName> {
        self.entries.iter().map(|(n, _)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActivityName, &ActivityView)> {
        self.entries.iter().map(|(n, v)| (n, v))
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, view) in &self.entries {
            map.serialize_entry(name, view)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, view)) = access.next_entry::<ActivityName, ActivityView>()? {
                    entries.push((name, view));
                }
                Ok(Catalog { entries })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn view(max: u32, participants: &[&str]) -> ActivityView {
        ActivityView {
            description: "d".to_string(),
            schedule: "s".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| Email::from(*p)).collect(),
        }
    }

    #[test]
    fn newtype_display() {
        assert_eq!(ActivityName::from("Chess Club").to_string(), "Chess Club");
        assert_eq!(Email::from("a@b.edu").to_string(), "a@b.edu");
    }

    #[test]
    fn available_slots_saturates_when_over_capacity() {
        assert_eq!(view(3, &["a"]).available_slots(), 2);
        assert_eq!(view(1, &["a", "b"]).available_slots(), 0);
    }

    #[test]
    fn catalog_serializes_in_insertion_order() {
        let catalog = Catalog::new(vec![
            (ActivityName::from("Zeta"), view(1, &[])),
            (ActivityName::from("Alpha"), view(2, &["x@y"])),
        ]);
        let json = serde_json::to_string(&catalog).expect("serialize");
        let zeta = json.find("Zeta").expect("zeta key");
        let alpha = json.find("Alpha").expect("alpha key");
        assert!(zeta < alpha, "seed order must survive serialization: {json}");
    }

    #[test]
    fn catalog_deserialize_keeps_order() {
        let json = r#"{
            "B": {"description":"","schedule":"","max_participants":1,"participants":[]},
            "A": {"description":"","schedule":"","max_participants":2,"participants":["p@q"]}
        }"#;
        let catalog: Catalog = serde_json::from_str(json).expect("deserialize");
        let names: Vec<&str> = catalog.names().map(|n| n.0.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(catalog.get("A").expect("A").participants, [Email::from("p@q")]);
    }

    #[test]
    fn capacity_policy_defaults_to_unchecked() {
        assert_eq!(CapacityPolicy::default(), CapacityPolicy::Unchecked);
        assert_eq!(CapacityPolicy::Enforce.to_string(), "enforce");
    }
}
