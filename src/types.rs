//! Core types for mergington

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activity names are the roster keys
pub type ActivityName = String;

/// Snapshot of the whole roster, keyed by activity name
pub type RosterSnapshot = BTreeMap<ActivityName, Activity>;

/// A single extracurricular activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Enrolled students in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}
