//! Roster management
//!
//! The roster is the single source of truth for every activity and its
//! participants. All mutations hold the write lock for the full
//! check-then-mutate sequence, so capacity and duplicate checks cannot race.

use tokio::sync::RwLock;

use crate::email::parse_email;
use crate::types::{Activity, RosterSnapshot};
use crate::{Error, Result};

pub mod seed;

pub use seed::Seed;

/// In-memory roster of activities
#[derive(Debug)]
pub struct Roster {
    activities: RwLock<RosterSnapshot>,
}

impl Roster {
    /// Create a roster from validated seed data
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            activities: RwLock::new(seed.into_activities()),
        }
    }

    /// Snapshot of every activity
    pub async fn list_activities(&self) -> RosterSnapshot {
        self.activities.read().await.clone()
    }

    pub async fn get_activity(&self, name: &str) -> Result<Activity> {
        self.activities
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or(Error::ActivityNotFound)
    }

    /// Number of activities
    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Sign a student up for an activity.
    ///
    /// The email is format-checked and normalized before the activity is
    /// looked up. Returns the confirmation message.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<String> {
        let email = parse_email(email)?;

        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(Error::ActivityNotFound)?;

        if activity.has_participant(&email) {
            return Err(Error::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(Error::ActivityFull);
        }

        activity.participants.push(email.clone());

        tracing::info!(
            activity = %activity_name,
            email = %email,
            enrolled = activity.participants.len(),
            capacity = activity.max_participants,
            "Student signed up"
        );

        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Remove a participant from an activity.
    ///
    /// Matching is exact: unlike [`Roster::signup`], the email is neither
    /// validated nor normalized.
    pub async fn withdraw(&self, activity_name: &str, email: &str) -> Result<String> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(Error::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(Error::ParticipantNotFound)?;
        activity.participants.remove(position);

        tracing::info!(
            activity = %activity_name,
            email = %email,
            enrolled = activity.participants.len(),
            "Participant withdrawn"
        );

        Ok(format!("Removed {} from {}", email, activity_name))
    }

    /// Change an activity's capacity.
    ///
    /// The new capacity must be positive and at least the current enrollment.
    pub async fn set_max_participants(&self, activity_name: &str, max: usize) -> Result<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(Error::ActivityNotFound)?;

        if max == 0 {
            return Err(Error::invalid_capacity("max_participants must be positive"));
        }
        if max < activity.participants.len() {
            return Err(Error::invalid_capacity(format!(
                "max_participants {} is below current enrollment {}",
                max,
                activity.participants.len()
            )));
        }

        tracing::info!(
            activity = %activity_name,
            old = activity.max_participants,
            new = max,
            "Capacity changed"
        );
        activity.max_participants = max;

        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::from_seed(Seed::default())
    }
}
