//! Seed data loaded once at startup
//!
//! A seed is the initial roster. The built-in seed lists the Mergington
//! activities; a JSON file with the same shape as `GET /activities` can
//! replace it.

use std::path::Path;

use crate::email::{normalize_email, validate_email};
use crate::types::{Activity, RosterSnapshot};
use crate::{Error, Result};

/// Validated initial roster contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    activities: RosterSnapshot,
}

impl Seed {
    /// Validate raw activities and normalize their participants.
    pub fn new(activities: RosterSnapshot) -> Result<Self> {
        let mut validated = RosterSnapshot::new();

        for (name, mut activity) in activities {
            if name.trim().is_empty() {
                return Err(Error::invalid_seed("activity name must not be empty"));
            }
            if activity.max_participants == 0 {
                return Err(Error::invalid_seed(format!(
                    "'{}': max_participants must be positive",
                    name
                )));
            }
            if activity.participants.len() > activity.max_participants {
                return Err(Error::invalid_seed(format!(
                    "'{}': {} participants exceed capacity {}",
                    name,
                    activity.participants.len(),
                    activity.max_participants
                )));
            }

            let mut participants = Vec::with_capacity(activity.participants.len());
            for email in &activity.participants {
                validate_email(email)
                    .map_err(|e| Error::invalid_seed(format!("'{}': {}", name, e)))?;
                let email = normalize_email(email);
                if participants.contains(&email) {
                    return Err(Error::invalid_seed(format!(
                        "'{}': duplicate participant {}",
                        name, email
                    )));
                }
                participants.push(email);
            }
            activity.participants = participants;

            validated.insert(name, activity);
        }

        Ok(Self {
            activities: validated,
        })
    }

    /// Parse a JSON seed (`{"<name>": {description, schedule, ...}}`)
    pub fn from_json(json: &str) -> Result<Self> {
        let activities: RosterSnapshot = serde_json::from_str(json)?;
        Self::new(activities)
    }

    /// Read and parse a JSON seed file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn activities(&self) -> &RosterSnapshot {
        &self.activities
    }

    pub fn into_activities(self) -> RosterSnapshot {
        self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Default for Seed {
    /// The Mergington High School activity list
    fn default() -> Self {
        let activities = [
            (
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"][..],
            ),
            (
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"][..],
            ),
            (
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"][..],
            ),
            (
                "Basketball",
                "Team sport focused on skill development and competitive play",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["james@mergington.edu"][..],
            ),
            (
                "Swimming",
                "Learn swimming techniques and prepare for competitions",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                25,
                &["alex@mergington.edu"][..],
            ),
            (
                "Drama Club",
                "Perform in theatrical productions and develop acting skills",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                20,
                &["isabella@mergington.edu"][..],
            ),
            (
                "Art Studio",
                "Explore painting, sculpture, and various art mediums",
                "Mondays and Thursdays, 3:30 PM - 4:30 PM",
                18,
                &["grace@mergington.edu"][..],
            ),
            (
                "Debate Team",
                "Develop argumentation and public speaking skills",
                "Tuesdays and Fridays, 3:30 PM - 4:30 PM",
                16,
                &["lucas@mergington.edu"][..],
            ),
            (
                "Math Club",
                "Solve challenging problems and participate in math competitions",
                "Wednesdays, 3:30 PM - 4:30 PM",
                14,
                &["noah@mergington.edu"][..],
            ),
        ];

        let activities = activities
            .into_iter()
            .map(|(name, description, schedule, max_participants, participants)| {
                (
                    name.to_string(),
                    Activity {
                        description: description.to_string(),
                        schedule: schedule.to_string(),
                        max_participants,
                        participants: participants.iter().map(|p| p.to_string()).collect(),
                    },
                )
            })
            .collect();

        // Literal data, already normalized and within capacity
        Self { activities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_seed_is_valid() {
        let seed = Seed::default();
        assert_eq!(seed.len(), 9);

        let revalidated = Seed::new(seed.activities().clone()).unwrap();
        assert_eq!(revalidated, seed);

        let chess = &seed.activities()["Chess Club"];
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn test_seed_normalizes_participants() {
        let seed = Seed::from_json(
            r#"{"Robotics": {
                "description": "Build robots",
                "schedule": "Saturdays",
                "max_participants": 4,
                "participants": [" Ada@Mergington.edu "]
            }}"#,
        )
        .unwrap();

        assert_eq!(
            seed.activities()["Robotics"].participants,
            vec!["ada@mergington.edu"]
        );
    }

    #[test]
    fn test_seed_rejects_bad_activities() {
        let cases = [
            r#"{"": {"description": "", "schedule": "", "max_participants": 1}}"#,
            r#"{"Zero": {"description": "", "schedule": "", "max_participants": 0}}"#,
            r#"{"Over": {"description": "", "schedule": "", "max_participants": 1,
                "participants": ["a@x.edu", "b@x.edu"]}}"#,
            r#"{"Dup": {"description": "", "schedule": "", "max_participants": 3,
                "participants": ["a@x.edu", "A@X.edu"]}}"#,
            r#"{"Bad": {"description": "", "schedule": "", "max_participants": 3,
                "participants": ["not-an-email"]}}"#,
        ];

        for json in cases {
            assert!(
                matches!(Seed::from_json(json), Err(Error::InvalidSeed(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_seed_rejects_malformed_json() {
        assert!(matches!(
            Seed::from_json("{not json"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_seed_from_file() {
        let file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(Seed::default().activities()).unwrap();
        std::fs::write(file.path(), json).unwrap();

        let seed = Seed::from_file(file.path()).unwrap();
        assert_eq!(seed, Seed::default());
    }

    #[test]
    fn test_seed_missing_file() {
        assert!(matches!(
            Seed::from_file("/definitely/not/here.json"),
            Err(Error::Io(_))
        ));
    }
}
