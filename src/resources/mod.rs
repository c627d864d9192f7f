//! Resource Records
//!
//! Record shapes consumed from the REST API, one module per resource, and the
//! per-resource configuration (endpoint, titles, empty-state copy) that turns
//! the generic unit into a concrete view.

mod activity;
mod leaderboard;
mod team;
mod user;
mod workout;

pub use activity::Activity;
pub use leaderboard::{rank_badge, rank_entries, LeaderboardEntry, Standing, Tier, UserDirectory};
pub use team::Team;
pub use user::User;
pub use workout::{difficulty_badge, Workout};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record identifier
///
/// The backend serializes ids as object-id strings while fixtures often use
/// integers. Both are accepted; comparisons that cross records (the
/// leaderboard join) go through [`RecordId::key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Textual form used as a lookup key
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// True for an empty string id
    pub fn is_blank(&self) -> bool {
        matches!(self, RecordId::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// The five collections a unit can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Activities,
    Teams,
    Users,
    Workouts,
    Leaderboard,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Activities,
        ResourceKind::Leaderboard,
        ResourceKind::Teams,
        ResourceKind::Users,
        ResourceKind::Workouts,
    ];

    /// Path suffix of the collection endpoint
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "/api/activities/",
            ResourceKind::Teams => "/api/teams/",
            ResourceKind::Users => "/api/users/",
            ResourceKind::Workouts => "/api/workouts/",
            ResourceKind::Leaderboard => "/api/leaderboard/",
        }
    }

    /// Lowercase plural name
    pub fn noun(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "activities",
            ResourceKind::Teams => "teams",
            ResourceKind::Users => "users",
            ResourceKind::Workouts => "workouts",
            ResourceKind::Leaderboard => "leaderboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "Fitness Activities",
            ResourceKind::Teams => "Team Management",
            ResourceKind::Users => "User Profiles",
            ResourceKind::Workouts => "Personalized Workouts",
            ResourceKind::Leaderboard => "Competitive Leaderboard",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "Track and monitor your workout activities",
            ResourceKind::Teams => "Create and manage your fitness teams",
            ResourceKind::Users => "Manage and view user accounts",
            ResourceKind::Workouts => "Browse workout suggestions tailored to your fitness goals",
            ResourceKind::Leaderboard => "See where you rank among competitors",
        }
    }

    /// Label shown next to the record count
    pub fn count_label(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "Total Activities",
            ResourceKind::Teams => "Active Teams",
            ResourceKind::Users => "Registered Users",
            ResourceKind::Workouts => "Available Workouts",
            ResourceKind::Leaderboard => "Top Performers",
        }
    }

    pub fn loading_message(&self) -> String {
        format!("Loading {}...", self.noun())
    }

    pub fn empty_heading(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "No activities found",
            ResourceKind::Teams => "No teams found",
            ResourceKind::Users => "No users found",
            ResourceKind::Workouts => "No workouts available",
            ResourceKind::Leaderboard => "No leaderboard data available",
        }
    }

    pub fn empty_hint(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "Start logging your fitness activities to see them here!",
            ResourceKind::Teams => "Create a team to start competing with others!",
            ResourceKind::Users => "No registered users in the system yet.",
            ResourceKind::Workouts => "Check back later for personalized workout suggestions!",
            ResourceKind::Leaderboard => {
                "Complete activities to start earning points and appear on the leaderboard!"
            }
        }
    }

    /// Whether the view offers the card layout
    pub fn has_card_layout(&self) -> bool {
        !matches!(self, ResourceKind::Leaderboard)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activities" => Ok(ResourceKind::Activities),
            "teams" => Ok(ResourceKind::Teams),
            "users" => Ok(ResourceKind::Users),
            "workouts" => Ok(ResourceKind::Workouts),
            "leaderboard" => Ok(ResourceKind::Leaderboard),
            other => Err(format!("Unknown resource: {}", other)),
        }
    }
}

/// A record fetched directly from one collection endpoint
pub trait Resource: DeserializeOwned + Clone + 'static {
    const KIND: ResourceKind;
}

/// Text field that reads an explicit `null` as an empty string
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_both_forms() {
        let n: RecordId = serde_json::from_str("7").unwrap();
        let s: RecordId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(n, RecordId::Number(7));
        assert_eq!(s, RecordId::Text("7".into()));
        assert_eq!(n.key(), s.key());
    }

    #[test]
    fn test_blank_id() {
        assert!(RecordId::from("  ").is_blank());
        assert!(!RecordId::from(0).is_blank());
    }

    #[test]
    fn test_kind_round_trip_through_str() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.noun().parse::<ResourceKind>().unwrap(), kind);
        }
        assert!("badges".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(ResourceKind::Activities.endpoint(), "/api/activities/");
        assert_eq!(ResourceKind::Leaderboard.endpoint(), "/api/leaderboard/");
        assert_eq!(ResourceKind::Teams.loading_message(), "Loading teams...");
    }

    #[test]
    fn test_null_text_fields_decode_as_empty() {
        let teams: Vec<Team> =
            crate::envelope::decode(r#"[{"id":7,"name":"A","created_at":null}]"#).unwrap();
        assert_eq!(teams[0].created_at, "");

        let users: Vec<User> = crate::envelope::decode(
            r#"{"results":[{"id":"u1","name":null,"email":null,"created_at":null}]}"#,
        )
        .unwrap();
        assert_eq!(users[0].name, "");
        assert_eq!(users[0].email, "");

        let workouts: Vec<Workout> = crate::envelope::decode(
            r#"[{"id":1,"title":"Core","description":null,"exercise_type":"Strength",
                "difficulty":null,"duration":20,"calories_estimate":150}]"#,
        )
        .unwrap();
        assert_eq!(workouts[0].difficulty, "");
    }

    #[test]
    fn test_only_leaderboard_lacks_cards() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.has_card_layout(), kind != ResourceKind::Leaderboard);
        }
    }
}
