//! Leaderboard entries and the user-name join.
//!
//! Entries only carry a user id. The view joins them against the users
//! collection to show names, and derives rank and tier from list position.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{RecordId, Resource, ResourceKind, User};
use crate::display::{format, BadgeStyle, Cell, DisplayOptions, Present};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: RecordId,
    pub user_id: RecordId,
    pub total_points: i64,
    #[serde(default)]
    pub team_id: Option<RecordId>,
    /// Rank stored by the backend; display rank comes from list position
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Resource for LeaderboardEntry {
    const KIND: ResourceKind = ResourceKind::Leaderboard;
}

/// Mapping from user id to display name, built once per load
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

impl UserDirectory {
    pub fn from_users(users: &[User]) -> Self {
        let names = users
            .iter()
            .map(|user| (user.id.key(), user.name.clone()))
            .collect();
        Self { names }
    }

    /// Name for a user id; blank names count as missing
    pub fn name_for(&self, id: &RecordId) -> Option<&str> {
        format::non_blank(self.names.get(&id.key()).map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Status tier derived from rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Top3,
    Top10,
    Competing,
}

impl Tier {
    pub fn from_rank(rank: usize) -> Self {
        if rank <= 3 {
            Tier::Top3
        } else if rank <= 10 {
            Tier::Top10
        } else {
            Tier::Competing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Top3 => "Top 3",
            Tier::Top10 => "Top 10",
            Tier::Competing => "Competing",
        }
    }

    pub fn style(&self) -> BadgeStyle {
        match self {
            Tier::Top3 => BadgeStyle::Dark,
            Tier::Top10 => BadgeStyle::Secondary,
            Tier::Competing => BadgeStyle::Light,
        }
    }
}

/// Badge style of the rank column
pub fn rank_badge(rank: usize) -> BadgeStyle {
    match rank {
        1 => BadgeStyle::Dark,
        2 | 3 => BadgeStyle::Secondary,
        _ => BadgeStyle::Light,
    }
}

/// A leaderboard row after the join
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based list position
    pub rank: usize,
    pub user_id: RecordId,
    /// User name, or the raw user id when the user is unknown
    pub name: String,
    pub total_points: i64,
    pub tier: Tier,
}

impl Standing {
    pub fn points_label(&self) -> String {
        format!("{} pts", self.total_points)
    }
}

/// Join entries to user names in server order
pub fn rank_entries(entries: Vec<LeaderboardEntry>, directory: &UserDirectory) -> Vec<Standing> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let rank = index + 1;
            let name = directory
                .name_for(&entry.user_id)
                .map(str::to_string)
                .unwrap_or_else(|| entry.user_id.to_string());

            Standing {
                rank,
                user_id: entry.user_id,
                name,
                total_points: entry.total_points,
                tier: Tier::from_rank(rank),
            }
        })
        .collect()
}

impl Present for Standing {
    fn headers() -> &'static [&'static str] {
        &["Rank", "Username", "Total Points", "Status"]
    }

    fn row(&self, _opts: &DisplayOptions) -> Vec<Cell> {
        vec![
            Cell::badge(format!("#{}", self.rank), rank_badge(self.rank)),
            Cell::strong(&self.name),
            Cell::badge(self.points_label(), BadgeStyle::Secondary),
            Cell::badge(self.tier.label(), self.tier.style()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(json: serde_json::Value) -> Vec<LeaderboardEntry> {
        serde_json::from_value(json).unwrap()
    }

    fn users(json: serde_json::Value) -> Vec<User> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_join_resolves_name() {
        let standings = rank_entries(
            entries(serde_json::json!([{"id": 1, "user_id": 7, "total_points": 50}])),
            &UserDirectory::from_users(&users(serde_json::json!([{"id": 7, "name": "Ada"}]))),
        );

        assert_eq!(standings.len(), 1);
        let top = &standings[0];
        assert_eq!(top.rank, 1);
        assert_eq!(top.name, "Ada");
        assert_eq!(top.points_label(), "50 pts");
        assert_eq!(top.tier.label(), "Top 3");

        let row = top.row(&DisplayOptions::default());
        assert_eq!(row[0], Cell::badge("#1", BadgeStyle::Dark));
        assert_eq!(row[1], Cell::strong("Ada"));
        assert_eq!(row[2], Cell::badge("50 pts", BadgeStyle::Secondary));
        assert_eq!(row[3], Cell::badge("Top 3", BadgeStyle::Dark));
    }

    #[test]
    fn test_unknown_user_falls_back_to_raw_id() {
        let standings = rank_entries(
            entries(serde_json::json!([{"id": 1, "user_id": 7, "total_points": 50}])),
            &UserDirectory::from_users(&users(serde_json::json!([{"id": 8, "name": "Grace"}]))),
        );
        assert_eq!(standings[0].name, "7");
    }

    #[test]
    fn test_ids_match_across_string_and_number() {
        let directory =
            UserDirectory::from_users(&users(serde_json::json!([{"id": "7", "name": "Ada"}])));
        assert_eq!(directory.name_for(&RecordId::Number(7)), Some("Ada"));
    }

    #[test]
    fn test_blank_name_falls_back() {
        let directory =
            UserDirectory::from_users(&users(serde_json::json!([{"id": 3, "name": ""}])));
        assert_eq!(directory.name_for(&RecordId::from(3)), None);
    }

    #[test]
    fn test_rank_is_positional_not_stored() {
        let standings = rank_entries(
            entries(serde_json::json!([
                {"id": "a", "user_id": 1, "total_points": 10, "rank": 9},
                {"id": "b", "user_id": 2, "total_points": 99, "rank": 1}
            ])),
            &UserDirectory::default(),
        );
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].rank, 2);
        assert_eq!(standings[1].total_points, 99);
    }

    #[test]
    fn test_tiers_and_rank_badges() {
        assert_eq!(Tier::from_rank(3), Tier::Top3);
        assert_eq!(Tier::from_rank(4), Tier::Top10);
        assert_eq!(Tier::from_rank(10), Tier::Top10);
        assert_eq!(Tier::from_rank(11), Tier::Competing);

        assert_eq!(rank_badge(1), BadgeStyle::Dark);
        assert_eq!(rank_badge(2), BadgeStyle::Secondary);
        assert_eq!(rank_badge(3), BadgeStyle::Secondary);
        assert_eq!(rank_badge(4), BadgeStyle::Light);
    }

    #[test]
    fn test_standings_have_no_card_layout() {
        let standings = rank_entries(
            entries(serde_json::json!([{"id": 1, "user_id": 2, "total_points": 0}])),
            &UserDirectory::default(),
        );
        assert!(standings[0].card(&DisplayOptions::default()).is_none());
    }
}
