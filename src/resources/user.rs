use serde::{Deserialize, Serialize};

use super::{RecordId, Resource, ResourceKind};
use crate::display::{format, BadgeStyle, Card, Cell, DisplayOptions, Field, Present};

pub const NO_TEAM: &str = "No Team";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub email: String,
    #[serde(default)]
    pub team_id: Option<RecordId>,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub created_at: String,
}

impl User {
    fn team_badge(&self) -> Cell {
        match self.team_id.as_ref().filter(|id| !id.is_blank()) {
            Some(team) => Cell::badge(team.to_string(), BadgeStyle::Dark),
            None => Cell::badge(NO_TEAM, BadgeStyle::Light),
        }
    }
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::Users;
}

impl Present for User {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Team ID", "Date Joined", "Actions"]
    }

    fn row(&self, opts: &DisplayOptions) -> Vec<Cell> {
        vec![
            Cell::strong(&self.name),
            Cell::text(&self.email),
            self.team_badge(),
            Cell::text(format::locale_date(&self.created_at, &opts.date_format)),
            Cell::actions(&["View Profile"]),
        ]
    }

    fn card(&self, opts: &DisplayOptions) -> Option<Card> {
        Some(Card {
            title: Cell::text(&self.name),
            badge: None,
            fields: vec![
                Field::new("Email", Cell::text(&self.email)),
                Field::new("Team ID", self.team_badge()),
                Field::new(
                    "Date Joined",
                    Cell::text(format::locale_date(&self.created_at, &opts.date_format)),
                ),
            ],
            actions: vec!["View Profile"],
        })
    }
}
