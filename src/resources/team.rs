use serde::{Deserialize, Serialize};

use super::{RecordId, Resource, ResourceKind};
use crate::display::{format, Card, Cell, DisplayOptions, Field, Present};

pub const NO_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: RecordId,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub created_at: String,
}

impl Team {
    pub fn description_or_placeholder(&self) -> &str {
        format::non_blank(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }
}

impl Resource for Team {
    const KIND: ResourceKind = ResourceKind::Teams;
}

impl Present for Team {
    fn headers() -> &'static [&'static str] {
        &["Team Name", "Description", "Created Date", "Actions"]
    }

    fn row(&self, opts: &DisplayOptions) -> Vec<Cell> {
        vec![
            Cell::strong(&self.name),
            Cell::text(self.description_or_placeholder()),
            Cell::text(format::locale_date(&self.created_at, &opts.date_format)),
            Cell::actions(&["View", "Join"]),
        ]
    }

    fn card(&self, opts: &DisplayOptions) -> Option<Card> {
        Some(Card {
            title: Cell::text(&self.name),
            badge: None,
            fields: vec![
                Field::new("Description", Cell::text(self.description_or_placeholder())),
                Field::new(
                    "Created",
                    Cell::muted(format::locale_date(&self.created_at, &opts.date_format)),
                ),
            ],
            actions: vec!["View Team", "Join Team"],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_placeholder() {
        let mut team = Team {
            id: RecordId::from(1),
            name: "Team Marvel".into(),
            description: None,
            created_at: "2024-03-15T12:00:00Z".into(),
        };
        assert_eq!(team.description_or_placeholder(), NO_DESCRIPTION);

        team.description = Some(String::new());
        assert_eq!(team.description_or_placeholder(), NO_DESCRIPTION);

        team.description = Some("Earth's Mightiest Heroes".into());
        assert_eq!(team.row(&DisplayOptions::default())[1], Cell::text("Earth's Mightiest Heroes"));
    }

    #[test]
    fn test_actions_are_inert_labels() {
        let team: Team =
            serde_json::from_value(serde_json::json!({"id": 2, "name": "Team DC"})).unwrap();
        let opts = DisplayOptions::default();

        assert_eq!(team.row(&opts)[3], Cell::actions(&["View", "Join"]));
        assert_eq!(team.card(&opts).unwrap().actions, vec!["View Team", "Join Team"]);
    }
}
