use serde::{Deserialize, Serialize};

use super::{RecordId, Resource, ResourceKind};
use crate::display::{BadgeStyle, Card, Cell, DisplayOptions, Field, Present};

/// A suggested workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: RecordId,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub exercise_type: String,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub difficulty: String,
    /// Minutes
    pub duration: i64,
    pub calories_estimate: i64,
}

/// Badge style for a difficulty label, matched case-insensitively
pub fn difficulty_badge(difficulty: &str) -> BadgeStyle {
    match difficulty.trim().to_lowercase().as_str() {
        "beginner" => BadgeStyle::Light,
        "intermediate" => BadgeStyle::Secondary,
        "advanced" => BadgeStyle::Dark,
        _ => BadgeStyle::Light,
    }
}

impl Workout {
    fn difficulty_cell(&self) -> Cell {
        Cell::badge(&self.difficulty, difficulty_badge(&self.difficulty))
    }
}

impl Resource for Workout {
    const KIND: ResourceKind = ResourceKind::Workouts;
}

impl Present for Workout {
    fn headers() -> &'static [&'static str] {
        &[
            "Workout Title",
            "Exercise Type",
            "Duration",
            "Difficulty",
            "Calories",
            "Description",
            "Actions",
        ]
    }

    fn row(&self, _opts: &DisplayOptions) -> Vec<Cell> {
        vec![
            Cell::strong(&self.title),
            Cell::badge(&self.exercise_type, BadgeStyle::Secondary),
            Cell::text(format!("{} min", self.duration)),
            self.difficulty_cell(),
            Cell::text(format!("{} cal", self.calories_estimate)),
            Cell::text(&self.description),
            Cell::actions(&["Start"]),
        ]
    }

    fn card(&self, _opts: &DisplayOptions) -> Option<Card> {
        Some(Card {
            title: Cell::text(&self.title),
            badge: Some(self.difficulty_cell()),
            fields: vec![
                Field::new(
                    "Exercise Type",
                    Cell::badge(&self.exercise_type, BadgeStyle::Secondary),
                ),
                Field::new("Description", Cell::text(&self.description)),
                Field::new("Duration", Cell::text(format!("{} min", self.duration))),
                Field::new("Calories", Cell::text(self.calories_estimate.to_string())),
            ],
            actions: vec!["Start Workout"],
        })
    }
}
