use serde::{Deserialize, Serialize};

use super::{RecordId, Resource, ResourceKind};
use crate::display::{format, BadgeStyle, Card, Cell, DisplayOptions, Field, Present};

/// A logged workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    pub user_id: RecordId,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub activity_type: String,
    /// Minutes
    pub duration: i64,
    /// Kilometres, absent for non-distance sports
    #[serde(default)]
    pub distance: Option<f64>,
    pub calories: i64,
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub date: String,
}

impl Activity {
    /// Distance worth showing; zero counts as absent
    pub fn distance_km(&self) -> Option<f64> {
        self.distance.filter(|d| *d != 0.0)
    }
}

impl Resource for Activity {
    const KIND: ResourceKind = ResourceKind::Activities;
}

impl Present for Activity {
    fn headers() -> &'static [&'static str] {
        &["Activity Type", "Duration", "Distance", "Calories", "Date", "User ID"]
    }

    fn row(&self, opts: &DisplayOptions) -> Vec<Cell> {
        vec![
            Cell::badge(&self.activity_type, BadgeStyle::Secondary),
            Cell::text(format!("{} min", self.duration)),
            match self.distance_km() {
                Some(km) => Cell::text(format!("{} km", format::number(km))),
                None => Cell::muted("-"),
            },
            Cell::text(format!("{} cal", self.calories)),
            Cell::text(format::locale_date(&self.date, &opts.date_format)),
            Cell::badge(self.user_id.to_string(), BadgeStyle::Light),
        ]
    }

    fn card(&self, opts: &DisplayOptions) -> Option<Card> {
        let distance = self
            .distance_km()
            .map(|km| format!("{} km", format::number(km)))
            .unwrap_or_else(|| "N/A".to_string());

        Some(Card {
            title: Cell::badge(&self.activity_type, BadgeStyle::Secondary),
            badge: None,
            fields: vec![
                Field::new("Duration", Cell::text(format!("{} minutes", self.duration))),
                Field::new("Distance", Cell::text(distance)),
                Field::new("Calories", Cell::text(format!("{} cal", self.calories))),
                Field::new(
                    "Date",
                    Cell::text(format::locale_date(&self.date, &opts.date_format)),
                ),
                Field::new(
                    "User ID",
                    Cell::badge(self.user_id.to_string(), BadgeStyle::Light),
                ),
            ],
            actions: Vec::new(),
        })
    }
}
