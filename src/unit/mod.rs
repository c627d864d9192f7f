//! Collection Unit
//!
//! The state machine behind every view. A unit starts loading, settles exactly
//! once into either a record sequence or an error message, and afterwards only
//! its layout can change.
//!
//! ```text
//!   Loading ──settle(Ok)──▶ Empty | Populated ◀──toggle──▶ (other layout)
//!      │
//!      └──settle(Err)─────▶ Failed(message)
//! ```

mod mount;

pub use mount::{Mount, MountToken};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resources::ResourceKind;

/// Table or card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Cards,
            ViewMode::Cards => ViewMode::Table,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => f.write_str("table"),
            ViewMode::Cards => f.write_str("cards"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "cards" | "card" => Ok(ViewMode::Cards),
            other => Err(format!("Invalid view mode: {}. Use: table, cards", other)),
        }
    }
}

/// What a unit shows right now
#[derive(Debug, PartialEq)]
pub enum Phase<'a, R> {
    Loading,
    Failed(&'a str),
    Empty,
    Populated { records: &'a [R], view: ViewMode },
}

/// Local state of one view
#[derive(Debug, Clone)]
pub struct CollectionUnit<R> {
    records: Vec<R>,
    loading: bool,
    error: Option<String>,
    view: ViewMode,
    cards_enabled: bool,
}

impl<R> CollectionUnit<R> {
    /// A unit with both layouts available, starting in the table layout
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            view: ViewMode::Table,
            cards_enabled: true,
        }
    }

    /// A unit configured for one resource
    pub fn for_kind(kind: ResourceKind) -> Self {
        Self {
            cards_enabled: kind.has_card_layout(),
            ..Self::new()
        }
    }

    /// Start in the given layout (ignored when cards are unavailable)
    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.set_view(view);
        self
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        if self.cards_enabled {
            self.view = view;
        }
    }

    /// Switch layouts; the records are left untouched
    pub fn toggle_view(&mut self) {
        self.set_view(self.view.toggled());
    }

    /// Record the outcome of the unit's fetch.
    ///
    /// Only the first outcome is kept: a settled unit never re-enters loading
    /// and an error, once set, stays set.
    pub fn settle<E: fmt::Display>(&mut self, outcome: Result<Vec<R>, E>) {
        if !self.loading {
            tracing::debug!("Ignoring outcome for an already settled unit");
            return;
        }

        match outcome {
            Ok(records) => self.records = records,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Settle only while the view is still mounted. Returns whether the
    /// outcome was applied.
    pub fn settle_if_live<E: fmt::Display>(
        &mut self,
        token: &MountToken,
        outcome: Result<Vec<R>, E>,
    ) -> bool {
        if !token.is_live() {
            tracing::debug!("Discarding outcome for a torn down unit");
            return false;
        }
        self.settle(outcome);
        true
    }

    pub fn phase(&self) -> Phase<'_, R> {
        if self.loading {
            Phase::Loading
        } else if let Some(message) = &self.error {
            Phase::Failed(message)
        } else if self.records.is_empty() {
            Phase::Empty
        } else {
            Phase::Populated {
                records: &self.records,
                view: self.view,
            }
        }
    }
}

impl<R> Default for CollectionUnit<R> {
    fn default() -> Self {
        Self::new()
    }
}
