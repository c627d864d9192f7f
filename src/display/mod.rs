//! Presentation View-Models
//!
//! Records are turned into renderer-neutral rows and cards here. The terminal
//! renderer and the browser front end both draw from the same [`Page`], so a
//! placeholder or badge decision is made exactly once.

pub mod format;

use serde::Serialize;

use crate::resources::ResourceKind;
use crate::unit::{CollectionUnit, Phase, ViewMode};

pub use format::{locale_date, number, DEFAULT_DATE_FORMAT};

/// Badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Dark,
    Secondary,
    Light,
}

impl BadgeStyle {
    /// CSS classes used by the browser front end
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeStyle::Dark => "bg-dark",
            BadgeStyle::Secondary => "bg-secondary",
            BadgeStyle::Light => "bg-light text-dark",
        }
    }
}

/// A single rendered value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { text: String },
    Strong { text: String },
    Muted { text: String },
    Badge { text: String, style: BadgeStyle },
    /// Buttons that are drawn but trigger nothing
    Actions { labels: Vec<&'static str> },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Cell::Strong { text: text.into() }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Cell::Muted { text: text.into() }
    }

    pub fn badge(text: impl Into<String>, style: BadgeStyle) -> Self {
        Cell::Badge {
            text: text.into(),
            style,
        }
    }

    pub fn actions(labels: &[&'static str]) -> Self {
        Cell::Actions {
            labels: labels.to_vec(),
        }
    }

    /// Text content without decoration
    pub fn plain(&self) -> String {
        match self {
            Cell::Text { text }
            | Cell::Strong { text }
            | Cell::Muted { text }
            | Cell::Badge { text, .. } => text.clone(),
            Cell::Actions { labels } => labels.join(" "),
        }
    }
}

/// Labelled value on a card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: Cell,
}

impl Field {
    pub fn new(label: &'static str, value: Cell) -> Self {
        Self { label, value }
    }
}

/// One record in the card grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: Cell,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Cell>,
    pub fields: Vec<Field>,
    pub actions: Vec<&'static str>,
}

/// The table layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

/// Rendering options
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// strftime pattern for calendar dates
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// How one kind of record is shown
pub trait Present {
    /// Table column headings
    fn headers() -> &'static [&'static str];

    /// One table row, aligned with [`Present::headers`]
    fn row(&self, opts: &DisplayOptions) -> Vec<Cell>;

    /// Card layout, `None` when the record is only shown in a table
    fn card(&self, _opts: &DisplayOptions) -> Option<Card> {
        None
    }
}

/// The body of a view after choosing exactly one state to show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Screen {
    Loading { message: String },
    Error { message: String },
    Empty { heading: &'static str, hint: &'static str },
    Table { table: Table },
    Cards { cards: Vec<Card> },
}

/// Title block shown above a settled collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub count_label: &'static str,
    pub count: usize,
}

/// Everything a renderer needs to draw one unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub resource: ResourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    /// Current layout, present only when the view offers a toggle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewMode>,
    pub screen: Screen,
}

impl Page {
    pub fn build<R: Present>(
        kind: ResourceKind,
        unit: &CollectionUnit<R>,
        opts: &DisplayOptions,
    ) -> Self {
        let header = Header {
            title: kind.title(),
            subtitle: kind.subtitle(),
            count_label: kind.count_label(),
            count: unit.len(),
        };
        let view = kind.has_card_layout().then(|| unit.view());

        let (header, screen) = match unit.phase() {
            Phase::Loading => (
                None,
                Screen::Loading {
                    message: kind.loading_message(),
                },
            ),
            Phase::Failed(message) => (
                None,
                Screen::Error {
                    message: message.to_string(),
                },
            ),
            Phase::Empty => (
                Some(header),
                Screen::Empty {
                    heading: kind.empty_heading(),
                    hint: kind.empty_hint(),
                },
            ),
            Phase::Populated { records, view } => {
                (Some(header), populated_screen(records, view, opts))
            }
        };

        // The toggle is only drawn once the collection has settled cleanly
        let view = header.as_ref().and(view);

        Self {
            resource: kind,
            header,
            view,
            screen,
        }
    }
}

fn populated_screen<R: Present>(records: &[R], view: ViewMode, opts: &DisplayOptions) -> Screen {
    if view == ViewMode::Cards {
        let cards: Option<Vec<Card>> = records.iter().map(|r| r.card(opts)).collect();
        if let Some(cards) = cards {
            return Screen::Cards { cards };
        }
    }

    Screen::Table {
        table: Table {
            headers: R::headers().to_vec(),
            rows: records.iter().map(|r| r.row(opts)).collect(),
        },
    }
}
