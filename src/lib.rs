//! # OctoFit
//!
//! Collection views for the OctoFit fitness tracker: activities, teams, users,
//! workouts and the leaderboard.
//!
//! Every view follows the same pattern. It mounts, fetches one JSON collection
//! from a read-only endpoint, normalizes the response, and renders a loading
//! indicator, an error panel, an empty-state panel, or the records as a table
//! or a card grid.
//!
//! ## Modules
//!
//! - [`resources`]: Record types consumed from the REST API
//! - [`endpoint`]: API base URL resolution
//! - [`envelope`]: Bare-array vs `results`-envelope normalization
//! - [`unit`]: The generic fetch-and-render unit state machine
//! - [`display`]: Table rows, cards, badges and placeholders
//! - [`client`]: HTTP collection source (feature `native`)
//! - [`terminal`]: Text, JSON and CSV rendering (feature `native`)
//! - [`devserver`]: Fixture API server (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofit::client::{load_collection, ApiClient};
//! use octofit::config::ApiConfig;
//! use octofit::resources::{ResourceKind, Workout};
//! use octofit::unit::CollectionUnit;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(&ApiConfig::default())?;
//!
//!     let mut unit = CollectionUnit::<Workout>::for_kind(ResourceKind::Workouts);
//!     load_collection(&client, &mut unit).await;
//!
//!     println!("{} workouts", unit.len());
//!     Ok(())
//! }
//! ```

pub mod display;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod resources;
pub mod unit;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod devserver;
#[cfg(feature = "native")]
pub mod telemetry;
#[cfg(feature = "native")]
pub mod terminal;

pub use display::{BadgeStyle, Card, Cell, DisplayOptions, Page, Present, Screen, Table};
pub use envelope::Payload;
pub use error::FetchError;
pub use resources::{
    Activity, LeaderboardEntry, RecordId, Resource, ResourceKind, Standing, Team, Tier, User,
    UserDirectory, Workout,
};
pub use unit::{CollectionUnit, Mount, MountToken, Phase, ViewMode};

#[cfg(feature = "native")]
pub use client::{ApiClient, CollectionSource};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
