//! UI Components
//!
//! Reusable Leptos components shared by the views.

pub mod collection;
pub mod loading;
pub mod nav;

pub use collection::CollectionView;
pub use loading::Loading;
pub use nav::Nav;
