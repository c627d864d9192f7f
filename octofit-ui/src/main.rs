//! OctoFit Tracker
//!
//! Browser front end for the OctoFit fitness tracker, built with Leptos
//! (WASM).
//!
//! # Views
//!
//! - Activities, teams, users and workouts, each as a table or a card grid
//! - The leaderboard, joined against user names
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every view fetches its collection once when it mounts and
//! renders through the view-models of the `octofit` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
