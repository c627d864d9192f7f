//! Navigation Component
//!
//! Header navigation bar with brand and one link per view.

use leptos::*;
use leptos_router::*;

use octofit::resources::ResourceKind;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container">
                // Brand
                <A href="/" class="navbar-brand fw-bold">
                    "OctoFit Tracker"
                </A>

                // Navigation links
                <ul class="navbar-nav ms-auto">
                    {ResourceKind::ALL
                        .iter()
                        .map(|kind| view! { <NavLink href=route(*kind) label=nav_label(*kind) /> })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// Client-side route of a view
pub fn route(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Activities => "/activities",
        ResourceKind::Teams => "/teams",
        ResourceKind::Users => "/users",
        ResourceKind::Workouts => "/workouts",
        ResourceKind::Leaderboard => "/leaderboard",
    }
}

fn nav_label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Activities => "Activities",
        ResourceKind::Teams => "Teams",
        ResourceKind::Users => "Users",
        ResourceKind::Workouts => "Workouts",
        ResourceKind::Leaderboard => "Leaderboard",
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <li class="nav-item">
            <A href=href class="nav-link" active_class="active">
                {label}
            </A>
        </li>
    }
}
