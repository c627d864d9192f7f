//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Activities, Home, Leaderboard, Teams, Users, Workouts};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-vh-100 bg-light">
                // Navigation header
                <Nav />

                // Main content area
                <main class="pb-5">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/activities" view=Activities />
                        <Route path="/leaderboard" view=Leaderboard />
                        <Route path="/teams" view=Teams />
                        <Route path="/users" view=Users />
                        <Route path="/workouts" view=Workouts />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container text-center py-5">
            <h1 class="display-6 mb-2">"Page Not Found"</h1>
            <p class="text-muted mb-4">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn-primary">
                "Go Home"
            </A>
        </div>
    }
}
