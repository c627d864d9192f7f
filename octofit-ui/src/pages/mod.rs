//! Pages
//!
//! One page per collection. Each page owns a [`CollectionUnit`], fetches once
//! on mount, and drops the outcome if it was unmounted in the meantime.

use leptos::*;
use leptos_router::*;
use std::future::Future;

use octofit::display::{DisplayOptions, Page, Present};
use octofit::error::FetchResult;
use octofit::resources::{Activity, Resource, ResourceKind, Team, User, Workout};
use octofit::unit::{CollectionUnit, Mount};

use crate::api;
use crate::components::nav::route;
use crate::components::CollectionView;

/// Mount a unit for `kind` and start its single fetch
fn unit_page<R, F, Fut>(kind: ResourceKind, fetch: F) -> impl IntoView
where
    R: Present + Clone + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = FetchResult<Vec<R>>> + 'static,
{
    let unit = create_rw_signal(CollectionUnit::<R>::for_kind(kind));

    let mount = Mount::new();
    let token = mount.token();
    on_cleanup(move || mount.teardown());

    spawn_local(async move {
        let outcome = fetch().await;
        // The signal is gone once the page is disposed
        unit.try_update(|unit| unit.settle_if_live(&token, outcome));
    });

    let opts = DisplayOptions::default();
    let page = Signal::derive(move || unit.with(|unit| Page::build(kind, unit, &opts)));
    let on_toggle = Callback::new(move |_: ()| unit.update(|unit| unit.toggle_view()));

    view! { <CollectionView page=page on_toggle=on_toggle /> }
}

fn collection_page<R: Resource + Present>() -> impl IntoView {
    unit_page(R::KIND, api::fetch_collection::<R>)
}

#[component]
pub fn Activities() -> impl IntoView {
    collection_page::<Activity>()
}

#[component]
pub fn Teams() -> impl IntoView {
    collection_page::<Team>()
}

#[component]
pub fn Users() -> impl IntoView {
    collection_page::<User>()
}

#[component]
pub fn Workouts() -> impl IntoView {
    collection_page::<Workout>()
}

#[component]
pub fn Leaderboard() -> impl IntoView {
    unit_page(ResourceKind::Leaderboard, api::fetch_standings)
}

/// Landing page linking to every view
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="container mt-5">
            <div class="text-center mb-5">
                <h1 class="display-5 fw-bold">"OctoFit Tracker"</h1>
                <p class="lead text-muted">"Log activities, join teams and climb the leaderboard."</p>
            </div>
            <div class="row g-4">
                {ResourceKind::ALL
                    .iter()
                    .map(|kind| view! {
                        <div class="col-md-6 col-lg-4">
                            <div class="card h-100 shadow-sm">
                                <div class="card-body">
                                    <h5 class="card-title">{kind.title()}</h5>
                                    <p class="card-text text-muted">{kind.subtitle()}</p>
                                    <A href=route(*kind) class="btn btn-primary">"Open"</A>
                                </div>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
