//! Collection View
//!
//! Draws a [`Page`]: header with the record count and layout toggle, then
//! exactly one of the loading, error, empty, table or card states.

use leptos::*;

use octofit::display::{Card, Cell, Header, Page, Screen, Table};
use octofit::unit::ViewMode;

use crate::components::Loading;

#[component]
pub fn CollectionView(
    #[prop(into)] page: Signal<Page>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    move || {
        let page = page.get();
        let header = page
            .header
            .map(|header| page_header(header, page.view, on_toggle));

        view! {
            <div class="container mt-4">
                {header}
                {screen(page.screen)}
            </div>
        }
    }
}

fn page_header(header: Header, view: Option<ViewMode>, on_toggle: Callback<()>) -> View {
    let toggle = view.map(|current| {
        let label = match current {
            ViewMode::Table => "Card View",
            ViewMode::Cards => "Table View",
        };
        view! {
            <button
                type="button"
                class="btn btn-outline-primary"
                on:click=move |_| on_toggle.call(())
            >
                {label}
            </button>
        }
    });

    view! {
        <div class="d-flex justify-content-between align-items-center mb-4">
            <div>
                <h2 class="mb-1">{header.title}</h2>
                <p class="text-muted mb-0">{header.subtitle}</p>
            </div>
            <div class="d-flex align-items-center gap-3">
                <div class="text-end">
                    <div class="fs-4 fw-bold">{header.count}</div>
                    <small class="text-muted">{header.count_label}</small>
                </div>
                {toggle}
            </div>
        </div>
    }
    .into_view()
}

fn screen(screen: Screen) -> View {
    match screen {
        Screen::Loading { message } => view! { <Loading message=message /> }.into_view(),
        Screen::Error { message } => view! {
            <div class="alert alert-danger" role="alert">
                <h4 class="alert-heading">"Error!"</h4>
                <p class="mb-0">{message}</p>
            </div>
        }
        .into_view(),
        Screen::Empty { heading, hint } => view! {
            <div class="text-center py-5">
                <h4 class="text-muted">{heading}</h4>
                <p class="text-muted">{hint}</p>
            </div>
        }
        .into_view(),
        Screen::Table { table } => table_view(table),
        Screen::Cards { cards } => view! {
            <div class="row g-4">
                {cards.into_iter().map(card_view).collect_view()}
            </div>
        }
        .into_view(),
    }
}

fn table_view(table: Table) -> View {
    view! {
        <div class="table-responsive">
            <table class="table table-striped table-hover align-middle">
                <thead class="table-dark">
                    <tr>
                        {table.headers.into_iter().map(|h| view! { <th scope="col">{h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {table
                        .rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                {row.into_iter().map(|cell| view! { <td>{cell_view(cell)}</td> }).collect_view()}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}

fn card_view(card: Card) -> View {
    let actions = (!card.actions.is_empty()).then(|| {
        view! {
            <div class="card-footer bg-transparent">
                {buttons(card.actions, "btn btn-primary btn-sm me-2")}
            </div>
        }
    });

    view! {
        <div class="col-md-6 col-lg-4">
            <div class="card h-100 shadow-sm">
                <div class="card-body">
                    <div class="d-flex justify-content-between align-items-start mb-3">
                        <h5 class="card-title mb-0">{cell_view(card.title)}</h5>
                        {card.badge.map(cell_view)}
                    </div>
                    {card
                        .fields
                        .into_iter()
                        .map(|field| view! {
                            <p class="card-text mb-2">
                                <strong>{field.label}": "</strong>
                                {cell_view(field.value)}
                            </p>
                        })
                        .collect_view()}
                </div>
                {actions}
            </div>
        </div>
    }
    .into_view()
}

/// Buttons are drawn for every action label but have no handler
fn buttons(labels: Vec<&'static str>, class: &'static str) -> View {
    labels
        .into_iter()
        .map(|label| view! { <button type="button" class=class>{label}</button> })
        .collect_view()
}

fn cell_view(cell: Cell) -> View {
    match cell {
        Cell::Text { text } => text.into_view(),
        Cell::Strong { text } => view! { <strong>{text}</strong> }.into_view(),
        Cell::Muted { text } => view! { <small class="text-muted">{text}</small> }.into_view(),
        Cell::Badge { text, style } => {
            let class = format!("badge {}", style.css_class());
            view! { <span class=class>{text}</span> }.into_view()
        }
        Cell::Actions { labels } => view! {
            <div class="btn-group btn-group-sm" role="group">
                {buttons(labels, "btn btn-outline-primary")}
            </div>
        }
        .into_view(),
    }
}
