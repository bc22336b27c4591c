use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::state::{ViewState, use_progress};
use crate::vm::{ModuleCardVm, map_module_cards, map_student_summary, map_year_tabs};

#[component]
pub fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = use_progress();
    // `None` follows the active module's year until a tab is picked.
    let mut chosen_year = use_signal(|| None::<u8>);

    let ViewState::Ready(record) = progress.view() else {
        return rsx! {
            nav { class: "sidebar",
                SidebarBrand {}
                p { class: "sidebar-loading", "Loading modules..." }
            }
        };
    };

    let active_year = catalog.resolve_active(record.active_module_id()).year();
    let year = chosen_year().unwrap_or(active_year);
    let tabs = map_year_tabs(&catalog, year);
    let cards = map_module_cards(&catalog, &record, year);
    let summary = map_student_summary(&catalog, &record);

    rsx! {
        nav { class: "sidebar",
            SidebarBrand {}

            div { class: "year-tabs",
                for tab in tabs {
                    button {
                        key: "{tab.year}",
                        class: if tab.is_selected { "year-tab selected" } else { "year-tab" },
                        onclick: move |_| chosen_year.set(Some(tab.year)),
                        "{tab.label}"
                    }
                }
            }

            div { class: "module-list",
                h2 { class: "module-list-title", "Clinical Power Modules" }
                ul {
                    for card in cards {
                        ModuleCard { key: "{card.id}", card }
                    }
                }
            }

            footer { class: "sidebar-footer",
                p { class: "streak", "{summary.streak_label}" }
                p { class: "modules-done", "{summary.modules_label}" }
                p { class: "last-active", "{summary.last_active_label}" }
            }
        }
    }
}

#[component]
fn SidebarBrand() -> Element {
    rsx! {
        div { class: "sidebar-brand",
            h1 { "OT Pathway" }
            p { class: "sidebar-tagline", "3-Year Intensive" }
        }
    }
}

#[component]
fn ModuleCard(card: ModuleCardVm) -> Element {
    let class = if card.is_active {
        "module-card active"
    } else {
        "module-card"
    };

    rsx! {
        li {
            Link { class: "{class}", to: Route::Module { module_id: card.id.clone() },
                div { class: "module-card-head",
                    div {
                        p { class: "module-category", "{card.category}" }
                        h3 { class: "module-title", "{card.title}" }
                    }
                    if card.is_complete {
                        span { class: "module-complete", title: "All skills complete", "✓" }
                    }
                }
                div { class: "module-meta",
                    span { class: "module-hours", "{card.hours_label}" }
                    span { class: "difficulty {card.difficulty_class}", "{card.difficulty_label}" }
                }
            }
        }
    }
}
