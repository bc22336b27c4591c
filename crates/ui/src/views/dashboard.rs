use dioxus::prelude::*;
use pathway_core::model::ModuleId;

use crate::context::AppContext;
use crate::views::module_detail::{ModuleDetail, ModuleNotFound};
use crate::views::state::{ViewState, use_progress};
use crate::vm::map_student_summary;

/// The remembered active module, or the first one when it is unknown.
#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = use_progress();

    match progress.view() {
        ViewState::Loading => rsx! {
            p { class: "loading", "Loading your pathway..." }
        },
        ViewState::Ready(record) => {
            let module_id = catalog
                .resolve_active(record.active_module_id())
                .id()
                .to_string();
            rsx! {
                ModuleDetail { key: "{module_id}", module_id }
            }
        }
    }
}

/// A module addressed by id. Visiting it makes it the active module.
#[component]
pub fn ModuleView(module_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let service = ctx.progress();
    let progress = use_progress();

    {
        let catalog = catalog.clone();
        use_effect(use_reactive((&module_id,), move |(module_id,)| {
            let ViewState::Ready(record) = progress.view() else {
                return;
            };
            if !catalog.contains(&module_id) {
                return;
            }
            let id = ModuleId::new(module_id);
            if record.active_module_id() != Some(&id) {
                progress.select_module(service.clone(), id);
            }
        }));
    }

    if !catalog.contains(&module_id) {
        return rsx! {
            ModuleNotFound { module_id }
        };
    }

    rsx! {
        ModuleDetail { key: "{module_id}", module_id }
    }
}

#[component]
pub fn PageHeader() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = use_progress();
    let overall = match progress.view() {
        ViewState::Ready(record) => Some(map_student_summary(&catalog, &record)),
        ViewState::Loading => None,
    };

    rsx! {
        header { class: "page-header",
            div {
                p { class: "page-kicker", "3-Year Intensive Bachelor of Occupational Therapy" }
                h2 { class: "page-title", "Clinical Pathway" }
            }
            if let Some(summary) = overall {
                div { class: "overall-progress",
                    span { class: "overall-percent", "{summary.overall_percent}%" }
                    span { class: "overall-label", "of all clinical skills" }
                }
            }
        }
    }
}

#[component]
pub fn FastTrackTip() -> Element {
    rsx! {
        div { class: "tip-card fast-track",
            h4 { "Fast-Track Tip" }
            p {
                "Since this is a 3-year intensive, your brain needs more \"sensory snacks\". Try using a fidget spinner while reviewing these clinical cases."
            }
            span { class: "tip-tag", "Intensive Note" }
        }
    }
}
