use dioxus::prelude::*;
use dioxus_router::Link;
use services::explanation::prompts::module_context;
use services::{ExplanationEntry, ExplanationKind};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::state::{ViewState, use_progress};
use crate::vm::{
    ExplanationPanelVm, ModuleDetailVm, TopicRowVm, map_explanation_panel, map_module_detail,
};

#[component]
pub fn ModuleDetail(module_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let service = ctx.progress();
    let feed = ctx.explanations();
    let progress = use_progress();

    let mut selected_topic = use_signal(|| None::<String>);
    let mut pending = use_signal(|| None::<(ExplanationKind, String)>);
    let mut latest = use_signal(|| None::<ExplanationEntry>);

    let context = catalog
        .get(&module_id)
        .map(module_context)
        .unwrap_or_default();
    let request = use_callback(move |(kind, topic): (ExplanationKind, String)| {
        // Older requests still in flight resolve to `None` once this one is issued.
        let answer = feed.request(kind, &topic, &context);
        pending.set(Some((kind, topic)));
        spawn(async move {
            if let Some(entry) = answer.await {
                latest.set(Some(entry));
                pending.set(None);
            }
        });
    });
    let toggle = use_callback(move |topic: String| progress.toggle_topic(service.clone(), topic));

    let ViewState::Ready(record) = progress.view() else {
        return rsx! {
            p { class: "loading", "Loading your pathway..." }
        };
    };
    let Some(module) = catalog.get(&module_id) else {
        return rsx! {
            ModuleNotFound { module_id }
        };
    };
    let vm = map_module_detail(module, &record, selected_topic.read().as_deref());
    let topics = vm.topics.clone();

    let panel = map_explanation_panel(
        pending
            .read()
            .as_ref()
            .map(|(kind, topic)| (*kind, topic.as_str())),
        latest.read().as_ref(),
    );
    let saving = progress.is_saving();

    rsx! {
        article { class: "module-detail",
            ModuleHeader { vm: vm.clone() }

            div { class: "module-body",
                section { class: "topic-section",
                    h2 { "Clinical Skills to Master" }
                    ul { class: "topic-list",
                        for topic in topics {
                            TopicRow {
                                key: "{topic.name}",
                                topic,
                                saving,
                                on_toggle: toggle,
                                on_explain: move |name: String| {
                                    selected_topic.set(Some(name.clone()));
                                    request.call((ExplanationKind::Explain, name));
                                },
                            }
                        }
                    }

                    ExplanationPanel {
                        vm: panel,
                        on_chunk: move |topic: String| request.call((ExplanationKind::Chunk, topic)),
                    }
                }

                aside { class: "module-aside",
                    div { class: "lab-card",
                        h4 { "Hands-On Lab" }
                        p { class: "lab-label", "Today's Physical Challenge:" }
                        p { class: "lab-goal", "{vm.practical_goal}" }
                    }
                    div { class: "tip-card",
                        h4 { "ADHD Focus Tip" }
                        p {
                            "If your brain is buzzing, stand up. OT is a physical job. Try reading while walking or standing at a counter."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ModuleHeader(vm: ModuleDetailVm) -> Element {
    rsx! {
        header { class: "module-header",
            div { class: "module-badges",
                span { class: "badge track", "{vm.track_label}" }
                span { class: "badge category", "{vm.category}" }
                if vm.is_complete {
                    span { class: "badge complete", "Complete" }
                }
            }
            h1 { class: "module-heading", "{vm.title}" }
            p { class: "module-description", "{vm.description}" }

            div { class: "module-stats",
                div { class: "competency",
                    span { class: "stat-label", "Clinical Competency" }
                    div { class: "progress-row",
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {vm.percent}%" }
                        }
                        span { class: "progress-percent", "{vm.percent}%" }
                    }
                    span { class: "progress-count", "{vm.progress_label}" }
                }
                div { class: "practical-goal",
                    span { class: "stat-label", "Practical Goal" }
                    p { "{vm.practical_goal}" }
                }
            }
        }
    }
}

#[component]
fn TopicRow(
    topic: TopicRowVm,
    saving: bool,
    on_toggle: Callback<String>,
    on_explain: EventHandler<String>,
) -> Element {
    let class = match (topic.is_selected, topic.is_done) {
        (true, _) => "topic-row selected",
        (false, true) => "topic-row done",
        (false, false) => "topic-row",
    };
    let explain_name = topic.name.clone();
    let toggle_name = topic.name.clone();

    rsx! {
        li { class: "{class}", onclick: move |_| on_explain.call(explain_name.clone()),
            button {
                class: if topic.is_done { "topic-check done" } else { "topic-check" },
                title: if topic.is_done { "Mark as not done" } else { "Mark as done" },
                disabled: saving,
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_toggle.call(toggle_name.clone());
                },
                if topic.is_done { "✓" }
            }
            div { class: "topic-text",
                h3 { "{topic.name}" }
                p { class: "topic-kind", "Clinical Technique" }
            }
        }
    }
}

#[component]
fn ExplanationPanel(vm: ExplanationPanelVm, on_chunk: EventHandler<String>) -> Element {
    match vm {
        ExplanationPanelVm::Hidden => rsx! {},
        ExplanationPanelVm::Loading { heading, topic } => rsx! {
            section { class: "ai-panel loading",
                header { class: "ai-panel-head",
                    h4 { "{heading}" }
                    p { class: "ai-topic", "Skill: {topic}" }
                    div { class: "spinner" }
                }
                div { class: "ai-skeleton",
                    div { class: "skeleton-line" }
                    div { class: "skeleton-line" }
                }
            }
        },
        ExplanationPanelVm::Ready {
            heading,
            topic,
            body_html,
            is_fallback,
            can_chunk,
        } => {
            let chunk_topic = topic.clone();
            rsx! {
                section { class: if is_fallback { "ai-panel fallback" } else { "ai-panel" },
                    header { class: "ai-panel-head",
                        h4 { "{heading}" }
                        p { class: "ai-topic", "Skill: {topic}" }
                    }
                    div { class: "ai-body", dangerous_inner_html: "{body_html}" }
                    if can_chunk {
                        button {
                            class: "btn ai-chunk",
                            onclick: move |_| on_chunk.call(chunk_topic.clone()),
                            "Break it into 5-minute tasks"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ModuleNotFound(module_id: String) -> Element {
    rsx! {
        div { class: "not-found",
            h2 { "Module not found" }
            p { "There is no module called \"{module_id}\" in this curriculum." }
            Link { to: Route::Dashboard {}, "Back to your pathway" }
        }
    }
}
