use services::{ExplanationEntry, ExplanationKind};

use crate::vm::markdown_vm::markdown_to_html;

/// What the mentor panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExplanationPanelVm {
    Hidden,
    Loading {
        heading: &'static str,
        topic: String,
    },
    Ready {
        heading: &'static str,
        topic: String,
        body_html: String,
        is_fallback: bool,
        /// Full explanations can be followed up with a task breakdown.
        can_chunk: bool,
    },
}

#[must_use]
pub fn panel_heading(kind: ExplanationKind) -> &'static str {
    match kind {
        ExplanationKind::Explain => "Mentor Clinical Notes",
        ExplanationKind::Chunk => "5-Minute Task Plan",
    }
}

/// A pending request takes precedence over the last answer.
#[must_use]
pub fn map_explanation_panel(
    pending: Option<(ExplanationKind, &str)>,
    latest: Option<&ExplanationEntry>,
) -> ExplanationPanelVm {
    if let Some((kind, topic)) = pending {
        return ExplanationPanelVm::Loading {
            heading: panel_heading(kind),
            topic: topic.to_owned(),
        };
    }

    match latest {
        None => ExplanationPanelVm::Hidden,
        Some(entry) => {
            let text = entry.explanation.text();
            let body_html = if entry.explanation.is_fallback() {
                format!("<p>{}</p>", ammonia::clean_text(text))
            } else {
                markdown_to_html(text)
            };
            ExplanationPanelVm::Ready {
                heading: panel_heading(entry.kind),
                topic: entry.topic.clone(),
                body_html,
                is_fallback: entry.explanation.is_fallback(),
                can_chunk: entry.kind == ExplanationKind::Explain,
            }
        }
    }
}
