//! Fixed copy sent to (or substituted for) the text-generation model.

use pathway_core::model::Module;

/// Persona and response format for every request.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are a "Senior OT Clinical Mentor" for a student with severe ADHD, EFD, OCD, Anxiety, and Depression.
This is a 3-YEAR INTENSIVE track covering 4 years of content. 

Your goal is to explain concepts through **Practical Clinical Application** at high speed but low stress.

Rules:
1. STOP using textbook definitions first. Start with: "Imagine you're in a clinic..."
2. Focus on "Tactile Cues": What does the therapist feel, see, or touch?
3. Use "Clinical Hacks": Shortcuts that experienced OTs use to manage time/load.
4. Validation: Remind the user that clinical "intuition" is often better than rote memorization.
5. Intensive Framing: Acknowledge that the content is dense, but they are "Doing the work of two years in one."
6. Micro-Explanations: Keep text blocks under 3 sentences. Use lists.

Response Format:
- **THE CLINICAL "WHY"**: 1 sentence on why this matters for a patient.
- **THE HANDS-ON TECHNIQUE**: Step-by-step physical action.
- **THE ADHD SHORTCUT**: How to remember this with zero effort.
- **A REAL-WORLD SCENARIO**: A 2-sentence story about a patient.
"#;

/// Shown instead of an explanation when the call fails.
pub const EXPLAIN_FALLBACK: &str = "I'm having a little trouble connecting right now. Take a deep breath—we can try again in a moment.";

/// Shown instead of a task breakdown when the call fails.
pub const CHUNK_FALLBACK: &str =
    "Unable to chunk this right now. Try focusing on just the first paragraph for 5 minutes!";

/// Sampling temperature for full explanations. Task chunking uses the model default.
pub const EXPLAIN_TEMPERATURE: f32 = 0.7;

#[must_use]
pub fn explain_prompt(topic: &str, context: &str) -> String {
    format!("Explain the OT topic: \"{topic}\". Context: {context}")
}

#[must_use]
pub fn chunk_prompt(topic: &str) -> String {
    format!(
        "Break down the study of \"{topic}\" into 5 tiny, manageable 5-minute tasks for someone with severe ADHD."
    )
}

/// Free-text context the module view attaches to every explanation.
#[must_use]
pub fn module_context(module: &Module) -> String {
    format!(
        "Module: {}. Focus on practical, hands-on clinic advice for a student with ADHD.",
        module.title()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_core::model::Catalog;

    #[test]
    fn explain_prompt_quotes_topic() {
        assert_eq!(
            explain_prompt("Goniometry Lab", "Module: Anatomy."),
            "Explain the OT topic: \"Goniometry Lab\". Context: Module: Anatomy."
        );
    }

    #[test]
    fn chunk_prompt_asks_for_five_tasks() {
        let prompt = chunk_prompt("Mirror Therapy & C.I.M.T.");
        assert!(prompt.contains("\"Mirror Therapy & C.I.M.T.\""));
        assert!(prompt.contains("5 tiny, manageable 5-minute tasks"));
    }

    #[test]
    fn module_context_names_module() {
        let catalog = Catalog::builtin();
        let context = module_context(catalog.first());
        assert!(context.starts_with("Module: The OT Toolbox: Foundations & Assessment."));
    }
}
