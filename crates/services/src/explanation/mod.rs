//! Plain-language topic explanations from a remote text-generation model.
//!
//! Every call is a single best-effort request: no retry, no cache. Any
//! failure is logged and replaced by fixed fallback copy, so callers never
//! see an error.

mod client;
mod feed;
pub mod prompts;

use std::env;
use std::sync::Arc;

use tracing::warn;

pub use client::{GeminiClient, GeminiConfig, GenerationRequest, TextGenerator};
pub use feed::{ExplanationEntry, ExplanationFeed, RequestSequencer, RequestTicket};

use prompts::{
    CHUNK_FALLBACK, EXPLAIN_FALLBACK, EXPLAIN_TEMPERATURE, SYSTEM_INSTRUCTION, chunk_prompt,
    explain_prompt,
};

const DEFAULT_EXPLAIN_MODEL: &str = "gemini-3-pro-preview";
const DEFAULT_CHUNK_MODEL: &str = "gemini-3-flash-preview";

/// Outcome of an explanation call: real content or the designated fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Explanation {
    Generated(String),
    Fallback(&'static str),
}

impl Explanation {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Explanation::Generated(text) => text.as_str(),
            Explanation::Fallback(text) => text,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Explanation::Fallback(_))
    }
}

/// Which request variant produced an explanation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplanationKind {
    /// Full mentor-style explanation.
    Explain,
    /// Five 5-minute sub-tasks.
    Chunk,
}

/// Model identifiers for the two request variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplanationModels {
    pub explain: String,
    pub chunk: String,
}

impl Default for ExplanationModels {
    fn default() -> Self {
        Self {
            explain: DEFAULT_EXPLAIN_MODEL.into(),
            chunk: DEFAULT_CHUNK_MODEL.into(),
        }
    }
}

impl ExplanationModels {
    /// Defaults overridden by `PATHWAY_AI_MODEL` / `PATHWAY_AI_FAST_MODEL`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            explain: non_empty_env("PATHWAY_AI_MODEL").unwrap_or(defaults.explain),
            chunk: non_empty_env("PATHWAY_AI_FAST_MODEL").unwrap_or(defaults.chunk),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[derive(Clone)]
pub struct ExplanationService {
    generator: Arc<dyn TextGenerator>,
    models: ExplanationModels,
}

impl ExplanationService {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, models: ExplanationModels) -> Self {
        Self { generator, models }
    }

    /// Gemini client and models configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            Arc::new(GeminiClient::from_env()),
            ExplanationModels::from_env(),
        )
    }

    #[must_use]
    pub fn models(&self) -> &ExplanationModels {
        &self.models
    }

    /// Explain `topic` for the learner, using `context` to ground the answer.
    pub async fn explain(&self, topic: &str, context: &str) -> Explanation {
        let request = GenerationRequest {
            model: self.models.explain.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_owned(),
            prompt: explain_prompt(topic, context),
            temperature: Some(EXPLAIN_TEMPERATURE),
        };
        self.run(&request, topic, EXPLAIN_FALLBACK).await
    }

    /// Break `topic` into five 5-minute tasks, using the faster model.
    pub async fn chunk_task(&self, topic: &str) -> Explanation {
        let request = GenerationRequest {
            model: self.models.chunk.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_owned(),
            prompt: chunk_prompt(topic),
            temperature: None,
        };
        self.run(&request, topic, CHUNK_FALLBACK).await
    }

    /// Dispatch on `kind`.
    pub async fn request(&self, kind: ExplanationKind, topic: &str, context: &str) -> Explanation {
        match kind {
            ExplanationKind::Explain => self.explain(topic, context).await,
            ExplanationKind::Chunk => self.chunk_task(topic).await,
        }
    }

    async fn run(
        &self,
        request: &GenerationRequest,
        topic: &str,
        fallback: &'static str,
    ) -> Explanation {
        match self.generator.generate(request).await {
            Ok(text) => Explanation::Generated(text),
            Err(err) => {
                warn!(error = %err, model = %request.model, topic, "text generation failed, using fallback");
                Explanation::Fallback(fallback)
            }
        }
    }
}
