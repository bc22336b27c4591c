use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::ModuleId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module id cannot be empty")]
    EmptyId,

    #[error("module title cannot be empty")]
    EmptyTitle,

    #[error("year must be 1, 2 or 3 (got {0})")]
    InvalidYear(u8),

    #[error("estimated hours must be > 0 (got {0})")]
    InvalidEstimatedHours(f32),

    #[error("topic listed twice in module: {0}")]
    DuplicateTopic(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Low => "Low",
            Difficulty::Medium => "Medium",
            Difficulty::High => "High",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// Lowest and highest curriculum year.
pub const FIRST_YEAR: u8 = 1;
pub const LAST_YEAR: u8 = 3;

/// A unit of curriculum content with an ordered list of topics to complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    id: ModuleId,
    title: String,
    description: String,
    category: String,
    practical_goal: String,
    topics: Vec<String>,
    year: u8,
    difficulty: Difficulty,
    estimated_hours: f32,
}

/// Unvalidated module fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDraft {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub practical_goal: String,
    pub topics: Vec<String>,
    pub year: u8,
    pub difficulty: Difficulty,
    pub estimated_hours: f32,
}

impl ModuleDraft {
    /// Validate the draft into an immutable `Module`.
    ///
    /// An empty topic list is allowed; such a module counts as complete.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError` for an empty id/title, a year outside 1..=3,
    /// non-positive hours, or a topic repeated inside the module.
    pub fn validate(self) -> Result<Module, ModuleError> {
        let id = self.id.trim().to_owned();
        if id.is_empty() {
            return Err(ModuleError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ModuleError::EmptyTitle);
        }
        if !(FIRST_YEAR..=LAST_YEAR).contains(&self.year) {
            return Err(ModuleError::InvalidYear(self.year));
        }
        if !(self.estimated_hours > 0.0) {
            return Err(ModuleError::InvalidEstimatedHours(self.estimated_hours));
        }

        let mut seen = HashSet::with_capacity(self.topics.len());
        for topic in &self.topics {
            if !seen.insert(topic.as_str()) {
                return Err(ModuleError::DuplicateTopic(topic.clone()));
            }
        }

        Ok(Module {
            id: ModuleId::new(id),
            title: self.title,
            description: self.description,
            category: self.category,
            practical_goal: self.practical_goal,
            topics: self.topics,
            year: self.year,
            difficulty: self.difficulty,
            estimated_hours: self.estimated_hours,
        })
    }
}

impl Module {
    /// Build from data that is known to satisfy the draft invariants.
    pub(crate) fn from_trusted(draft: ModuleDraft) -> Self {
        Self {
            id: ModuleId::new(draft.id),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            practical_goal: draft.practical_goal,
            topics: draft.topics,
            year: draft.year,
            difficulty: draft.difficulty,
            estimated_hours: draft.estimated_hours,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn practical_goal(&self) -> &str {
        &self.practical_goal
    }

    /// Topics in display order.
    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    #[must_use]
    pub fn year(&self) -> u8 {
        self.year
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn estimated_hours(&self) -> f32 {
        self.estimated_hours
    }

    /// Back to an editable draft, e.g. to re-run validation.
    #[must_use]
    pub fn to_draft(&self) -> ModuleDraft {
        ModuleDraft {
            id: self.id.as_str().to_owned(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            practical_goal: self.practical_goal.clone(),
            topics: self.topics.clone(),
            year: self.year,
            difficulty: self.difficulty,
            estimated_hours: self.estimated_hours,
        }
    }
}
