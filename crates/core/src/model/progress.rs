use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::model::catalog::Catalog;
use crate::model::ids::ModuleId;

/// Per-device record of completed topics and related metadata.
///
/// `completed_topics` behaves as a set kept in insertion order: toggling a
/// present topic removes it, toggling an absent one appends it. Topics that
/// no longer belong to any module are kept as they are.
#[derive(Debug, Clone)]
pub struct ProgressRecord {
    completed_topics: Vec<String>,
    active_module_id: Option<ModuleId>,
    daily_streak: u32,
    last_active: DateTime<Utc>,
}

impl ProgressRecord {
    /// First-run record: nothing completed, first catalog module active.
    #[must_use]
    pub fn fresh(catalog: &Catalog, now: DateTime<Utc>) -> Self {
        Self {
            completed_topics: Vec::new(),
            active_module_id: Some(catalog.first().id().clone()),
            daily_streak: 0,
            last_active: now,
        }
    }

    /// Rehydrate a record exactly as it was stored.
    #[must_use]
    pub fn from_persisted(
        completed_topics: Vec<String>,
        active_module_id: Option<ModuleId>,
        daily_streak: u32,
        last_active: DateTime<Utc>,
    ) -> Self {
        Self {
            completed_topics,
            active_module_id,
            daily_streak,
            last_active,
        }
    }

    #[must_use]
    pub fn completed_topics(&self) -> &[String] {
        &self.completed_topics
    }

    #[must_use]
    pub fn is_completed(&self, topic: &str) -> bool {
        self.completed_topics.iter().any(|t| t == topic)
    }

    #[must_use]
    pub fn active_module_id(&self) -> Option<&ModuleId> {
        self.active_module_id.as_ref()
    }

    #[must_use]
    pub fn daily_streak(&self) -> u32 {
        self.daily_streak
    }

    #[must_use]
    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    /// Flip the completion of `topic`, leaving every other field untouched.
    ///
    /// Toggling twice with the same topic yields an equal record.
    #[must_use]
    pub fn toggle_topic(&self, topic: &str) -> Self {
        let completed_topics = if self.is_completed(topic) {
            self.completed_topics
                .iter()
                .filter(|t| *t != topic)
                .cloned()
                .collect()
        } else {
            let mut topics = self.completed_topics.clone();
            topics.push(topic.to_owned());
            topics
        };

        Self {
            completed_topics,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_active_module(&self, id: ModuleId) -> Self {
        Self {
            active_module_id: Some(id),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn touched(&self, now: DateTime<Utc>) -> Self {
        Self {
            last_active: now,
            ..self.clone()
        }
    }

    fn topic_set(&self) -> BTreeSet<&str> {
        self.completed_topics.iter().map(String::as_str).collect()
    }
}

// Completion is compared by membership; display order is not part of identity.
impl PartialEq for ProgressRecord {
    fn eq(&self, other: &Self) -> bool {
        self.active_module_id == other.active_module_id
            && self.daily_streak == other.daily_streak
            && self.last_active == other.last_active
            && self.topic_set() == other.topic_set()
    }
}

impl Eq for ProgressRecord {}
