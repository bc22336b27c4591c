//! Completion derived from (catalog, progress). Nothing here is cached: every
//! call recomputes from its inputs.

use crate::model::catalog::Catalog;
use crate::model::ids::ModuleId;
use crate::model::module::Module;
use crate::model::progress::ProgressRecord;

/// Completed vs. total topics for a module or the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModuleProgress {
    pub done: usize,
    pub total: usize,
}

impl ModuleProgress {
    /// Percentage rounded half-up to the nearest integer.
    ///
    /// A module without topics is 100%, matching `is_complete`.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let done = self.done.min(self.total);
        let rounded = (200 * done + self.total) / (2 * self.total);
        u8::try_from(rounded).unwrap_or(100)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.done >= self.total
    }
}

#[must_use]
pub fn module_progress(module: &Module, progress: &ProgressRecord) -> ModuleProgress {
    let done = module
        .topics()
        .iter()
        .filter(|topic| progress.is_completed(topic))
        .count();
    ModuleProgress {
        done,
        total: module.topics().len(),
    }
}

/// True iff every topic of the module is completed (vacuously true for none).
#[must_use]
pub fn is_module_complete(module: &Module, progress: &ProgressRecord) -> bool {
    module
        .topics()
        .iter()
        .all(|topic| progress.is_completed(topic))
}

#[must_use]
pub fn completion_percent(module: &Module, progress: &ProgressRecord) -> u8 {
    module_progress(module, progress).percent()
}

/// Ids of fully completed modules, in catalog order.
#[must_use]
pub fn completed_module_ids(catalog: &Catalog, progress: &ProgressRecord) -> Vec<ModuleId> {
    catalog
        .modules()
        .iter()
        .filter(|module| is_module_complete(module, progress))
        .map(|module| module.id().clone())
        .collect()
}

/// Topic totals summed over every module in the catalog.
#[must_use]
pub fn catalog_progress(catalog: &Catalog, progress: &ProgressRecord) -> ModuleProgress {
    catalog
        .modules()
        .iter()
        .map(|module| module_progress(module, progress))
        .fold(ModuleProgress::default(), |acc, p| ModuleProgress {
            done: acc.done + p.done,
            total: acc.total + p.total,
        })
}
