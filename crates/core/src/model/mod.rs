mod catalog;
mod completion;
mod curriculum;
mod ids;
mod module;
mod progress;

pub use catalog::{Catalog, CatalogError};
pub use completion::{
    ModuleProgress, catalog_progress, completed_module_ids, completion_percent,
    is_module_complete, module_progress,
};
pub use ids::ModuleId;
pub use module::{Difficulty, FIRST_YEAR, LAST_YEAR, Module, ModuleDraft, ModuleError};
pub use progress::ProgressRecord;
