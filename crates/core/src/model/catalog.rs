use std::collections::HashSet;

use thiserror::Error;

use crate::model::curriculum;
use crate::model::ids::ModuleId;
use crate::model::module::Module;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one module")]
    Empty,

    #[error("duplicate module id: {0}")]
    DuplicateId(ModuleId),
}

/// The fixed, ordered curriculum.
///
/// Order is stable: the first module is the default active module, and
/// every derived list (completed ids, year filters) follows catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    /// Build a catalog from validated modules.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for no modules and
    /// `CatalogError::DuplicateId` if two modules share an id.
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        if modules.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            if !seen.insert(module.id()) {
                return Err(CatalogError::DuplicateId(module.id().clone()));
            }
        }
        Ok(Self { modules })
    }

    /// The built-in three-year occupational therapy curriculum.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            modules: curriculum::ot_pathway_modules(),
        }
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The default active module.
    #[must_use]
    pub fn first(&self) -> &Module {
        // Non-empty by construction.
        &self.modules[0]
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id().as_str() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Look up the active module, falling back to the first one when the id
    /// is missing or no longer in the catalog.
    #[must_use]
    pub fn resolve_active(&self, id: Option<&ModuleId>) -> &Module {
        id.and_then(|id| self.get(id.as_str()))
            .unwrap_or_else(|| self.first())
    }

    pub fn modules_for_year(&self, year: u8) -> impl Iterator<Item = &Module> + '_ {
        self.modules.iter().filter(move |m| m.year() == year)
    }

    /// Distinct years in catalog order.
    #[must_use]
    pub fn years(&self) -> Vec<u8> {
        let mut years = Vec::new();
        for module in &self.modules {
            if !years.contains(&module.year()) {
                years.push(module.year());
            }
        }
        years
    }
}
