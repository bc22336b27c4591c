use thiserror::Error;

use crate::model::{CatalogError, ModuleError};
use crate::timer::TimerError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error(transparent)]
    Timer(#[from] TimerError),
}
