#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod explanation;
pub mod progress_service;

pub use pathway_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, GenerationError, ProgressServiceError};
pub use explanation::{
    Explanation, ExplanationEntry, ExplanationFeed, ExplanationKind, ExplanationModels,
    ExplanationService, GeminiClient, GeminiConfig, GenerationRequest, RequestSequencer,
    RequestTicket, TextGenerator,
};
pub use progress_service::ProgressService;
