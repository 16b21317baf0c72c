//! Application use cases. Orchestrate domain logic via ports.

pub mod credential_service;
pub mod recommendation_service;

pub use credential_service::CredentialService;
pub use recommendation_service::{
    PipelineRun, RecommendationService, SessionSnapshot, SubmitOutcome,
};
