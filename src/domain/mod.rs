//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the sentiment → query policy and session state live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod outcomes;
pub mod query_builder;
pub mod session;

pub use entities::{AccessToken, RecommendationQuery, SentimentLabel, TrackRecommendation};
pub use errors::DomainError;
pub use outcomes::{Classification, Recommendations};
pub use query_builder::{RESULT_LIMIT, build_query};
pub use session::{Phase, SessionState, SubmitRejection};
