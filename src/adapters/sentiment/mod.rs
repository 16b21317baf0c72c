//! Sentiment adapter module. Implements SentimentPort for hosted inference.

pub mod huggingface_adapter;

pub use huggingface_adapter::HuggingFaceAdapter;
