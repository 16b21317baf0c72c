//! Sentiment → catalog query policy. Pure lookup, no I/O.
//!
//! Only two branches exist: `Undefined` is folded into the melancholic one.

use super::entities::{RecommendationQuery, SentimentLabel};
use std::collections::BTreeMap;

/// Every query asks for this many tracks, regardless of label.
pub const RESULT_LIMIT: u32 = 5;

const UPBEAT_SEEDS: &[&str] = &["happy", "pop", "dance", "k-pop"];
const UPBEAT_BOUNDS: &[(&str, f64)] = &[
    ("min_valence", 0.7),
    ("min_energy", 0.7),
    ("max_mode", 1.0),
];

const MELLOW_SEEDS: &[&str] = &["sad", "acoustic", "chill", "rainy-day"];
const MELLOW_BOUNDS: &[(&str, f64)] = &[
    ("max_valence", 0.3),
    ("max_energy", 0.4),
    ("min_mode", 0.0),
];

/// Build the recommendation query for a label.
pub fn build_query(label: SentimentLabel) -> RecommendationQuery {
    let (seeds, bounds) = match label {
        SentimentLabel::Positive => (UPBEAT_SEEDS, UPBEAT_BOUNDS),
        SentimentLabel::Negative | SentimentLabel::Undefined => (MELLOW_SEEDS, MELLOW_BOUNDS),
    };

    RecommendationQuery {
        seed_categories: seeds.iter().map(|s| s.to_string()).collect(),
        result_limit: RESULT_LIMIT,
        audio_feature_bounds: bounds
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect::<BTreeMap<_, _>>(),
    }
}
