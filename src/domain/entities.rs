//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/catalog wire types here; adapters map into these.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Bearer credential for the music catalog, obtained via client-credentials exchange.
///
/// The value is opaque; `Debug` never prints it.
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    issued_at: Instant,
    /// Lifetime reported by the issuer (`expires_in`), if any.
    lifetime: Option<Duration>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, lifetime: Option<Duration>) -> Self {
        Self {
            value: value.into(),
            issued_at: Instant::now(),
            lifetime,
        }
    }

    /// Raw bearer string for the `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.value
    }

    /// True once the issuer-declared lifetime has elapsed. Tokens without a lifetime never expire.
    pub fn is_expired(&self) -> bool {
        self.lifetime
            .is_some_and(|lifetime| self.issued_at.elapsed() >= lifetime)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

/// Coarse polarity of the user's mood text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    /// Classification failed or produced something we do not understand.
    Undefined,
}

impl SentimentLabel {
    /// Parse a classifier label (`POSITIVE` / `NEGATIVE`, ASCII case-insensitive).
    pub fn from_model_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("POSITIVE") {
            Some(Self::Positive)
        } else if label.eq_ignore_ascii_case("NEGATIVE") {
            Some(Self::Negative)
        } else {
            None
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Undefined => "UNDEFINED",
        };
        f.write_str(s)
    }
}

/// Catalog query derived from a sentiment label. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    /// Genre seeds, in the order the catalog should receive them.
    pub seed_categories: Vec<String>,
    pub result_limit: u32,
    /// Audio-feature bounds keyed by catalog parameter name (e.g. `min_valence`).
    pub audio_feature_bounds: BTreeMap<String, f64>,
}

impl RecommendationQuery {
    /// Bound value by parameter name.
    pub fn bound(&self, name: &str) -> Option<f64> {
        self.audio_feature_bounds.get(name).copied()
    }
}

/// A single display-ready track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecommendation {
    pub title: String,
    pub artist: String,
    /// Public web link to the track.
    pub link: String,
}
