//! Boundary outcomes for the two silently-degrading steps.
//!
//! The pipeline never aborts on these failures, but callers (and tests) can still tell a
//! degraded step apart from a genuine result.

use super::entities::{SentimentLabel, TrackRecommendation};
use super::errors::DomainError;

/// Result of the classification step.
#[derive(Debug)]
pub enum Classification {
    Labeled(SentimentLabel),
    /// Inference failed; the pipeline proceeds with `SentimentLabel::Undefined`.
    Degraded(DomainError),
}

impl Classification {
    /// Label the query builder should use.
    pub fn label(&self) -> SentimentLabel {
        match self {
            Self::Labeled(label) => *label,
            Self::Degraded(_) => SentimentLabel::Undefined,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

impl From<Result<SentimentLabel, DomainError>> for Classification {
    fn from(res: Result<SentimentLabel, DomainError>) -> Self {
        match res {
            Ok(label) => Self::Labeled(label),
            Err(e) => Self::Degraded(e),
        }
    }
}

/// Result of the fetch step.
#[derive(Debug)]
pub enum Recommendations {
    Tracks(Vec<TrackRecommendation>),
    /// Catalog call failed; presented as zero recommendations.
    Degraded(DomainError),
}

impl Recommendations {
    pub fn tracks(&self) -> &[TrackRecommendation] {
        match self {
            Self::Tracks(tracks) => tracks,
            Self::Degraded(_) => &[],
        }
    }

    pub fn into_tracks(self) -> Vec<TrackRecommendation> {
        match self {
            Self::Tracks(tracks) => tracks,
            Self::Degraded(_) => Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

impl From<Result<Vec<TrackRecommendation>, DomainError>> for Recommendations {
    fn from(res: Result<Vec<TrackRecommendation>, DomainError>) -> Self {
        match res {
            Ok(tracks) => Self::Tracks(tracks),
            Err(e) => Self::Degraded(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_classification_is_undefined() {
        let c: Classification = Err(DomainError::Classification("timeout".into())).into();
        assert!(c.is_degraded());
        assert_eq!(c.label(), SentimentLabel::Undefined);

        let c: Classification = Ok(SentimentLabel::Positive).into();
        assert!(!c.is_degraded());
        assert_eq!(c.label(), SentimentLabel::Positive);
    }

    #[test]
    fn test_degraded_recommendations_are_empty_but_distinct() {
        let failed: Recommendations = Err(DomainError::Recommendation("no tracks".into())).into();
        let empty: Recommendations = Ok(Vec::new()).into();
        assert!(failed.tracks().is_empty());
        assert!(empty.tracks().is_empty());
        assert!(failed.is_degraded());
        assert!(!empty.is_degraded());
    }
}
