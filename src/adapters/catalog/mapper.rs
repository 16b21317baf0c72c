//! Map between domain queries/tracks and Spotify Web API wire shapes.
//!
//! Extracts TrackRecommendation from `GET /recommendations` bodies and serializes
//! RecommendationQuery into request parameters.

use crate::domain::{DomainError, RecommendationQuery, TrackRecommendation};
use serde::Deserialize;
use tracing::debug;

/// Substituted when a track comes back with an empty artist list.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
/// Substituted when a track comes back without a name.
pub const UNTITLED: &str = "Untitled";

const OPEN_TRACK_URL: &str = "https://open.spotify.com/track";

#[derive(Deserialize)]
struct RecommendationsBody {
    tracks: Option<Vec<RawTrack>>,
}

#[derive(Deserialize)]
struct RawTrack {
    id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    artists: Vec<RawArtist>,
    external_urls: Option<ExternalUrls>,
}

#[derive(Deserialize)]
struct RawArtist {
    name: Option<String>,
}

#[derive(Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

/// Serialize a query into `seed_genres`, `limit` and one parameter per audio-feature bound.
///
/// Seeds are comma-joined in query order; bounds follow in name order.
pub fn query_params(query: &RecommendationQuery) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(2 + query.audio_feature_bounds.len());
    params.push(("seed_genres".to_string(), query.seed_categories.join(",")));
    params.push(("limit".to_string(), query.result_limit.to_string()));
    for (name, value) in &query.audio_feature_bounds {
        params.push((name.clone(), value.to_string()));
    }
    params
}

/// Parse a recommendations body into display-ready tracks, capped at `limit`.
///
/// A body without a `tracks` list (or that is not JSON at all) is a shape error.
pub fn tracks_from_body(body: &str, limit: usize) -> Result<Vec<TrackRecommendation>, DomainError> {
    let parsed: RecommendationsBody = serde_json::from_str(body).map_err(|e| {
        DomainError::Recommendation(format!("Unexpected response structure: {}", e))
    })?;
    let raw = parsed.tracks.ok_or_else(|| {
        DomainError::Recommendation("Unexpected response structure: missing tracks".to_string())
    })?;

    Ok(raw
        .into_iter()
        .filter_map(track_to_domain)
        .take(limit)
        .collect())
}

/// Map one wire track. Tracks with no usable link are dropped.
fn track_to_domain(track: RawTrack) -> Option<TrackRecommendation> {
    let link = track
        .external_urls
        .and_then(|u| u.spotify)
        .filter(|u| !u.is_empty())
        .or_else(|| {
            track
                .id
                .as_deref()
                .filter(|id| !id.is_empty())
                .map(|id| format!("{}/{}", OPEN_TRACK_URL, id))
        });
    let Some(link) = link else {
        debug!(name = ?track.name, "dropping track without link");
        return None;
    };

    let artist = track
        .artists
        .into_iter()
        .next()
        .and_then(|a| a.name)
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

    Some(TrackRecommendation {
        title: track
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNTITLED.to_string()),
        artist,
        link,
    })
}
