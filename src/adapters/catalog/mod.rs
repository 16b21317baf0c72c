//! Music catalog adapters (Spotify Web API).
//!
//! Token exchange, recommendations gateway and wire ↔ domain mapping.

pub mod auth_adapter;
pub mod client;
pub mod mapper;

pub use auth_adapter::SpotifyAuthAdapter;
pub use client::SpotifyCatalogAdapter;
