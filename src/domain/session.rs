//! Session state owned by the recommendation orchestrator.
//!
//! Shared as `Arc<RwLock<SessionState>>`; never held across a network call.

use super::entities::{AccessToken, TrackRecommendation};
use std::fmt;

/// Orchestrator phase. `Success` and `Failed` look the same to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Why a submit was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// No catalog token yet (still acquiring, or acquisition failed).
    NoToken,
    EmptyInput,
    AlreadyLoading,
}

impl fmt::Display for SubmitRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NoToken => "recommendations unavailable (no catalog token)",
            Self::EmptyInput => "tell me how you feel first",
            Self::AlreadyLoading => "a request is already in flight",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Default)]
pub struct SessionState {
    input_text: String,
    phase: Phase,
    results: Vec<TrackRecommendation>,
    token: Option<AccessToken>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Text edits never touch the phase or the previous results.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn results(&self) -> &[TrackRecommendation] {
        &self.results
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub fn set_token(&mut self, token: AccessToken) {
        self.token = Some(token);
    }

    /// Guard for the submit action: token present, non-blank input, nothing in flight.
    pub fn check_submit(&self) -> Result<(), SubmitRejection> {
        if self.is_loading() {
            return Err(SubmitRejection::AlreadyLoading);
        }
        if self.token.is_none() {
            return Err(SubmitRejection::NoToken);
        }
        if self.input_text.trim().is_empty() {
            return Err(SubmitRejection::EmptyInput);
        }
        Ok(())
    }

    pub fn action_enabled(&self) -> bool {
        self.check_submit().is_ok()
    }

    /// Enter `Loading`: clears previous results. Returns the text and token for the run.
    pub fn begin_request(&mut self) -> Result<(String, AccessToken), SubmitRejection> {
        self.check_submit()?;
        let token = self.token.clone().ok_or(SubmitRejection::NoToken)?;
        self.results.clear();
        self.phase = Phase::Loading;
        Ok((self.input_text.clone(), token))
    }

    pub fn finish_success(&mut self, results: Vec<TrackRecommendation>) {
        self.results = results;
        self.phase = Phase::Success;
    }

    pub fn finish_failure(&mut self) {
        self.results.clear();
        self.phase = Phase::Failed;
    }
}
