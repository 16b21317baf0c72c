//! Implements InputPort. Inquire-based interactive prompt.
//!
//! One text input, submit on Enter, spinner while loading, results as terminal hyperlinks.

use super::progress;
use crate::domain::{DomainError, TrackRecommendation};
use crate::ports::InputPort;
use crate::usecases::{RecommendationService, SubmitOutcome};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::Text;
use std::sync::Arc;

const QUIT_WORDS: &[&str] = &[":q", "quit", "exit"];

/// Install the global inquire look (magenta prompt, cyan answers).
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("♪").with_fg(Color::LightMagenta))
        .with_answered_prompt_prefix(Styled::new("♫").with_fg(Color::LightCyan))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

/// OSC-8 terminal hyperlink; terminals without support show only `label`.
fn hyperlink(url: &str, label: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, label)
}

/// Render the result list. Empty list renders the "nothing found" line.
pub fn render_results(tracks: &[TrackRecommendation]) -> String {
    if tracks.is_empty() {
        return "No recommendations found.\n".to_string();
    }
    let mut out = String::from("Recommended songs:\n");
    for (i, track) in tracks.iter().enumerate() {
        let label = format!("{} — {}", track.title, track.artist);
        out.push_str(&format!(
            "  {}. {}\n     {}\n",
            i + 1,
            hyperlink(&track.link, &label),
            track.link
        ));
    }
    out
}

fn is_quit(input: &str) -> bool {
    let trimmed = input.trim();
    QUIT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w))
}

/// TUI adapter. Inquire prompt loop over the recommendation service.
pub struct TuiInputPort {
    service: Arc<RecommendationService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<RecommendationService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let snapshot = self.service.snapshot().await;
            if !snapshot.has_token {
                println!(
                    "{}",
                    "Recommendations unavailable right now (no catalog token yet)."
                        .dark_yellow()
                );
            }

            let input = match Text::new("How do you feel?")
                .with_initial_value(&snapshot.input_text)
                .with_help_message("Enter for recommendations · :q or Esc to quit")
                .prompt()
            {
                Ok(input) => input,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    break;
                }
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };
            if is_quit(&input) {
                break;
            }

            self.service.set_input(input).await;

            let spinner = progress::spinner("Checking your vibe…");
            let outcome = self.service.submit().await;
            spinner.finish_and_clear();

            match outcome {
                SubmitOutcome::Rejected(reason) => {
                    println!("{}", format!("Can't recommend yet: {}", reason).dark_yellow());
                }
                SubmitOutcome::Completed(_) | SubmitOutcome::Failed(_) => {
                    let results = self.service.snapshot().await.results;
                    print!("{}", render_results(&results));
                }
            }
        }

        println!("{}", "Bye, keep the music on.".magenta());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_results(&[]), "No recommendations found.\n");
    }

    #[test]
    fn test_render_entries() {
        let tracks = vec![TrackRecommendation {
            title: "Happy".into(),
            artist: "Pharrell Williams".into(),
            link: "https://open.spotify.com/track/1".into(),
        }];
        let out = render_results(&tracks);
        assert!(out.starts_with("Recommended songs:\n"));
        assert!(out.contains("1. "));
        assert!(out.contains("Happy — Pharrell Williams"));
        assert!(out.contains("\x1b]8;;https://open.spotify.com/track/1\x1b\\"));
    }

    #[test]
    fn test_quit_words() {
        assert!(is_quit(" :q "));
        assert!(is_quit("QUIT"));
        assert!(!is_quit("quite sad"));
    }
}
