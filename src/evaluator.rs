//! Password strength scorer - runs the scoring sections and maps the total.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{SectionScore, character_variety_section, length_section};
use crate::strength::StrengthResult;

/// Scores a password held as a secret.
///
/// # Arguments
/// * `password` - The password to score
///
/// # Returns
/// A `StrengthResult` with the raw 0-7 score, percentage and label.
pub fn score(password: &SecretString) -> StrengthResult {
    score_str(password.expose_secret())
}

/// Scores a plain-text password.
pub fn score_str(password: &str) -> StrengthResult {
    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&str) -> SectionScore); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut raw: SectionScore = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!("Scoring section {}: {} points", _section_name, points);
        raw += points;
    }

    let result = StrengthResult::from_raw(raw);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password scored: raw {} ({}%, {})",
        result.raw,
        result.percent,
        result.label
    );

    result
}
