//! Length section - awards 0 to 3 points by character count.

use super::SectionScore;

pub const MAX_LENGTH_POINTS: SectionScore = 3;

/// Scores the password length.
///
/// # Returns
/// - `0` for fewer than 6 characters
/// - `1` for 6 to 8 characters
/// - `2` for 9 to 12 characters
/// - `3` for more than 12 characters
pub fn length_section(password: &str) -> SectionScore {
    match password.chars().count() {
        0..=5 => 0,
        6..=8 => 1,
        9..=12 => 2,
        _ => MAX_LENGTH_POINTS,
    }
}
