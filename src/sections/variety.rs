//! Character variety section - one point per character class present.

use crate::charset::CharacterClass;

use super::SectionScore;

pub const MAX_VARIETY_POINTS: SectionScore = 4;

/// Scores the password's character variety.
///
/// Lowercase, uppercase, digits and special symbols are each checked
/// independently, so the result ranges from 0 to 4. Letters and digits are
/// recognised in any script; special symbols only from the fixed set.
pub fn character_variety_section(password: &str) -> SectionScore {
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_numeric());
    let has_special = password
        .chars()
        .any(|c| CharacterClass::Special.contains(c));

    [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count() as SectionScore
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_empty() {
        assert_eq!(character_variety_section(""), 0);
    }

    #[test]
    fn test_variety_section_single_class() {
        assert_eq!(character_variety_section("lowercase"), 1);
        assert_eq!(character_variety_section("UPPERCASE"), 1);
        assert_eq!(character_variety_section("123456"), 1);
        assert_eq!(character_variety_section("!@#$"), 1);
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert_eq!(character_variety_section("HasAll123!@#"), 4);
    }

    #[test]
    fn test_variety_section_ignores_unlisted_symbols() {
        // Space, tilde and backtick are not in the special set.
        assert_eq!(character_variety_section("a ~"), 1);
        assert_eq!(character_variety_section("~~~ `"), 0);
    }

    #[test]
    fn test_variety_section_non_ascii_letters_and_digits() {
        assert_eq!(character_variety_section("éééééé"), 1);
        assert_eq!(character_variety_section("É"), 1);
        assert_eq!(character_variety_section("ß٣"), 2);
        assert_eq!(character_variety_section("Ωω٣!"), 4);
    }
}
