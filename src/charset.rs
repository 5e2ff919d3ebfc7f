//! Character classes and their fixed alphabets.

const DIGITS: &str = "0123456789";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Digit,
    Lower,
    Upper,
    Special,
}

impl CharacterClass {
    /// All classes, in the order guaranteed characters are drawn.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Digit,
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Special,
    ];

    /// The fixed ASCII alphabet characters of this class are drawn from.
    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Digit => DIGITS,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Field name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Digit => "digits",
            CharacterClass::Lower => "lowercase",
            CharacterClass::Upper => "uppercase",
            CharacterClass::Special => "special",
        }
    }

    /// Whether `c` is in this class's alphabet.
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Lower => c.is_ascii_lowercase(),
            CharacterClass::Upper => c.is_ascii_uppercase(),
            CharacterClass::Special => SPECIAL.contains(c),
        }
    }

    /// Returns the class `c` belongs to, or `None` for characters outside every alphabet.
    pub fn classify(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

/// Union of the four alphabets, used for unconstrained filler characters.
pub fn full_pool() -> Vec<char> {
    CharacterClass::ALL
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(CharacterClass::Digit.alphabet().len(), 10);
        assert_eq!(CharacterClass::Lower.alphabet().len(), 26);
        assert_eq!(CharacterClass::Upper.alphabet().len(), 26);
        assert_eq!(CharacterClass::Special.alphabet().len(), 27);
    }

    #[test]
    fn test_full_pool_has_no_duplicates() {
        let pool = full_pool();
        let unique: HashSet<char> = pool.iter().copied().collect();
        assert_eq!(pool.len(), 89);
        assert_eq!(unique.len(), pool.len());
    }

    #[test]
    fn test_classify() {
        assert_eq!(CharacterClass::classify('7'), Some(CharacterClass::Digit));
        assert_eq!(CharacterClass::classify('q'), Some(CharacterClass::Lower));
        assert_eq!(CharacterClass::classify('Q'), Some(CharacterClass::Upper));
        assert_eq!(CharacterClass::classify('/'), Some(CharacterClass::Special));
        assert_eq!(CharacterClass::classify(' '), None);
        assert_eq!(CharacterClass::classify('~'), None);
        assert_eq!(CharacterClass::classify('é'), None);
    }

    #[test]
    fn test_every_alphabet_char_classifies_to_its_class() {
        for class in CharacterClass::ALL {
            for c in class.alphabet().chars() {
                assert_eq!(CharacterClass::classify(c), Some(class), "char {:?}", c);
            }
        }
    }
}
