//! Generation request: target length plus per-class minimum counts.

use crate::charset::CharacterClass;
use crate::error::{GenerationError, Result};

pub const LENGTH_VAR: &str = "PWD_GEN_LENGTH";
pub const DIGITS_VAR: &str = "PWD_GEN_DIGITS";
pub const LOWER_VAR: &str = "PWD_GEN_LOWER";
pub const UPPER_VAR: &str = "PWD_GEN_UPPER";
pub const SPECIAL_VAR: &str = "PWD_GEN_SPECIAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub total_length: usize,
    pub min_digits: usize,
    pub min_lower: usize,
    pub min_upper: usize,
    pub min_special: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            total_length: 12,
            min_digits: 2,
            min_lower: 4,
            min_upper: 4,
            min_special: 2,
        }
    }
}

impl GenerationRequest {
    pub fn new(
        total_length: usize,
        min_digits: usize,
        min_lower: usize,
        min_upper: usize,
        min_special: usize,
    ) -> Self {
        Self {
            total_length,
            min_digits,
            min_lower,
            min_upper,
            min_special,
        }
    }

    pub fn min_for(&self, class: CharacterClass) -> usize {
        match class {
            CharacterClass::Digit => self.min_digits,
            CharacterClass::Lower => self.min_lower,
            CharacterClass::Upper => self.min_upper,
            CharacterClass::Special => self.min_special,
        }
    }

    /// Number of guaranteed characters across all classes, or `None` if the
    /// sum does not fit in a `usize`.
    pub fn required(&self) -> Option<usize> {
        CharacterClass::ALL
            .iter()
            .try_fold(0usize, |acc, class| acc.checked_add(self.min_for(*class)))
    }

    /// Checks that the minimum counts fit in `total_length`.
    ///
    /// # Returns
    /// The number of guaranteed characters. An overflowing sum is always
    /// rejected, since no `total_length` can hold it.
    pub fn validate(&self) -> Result<usize> {
        match self.required() {
            Some(required) if required <= self.total_length => Ok(required),
            _ => Err(GenerationError::CountsExceedLength {
                required: CharacterClass::ALL
                    .iter()
                    .map(|class| self.min_for(*class) as u128)
                    .sum(),
                total_length: self.total_length,
            }),
        }
    }

    /// Builds a request from five raw text fields.
    ///
    /// Only the integer syntax is checked here. The sum constraint is left to
    /// [`validate`](Self::validate) so a form can report the two failures differently.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] naming the first field that is
    /// not a non-negative integer.
    pub fn from_inputs(
        total_length: &str,
        digits: &str,
        lower: &str,
        upper: &str,
        special: &str,
    ) -> Result<Self> {
        Ok(Self {
            total_length: parse_field("total length", total_length)?,
            min_digits: parse_field(CharacterClass::Digit.name(), digits)?,
            min_lower: parse_field(CharacterClass::Lower.name(), lower)?,
            min_upper: parse_field(CharacterClass::Upper.name(), upper)?,
            min_special: parse_field(CharacterClass::Special.name(), special)?,
        })
    }

    /// Builds a request from environment variables.
    ///
    /// Each of `PWD_GEN_LENGTH`, `PWD_GEN_DIGITS`, `PWD_GEN_LOWER`,
    /// `PWD_GEN_UPPER` and `PWD_GEN_SPECIAL` overrides the matching
    /// [`Default`] value when set.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] naming the variable if a set
    /// value is not a non-negative integer.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            total_length: env_field(LENGTH_VAR, defaults.total_length)?,
            min_digits: env_field(DIGITS_VAR, defaults.min_digits)?,
            min_lower: env_field(LOWER_VAR, defaults.min_lower)?,
            min_upper: env_field(UPPER_VAR, defaults.min_upper)?,
            min_special: env_field(SPECIAL_VAR, defaults.min_special)?,
        })
    }
}

fn parse_field(field: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| GenerationError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn env_field(var: &str, default: usize) -> Result<usize> {
    match std::env::var(var) {
        Ok(value) => parse_field(var, &value),
        Err(_) => Ok(default),
    }
}
