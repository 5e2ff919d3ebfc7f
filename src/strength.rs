//! Strength result types.

use std::fmt;

use crate::sections::{MAX_LENGTH_POINTS, MAX_VARIETY_POINTS};

/// Discrete strength label derived from the raw 0-7 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    Excellent,
}

impl StrengthLabel {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Medium,
            5..=6 => StrengthLabel::Strong,
            _ => StrengthLabel::Excellent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color band a strength meter would use for a given percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterTone {
    /// Below 40%
    Warning,
    /// 40% up to 70%
    Caution,
    /// 70% and above
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    /// Raw score, 0 to 7
    pub raw: u8,
    /// `floor(raw / 7 * 100)`
    pub percent: u8,
    pub label: StrengthLabel,
}

impl StrengthResult {
    pub(crate) const MAX_RAW: u8 = MAX_LENGTH_POINTS + MAX_VARIETY_POINTS;

    pub fn from_raw(raw: u8) -> Self {
        let raw = raw.min(Self::MAX_RAW);
        Self {
            raw,
            percent: (raw as u16 * 100 / Self::MAX_RAW as u16) as u8,
            label: StrengthLabel::from_raw(raw),
        }
    }

    pub fn tone(&self) -> MeterTone {
        match self.percent {
            0..=39 => MeterTone::Warning,
            40..=69 => MeterTone::Caution,
            _ => MeterTone::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds() {
        let labels: Vec<_> = (0..=7).map(StrengthLabel::from_raw).collect();
        assert_eq!(
            labels,
            vec![
                StrengthLabel::Weak,
                StrengthLabel::Weak,
                StrengthLabel::Weak,
                StrengthLabel::Medium,
                StrengthLabel::Medium,
                StrengthLabel::Strong,
                StrengthLabel::Strong,
                StrengthLabel::Excellent,
            ]
        );
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::Excellent.to_string(), "Excellent");
        assert_eq!(format!("Strength: {}", StrengthLabel::Medium), "Strength: Medium");
    }

    #[test]
    fn test_percent_is_floored() {
        let percents: Vec<u8> = (0..=7).map(|r| StrengthResult::from_raw(r).percent).collect();
        assert_eq!(percents, vec![0, 14, 28, 42, 57, 71, 85, 100]);
    }

    #[test]
    fn test_from_raw_clamps() {
        assert_eq!(StrengthResult::from_raw(200), StrengthResult::from_raw(7));
    }

    #[test]
    fn test_tone_bands() {
        assert_eq!(StrengthResult::from_raw(2).tone(), MeterTone::Warning);
        assert_eq!(StrengthResult::from_raw(3).tone(), MeterTone::Caution);
        assert_eq!(StrengthResult::from_raw(4).tone(), MeterTone::Caution);
        assert_eq!(StrengthResult::from_raw(5).tone(), MeterTone::Success);
    }
}
