//! Password scoring sections
//!
//! Each section awards points for one aspect of password strength.

mod length;
mod variety;

pub use length::{MAX_LENGTH_POINTS, length_section};
pub use variety::{MAX_VARIETY_POINTS, character_variety_section};

/// Points awarded by a single section.
pub type SectionScore = u8;
