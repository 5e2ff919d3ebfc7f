//! Password composition and strength scoring library
//!
//! This library builds randomized passwords that honour a minimum count for
//! each character class (digits, lowercase, uppercase, special symbols) and
//! scores passwords on a 0-100 scale with a discrete label.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based generation and scheduled UI feedback
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! [`GenerationRequest::from_env`] reads `PWD_GEN_LENGTH`, `PWD_GEN_DIGITS`,
//! `PWD_GEN_LOWER`, `PWD_GEN_UPPER` and `PWD_GEN_SPECIAL`
//! (defaults: 12, 2, 4, 4, 2).
//!
//! # Example
//!
//! ```rust
//! use pwd_composer::{compose, score, GenerationRequest, StrengthLabel};
//! use secrecy::ExposeSecret;
//!
//! let request = GenerationRequest::new(16, 2, 4, 4, 2);
//! let password = compose(&request).expect("counts fit in the length");
//! assert_eq!(password.expose_secret().len(), 16);
//!
//! let strength = score(&password);
//! assert_eq!(strength.label, StrengthLabel::Excellent);
//! println!("Strength: {} ({}%)", strength.label, strength.percent);
//! ```

mod charset;
mod composer;
mod error;
mod evaluator;
mod pipeline;
mod request;
mod sections;
mod strength;

// Public API
pub use charset::{CharacterClass, full_pool};
pub use composer::{compose, compose_with_rng};
pub use error::{GenerationError, Result};
pub use evaluator::{score, score_str};
pub use pipeline::{Generated, generate};
pub use request::GenerationRequest;
pub use strength::{MeterTone, StrengthLabel, StrengthResult};

#[cfg(feature = "async")]
pub use pipeline::{COPY_FEEDBACK_DELAY, generate_tx, schedule_reset};
