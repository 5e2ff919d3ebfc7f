//! Password composer - builds a password that honours per-class minimum counts.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use zeroize::Zeroize;

use crate::charset::{CharacterClass, full_pool};
use crate::error::Result;
use crate::request::GenerationRequest;

/// Composes a password using the thread-local random generator.
///
/// # Arguments
/// * `request` - Target length and minimum count per character class
///
/// # Returns
/// A password of exactly `request.total_length` characters, or
/// `GenerationError::CountsExceedLength` when the minimums do not fit.
pub fn compose(request: &GenerationRequest) -> Result<SecretString> {
    compose_with_rng(request, &mut rand::thread_rng())
}

/// Composes a password drawing from `rng`.
///
/// Every class contributes exactly its minimum count of guaranteed characters,
/// the rest is filled from the union of all alphabets, and the result is
/// shuffled so guaranteed characters do not sit at fixed positions.
/// Pass a seeded generator for reproducible output, or `OsRng` for
/// operating-system entropy.
pub fn compose_with_rng<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<SecretString> {
    let required = match request.validate() {
        Ok(required) => required,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password composition rejected: {}", e);
            return Err(e);
        }
    };

    let mut buf: Vec<u8> = Vec::with_capacity(request.total_length);

    for class in CharacterClass::ALL {
        draw(class.alphabet().as_bytes(), request.min_for(class), rng, &mut buf);
    }

    let pool: Vec<u8> = full_pool().into_iter().map(|c| c as u8).collect();
    draw(&pool, request.total_length - required, rng, &mut buf);

    buf.shuffle(rng);

    // All alphabets are ASCII, so each byte is one char.
    let password: String = buf.iter().map(|&b| b as char).collect();
    buf.zeroize();

    #[cfg(feature = "tracing")]
    tracing::debug!("Password composed: {} chars", request.total_length);

    Ok(SecretString::new(password.into_boxed_str()))
}

#[inline]
fn draw<R: Rng + ?Sized>(alphabet: &[u8], count: usize, rng: &mut R, buf: &mut Vec<u8>) {
    buf.extend((0..count).map(|_| alphabet[rng.gen_range(0..alphabet.len())]));
}
