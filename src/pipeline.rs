//! Compose-then-score handoff, plus async helpers for UI callers.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::{sync::mpsc, task::JoinHandle};

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::composer::compose;
use crate::error::Result;
use crate::evaluator::score;
use crate::request::GenerationRequest;
use crate::strength::StrengthResult;

/// How long a "Copied!" style confirmation stays up before reverting.
#[cfg(feature = "async")]
pub const COPY_FEEDBACK_DELAY: Duration = Duration::from_millis(1200);

/// A freshly composed password together with its score.
#[derive(Debug)]
pub struct Generated {
    pub password: SecretString,
    pub strength: StrengthResult,
}

/// Composes a password for `request` and scores it.
pub fn generate(request: &GenerationRequest) -> Result<Generated> {
    let password = compose(request)?;
    let strength = score(&password);
    Ok(Generated { password, strength })
}

/// Async version that sends the generation outcome via channel.
///
/// Nothing is sent when `token` is already cancelled. Validation failures are
/// sent as `Err` so the receiver can surface them.
#[cfg(feature = "async")]
pub async fn generate_tx(
    request: GenerationRequest,
    token: CancellationToken,
    tx: mpsc::Sender<Result<Generated>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("generation is about to start...");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Generation cancelled before start");
        return;
    }

    let outcome = generate(&request);

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generation result: {}", _e);
    }
}

/// Runs `callback` after `delay` unless `token` is cancelled first.
///
/// Models transient UI feedback (e.g. reverting a "Copied!" label) as a
/// scheduled callback. The handle resolves to `true` if the callback ran.
/// Must be called from within a tokio runtime.
#[cfg(feature = "async")]
pub fn schedule_reset<F>(
    delay: Duration,
    token: CancellationToken,
    callback: F,
) -> JoinHandle<bool>
where
    F: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if token.is_cancelled() {
            return false;
        }
        callback();
        true
    })
}
