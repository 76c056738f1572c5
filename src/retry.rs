use std::{fmt::Display, future::Future, time::Duration};

use log::warn;

/// Runs `op` until it succeeds, fails with a non-transient error, or
/// `max_attempts` calls have been made. `op` receives the 1-based attempt
/// number. Waits `backoff` between attempts.
pub async fn attempt<T, E, F, Fut>(
    max_attempts: u32,
    backoff: Duration,
    is_transient: impl Fn(&E) -> bool,
    mut op: F,
) -> Result<T, E>
where
    E: Display,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if is_transient(&err) => {
                warn!("{err} (attempt {attempt}/{max_attempts})");
                if attempt >= max_attempts {
                    return Err(err);
                }
                if !backoff.is_zero() {
                    tokio::time::sleep(backoff).await;
                }
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
