use std::future::Future;
use std::time::Duration;
use anyhow::{Result, anyhow};

use crate::consts::*;

/// Polls `f` until it yields `Some`, sleeping `RETRY_DELAY_MS` between attempts.
pub async fn poll_until<T, F, Fut>(what: &str, mut f: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    for attempt in 1..=MAX_RETRIES {
        if let Some(value) = f().await? {
            return Ok(value);
        }
        log::debug!("{}: attempt {}/{} pending", what, attempt, MAX_RETRIES);
        tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
    }

    Err(anyhow!("{} did not complete after {} attempts", what, MAX_RETRIES))
}
