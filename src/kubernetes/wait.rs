// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Polling with a deadline

use crate::constants::wait::{POLL_INTERVAL_MS, POLL_MAX_INTERVAL_MS};
use crate::error::{KuadrantError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

/// Run `check` until it yields a value or `timeout` passes.
/// Uses exponential backoff starting at POLL_INTERVAL_MS; errors from `check` are logged and retried.
pub async fn poll_until<T, F, Fut>(what: &str, timeout: Duration, mut check: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let deadline = Instant::now() + timeout;
    let mut interval = POLL_INTERVAL_MS;

    loop {
        match check().await {
            Ok(Some(value)) => {
                debug!("{} is ready", what);
                return Ok(value);
            }
            Ok(None) => {
                debug!("{} not ready yet, waiting {} ms", what, interval);
            }
            Err(e) => {
                warn!("Error checking {}: {}, retrying in {} ms", what, e, interval);
            }
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(KuadrantError::Timeout {
                what: what.to_string(),
                timeout,
            });
        }

        sleep(Duration::from_millis(interval).min(deadline - now)).await;

        interval = (interval * 2).min(POLL_MAX_INTERVAL_MS);
    }
}
