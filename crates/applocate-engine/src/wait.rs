use crate::session::Session;
use applocate_common::{ElementHandle, LocateError, Locator, SessionError};
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Timing for a polling wait. Fixed once the wait starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    timeout: Duration,
    poll_interval: Duration,
}

impl WaitPolicy {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Result<Self, LocateError> {
        if poll_interval.is_zero() {
            return Err(LocateError::InvalidWaitPolicy(
                "poll interval must be greater than zero".into(),
            ));
        }
        Ok(Self {
            timeout,
            poll_interval,
        })
    }

    /// Zero timeout: one lookup, no retry.
    pub fn single_attempt() -> Self {
        Self {
            timeout: Duration::ZERO,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Poll `session` until `locator` matches, the deadline passes, the session
/// fails, or `cancel` fires.
///
/// Only `SessionError::NotFound` is retried. The last attempt is made at or
/// after the deadline, so a missing element fails after at least `timeout` and
/// at most `timeout + poll_interval` (plus one round trip).
pub async fn wait_for_element<S>(
    session: &mut S,
    locator: &Locator,
    policy: &WaitPolicy,
    cancel: Option<&CancellationToken>,
) -> Result<ElementHandle, LocateError>
where
    S: Session + ?Sized,
{
    let started = Instant::now();
    // None: the timeout is past the clock's range, poll until found or cancelled.
    let deadline = started.checked_add(policy.timeout);
    let mut attempts: u32 = 0;

    loop {
        if cancel.is_some_and(|token| token.is_cancelled()) {
            debug!(attempts, "wait cancelled");
            return Err(LocateError::Cancelled {
                elapsed: started.elapsed(),
            });
        }

        attempts += 1;
        match session.find(locator).await {
            Ok(handle) => {
                info!(%locator, attempts, elapsed = ?started.elapsed(), "element found");
                return Ok(handle);
            }
            Err(SessionError::NotFound) => {
                debug!(%locator, attempts, "element not present yet");
            }
            Err(err) => {
                warn!(%locator, attempts, error = %err, "lookup failed");
                return Err(err.into());
            }
        }

        let now = Instant::now();
        let pause = match deadline {
            Some(deadline) if now >= deadline => {
                return Err(LocateError::ElementNotFound {
                    timeout: policy.timeout,
                    strategy: locator.strategy,
                    selector: locator.selector.clone(),
                });
            }
            Some(deadline) => policy.poll_interval.min(deadline - now),
            None => policy.poll_interval,
        };
        match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!(attempts, "wait cancelled while sleeping");
                        return Err(LocateError::Cancelled {
                            elapsed: started.elapsed(),
                        });
                    }
                    _ = sleep(pause) => {}
                }
            }
            None => sleep(pause).await,
        }
    }
}
