//! Retry with exponential backoff for transient model failures.
//!
//! Only errors tagged transient by the boundary adapter
//! ([`Error::is_transient`]) are retried. Everything else terminates the
//! invocation on the attempt that produced it.

use crate::{Error, ErrorContext, Result};
use rand::Rng;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Immutable retry settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    jitter_max: Duration,
}

impl Default for RetryPolicy {
    /// One initial attempt plus three retries, 1 s base delay, up to 1 s jitter.
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(1000),
            jitter_max: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// `max_attempts` counts every try, the first one included, and must be at least 1.
    pub fn new(max_attempts: u32, base_delay: Duration, jitter_max: Duration) -> Result<Self> {
        if max_attempts == 0 {
            return Err(Error::validation_with_context(
                "max_attempts must be at least 1",
                ErrorContext::new()
                    .with_field_path("retry.max_attempts")
                    .with_source("retry_policy"),
            ));
        }
        Ok(Self {
            max_attempts,
            base_delay,
            jitter_max,
        })
    }

    /// A policy that makes exactly one attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            jitter_max: Duration::ZERO,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    pub fn jitter_max(&self) -> Duration {
        self.jitter_max
    }

    /// Deterministic part of the wait after zero-based `attempt` failed:
    /// `base_delay * 2^attempt`, saturating.
    pub fn base_backoff(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Full wait: base backoff plus a uniform jitter in `[0, jitter_max]`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_backoff(attempt).saturating_add(self.jitter())
    }

    fn jitter(&self) -> Duration {
        let max = self.jitter_max.as_millis() as u64;
        if max == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..=max))
    }

    fn decide(&self, err: &Error, attempt: u32) -> Decision {
        if err.is_transient() && attempt + 1 < self.max_attempts {
            Decision::Retry {
                delay: self.backoff(attempt),
            }
        } else {
            Decision::Fail
        }
    }
}

/// How to proceed after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Retry { delay: Duration },
    Fail,
}

/// Per-invocation state, reported through tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    Attempting { attempt: u32 },
    Waiting { attempt: u32, delay: Duration },
    Success { attempts: u32 },
    TerminalFailure { attempts: u32 },
}

impl InvocationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::TerminalFailure { .. })
    }
}

impl fmt::Display for InvocationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attempting { attempt } => write!(f, "attempting#{}", attempt),
            Self::Waiting { attempt, delay } => {
                write!(f, "waiting#{} ({}ms)", attempt, delay.as_millis())
            }
            Self::Success { attempts } => write!(f, "success after {}", attempts),
            Self::TerminalFailure { attempts } => write!(f, "failed after {}", attempts),
        }
    }
}

/// Runs a remote call under a [`RetryPolicy`].
///
/// The retry counter lives on the stack of each `invoke` call, so one invoker
/// can be shared freely between concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ResilientInvoker {
    policy: RetryPolicy,
}

impl ResilientInvoker {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Invoke `request_fn` under the invoker's default policy.
    pub async fn invoke<T, F, Fut>(&self, request_fn: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.invoke_with(&self.policy, request_fn).await
    }

    /// Invoke `request_fn`, retrying transient failures per `policy`.
    ///
    /// The error of the last attempt made is the one returned.
    pub async fn invoke_with<T, F, Fut>(&self, policy: &RetryPolicy, mut request_fn: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt: u32 = 0;
        loop {
            let state = InvocationState::Attempting { attempt };
            debug!(state = %state, "invoking");
            match request_fn().await {
                Ok(value) => {
                    let state = InvocationState::Success {
                        attempts: attempt + 1,
                    };
                    debug!(state = %state, "invocation done");
                    return Ok(value);
                }
                Err(err) => match policy.decide(&err, attempt) {
                    Decision::Retry { delay } => {
                        let state = InvocationState::Waiting { attempt, delay };
                        warn!(
                            state = %state,
                            max_attempts = policy.max_attempts,
                            error = %err,
                            "rate limited, backing off"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    Decision::Fail => {
                        let state = InvocationState::TerminalFailure {
                            attempts: attempt + 1,
                        };
                        if err.is_transient() {
                            error!(state = %state, error = %err, "retries exhausted");
                        } else {
                            warn!(state = %state, error = %err, "non-transient failure, not retrying");
                        }
                        return Err(err);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_code::StandardErrorCode;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_millis(100), Duration::ZERO).unwrap()
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(RetryPolicy::new(0, Duration::ZERO, Duration::ZERO).is_err());
        assert!(RetryPolicy::new(1, Duration::ZERO, Duration::ZERO).is_ok());
    }

    #[test]
    fn backoff_doubles_and_saturates() {
        let p = fast_policy(5);
        assert_eq!(p.base_backoff(0), Duration::from_millis(100));
        assert_eq!(p.base_backoff(1), Duration::from_millis(200));
        assert_eq!(p.base_backoff(3), Duration::from_millis(800));
        assert_eq!(p.backoff(2), Duration::from_millis(400));
        // Overflowing shift saturates rather than wrapping.
        assert!(p.base_backoff(64) >= p.base_backoff(31));
    }

    #[test]
    fn jitter_stays_in_bounds() {
        let p = RetryPolicy::new(3, Duration::from_millis(10), Duration::from_millis(50)).unwrap();
        for _ in 0..200 {
            let d = p.backoff(0);
            assert!(d >= Duration::from_millis(10) && d <= Duration::from_millis(60));
        }
    }

    #[test]
    fn decision_table() {
        let p = fast_policy(3);
        let transient = Error::rate_limited("429");
        let fatal = Error::remote(StandardErrorCode::InvalidRequest, 400, "bad");
        assert!(matches!(p.decide(&transient, 0), Decision::Retry { .. }));
        assert!(matches!(p.decide(&transient, 1), Decision::Retry { .. }));
        assert_eq!(p.decide(&transient, 2), Decision::Fail);
        assert_eq!(p.decide(&fatal, 0), Decision::Fail);
    }

    #[test]
    fn state_terminality() {
        assert!(!InvocationState::Attempting { attempt: 0 }.is_terminal());
        assert!(InvocationState::Success { attempts: 1 }.is_terminal());
        assert_eq!(
            InvocationState::Waiting { attempt: 1, delay: Duration::from_millis(250) }.to_string(),
            "waiting#1 (250ms)"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn single_attempt_policy_never_sleeps() {
        let calls = AtomicU32::new(0);
        let invoker = ResilientInvoker::new(RetryPolicy::no_retry());
        let result: Result<()> = invoker
            .invoke(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(Error::rate_limited("quota")) }
            })
            .await;
        assert!(result.unwrap_err().is_transient());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
