//! Resilience for remote model calls.
//!
//! # Retry with backoff
//!
//! [`ResilientInvoker`] wraps a zero-argument async thunk that performs one
//! remote attempt. Transient (rate/quota) failures are retried after
//! `base_delay * 2^attempt + random(0, jitter_max)`; any other failure ends the
//! invocation immediately.
//!
//! ```text
//! Attempting ──ok──────────────▶ Success
//!     │
//!     ├─transient, attempts left─▶ Waiting ──timer──▶ Attempting
//!     │
//!     └─fatal or exhausted──────▶ TerminalFailure
//! ```
//!
//! ```rust
//! use agri_advisor::resilience::{ResilientInvoker, RetryPolicy};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> agri_advisor::Result<()> {
//! let policy = RetryPolicy::new(3, Duration::from_millis(1), Duration::ZERO)?;
//! let invoker = ResilientInvoker::new(policy);
//! let answer = invoker.invoke(|| async { Ok::<_, agri_advisor::Error>(42) }).await?;
//! assert_eq!(answer, 42);
//! # Ok(())
//! # }
//! ```

pub mod retry;

pub use retry::{InvocationState, ResilientInvoker, RetryPolicy};
