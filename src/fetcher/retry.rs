//! Retry policy and error classification for download attempts.

use std::fmt;
use std::io;
use std::time::Duration;

/// Error from a single download attempt.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure reported by the HTTP client (timeout,
    /// connection refused, DNS, interrupted body stream).
    Request(reqwest::Error),
    /// The response carried a non-2xx status.
    Status(reqwest::StatusCode),
    /// Creating or writing the destination file failed.
    Io(io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "{}", e),
            FetchError::Status(code) => write!(f, "HTTP {}", code),
            FetchError::Io(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Request(e) => Some(e),
            FetchError::Status(_) => None,
            FetchError::Io(e) => Some(e),
        }
    }
}

/// High-level classification of a fetch error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network-level failure; worth retrying.
    Transport,
    /// HTTP error status; retried the same as a transport failure.
    Http,
    /// Local filesystem error; never retried.
    Write,
}

impl FetchError {
    /// Classify this error for the retry policy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Request(_) => ErrorKind::Transport,
            FetchError::Status(_) => ErrorKind::Http,
            FetchError::Io(_) => ErrorKind::Write,
        }
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Fixed-delay retry policy applied to a job's primary source.
///
/// The fallback source gets a single attempt and never consults this.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Decide what to do after a failed attempt.
    ///
    /// `attempt` is 1-based (1 = first attempt). Transport and HTTP-status
    /// errors retry until `max_attempts` is reached; write errors never do.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }

        match kind {
            ErrorKind::Write => RetryDecision::NoRetry,
            ErrorKind::Transport | ErrorKind::Http => RetryDecision::RetryAfter(self.delay),
        }
    }
}
