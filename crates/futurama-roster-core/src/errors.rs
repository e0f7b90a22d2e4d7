//! Error classification for diagnostics
//!
//! Every fetch failure is shown to the user as the same message. These
//! helpers only shape the log line that records what actually went wrong.

use futurama_rs::FuturamaError;
use std::error::Error;

/// Categorize an error for the diagnostic log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request exceeded its time budget
    Timeout,
    /// Connection, DNS, or TLS issues
    Network,
    /// Non-2xx status or unexpected body
    Protocol,
    /// Local configuration issues
    Config,
}

impl ErrorCategory {
    /// Get a short label for the category
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Network => "network",
            ErrorCategory::Protocol => "protocol",
            ErrorCategory::Config => "config",
        }
    }
}

/// Categorize a FuturamaError
pub fn categorize_error(error: &FuturamaError) -> ErrorCategory {
    match error {
        FuturamaError::Timeout(_) => ErrorCategory::Timeout,
        FuturamaError::Transport(e) if e.is_timeout() => ErrorCategory::Timeout,
        FuturamaError::Transport(_) => ErrorCategory::Network,
        FuturamaError::Status { .. } | FuturamaError::Decode(_) => ErrorCategory::Protocol,
        FuturamaError::InvalidUrl { .. }
        | FuturamaError::ConfigNotFound(_)
        | FuturamaError::ConfigInvalid(_)
        | FuturamaError::NoHomeDirectory
        | FuturamaError::Io(_)
        | FuturamaError::Yaml(_) => ErrorCategory::Config,
    }
}

/// Describe a fetch failure for the developer log
///
/// Appends the source chain below the first level, which is where the
/// useful transport detail (connection refused, DNS) usually lives. The
/// first level is already part of the error's own message.
pub fn describe_error(error: &FuturamaError) -> String {
    let mut text = error.to_string();
    let mut source = error.source().and_then(|s| s.source());
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    format!("[{}] {}", categorize_error(error).label(), text)
}
