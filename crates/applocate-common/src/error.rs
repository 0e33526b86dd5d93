use crate::descriptor::DescriptorKind;
use crate::locator::LocatorStrategy;
use crate::platform::Platform;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a single lookup against a remote session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session answered and the element is absent. The only retryable case.
    #[error("No such element")]
    NotFound,

    #[error("Session not started")]
    NotReady,

    #[error("Transport error: {0}")]
    Transport(String),
}

impl SessionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::NotFound)
    }
}

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("No {kind} value supplied for {platform}")]
    MissingPlatformValue {
        platform: Platform,
        kind: DescriptorKind,
    },

    #[error("Locator strategy '{strategy}' is not supported on {platform}")]
    UnsupportedOnPlatform {
        strategy: LocatorStrategy,
        platform: Platform,
    },

    #[error("Element not found after {timeout:?}: {strategy} '{selector}'")]
    ElementNotFound {
        timeout: Duration,
        strategy: LocatorStrategy,
        selector: String,
    },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Wait cancelled after {elapsed:?}")]
    Cancelled { elapsed: Duration },

    #[error("Invalid wait policy: {0}")]
    InvalidWaitPolicy(String),
}

impl LocateError {
    /// Resolution-time errors are caller configuration defects.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            LocateError::MissingPlatformValue { .. } | LocateError::UnsupportedOnPlatform { .. }
        )
    }
}
