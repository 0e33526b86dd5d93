use applocate_common::{ElementHandle, Locator, Platform, SessionError};
use async_trait::async_trait;

/// A remote automation session (an Appium server driving one device).
///
/// The caller owns the session and its lifecycle; the finder and the polling
/// wait only borrow it for the duration of a call. `find` takes `&mut self`, so
/// at most one lookup is in flight per session.
#[async_trait]
pub trait Session: Send {
    /// Platform the session was opened for.
    fn platform(&self) -> Platform;

    /// Single lookup. Must not retry or wait beyond one round trip.
    async fn find(&mut self, locator: &Locator) -> Result<ElementHandle, SessionError>;

    /// End the remote session. Calling it on a released session is a no-op.
    async fn release(&mut self) -> Result<(), SessionError>;
}

#[async_trait]
impl<S: Session + ?Sized> Session for Box<S> {
    fn platform(&self) -> Platform {
        (**self).platform()
    }

    async fn find(&mut self, locator: &Locator) -> Result<ElementHandle, SessionError> {
        (**self).find(locator).await
    }

    async fn release(&mut self) -> Result<(), SessionError> {
        (**self).release().await
    }
}
