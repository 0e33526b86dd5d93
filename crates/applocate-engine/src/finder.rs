use crate::resolver::LocatorResolver;
use crate::session::Session;
use crate::wait::{WaitPolicy, wait_for_element};
use applocate_common::{ElementDescriptor, ElementHandle, LocateError, Locator};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Resolves descriptors for a session's platform and looks them up.
#[derive(Debug, Clone, Default)]
pub struct ElementFinder {
    resolver: LocatorResolver,
    policy: WaitPolicy,
    cancel: Option<CancellationToken>,
}

impl ElementFinder {
    pub fn new(resolver: LocatorResolver, policy: WaitPolicy) -> Self {
        Self {
            resolver,
            policy,
            cancel: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn policy(&self) -> &WaitPolicy {
        &self.policy
    }

    pub fn resolver(&self) -> &LocatorResolver {
        &self.resolver
    }

    /// Resolve `descriptor` for the session's platform.
    pub fn locate<S>(&self, session: &S, descriptor: &ElementDescriptor) -> Result<Locator, LocateError>
    where
        S: Session + ?Sized,
    {
        self.resolver.resolve(descriptor, session.platform())
    }

    /// One lookup, no polling. Absence is reported as `ElementNotFound` with a
    /// zero timeout.
    pub async fn find<S>(
        &self,
        session: &mut S,
        descriptor: &ElementDescriptor,
    ) -> Result<ElementHandle, LocateError>
    where
        S: Session + ?Sized,
    {
        let locator = self.locate(session, descriptor)?;
        self.find_locator(session, &locator).await
    }

    /// Single lookup of an already resolved locator.
    pub async fn find_locator<S>(
        &self,
        session: &mut S,
        locator: &Locator,
    ) -> Result<ElementHandle, LocateError>
    where
        S: Session + ?Sized,
    {
        if self.is_cancelled() {
            debug!(%locator, "lookup cancelled");
            return Err(LocateError::Cancelled {
                elapsed: Duration::ZERO,
            });
        }
        match session.find(locator).await {
            Ok(handle) => {
                info!(%locator, "element found");
                Ok(handle)
            }
            Err(err) if err.is_not_found() => Err(LocateError::ElementNotFound {
                timeout: Duration::ZERO,
                strategy: locator.strategy,
                selector: locator.selector.clone(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    /// Poll until the element is present or the policy's timeout elapses.
    pub async fn wait_for<S>(
        &self,
        session: &mut S,
        descriptor: &ElementDescriptor,
    ) -> Result<ElementHandle, LocateError>
    where
        S: Session + ?Sized,
    {
        let locator = self.locate(session, descriptor)?;
        self.wait_for_locator(session, &locator).await
    }

    pub async fn wait_for_locator<S>(
        &self,
        session: &mut S,
        locator: &Locator,
    ) -> Result<ElementHandle, LocateError>
    where
        S: Session + ?Sized,
    {
        wait_for_element(session, locator, &self.policy, self.cancel.as_ref()).await
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|token| token.is_cancelled())
    }
}
