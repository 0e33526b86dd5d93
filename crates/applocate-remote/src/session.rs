use crate::capabilities::build_capabilities;
use crate::webdriver::WebDriverClient;
use applocate_common::{ElementHandle, Locator, Platform, SessionError};
use applocate_engine::config::schema::DeviceProfile;
use applocate_engine::session::Session;
use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// A session on an Appium server.
pub struct AppiumSession {
    server_url: String,
    platform: Platform,
    profile: DeviceProfile,
    client: Option<WebDriverClient>,
}

impl AppiumSession {
    pub fn new(server_url: impl Into<String>, platform: Platform, profile: DeviceProfile) -> Self {
        Self {
            server_url: server_url.into(),
            platform,
            profile,
            client: None,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn capabilities(&self) -> Map<String, Value> {
        build_capabilities(self.platform, &self.profile)
    }

    pub fn is_ready(&self) -> bool {
        self.client.is_some()
    }

    /// Open the remote session. Installs and starts the app on the device.
    pub async fn launch(&mut self) -> Result<(), SessionError> {
        if self.client.is_some() {
            return Ok(());
        }

        info!(
            "Starting {} session on {}...",
            self.platform, self.server_url
        );
        let client = WebDriverClient::connect(&self.server_url, self.capabilities()).await?;
        self.client = Some(client);
        info!("Session ready.");
        Ok(())
    }
}

#[async_trait]
impl Session for AppiumSession {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn find(&mut self, locator: &Locator) -> Result<ElementHandle, SessionError> {
        let client = self.client.as_ref().ok_or(SessionError::NotReady)?;
        debug!(using = locator.strategy.wire_name(), value = %locator.selector, "find element");
        let reference = client.find_element(locator).await?;
        Ok(ElementHandle::new(reference))
    }

    async fn release(&mut self) -> Result<(), SessionError> {
        if let Some(client) = self.client.take() {
            info!("Ending {} session.", self.platform);
            client.close().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_before_launch_is_not_ready() {
        let mut session = AppiumSession::new(
            "http://localhost:4723",
            Platform::Android,
            DeviceProfile::default(),
        );

        let err = session
            .find(&Locator::accessibility_id("Login Screen"))
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::NotReady);
        assert!(!session.is_ready());
    }

    #[tokio::test]
    async fn test_release_without_launch_is_noop() {
        let mut session =
            AppiumSession::new("http://localhost:4723", Platform::Ios, DeviceProfile::default());
        assert!(session.release().await.is_ok());
        assert!(session.release().await.is_ok());
    }

    #[test]
    fn test_capabilities_follow_platform() {
        let session =
            AppiumSession::new("http://localhost:4723", Platform::Ios, DeviceProfile::default());
        let caps = session.capabilities();
        assert_eq!(caps["platformName"], "iOS");
        assert_eq!(caps["appium:automationName"], "XCUITest");
    }
}
