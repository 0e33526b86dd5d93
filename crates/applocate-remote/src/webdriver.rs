use applocate_common::{Locator, SessionError};
use fantoccini::error::CmdError;
use fantoccini::wd::WebDriverCompatibleCommand;
use fantoccini::{Client, ClientBuilder};
use serde_json::{Value, json};

/// Key of an element reference in a W3C response.
pub const W3C_ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";
/// Key used by JSONWP-era drivers.
pub const LEGACY_ELEMENT_KEY: &str = "ELEMENT";

pub struct WebDriverClient {
    pub client: Client,
}

impl WebDriverClient {
    pub async fn connect(
        url: &str,
        capabilities: serde_json::Map<String, Value>,
    ) -> Result<Self, SessionError> {
        let client = ClientBuilder::native()
            .capabilities(capabilities)
            .connect(url)
            .await
            .map_err(|e| {
                SessionError::Transport(format!("Failed to connect to Appium at {}: {}", url, e))
            })?;

        Ok(Self { client })
    }

    /// Single `POST /session/{id}/element`.
    pub async fn find_element(&self, locator: &Locator) -> Result<String, SessionError> {
        let value = self
            .client
            .issue_cmd(FindElement::new(locator))
            .await
            .map_err(classify_error)?;

        element_reference(&value).ok_or_else(|| {
            SessionError::Transport(format!("Unexpected find element response: {}", value))
        })
    }

    pub async fn close(self) -> Result<(), SessionError> {
        self.client
            .close()
            .await
            .map_err(|e| SessionError::Transport(format!("Failed to close session: {}", e)))
    }
}

/// Find-element command with an arbitrary `using` strategy.
///
/// fantoccini's `Locator` only covers the W3C strategies, while Appium also
/// accepts `accessibility id` and `class name`.
#[derive(Debug, Clone)]
pub struct FindElement {
    using: &'static str,
    value: String,
}

impl FindElement {
    pub fn new(locator: &Locator) -> Self {
        Self {
            using: locator.strategy.wire_name(),
            value: locator.selector.clone(),
        }
    }

    pub fn body(&self) -> Value {
        json!({ "using": self.using, "value": self.value })
    }
}

impl WebDriverCompatibleCommand for FindElement {
    fn endpoint(
        &self,
        base_url: &url::Url,
        session_id: Option<&str>,
    ) -> Result<url::Url, url::ParseError> {
        base_url.join(&format!("session/{}/element", session_id.unwrap_or_default()))
    }

    fn method_and_body(&self, _request_url: &url::Url) -> (http::Method, Option<String>) {
        (http::Method::POST, Some(self.body().to_string()))
    }
}

/// Pull the element reference out of a find-element response. Accepts both the
/// bare `value` payload and the full `{"value": ...}` envelope.
pub fn element_reference(value: &Value) -> Option<String> {
    let payload = value
        .get("value")
        .filter(|inner| inner.is_object())
        .unwrap_or(value);

    payload
        .get(W3C_ELEMENT_KEY)
        .or_else(|| payload.get(LEGACY_ELEMENT_KEY))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `no such element` is absence; everything else is a transport failure.
pub fn classify_error(err: CmdError) -> SessionError {
    if err.is_no_such_element() {
        SessionError::NotFound
    } else {
        SessionError::Transport(err.to_string())
    }
}
