use crate::resolver::{IdFallback, LocatorResolver};
use crate::wait::WaitPolicy;
use applocate_common::{ElementDescriptor, LocateError, Platform};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplocateConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub wait: WaitConfig,
    #[serde(default)]
    pub locator: LocatorConfig,
    #[serde(default)]
    pub devices: DevicesConfig,
    /// Named descriptors, e.g. `login_screen: { accessibility_label: Login Screen }`.
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub elements: BTreeMap<String, ElementDescriptor>,
}

impl ApplocateConfig {
    pub fn element(&self, name: &str) -> Option<&ElementDescriptor> {
        self.elements.get(name)
    }

    pub fn resolver(&self) -> LocatorResolver {
        LocatorResolver::new(self.locator.id_fallback)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
        }
    }
}

fn default_server_url() -> String {
    "http://localhost:4723".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl WaitConfig {
    pub fn policy(&self) -> Result<WaitPolicy, LocateError> {
        WaitPolicy::new(
            Duration::from_millis(self.timeout_ms),
            Duration::from_millis(self.poll_interval_ms),
        )
    }
}

fn default_timeout_ms() -> u64 {
    10000
}

fn default_poll_interval_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocatorConfig {
    #[serde(default)]
    pub id_fallback: IdFallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicesConfig {
    #[serde(default = "default_ios_profile")]
    pub ios: DeviceProfile,
    #[serde(default = "default_android_profile")]
    pub android: DeviceProfile,
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            ios: default_ios_profile(),
            android: default_android_profile(),
        }
    }
}

impl DevicesConfig {
    pub fn profile(&self, platform: Platform) -> &DeviceProfile {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
        }
    }
}

/// Capabilities for one device. Turned into an Appium `POST /session` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<PathBuf>,
    /// Passed through as-is. Keys without a vendor prefix get `appium:`.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra_capabilities: serde_json::Map<String, serde_json::Value>,
}

fn default_ios_profile() -> DeviceProfile {
    DeviceProfile {
        platform_version: Some("16.2".to_string()),
        device_name: Some("iPhone 14 Pro".to_string()),
        automation_name: Some(Platform::Ios.default_automation_name().to_string()),
        app: Some(PathBuf::from("TheApp.app.zip")),
        extra_capabilities: serde_json::Map::new(),
    }
}

fn default_android_profile() -> DeviceProfile {
    DeviceProfile {
        platform_version: Some("13.2".to_string()),
        device_name: Some("Android Emulator".to_string()),
        automation_name: Some(Platform::Android.default_automation_name().to_string()),
        app: Some(PathBuf::from("TheApp-v1.10.0.apk")),
        extra_capabilities: serde_json::Map::new(),
    }
}
