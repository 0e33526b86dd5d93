use applocate_common::Platform;
use applocate_engine::config::schema::DeviceProfile;
use serde_json::{Map, Value};

pub const APPIUM_PREFIX: &str = "appium:";

/// W3C capability names that must not carry a vendor prefix.
const STANDARD_CAPABILITIES: &[&str] = &[
    "browserName",
    "browserVersion",
    "platformName",
    "acceptInsecureCerts",
    "pageLoadStrategy",
    "proxy",
    "setWindowRect",
    "timeouts",
    "strictFileInteractability",
    "unhandledPromptBehavior",
    "webSocketUrl",
];

/// Add the `appium:` prefix unless the name is standard or already prefixed.
pub fn qualify(name: &str) -> String {
    if name.contains(':') || STANDARD_CAPABILITIES.contains(&name) {
        name.to_string()
    } else {
        format!("{}{}", APPIUM_PREFIX, name)
    }
}

/// Build the `alwaysMatch` capabilities for a new Appium session.
pub fn build_capabilities(platform: Platform, profile: &DeviceProfile) -> Map<String, Value> {
    let mut caps = Map::new();
    caps.insert(
        "platformName".to_string(),
        Value::String(platform.capability_name().to_string()),
    );

    let automation_name = profile
        .automation_name
        .clone()
        .unwrap_or_else(|| platform.default_automation_name().to_string());
    caps.insert(qualify("automationName"), Value::String(automation_name));

    if let Some(version) = &profile.platform_version {
        caps.insert(qualify("platformVersion"), Value::String(version.clone()));
    }
    if let Some(device) = &profile.device_name {
        caps.insert(qualify("deviceName"), Value::String(device.clone()));
    }
    if let Some(app) = &profile.app {
        caps.insert(
            qualify("app"),
            Value::String(app.to_string_lossy().into_owned()),
        );
    }

    // Extras win over the typed fields.
    for (name, value) in &profile.extra_capabilities {
        caps.insert(qualify(name), value.clone());
    }

    caps
}
