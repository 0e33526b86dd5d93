use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mobile platform a session drives. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Android];

    /// Value of the W3C `platformName` capability.
    pub fn capability_name(self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }

    /// Appium driver used when a device profile does not name one.
    pub fn default_automation_name(self) -> &'static str {
        match self {
            Platform::Ios => "XCUITest",
            Platform::Android => "UiAutomator2",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.capability_name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(format!(
                "unknown platform '{}' (expected 'ios' or 'android')",
                other
            )),
        }
    }
}
