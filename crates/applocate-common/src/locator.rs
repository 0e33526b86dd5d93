use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the remote session interprets a selector string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorStrategy {
    #[serde(rename = "xpath")]
    XPath,
    #[serde(rename = "accessibility_id")]
    AccessibilityId,
    #[serde(rename = "class_name")]
    ClassName,
    #[serde(rename = "id")]
    Id,
}

impl LocatorStrategy {
    /// The `using` value of a W3C find-element request.
    pub fn wire_name(self) -> &'static str {
        match self {
            LocatorStrategy::XPath => "xpath",
            LocatorStrategy::AccessibilityId => "accessibility id",
            LocatorStrategy::ClassName => "class name",
            LocatorStrategy::Id => "id",
        }
    }
}

impl fmt::Display for LocatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for LocatorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "xpath" => Ok(LocatorStrategy::XPath),
            "accessibility id" => Ok(LocatorStrategy::AccessibilityId),
            "class name" => Ok(LocatorStrategy::ClassName),
            "id" => Ok(LocatorStrategy::Id),
            other => Err(format!("unknown locator strategy '{}'", other)),
        }
    }
}

/// A concrete (strategy, selector) pair ready to send to a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    pub strategy: LocatorStrategy,
    pub selector: String,
}

impl Locator {
    pub fn new(strategy: LocatorStrategy, selector: impl Into<String>) -> Self {
        Self {
            strategy,
            selector: selector.into(),
        }
    }

    pub fn xpath(selector: impl Into<String>) -> Self {
        Self::new(LocatorStrategy::XPath, selector)
    }

    pub fn accessibility_id(selector: impl Into<String>) -> Self {
        Self::new(LocatorStrategy::AccessibilityId, selector)
    }

    pub fn class_name(selector: impl Into<String>) -> Self {
        Self::new(LocatorStrategy::ClassName, selector)
    }

    pub fn id(selector: impl Into<String>) -> Self {
        Self::new(LocatorStrategy::Id, selector)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.strategy, self.selector)
    }
}

/// Element reference returned by the remote session. Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn reference(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
