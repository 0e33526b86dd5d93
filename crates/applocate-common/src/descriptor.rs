//! Platform-independent element descriptors.
//!
//! A descriptor says *what* to find. Only [`ElementDescriptor::AccessibilityLabel`]
//! is portable as-is; type names and raw locators carry one value per platform
//! because their vocabularies differ between XCUITest and UiAutomator2.

use crate::locator::Locator;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One optional value per platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, bound(deserialize = "T: Deserialize<'de>"))]
pub struct PerPlatform<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<T>,
}

impl<T> Default for PerPlatform<T> {
    fn default() -> Self {
        Self {
            ios: None,
            android: None,
        }
    }
}

impl<T> PerPlatform<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A value for `platform` only.
    pub fn only(platform: Platform, value: impl Into<T>) -> Self {
        let mut values = Self::default();
        match platform {
            Platform::Ios => values.ios = Some(value.into()),
            Platform::Android => values.android = Some(value.into()),
        }
        values
    }

    pub fn with_ios(mut self, value: impl Into<T>) -> Self {
        self.ios = Some(value.into());
        self
    }

    pub fn with_android(mut self, value: impl Into<T>) -> Self {
        self.android = Some(value.into());
        self
    }

    pub fn get(&self, platform: Platform) -> Option<&T> {
        match platform {
            Platform::Ios => self.ios.as_ref(),
            Platform::Android => self.android.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    AccessibilityLabel,
    TypeName,
    RawLocator,
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DescriptorKind::AccessibilityLabel => "accessibility label",
            DescriptorKind::TypeName => "type name",
            DescriptorKind::RawLocator => "raw locator",
        };
        f.write_str(name)
    }
}

/// Logical description of an element to find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementDescriptor {
    /// Accessibility label (`accessibilityIdentifier` on iOS, `content-desc` on Android).
    AccessibilityLabel(String),
    /// UI type name, e.g. `XCUIElementTypeStaticText` / `android.widget.TextView`.
    TypeName(PerPlatform<String>),
    /// Verbatim locator per platform. Mostly used for XPath, which never ports.
    Raw(PerPlatform<Locator>),
}

impl ElementDescriptor {
    pub fn accessibility_label(label: impl Into<String>) -> Self {
        ElementDescriptor::AccessibilityLabel(label.into())
    }

    pub fn type_name(names: PerPlatform<String>) -> Self {
        ElementDescriptor::TypeName(names)
    }

    pub fn raw(locators: PerPlatform<Locator>) -> Self {
        ElementDescriptor::Raw(locators)
    }

    pub fn kind(&self) -> DescriptorKind {
        match self {
            ElementDescriptor::AccessibilityLabel(_) => DescriptorKind::AccessibilityLabel,
            ElementDescriptor::TypeName(_) => DescriptorKind::TypeName,
            ElementDescriptor::Raw(_) => DescriptorKind::RawLocator,
        }
    }

    /// True when the descriptor carries a usable value for `platform`.
    pub fn supports(&self, platform: Platform) -> bool {
        match self {
            ElementDescriptor::AccessibilityLabel(_) => true,
            ElementDescriptor::TypeName(names) => names.get(platform).is_some(),
            ElementDescriptor::Raw(locators) => locators.get(platform).is_some(),
        }
    }
}
