//! Maps logical element descriptors to concrete per-platform locators.
//!
//! Resolution is pure: no session is touched and nothing is cached, so the
//! same descriptor can be resolved for either platform at any time.

use applocate_common::{
    DescriptorKind, ElementDescriptor, LocateError, Locator, LocatorStrategy, Platform,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do with an `id` locator on iOS, where XCUITest has no resource ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdFallback {
    /// Fail with `UnsupportedOnPlatform`.
    #[default]
    Reject,
    /// Re-issue the selector as an accessibility id. Some XCUITest driver
    /// versions do this implicitly; it is not a protocol guarantee.
    AccessibilityId,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocatorResolver {
    id_fallback: IdFallback,
}

impl LocatorResolver {
    pub fn new(id_fallback: IdFallback) -> Self {
        Self { id_fallback }
    }

    pub fn id_fallback(&self) -> IdFallback {
        self.id_fallback
    }

    pub fn resolve(
        &self,
        descriptor: &ElementDescriptor,
        platform: Platform,
    ) -> Result<Locator, LocateError> {
        let locator = match descriptor {
            ElementDescriptor::AccessibilityLabel(label) => Locator::accessibility_id(label.clone()),
            ElementDescriptor::TypeName(names) => {
                let name = names.get(platform).ok_or(LocateError::MissingPlatformValue {
                    platform,
                    kind: DescriptorKind::TypeName,
                })?;
                Locator::class_name(name.clone())
            }
            ElementDescriptor::Raw(locators) => {
                let raw = locators
                    .get(platform)
                    .ok_or(LocateError::MissingPlatformValue {
                        platform,
                        kind: DescriptorKind::RawLocator,
                    })?;
                self.check_platform_support(raw.clone(), platform)?
            }
        };

        debug!(%platform, strategy = %locator.strategy, selector = %locator.selector, "resolved locator");
        Ok(locator)
    }

    fn check_platform_support(
        &self,
        locator: Locator,
        platform: Platform,
    ) -> Result<Locator, LocateError> {
        if platform != Platform::Ios || locator.strategy != LocatorStrategy::Id {
            return Ok(locator);
        }

        match self.id_fallback {
            IdFallback::Reject => Err(LocateError::UnsupportedOnPlatform {
                strategy: LocatorStrategy::Id,
                platform,
            }),
            IdFallback::AccessibilityId => {
                warn!(
                    selector = %locator.selector,
                    "id strategy is not supported on iOS, falling back to accessibility id"
                );
                Ok(Locator::accessibility_id(locator.selector))
            }
        }
    }
}

/// Resolve with the default policy (no `id` fallback on iOS).
pub fn resolve(descriptor: &ElementDescriptor, platform: Platform) -> Result<Locator, LocateError> {
    LocatorResolver::default().resolve(descriptor, platform)
}
