pub mod config;
pub mod finder;
pub mod resolver;
pub mod session;
pub mod wait;

pub use applocate_common::{
    DescriptorKind, ElementDescriptor, ElementHandle, LocateError, Locator, LocatorStrategy,
    PerPlatform, Platform, SessionError,
};
