pub mod descriptor;
pub mod error;
pub mod locator;
pub mod platform;

pub use descriptor::{DescriptorKind, ElementDescriptor, PerPlatform};
pub use error::{LocateError, SessionError};
pub use locator::{ElementHandle, Locator, LocatorStrategy};
pub use platform::Platform;
