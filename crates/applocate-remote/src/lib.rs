pub mod capabilities;
pub mod session;
pub mod webdriver;

pub use session::AppiumSession;
