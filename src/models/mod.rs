pub mod config;
pub mod events;
pub mod platform;
pub mod widget;

pub use config::*;
pub use events::*;
pub use platform::*;
pub use widget::*;
