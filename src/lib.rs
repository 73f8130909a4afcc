pub mod application;
pub mod entities;
pub mod errors;
pub mod factories;
pub mod models;
pub mod ports;
pub mod sinks;

pub use application::{Application, Widgets};
pub use entities::*;
pub use errors::*;
pub use factories::{Factories, MacFactory, WinFactory, factory_for};
pub use models::*;
pub use ports::*;
