mod gui_application;

pub use gui_application::{Application, Widgets};
