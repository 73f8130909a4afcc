// src/ports/mod.rs

pub use gui_factory::GuiFactory;
pub use output_sink::OutputSink;
pub use widgets::{Button, CheckBox};

pub mod gui_factory;
pub mod output_sink;
pub mod widgets;
