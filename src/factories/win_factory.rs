// src/factories/win_factory.rs

use crate::{
    Button, CheckBox, GuiFactory, MessageStyle, OutputSink, Platform, WinButton, WinCheckBox,
};
use std::sync::Arc;

/// Factory for the Windows widget family.
#[derive(Clone)]
pub struct WinFactory {
    style: MessageStyle,
    sink: Arc<dyn OutputSink>,
}

impl WinFactory {
    /// Creates a factory whose widgets paint the legacy messages into `sink`.
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            style: MessageStyle::default(),
            sink,
        }
    }

    /// Switches the message style used by widgets created afterwards.
    pub fn with_style(mut self, style: MessageStyle) -> Self {
        self.style = style;
        self
    }
}

impl GuiFactory for WinFactory {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        let button = WinButton::new(self.style, Arc::clone(&self.sink));
        log::debug!("created {:?}", button);
        Box::new(button)
    }

    fn create_check_box(&self) -> Box<dyn CheckBox> {
        let check_box = WinCheckBox::new(self.style, Arc::clone(&self.sink));
        log::debug!("created {:?}", check_box);
        Box::new(check_box)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_create_button() {
        let sink = MemorySink::new();
        let factory = WinFactory::new(Arc::new(sink.clone()));

        factory.create_button().paint();

        assert_eq!(sink.lines(), vec!["Paint Win Button"]);
    }

    #[test]
    fn test_create_check_box_legacy() {
        let sink = MemorySink::new();
        let factory = WinFactory::new(Arc::new(sink.clone()));

        factory.create_check_box().paint();

        assert_eq!(sink.lines(), vec!["Paint Win Button"]);
    }

    #[test]
    fn test_create_check_box_corrected() {
        let sink = MemorySink::new();
        let factory = WinFactory::new(Arc::new(sink.clone())).with_style(MessageStyle::Corrected);

        factory.create_check_box().paint();

        assert_eq!(sink.lines(), vec!["Paint Win CheckBox"]);
    }

    #[test]
    fn test_repeated_buttons_are_distinct() {
        let sink = MemorySink::new();
        let factory = WinFactory::new(Arc::new(sink.clone()));

        let first = factory.create_button();
        let second = factory.create_button();
        assert_ne!(first.id(), second.id());

        first.paint();
        second.paint();
        let lines = sink.lines();
        assert_eq!(lines[0], lines[1]);
    }
}
