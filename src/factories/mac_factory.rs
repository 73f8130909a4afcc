// src/factories/mac_factory.rs

use crate::{
    Button, CheckBox, GuiFactory, MacButton, MacCheckBox, MessageStyle, OutputSink, Platform,
};
use std::sync::Arc;

/// Factory for the Mac widget family.
#[derive(Clone)]
pub struct MacFactory {
    style: MessageStyle,
    sink: Arc<dyn OutputSink>,
}

impl MacFactory {
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

impl GuiFactory for MacFactory {
    fn platform(&self) -> Platform {
        Platform::Mac
    }

    fn create_button(&self) -> Box<dyn Button> {
        let button = MacButton::new(self.style, Arc::clone(&self.sink));
        log::debug!("created {:?}", button);
        Box::new(button)
    }

    fn create_check_box(&self) -> Box<dyn CheckBox> {
        let check_box = MacCheckBox::new(self.style, Arc::clone(&self.sink));
        log::debug!("created {:?}", check_box);
        Box::new(check_box)
    }
}
