use super::emit;
use crate::{Button, MessageStyle, OutputSink, Platform, WidgetId, WidgetKind};
use std::fmt;
use std::sync::Arc;

pub struct WinButton {
    id: WidgetId,
    style: MessageStyle,
    sink: Arc<dyn OutputSink>,
}

impl WinButton {
    pub fn new(style: MessageStyle, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            id: WidgetId::new(),
            style,
            sink,
        }
    }
}

impl Button for WinButton {
    fn paint(&self) {
        emit(
            &self.sink,
            self.id,
            Platform::Windows,
            WidgetKind::Button,
            self.style,
        );
    }

    fn id(&self) -> WidgetId {
        self.id
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

impl fmt::Debug for WinButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WinButton")
            .field("id", &self.id)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

pub struct MacButton {
    id: WidgetId,
    style: MessageStyle,
    sink: Arc<dyn OutputSink>,
}

impl MacButton {
    pub fn new(style: MessageStyle, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            id: WidgetId::new(),
            style,
            sink,
        }
    }
}

impl Button for MacButton {
    fn paint(&self) {
        emit(
            &self.sink,
            self.id,
            Platform::Mac,
            WidgetKind::Button,
            self.style,
        );
    }

    fn id(&self) -> WidgetId {
        self.id
    }

    fn platform(&self) -> Platform {
        Platform::Mac
    }
}

impl fmt::Debug for MacButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacButton")
            .field("id", &self.id)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
