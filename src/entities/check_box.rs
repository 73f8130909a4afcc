use super::emit;
use crate::{CheckBox, MessageStyle, OutputSink, Platform, WidgetId, WidgetKind};
use std::fmt;
use std::sync::Arc;

pub struct WinCheckBox {
    id: WidgetId,
    style: MessageStyle,
    sink: Arc<dyn OutputSink>,
}

impl WinCheckBox {
    pub fn new(style: MessageStyle, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            id: WidgetId::new(),
            style,
            sink,
        }
    }
}

impl CheckBox for WinCheckBox {
    fn paint(&self) {
        emit(
            &self.sink,
            self.id,
            Platform::Windows,
            WidgetKind::CheckBox,
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

impl fmt::Debug for WinCheckBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WinCheckBox")
            .field("id", &self.id)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

pub struct MacCheckBox {
    id: WidgetId,
    style: MessageStyle,
    sink: Arc<dyn OutputSink>,
}

impl MacCheckBox {
    pub fn new(style: MessageStyle, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            id: WidgetId::new(),
            style,
            sink,
        }
    }
}

impl CheckBox for MacCheckBox {
    fn paint(&self) {
        emit(
            &self.sink,
            self.id,
            Platform::Mac,
            WidgetKind::CheckBox,
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

impl fmt::Debug for MacCheckBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacCheckBox")
            .field("id", &self.id)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
