use crate::{GuiError, PaintEvent};

pub trait OutputSink: Send + Sync {
    fn write(&self, event: &PaintEvent) -> Result<(), GuiError>;
}
