pub mod button;
pub mod check_box;

pub use button::*;
pub use check_box::*;

use crate::{MessageStyle, OutputSink, PaintEvent, Platform, WidgetId, WidgetKind};
use std::sync::Arc;

// Paint is total: a failed sink write is logged, never returned.
fn emit(
    sink: &Arc<dyn OutputSink>,
    id: WidgetId,
    platform: Platform,
    kind: WidgetKind,
    style: MessageStyle,
) {
    let event = PaintEvent::new(id, platform, kind, style.message(platform, kind));
    if let Err(e) = sink.write(&event) {
        log::warn!("failed to paint {} {} {}: {}", platform, kind, id, e);
    }
}
