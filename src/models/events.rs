use crate::{Platform, WidgetId, WidgetKind};
use serde::{Deserialize, Serialize};

/// One `paint` call, as handed to an output sink.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaintEvent {
    pub widget_id: WidgetId,
    pub platform: Platform,
    pub kind: WidgetKind,
    pub message: String,
    pub painted_at: chrono::DateTime<chrono::Utc>,
}

impl PaintEvent {
    pub fn new<S: Into<String>>(
        widget_id: WidgetId,
        platform: Platform,
        kind: WidgetKind,
        message: S,
    ) -> Self {
        Self {
            widget_id,
            platform,
            kind,
            message: message.into(),
            painted_at: chrono::Utc::now(),
        }
    }
}
