use crate::{GuiError, OutputSink, PaintEvent};
use std::sync::{Arc, Mutex, MutexGuard};

/// Captures paint events in memory.
///
/// Clones share the same storage, so a test can hand one clone to a factory
/// and read the output back through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<PaintEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PaintEvent> {
        self.guard().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.guard().iter().map(|e| e.message.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }

    // A poisoned lock still holds valid events.
    fn guard(&self) -> MutexGuard<'_, Vec<PaintEvent>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl OutputSink for MemorySink {
    fn write(&self, event: &PaintEvent) -> Result<(), GuiError> {
        self.guard().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuiFactory, MacFactory, Platform, WidgetId, WidgetKind};

    #[test]
    fn test_clones_share_storage() {
        let sink = MemorySink::new();
        let writer = sink.clone();

        writer
            .write(&PaintEvent::new(
                WidgetId::new(),
                Platform::Mac,
                WidgetKind::Button,
                "Paint Mac Button",
            ))
            .unwrap();

        assert_eq!(sink.lines(), vec!["Paint Mac Button".to_string()]);
        assert_eq!(sink.events()[0].platform, Platform::Mac);

        sink.clear();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_writes_survive_poisoned_lock() {
        let sink = MemorySink::new();
        let holder = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.events.lock().unwrap();
            panic!("panic while holding the sink lock");
        })
        .join();
        assert!(sink.events.is_poisoned());

        let factory = MacFactory::new(Arc::new(sink.clone()));
        factory.create_button().paint();

        assert_eq!(sink.lines(), vec!["Paint Mac Button"]);
    }
}
