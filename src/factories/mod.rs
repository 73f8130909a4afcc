// src/factories/mod.rs

mod mac_factory;
mod win_factory;

pub use mac_factory::MacFactory;
pub use win_factory::WinFactory;

use crate::{GuiConfig, GuiFactory, MessageStyle, OutputSink, Platform};
use std::sync::Arc;

/// Builds the concrete factory for `platform`.
pub fn factory_for(
    platform: Platform,
    style: MessageStyle,
    sink: Arc<dyn OutputSink>,
) -> Box<dyn GuiFactory> {
    log::debug!("selected {} widget factory ({} messages)", platform, style);
    match platform {
        Platform::Windows => Box::new(WinFactory::new(sink).with_style(style)),
        Platform::Mac => Box::new(MacFactory::new(sink).with_style(style)),
    }
}

/// Hands out widget factories that all paint into one shared sink.
#[derive(Clone)]
pub struct Factories {
    sink: Arc<dyn OutputSink>,
}

impl Factories {
    /// Creates a collection whose factories paint into `sink`.
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }

    /// Returns the factory for `platform` with the default message style.
    pub fn for_platform(&self, platform: Platform) -> Box<dyn GuiFactory> {
        factory_for(platform, MessageStyle::default(), Arc::clone(&self.sink))
    }

    /// Returns the factory the configuration asks for.
    pub fn from_config(&self, config: &GuiConfig) -> Box<dyn GuiFactory> {
        factory_for(config.platform, config.messages, Arc::clone(&self.sink))
    }
}

impl Default for Factories {
    fn default() -> Self {
        Self::new(Arc::new(crate::sinks::StdoutSink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_factory_for_each_platform() {
        for platform in Platform::ALL {
            let factory = factory_for(platform, MessageStyle::Legacy, Arc::new(MemorySink::new()));
            assert_eq!(factory.platform(), platform);
            assert_eq!(factory.create_button().platform(), platform);
            assert_eq!(factory.create_check_box().platform(), platform);
        }
    }

    #[test]
    fn test_from_config() {
        let sink = MemorySink::new();
        let factories = Factories::new(Arc::new(sink.clone()));
        let config = GuiConfig::new(Platform::Mac).with_messages(MessageStyle::Corrected);

        let factory = factories.from_config(&config);
        factory.create_button().paint();
        factory.create_check_box().paint();

        assert_eq!(sink.lines(), vec!["Paint Mac Button", "Paint Mac CheckBox"]);
    }

    #[test]
    fn test_for_platform_uses_legacy_messages() {
        let sink = MemorySink::new();
        let factories = Factories::new(Arc::new(sink.clone()));

        factories
            .for_platform(Platform::Windows)
            .create_check_box()
            .paint();

        assert_eq!(sink.lines(), vec!["Paint Win Button"]);
    }
}
