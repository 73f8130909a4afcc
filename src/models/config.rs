use crate::{GuiError, Platform, WidgetKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GuiConfig {
    pub platform: Platform,
    #[serde(default)]
    pub messages: MessageStyle,
}

impl GuiConfig {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            messages: MessageStyle::default(),
        }
    }

    pub fn with_messages(mut self, messages: MessageStyle) -> Self {
        self.messages = messages;
        self
    }

    /// Parses a TOML document.
    ///
    /// The enum fields are read as plain strings first, so an unknown platform
    /// surfaces as [`GuiError::UnsupportedPlatform`] rather than a TOML error.
    pub fn from_toml_str(content: &str) -> Result<Self, GuiError> {
        let raw: RawGuiConfig = toml::from_str(content)?;
        let messages = match raw.messages {
            Some(style) => MessageStyle::try_from(style.as_str())?,
            None => MessageStyle::default(),
        };
        Ok(Self {
            platform: Platform::try_from(raw.platform.as_str())?,
            messages,
        })
    }

    pub fn load(path: &Path) -> Result<Self, GuiError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded gui config from {}: platform={}, messages={}",
            path.display(),
            config.platform,
            config.messages
        );
        Ok(config)
    }
}

#[derive(Deserialize)]
struct RawGuiConfig {
    platform: String,
    messages: Option<String>,
}

/// Which set of paint messages products emit.
///
/// `Legacy` keeps the historical strings verbatim, including the checkbox
/// messages that read "Button" and the lowercase "mac". `Corrected` names the
/// checkbox properly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String")]
pub enum MessageStyle {
    #[default]
    #[serde(rename = "legacy")]
    Legacy,
    #[serde(rename = "corrected")]
    Corrected,
}

impl MessageStyle {
    /// The line a widget of `kind` on `platform` paints.
    pub fn message(&self, platform: Platform, kind: WidgetKind) -> String {
        match (self, platform, kind) {
            // Legacy checkboxes reuse the button text; the Mac one is lowercase.
            (Self::Legacy, Platform::Mac, WidgetKind::CheckBox) => "Paint mac Button".to_string(),
            (Self::Legacy, _, WidgetKind::CheckBox) => {
                format!("Paint {} {}", platform.label(), WidgetKind::Button)
            }
            _ => format!("Paint {} {}", platform.label(), kind),
        }
    }
}

impl fmt::Display for MessageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Corrected => write!(f, "corrected"),
        }
    }
}

impl TryFrom<&str> for MessageStyle {
    type Error = GuiError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "legacy" | "original" => Ok(Self::Legacy),
            "corrected" | "fixed" => Ok(Self::Corrected),
            _ => Err(GuiError::invalid_config(format!(
                "Invalid message style: '{}'. Use 'legacy' or 'corrected'",
                value
            ))),
        }
    }
}

impl TryFrom<String> for MessageStyle {
    type Error = GuiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
