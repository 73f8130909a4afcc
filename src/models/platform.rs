use crate::GuiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The variant a family of widgets belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum Platform {
    #[serde(rename = "windows")]
    Windows,
    #[serde(rename = "mac")]
    Mac,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Windows, Platform::Mac];

    /// Short label used in paint messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Windows => "Win",
            Self::Mac => "Mac",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::Mac => write!(f, "Mac"),
        }
    }
}

impl TryFrom<&str> for Platform {
    type Error = GuiError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "windows" | "win" | "win32" => Ok(Self::Windows),
            "mac" | "macos" | "osx" => Ok(Self::Mac),
            _ => Err(GuiError::UnsupportedPlatform(value.to_string())),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = GuiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for Platform {
    type Err = GuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
