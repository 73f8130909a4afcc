use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuiError {
    #[error("Unsupported platform: `{0}`")]
    UnsupportedPlatform(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl GuiError {
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn output<S: Into<String>>(msg: S) -> Self {
        Self::OutputError(msg.into())
    }
}

impl From<toml::de::Error> for GuiError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}
