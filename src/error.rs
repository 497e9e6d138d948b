use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown event type {0}")]
    UnknownEventType(u16),

    #[error("unknown button code {0}")]
    UnknownButton(u16),

    #[error("unknown button state {0}")]
    UnknownButtonState(i32),

    #[error("unknown relative axis code {0}")]
    UnknownRelativeAxis(u16),

    #[error("unknown synchronization event code {0}")]
    UnknownSyncEvent(u16),

    /// Sync records always carry a zero value.
    #[error("synchronization event carries non-zero value {0}")]
    InvalidSyncValue(i32),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    SerializeConfig(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
