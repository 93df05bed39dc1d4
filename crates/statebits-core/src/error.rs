use statebits_dsa::SlotError;

/// Every failure the encoder, configuration layer and host adapters report.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The state number cannot be represented in the available bits.
    #[error("state number {state_number} does not fit in {bit_count} bit(s)")]
    OutOfRange { state_number: i64, bit_count: usize },
    /// Empty, blank or duplicate slot names, or an otherwise unusable request.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A queried slot name is absent from the slot list.
    #[error("slot '{0}' not found")]
    NotFound(String),
    #[error("configuration error: {0}")]
    Config(String),
    /// Failure surfaced by a `DriverHost` implementation.
    #[error("host adapter error: {0}")]
    Host(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<SlotError> for SyncError {
    fn from(e: SlotError) -> Self {
        match e {
            SlotError::Missing(name) => SyncError::NotFound(name),
            other => SyncError::InvalidInput(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for SyncError {
    fn from(e: toml::de::Error) -> Self {
        SyncError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
