use thiserror::Error;

/// All the ways things can go wrong in ReWear
///
/// Points estimation and catalog filtering never fail, so everything in here
/// comes from the listing form, the detail actions, config or file IO.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing information: {0}")]
    MissingInformation(String),

    #[error("Description too short: {length}/{minimum} characters")]
    DescriptionTooShort { length: usize, minimum: usize },

    #[error("Item is not available: {0}")]
    ItemUnavailable(String),

    #[error("Not enough points: balance {balance}, required {required}")]
    InsufficientPoints { balance: u32, required: u32 },

    #[error("Item not found: {0}")]
    NotFound(u64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
