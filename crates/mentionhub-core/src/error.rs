use thiserror::Error;

/// Errors raised while loading configuration or the account file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read accounts file {path}: {source}")]
    AccountsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse accounts file: {0}")]
    AccountsFileParse(#[from] serde_yaml::Error),

    #[error("accounts validation error: {0}")]
    Validation(String),
}

/// Returned when a string does not name a member of one of the closed model sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseModelError {
    #[error("unknown platform '{0}'")]
    Platform(String),

    #[error("unknown sentiment '{0}'")]
    Sentiment(String),
}
