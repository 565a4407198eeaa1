//! Shared domain model and configuration for the mention aggregation workspace.
//!
//! Holds the canonical [`Mention`] shape every source adapter produces, the
//! credential expiry gate, the environment-driven [`AppConfig`], and the YAML
//! account file that stands in for the external credential store.

pub mod accounts;
pub mod app_config;
pub mod config;
pub mod credential;
pub mod error;
pub mod model;

pub use accounts::{load_accounts, parse_accounts, AccountFile};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use credential::{is_usable, is_usable_now};
pub use error::{ConfigError, ParseModelError};
pub use model::{
    Author, Coordinates, Engagement, Location, MediaItem, MediaKind, Mention, Platform,
    ProfileSummary, Sentiment, SourceCredential,
};
