//! VoxVault Core — command vocabulary, configuration, locale messages, errors.

pub mod config;
pub mod error;
pub mod messages;
pub mod types;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use types::{
    ActionKind, DocumentTag, Language, LocalResolution, RemoteResolution, ResolvedCommand,
    UnresolvedReason,
};
