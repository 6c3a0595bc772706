//! Error types for VoxVault.
//!
//! These only travel through internal fallible helpers (quota file IO, the
//! remote HTTP exchange). Every public engine boundary recovers them into a
//! typed outcome instead of propagating.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Remote error: {0}")]
    Remote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
