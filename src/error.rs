use crate::{bridge, volume};

pub type Result<T> = std::result::Result<T, Error>;

/// Any errors which might occur while driving the player.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("media control failed: {0}")]
    Bridge(#[from] bridge::Error),

    #[error("invalid volume: {0}")]
    Volume(#[from] volume::Error),

    #[error("no audio file is open")]
    NoSession,

    #[error("invalid file path: {0:?}")]
    InvalidPath(String),

    #[error("invalid alias {0:?}, it must be a single word without quotes")]
    InvalidAlias(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
