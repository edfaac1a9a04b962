//! State for a single open audio file.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::volume::Volume;

/// The alias used when none is configured.
pub const DEFAULT_ALIAS: &str = "mp3";

/// The name an open file is registered under with MCI.
///
/// Aliases end up unquoted inside command strings,
/// so they must be a single word without quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias(String);

impl Alias {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Alias {
    fn default() -> Self {
        Self(String::from(DEFAULT_ALIAS))
    }
}

impl FromStr for Alias {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let valid = !s.is_empty() && !s.chars().any(|x| x.is_whitespace() || x == '"');
        if valid {
            Ok(Self(s.to_owned()))
        } else {
            Err(crate::Error::InvalidAlias(s.to_owned()))
        }
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an open session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The file was opened, but playback never started.
    Opened,
    Playing,
    Paused,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Opened => "opened",
            Self::Playing => "playing",
            Self::Paused => "paused",
        })
    }
}

/// One opened audio file, from `open` until `close`.
#[derive(Debug, Clone)]
pub struct Session {
    /// The file that was opened.
    path: PathBuf,

    /// The alias every command for this file is sent to.
    pub(crate) alias: Alias,

    pub(crate) state: State,

    /// The last volume that was applied, if any.
    pub(crate) volume: Option<Volume>,
}

impl Session {
    pub(crate) const fn new(path: PathBuf, alias: Alias) -> Self {
        Self {
            path,
            alias,
            state: State::Opened,
            volume: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn alias(&self) -> &Alias {
        &self.alias
    }

    pub const fn state(&self) -> State {
        self.state
    }

    pub const fn volume(&self) -> Option<Volume> {
        self.volume
    }
}
