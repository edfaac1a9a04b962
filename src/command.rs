//! The MCI command strings the player sends.

use std::{fmt, path::Path};

use crate::session::Alias;

/// A single command for the media control interface.
///
/// These only live long enough to be rendered with [`ToString`]
/// and handed to a [`crate::bridge::Bridge`].
#[derive(Debug, Clone, Copy)]
pub enum Command<'a> {
    /// Opens a file and binds it to an alias.
    Open { path: &'a Path, alias: &'a Alias },

    Play(&'a Alias),
    Pause(&'a Alias),
    Resume(&'a Alias),
    Stop(&'a Alias),

    /// Sets the volume, in MCI's 0 to 1000 range.
    SetAudio { alias: &'a Alias, level: u16 },

    /// Releases the alias and the file behind it.
    Close(&'a Alias),
}

impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, alias } => {
                write!(f, "open \"{}\" alias {alias}", path.display())
            }
            Self::Play(alias) => write!(f, "play {alias}"),
            Self::Pause(alias) => write!(f, "pause {alias}"),
            Self::Resume(alias) => write!(f, "resume {alias}"),
            Self::Stop(alias) => write!(f, "stop {alias}"),
            Self::SetAudio { alias, level } => write!(f, "setaudio {alias} volume to {level}"),
            Self::Close(alias) => write!(f, "close {alias}"),
        }
    }
}
