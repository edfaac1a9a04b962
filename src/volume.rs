use std::{fmt, num::ParseIntError};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("volume should be between 0 and 100, got {0}")]
    OutOfRange(i64),

    #[error("couldn't parse volume integer: {0}")]
    Parse(#[from] ParseIntError),
}

/// The highest volume, as a percentage.
pub const MAX: u8 = 100;

/// MCI expresses volume in tenths of a percent.
const SCALE: u16 = 10;

/// A validated playback volume, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    /// The volume, from 0 to [`MAX`].
    pub(crate) inner: u8,
}

impl Volume {
    /// Returns the volume as a percentage.
    pub const fn percent(self) -> u8 {
        self.inner
    }

    /// Returns the volume in MCI's native range, from 0 to 1000.
    pub fn native(self) -> u16 {
        u16::from(self.inner) * SCALE
    }
}

impl TryFrom<i64> for Volume {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|x| *x <= MAX)
            .map(|inner| Self { inner })
            .ok_or(Error::OutOfRange(value))
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.inner)
    }
}

/// Parses user input into a raw volume.
///
/// Only surrounding whitespace is tolerated, so `50%` or `5O` are rejected
/// instead of being guessed at. The range is checked later by [`Volume::try_from`].
pub fn parse(text: &str) -> Result<i64> {
    Ok(text.trim().parse()?)
}
