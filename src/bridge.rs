//! The thin layer between the player and the operating system's
//! media control interface.

#[cfg_attr(not(windows), allow(dead_code))]
pub mod mci;
pub mod recorder;

pub use recorder::Recorder;

pub type Result<T> = std::result::Result<T, Error>;

/// A command that the media control interface refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{command}` failed: {message} (code {code})")]
pub struct Error {
    /// The command string that was sent.
    pub command: String,

    /// The raw status code.
    pub code: u32,

    /// The status code, resolved into something readable.
    pub message: String,
}

/// Anything that can carry out media control commands.
///
/// Implementations don't validate the command text, that's up to the caller.
pub trait Bridge {
    /// Sends `command`, returning whatever text was written back.
    fn send_command(&mut self, command: &str) -> Result<String>;
}

impl<B: Bridge + ?Sized> Bridge for Box<B> {
    fn send_command(&mut self, command: &str) -> Result<String> {
        (**self).send_command(command)
    }
}
