//! The Windows Media Control Interface.
//!
//! MCI reports failures as a bare status code, which has to be turned
//! into text with a second call. [`Mci`] does both so callers only
//! ever see a single [`Result`](super::Result).

use super::{Bridge, Error};

/// Size of the buffers handed to MCI, in UTF-16 units.
pub const BUFFER_SIZE: usize = 256;

/// The two raw calls MCI's string interface consists of.
pub trait Native {
    /// Sends `command`, writing any reply into `response`.
    /// Returns the status code, which is zero on success.
    fn send_string(&self, command: &str, response: &mut [u16]) -> u32;

    /// Writes the description of `code` into `text`.
    /// Returns `false` if the code isn't known.
    fn error_string(&self, code: u32, text: &mut [u16]) -> bool;
}

/// A [`Bridge`] over any [`Native`] MCI implementation.
pub struct Mci<N> {
    native: N,
}

impl<N: Native> Mci<N> {
    pub const fn new(native: N) -> Self {
        Self { native }
    }

    /// Resolves `code` into an [`Error`] for `command`.
    fn error(&self, command: &str, code: u32) -> Error {
        let mut text = [0; BUFFER_SIZE];
        let message = if self.native.error_string(code, &mut text) {
            decode(&text)
        } else {
            String::from("unknown MCI error")
        };

        Error {
            command: command.to_owned(),
            code,
            message,
        }
    }
}

impl<N: Native> Bridge for Mci<N> {
    fn send_command(&mut self, command: &str) -> super::Result<String> {
        log::debug!("mci: sending {command:?}");

        let mut response = [0; BUFFER_SIZE];
        let code = self.native.send_string(command, &mut response);
        if code != 0 {
            let error = self.error(command, code);
            log::debug!("mci: {error}");
            return Err(error);
        }

        Ok(decode(&response))
    }
}

/// Reads a NUL terminated UTF-16 buffer. A full buffer without a NUL is read whole.
pub fn decode(buffer: &[u16]) -> String {
    let end = buffer.iter().position(|x| *x == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..end])
}

/// The real thing, from `winmm.dll`.
#[cfg(windows)]
pub struct Winmm;

#[cfg(windows)]
impl Native for Winmm {
    fn send_string(&self, command: &str, response: &mut [u16]) -> u32 {
        use windows::{core::HSTRING, Win32::Foundation::HWND, Win32::Media::Multimedia};

        let command = HSTRING::from(command);

        // SAFETY: `command` is a valid wide string and the response length is
        // taken from the slice itself, so MCI can't write past it.
        unsafe { Multimedia::mciSendStringW(&command, Some(response), HWND::default()) }
    }

    fn error_string(&self, code: u32, text: &mut [u16]) -> bool {
        use windows::Win32::Media::Multimedia;

        // SAFETY: See `send_string`.
        unsafe { Multimedia::mciGetErrorStringW(code, text).as_bool() }
    }
}
