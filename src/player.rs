//! Responsible for playing a single audio file.
//!
//! The [`Player`] turns method calls into MCI commands and keeps track
//! of the one file it has open, making sure that file gets closed again
//! no matter how the player goes away.

use std::path::Path;

use crate::{
    bridge::Bridge,
    command::Command,
    session::{Alias, Session, State},
    volume::Volume,
    Error, Result,
};

/// Main struct responsible for controlling playback.
pub struct Player<B: Bridge> {
    /// Where commands are sent.
    bridge: B,

    /// The alias new sessions are opened under.
    alias: Alias,

    /// The open file, if there is one.
    session: Option<Session>,
}

/// Renders `command` and sends it through `bridge`.
fn send<B: Bridge>(bridge: &mut B, command: Command<'_>) -> Result<String> {
    Ok(bridge.send_command(&command.to_string())?)
}

impl<B: Bridge> Player<B> {
    pub const fn new(bridge: B, alias: Alias) -> Self {
        Self {
            bridge,
            alias,
            session: None,
        }
    }

    /// The currently open file, if any.
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Opens `path` and starts playing it.
    ///
    /// Whatever was open before is closed first. If the file opens but
    /// won't play, it still counts as open and will be closed later.
    pub fn play(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = path.to_string_lossy();
        if text.trim().is_empty() || text.contains('"') {
            return Err(Error::InvalidPath(text.into_owned()));
        }

        if let Some(previous) = self.session.take() {
            self.release(&previous)?;
        }

        send(
            &mut self.bridge,
            Command::Open {
                path,
                alias: &self.alias,
            },
        )?;

        log::debug!("opened {} as {}", path.display(), self.alias);
        let session = self
            .session
            .insert(Session::new(path.to_path_buf(), self.alias.clone()));

        send(&mut self.bridge, Command::Play(&session.alias))?;
        session.state = State::Playing;

        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(Error::NoSession)?;
        send(&mut self.bridge, Command::Pause(&session.alias))?;
        session.state = State::Paused;

        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(Error::NoSession)?;
        send(&mut self.bridge, Command::Resume(&session.alias))?;
        session.state = State::Playing;

        Ok(())
    }

    /// Stops playback and closes the file.
    pub fn stop(&mut self) -> Result<()> {
        let session = self.session.take().ok_or(Error::NoSession)?;

        // The file gets closed even if it refuses to stop.
        let stopped = send(&mut self.bridge, Command::Stop(&session.alias));
        if let Err(error) = self.release(&session) {
            if let Err(stopping) = &stopped {
                log::warn!("unable to stop audio file: {stopping}");
            }

            return Err(error);
        }

        stopped.map(drop)
    }

    /// Sets the volume, from 0 to 100.
    ///
    /// The range is checked before anything else, so an invalid
    /// volume never reaches the bridge.
    pub fn set_volume(&mut self, volume: i64) -> Result<()> {
        let volume = Volume::try_from(volume)?;
        let session = self.session.as_mut().ok_or(Error::NoSession)?;

        send(
            &mut self.bridge,
            Command::SetAudio {
                alias: &session.alias,
                level: volume.native(),
            },
        )?;
        session.volume = Some(volume);

        Ok(())
    }

    /// Closes the open file, if there is one.
    ///
    /// Dropping the player does this too, but can't report failures.
    pub fn close(&mut self) -> Result<()> {
        match self.session.take() {
            Some(session) => self.release(&session),
            None => Ok(()),
        }
    }

    /// Sends the `close` for a session which has already been taken out of `self`.
    fn release(&mut self, session: &Session) -> Result<()> {
        log::debug!("closing {}", session.alias);
        send(&mut self.bridge, Command::Close(&session.alias)).map(drop)
    }
}

impl<B: Bridge> Drop for Player<B> {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            log::warn!("unable to close audio file: {error}");
        }
    }
}
