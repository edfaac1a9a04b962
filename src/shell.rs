//! The interactive command loop.

use std::{
    future::Future,
    io::{self, Write},
};

use tokio::{select, sync::mpsc};

use crate::{bridge::Bridge, player::Player, volume, Error};

pub mod input;
mod line;
pub use line::Line;

/// Printed once, when the shell starts.
pub const INTRO: &str = "Welcome to Musically";

pub const PROMPT: &str = "Musically> ";

/// Shown whenever a command needs an open file and there isn't one.
pub const NO_SESSION: &str = "No audio file is playing";

const HELP: &str = "\
commands:
  play <path>     open a file and start playing it
  volume <0-100>  set the volume
  pause           pause playback
  resume          resume playback
  stop            stop playback and close the file
  status          show what's open
  help            show this message
  quit            leave (so does end of input)";

/// Whether the loop should keep going after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads commands line by line and drives a [`Player`] with them.
pub struct Shell<B: Bridge, W: Write> {
    player: Player<B>,

    /// Where prompts & messages are written.
    out: W,
}

impl<B: Bridge, W: Write> Shell<B, W> {
    pub const fn new(player: Player<B>, out: W) -> Self {
        Self { player, out }
    }

    /// Runs until `input` runs dry, a quit command comes in, or `shutdown` completes.
    ///
    /// `input` is usually made with [`input::spawn`]. The open file is
    /// closed on the way out in every one of those cases.
    pub async fn run(
        mut self,
        mut input: mpsc::Receiver<io::Result<String>>,
        shutdown: impl Future<Output = ()>,
    ) -> crate::Result<()> {
        writeln!(self.out, "{INTRO}")?;

        tokio::pin!(shutdown);

        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            let line = select! {
                line = input.recv() => line.transpose()?,
                () = &mut shutdown => None,
            };

            let Some(line) = line else {
                writeln!(self.out)?;
                break;
            };

            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }

        self.player.close()
    }

    /// Runs a single line of input.
    ///
    /// Player errors are reported and swallowed here, only
    /// failing to write output actually stops the shell.
    fn execute(&mut self, line: &str) -> crate::Result<Flow> {
        let result = match Line::parse(line) {
            Line::Play(path) => {
                let played = self.player.play(path);
                if played.is_ok() {
                    writeln!(self.out, "Playing {path}")?;
                }

                played
            }
            Line::Volume(text) => volume::parse(text)
                .map_err(Error::from)
                .and_then(|volume| self.player.set_volume(volume)),
            Line::Pause => self.player.pause(),
            Line::Resume => self.player.resume(),
            Line::Stop => self.player.stop(),
            Line::Status => {
                self.status()?;
                Ok(())
            }
            Line::Help => {
                writeln!(self.out, "{HELP}")?;
                Ok(())
            }
            Line::Quit => return Ok(Flow::Quit),
            Line::Empty => Ok(()),
            Line::Unexpected(verb) => {
                writeln!(self.out, "*** {verb} takes no arguments")?;
                Ok(())
            }
            Line::Missing(verb) => {
                let usage = if verb == "play" { "<path>" } else { "<0-100>" };
                writeln!(self.out, "*** usage: {verb} {usage}")?;
                Ok(())
            }
            Line::Unknown(line) => {
                writeln!(self.out, "*** Unknown syntax: {line}")?;
                Ok(())
            }
        };

        match result {
            Ok(()) => (),
            Err(Error::NoSession) => writeln!(self.out, "{NO_SESSION}")?,
            Err(error) => {
                log::debug!("command {line:?} failed: {error:?}");
                writeln!(self.out, "*** {error}")?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Describes the open file, if any.
    fn status(&mut self) -> crate::Result<()> {
        let Some(session) = self.player.session() else {
            writeln!(self.out, "{NO_SESSION}")?;
            return Ok(());
        };

        let volume = session
            .volume()
            .map_or_else(|| String::from("unchanged"), |x| x.to_string());

        writeln!(
            self.out,
            "{} is {} as {} (volume: {volume})",
            session.path().display(),
            session.state(),
            session.alias(),
        )?;

        Ok(())
    }
}
