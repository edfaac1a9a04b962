//! A stand-in bridge which never touches the operating system.

use std::{cell::RefCell, rc::Rc};

use super::{Bridge, Error};

/// A failure the [`Recorder`] has been told to produce.
#[derive(Debug, Clone)]
struct Failure {
    /// The verb, like `open`, which should fail.
    verb: String,
    code: u32,
    message: String,
}

/// Shared between clones, so a test can keep a handle after
/// giving the recorder away to a player.
#[derive(Debug, Default)]
struct Inner {
    /// Every command received, in order.
    commands: Vec<String>,
    failures: Vec<Failure>,
}

/// Keeps a log of every command instead of executing it.
///
/// This is what `--dry-run` uses, and what the tests use to see
/// exactly what the player would have sent.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    inner: Rc<RefCell<Inner>>,

    /// Whether to also log each command at info level.
    echo: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder which logs every command it receives.
    pub fn echo() -> Self {
        Self {
            echo: true,
            ..Self::default()
        }
    }

    /// Makes every command starting with `verb` fail with `code` and `message`.
    #[must_use]
    pub fn fail_on(self, verb: &str, code: u32, message: &str) -> Self {
        self.inner.borrow_mut().failures.push(Failure {
            verb: verb.to_owned(),
            code,
            message: message.to_owned(),
        });

        self
    }

    /// All of the commands received so far.
    pub fn commands(&self) -> Vec<String> {
        self.inner.borrow().commands.clone()
    }
}

impl Bridge for Recorder {
    fn send_command(&mut self, command: &str) -> super::Result<String> {
        if self.echo {
            log::info!("{command}");
        }

        let mut inner = self.inner.borrow_mut();
        inner.commands.push(command.to_owned());

        let verb = command.split_whitespace().next().unwrap_or_default();
        match inner.failures.iter().find(|x| x.verb == verb) {
            Some(failure) => Err(Error {
                command: command.to_owned(),
                code: failure.code,
                message: failure.message.clone(),
            }),
            None => Ok(String::new()),
        }
    }
}
