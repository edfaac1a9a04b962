//! Splits a line of input into a verb and its argument.

/// A single parsed line of shell input.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Play the file at this path, which may contain spaces.
    Play(&'a str),

    /// Set the volume. Still unparsed, so the error can be reported properly.
    Volume(&'a str),

    Pause,
    Resume,
    Stop,
    Status,
    Help,

    /// Leave the shell.
    Quit,

    /// Nothing but whitespace.
    Empty,

    /// A verb that doesn't take arguments was given some.
    Unexpected(&'a str),

    /// A verb that needs an argument didn't get one.
    Missing(&'a str),

    Unknown(&'a str),
}

impl<'a> Line<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let (verb, argument) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        // Verbs without arguments reject anything trailing them.
        let bare = |parsed: Self| {
            if argument.is_empty() {
                parsed
            } else {
                Self::Unexpected(verb)
            }
        };

        match verb {
            "play" | "volume" if argument.is_empty() => Self::Missing(verb),
            "play" => Self::Play(argument),
            "volume" => Self::Volume(argument),
            "pause" => bare(Self::Pause),
            "resume" => bare(Self::Resume),
            "stop" => bare(Self::Stop),
            "status" => bare(Self::Status),
            "help" | "?" => bare(Self::Help),
            "quit" | "exit" | "EOF" => Self::Quit,
            _ => Self::Unknown(line),
        }
    }
}
