//! Reads input lines on their own thread.
//!
//! Blocking reads can't be cancelled, so they're kept off the runtime entirely.
//! Once the shell stops listening, the thread is simply left behind
//! until the process exits.

use std::{
    io::{self, BufRead},
    thread,
};

use tokio::sync::mpsc;

/// Starts reading lines from `reader`, sending each one down the returned channel.
///
/// The channel closes at end of input, or right after a read error is sent.
pub fn spawn(
    reader: impl BufRead + Send + 'static,
) -> io::Result<mpsc::Receiver<io::Result<String>>> {
    let (tx, rx) = mpsc::channel(1);

    thread::Builder::new()
        .name(String::from("input"))
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })?;

    Ok(rx)
}
