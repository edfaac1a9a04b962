//! A tiny command shell for playing audio files through MCI.
pub mod error;

use std::io::BufReader;

use clap::Parser;
use tokio::signal;
pub use error::{Error, Result};

use crate::{
    bridge::{Bridge, Recorder},
    player::Player,
    session::Alias,
    shell::Shell,
};
pub mod bridge;
pub mod command;
pub mod logging;
pub mod player;
pub mod session;
pub mod shell;
pub mod volume;

/// A tiny command shell for playing audio files through MCI.
#[derive(Parser, Clone)]
#[command(about, version)]
pub struct Args {
    /// Alias to open audio files under.
    #[clap(long, short, default_value_t = Alias::default())]
    alias: Alias,

    /// Log commands instead of sending them to MCI.
    #[clap(long)]
    dry_run: bool,

    /// Include debug logs.
    #[clap(long, short)]
    debug: bool,
}

/// Picks the bridge to send commands through.
fn backend(args: &Args) -> Box<dyn Bridge> {
    #[cfg(windows)]
    if !args.dry_run {
        return Box::new(bridge::mci::Mci::new(bridge::mci::Winmm));
    }

    #[cfg(not(windows))]
    if !args.dry_run {
        log::warn!("MCI is only available on windows, doing a dry run instead");
    }

    Box::new(Recorder::echo())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();
    logging::init(logging::level(
        args.debug,
        args.dry_run || cfg!(not(windows)),
    ));

    let input = shell::input::spawn(BufReader::new(std::io::stdin()))?;
    let player = Player::new(backend(&args), args.alias.clone());

    let shutdown = async {
        if signal::ctrl_c().await.is_err() {
            log::warn!("unable to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    Shell::new(player, std::io::stdout())
        .run(input, shutdown)
        .await?;

    Ok(())
}
