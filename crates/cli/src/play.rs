// Copyright (C) 2025 Red Hat
// SPDX-License-Identifier: Apache-2.0

//! This module is the entrypoint of the logmimic-play command line.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use logmimic_player::{play, Interrupt};

#[derive(Parser)]
#[clap(version, about = "Replay a log file to stdout as a paced live stream")]
struct Cli {
    #[clap(value_name = "FILE", help = "Log file to replay")]
    path: PathBuf,
}

static INTERRUPT: Interrupt = Interrupt::new();

extern "C" fn on_signal(_sig: libc::c_int) {
    INTERRUPT.trigger();
}

// SIGTERM (docker stop) + SIGINT (Ctrl+C) both stop the stream cleanly.
fn install_signal_handler() {
    for sig in [libc::SIGTERM, libc::SIGINT] {
        unsafe {
            libc::signal(sig, on_signal as libc::sighandler_t);
        }
    }
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        // Anything else is a wrong argument count: usage on stdout, exit 1.
        Err(_) => {
            println!("usage: logmimic-play <FILE>");
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    logmimic_cli::init_logging();
    let cli = parse_args();
    install_signal_handler();
    let mut stdout = std::io::stdout().lock();
    let emitted = play(&cli.path, &INTERRUPT, &mut stdout)?;
    tracing::debug!(emitted, "Replay done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_validation() {
        assert!(Cli::try_parse_from(["logmimic-play"]).is_err());
        assert!(Cli::try_parse_from(["logmimic-play", "a.log", "b.log"]).is_err());
        assert!(Cli::try_parse_from(["logmimic-play", "a.log"]).is_ok());
    }
}
