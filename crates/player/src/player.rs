// Copyright (C) 2025 Red Hat
// SPDX-License-Identifier: Apache-2.0

//! This library replays a log file as a paced stream for the [logmimic](https://github.com/logmimic/logmimic) project.
//!
//! The file is loaded fully into memory as terminator-preserving [Bytes]
//! lines, then [stream] writes them one by one, sleeping the pacing delay and
//! flushing after each line so a downstream pipe sees them immediately. The
//! loop polls an [Interrupt] token between lines:
//!
//! ```rust
//! use logmimic_player::{stream, Interrupt};
//! # fn main() -> Result<(), logmimic_player::PlayerError> {
//! let lines = vec![bytes::Bytes::from("first\n"), bytes::Bytes::from("second\n")];
//! let mut out = Vec::new();
//! let count = stream(&lines, std::time::Duration::ZERO, &Interrupt::new(), &mut out)?;
//! assert_eq!(count, 2);
//! assert_eq!(out, b"first\nsecond\n");
//! # Ok(()) }
//! ```

use bytes::Bytes;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;

/// The fixed wait between two emitted lines.
pub const PACING_DELAY: Duration = Duration::from_millis(100);

/// The player failure modes. Interruption is not one of them.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The file is missing or unreadable.
    #[error("cannot read {0:?}: {1}")]
    FileAccess(PathBuf, #[source] std::io::Error),

    /// Writing to the output stream failed.
    #[error("output failed: {0}")]
    Output(#[from] std::io::Error),
}

/// A cooperative stop flag, polled between line emissions.
///
/// The binary trips it from a signal handler, tests trip it directly.
pub struct Interrupt(AtomicBool);

impl Interrupt {
    /// Creates an untripped token. `const` so it can back a static.
    pub const fn new() -> Interrupt {
        Interrupt(AtomicBool::new(false))
    }

    /// Requests the streaming loop to stop.
    pub fn trigger(&self) {
        self.0.store(true, Ordering::Relaxed)
    }

    /// True once [Interrupt::trigger] was called.
    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for Interrupt {
    fn default() -> Self {
        Interrupt::new()
    }
}

enum LogReader {
    Flat(File),
    Gz(GzDecoder<File>),
}

impl Read for LogReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            LogReader::Flat(r) => r.read(buf),
            LogReader::Gz(r) => r.read(buf),
        }
    }
}

fn open(path: &Path) -> std::io::Result<LogReader> {
    let fp = File::open(path)?;
    Ok(
        match path.extension().and_then(std::ffi::OsStr::to_str) {
            Some("gz") => LogReader::Gz(GzDecoder::new(fp)),
            _ => LogReader::Flat(fp),
        },
    )
}

/// Loads the whole file as lines, keeping the content byte-for-byte: line
/// terminators stay attached and a final unterminated line is kept as is.
/// Files ending in `.gz` are decompressed transparently.
pub fn read_lines(path: &Path) -> Result<Vec<Bytes>, PlayerError> {
    tracing::debug!(path = path.to_str(), "Reading file");
    let mut buf = Vec::new();
    open(path)
        .and_then(|mut reader| reader.read_to_end(&mut buf))
        .map_err(|e| PlayerError::FileAccess(path.to_path_buf(), e))?;
    Ok(split_lines(Bytes::from(buf)))
}

// Zero copy split, each slice keeping its terminator.
fn split_lines(mut buf: Bytes) -> Vec<Bytes> {
    let mut lines = Vec::new();
    while !buf.is_empty() {
        let end = match buf.iter().position(|b| *b == b'\n') {
            Some(pos) => pos + 1,
            None => buf.len(),
        };
        lines.push(buf.split_to(end));
    }
    lines
}

/// Emits each line in order: write, wait, flush. Stops early when the
/// interrupt token is tripped and reports how many lines went out.
pub fn stream<W: Write>(
    lines: &[Bytes],
    delay: Duration,
    interrupt: &Interrupt,
    out: &mut W,
) -> Result<usize, PlayerError> {
    let mut emitted = 0;
    for line in lines {
        if interrupt.is_triggered() {
            tracing::debug!(emitted, "Interrupted");
            break;
        }
        out.write_all(line)?;
        std::thread::sleep(delay);
        out.flush()?;
        emitted += 1;
    }
    Ok(emitted)
}

/// Replays the file at the fixed pace.
pub fn play<W: Write>(
    path: &Path,
    interrupt: &Interrupt,
    out: &mut W,
) -> Result<usize, PlayerError> {
    let lines = read_lines(path)?;
    tracing::debug!(lines = lines.len(), "Streaming");
    stream(&lines, PACING_DELAY, interrupt, out)
}
