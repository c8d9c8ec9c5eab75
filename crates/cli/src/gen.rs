// Copyright (C) 2025 Red Hat
// SPDX-License-Identifier: Apache-2.0

//! This module is the entrypoint of the logmimic-gen command line.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use logmimic_generate::{gen_lines, RECORD_COUNT};

#[derive(Parser)]
#[clap(version, about = "Generate synthetic http access-log lines")]
struct Cli {}

fn main() -> Result<()> {
    logmimic_cli::init_logging();
    let _cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for line in gen_lines().take(RECORD_COUNT) {
        writeln!(out, "{}", line).context("Failed to write record")?;
    }
    out.flush().context("Failed to flush records")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        assert!(Cli::try_parse_from(["logmimic-gen"]).is_ok());
        assert!(Cli::try_parse_from(["logmimic-gen", "extra"]).is_err());
    }
}
