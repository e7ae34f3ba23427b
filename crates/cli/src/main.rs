// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverlog CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The hand history file to report.
    file: PathBuf,
    /// Skip the win probability annotations.
    #[clap(long)]
    no_equity: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let hands = riverlog_replay::read_hands(&cli.file, !cli.no_equity)?;
    info!("Replayed {} hands from {}", hands.len(), cli.file.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for hand in &hands {
        report::render(&mut out, hand)?;
    }

    Ok(())
}
