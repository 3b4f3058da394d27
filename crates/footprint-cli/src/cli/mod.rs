//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use footprint::{classify, InputKind, ProbeConfig};
use std::io::{self, Write};

use crate::output;

/// Usage line shown when no input is given.
pub const USAGE: &str = "Usage: footprint <ip | username>";

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    crate::logging::init(cli.verbose);

    let Some(raw) = cli.input.as_deref() else {
        println!("{USAGE}");
        return Ok(());
    };

    let input = match classify(raw) {
        Ok(input) => input,
        Err(e) => {
            println!("Error: {e}");
            return Ok(());
        }
    };

    let ctx = commands::Context {
        explain: cli.explain,
        details: cli.details,
        probe: ProbeConfig::new().max_concurrent(cli.concurrency),
    };

    println!("Input Type: {}", input.kind);

    match input.kind {
        InputKind::Ip => commands::ip::execute(&ctx, &input.value).await?,
        InputKind::Username => commands::username::execute(&ctx, &input.value).await?,
    }

    let mut out = io::stdout().lock();
    output::write_awareness_footer(&mut out)?;
    out.flush()?;

    Ok(())
}
