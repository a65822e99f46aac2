// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// reactive_sqflite host shim.
//
// Entry point. Initialises logging, loads configuration, registers the plugin
// on its channel exactly once, then dispatches calls. Logs go to stderr so
// stdout carries nothing but result envelopes.

mod cli;
mod shim;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use reactive_sqflite_bridge::{ReactiveSqflitePlugin, registry};
use reactive_sqflite_core::error::Result;

use cli::{Cli, Command};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "reactive_sqflite host failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = shim::load_config(cli.config.as_deref(), cli.channel.as_deref(), cli.strict)?;
    let registry = registry::global();
    ReactiveSqflitePlugin::register(registry, &config)?;

    let channel = config.channel_name.as_str();
    let stdout = std::io::stdout();
    match cli.command {
        Command::Call { method, args } => {
            let reply = shim::call(registry, channel, &method, args.as_deref())?;
            let mut out = stdout.lock();
            out.write_all(&reply)?;
            out.write_all(b"\n")?;
        }
        Command::Serve => {
            tracing::info!(channel, "serving call envelopes from stdin");
            shim::serve(registry, channel, std::io::stdin().lock(), stdout.lock())?;
        }
        Command::Channels => shim::list_channels(registry, stdout.lock())?,
    }
    Ok(())
}
