// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface of the host shim.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reactive-sqflite-host")]
#[command(about = "Register the reactive_sqflite channel and dispatch method calls to it")]
#[command(version)]
pub struct Cli {
    /// Bridge configuration file (JSON). Defaults apply when it is missing.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the channel name from the configuration.
    #[arg(long, global = true)]
    pub channel: Option<String>,

    /// Only answer getPlatformVersion; other methods are not implemented.
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dispatch one call and print the result envelope.
    Call {
        /// Method name.
        method: String,
        /// Arguments as JSON (omit for none).
        args: Option<String>,
    },
    /// Read one call envelope per stdin line, write one result envelope per
    /// stdout line.
    Serve,
    /// List registered channels.
    Channels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_call_with_args() {
        let cli = Cli::try_parse_from([
            "reactive-sqflite-host",
            "--strict",
            "call",
            "doSomethingElse",
            r#"{"a":1}"#,
        ])
        .expect("parse");
        assert!(cli.strict);
        match cli.command {
            Command::Call { method, args } => {
                assert_eq!(method, "doSomethingElse");
                assert_eq!(args.as_deref(), Some(r#"{"a":1}"#));
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["reactive-sqflite-host", "serve", "--channel", "other"])
            .expect("parse");
        assert_eq!(cli.channel.as_deref(), Some("other"));
        assert!(matches!(cli.command, Command::Serve));
    }
}
