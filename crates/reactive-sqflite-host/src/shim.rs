// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host-side plumbing: configuration loading, single calls, and the
// line-oriented envelope loop.

use std::io::{BufRead, Write};
use std::path::Path;

use serde_json::Value;

use reactive_sqflite_bridge::ChannelRegistry;
use reactive_sqflite_core::config::BridgeConfig;
use reactive_sqflite_core::error::Result;
use reactive_sqflite_core::types::{MethodCall, MethodResult};

/// Load the configuration file (if any) and apply command-line overrides.
pub fn load_config(path: Option<&Path>, channel: Option<&str>, strict: bool) -> Result<BridgeConfig> {
    let mut config = match path {
        Some(path) => BridgeConfig::load(path)?,
        None => BridgeConfig::default(),
    };
    if let Some(channel) = channel {
        config.channel_name = channel.to_string();
    }
    config.strict_methods |= strict;
    config.validate()?;
    Ok(config)
}

/// Dispatch one call and return its result envelope.
pub fn call(
    registry: &ChannelRegistry,
    channel: &str,
    method: &str,
    args: Option<&str>,
) -> Result<Vec<u8>> {
    let arguments = match args {
        Some(raw) => serde_json::from_str(raw)?,
        None => Value::Null,
    };
    let call = MethodCall::new(method, arguments);
    registry.dispatch(channel, &call).to_envelope()
}

/// Answer call envelopes line by line until `input` is exhausted.
///
/// Lines are handed over as raw bytes, so a malformed line (bad JSON or not
/// even UTF-8) gets an error envelope and the caller stays in step. Blank
/// lines are skipped. Only an I/O error ends the loop early. Returns the
/// number of envelopes answered.
pub fn serve<R: BufRead, W: Write>(
    registry: &ChannelRegistry,
    channel: &str,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut answered = 0;
    for line in input.split(b'\n') {
        let line = line?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let reply = match registry.dispatch_envelope(channel, line) {
            Ok(reply) => reply,
            Err(e) => MethodResult::from(&e).to_envelope()?,
        };
        output.write_all(&reply)?;
        output.write_all(b"\n")?;
        output.flush()?;
        answered += 1;
    }
    tracing::info!(channel, answered, "input closed");
    Ok(answered)
}

/// Write the registered channel names, one per line.
pub fn list_channels<W: Write>(registry: &ChannelRegistry, mut output: W) -> Result<()> {
    for name in registry.channels() {
        writeln!(output, "{name}")?;
    }
    Ok(())
}
