// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the method-channel bridge.

use thiserror::Error;

/// Top-level error type for all bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    // -- Channel registry --
    #[error("channel already registered: {0}")]
    ChannelAlreadyRegistered(String),

    #[error("invalid channel name: {0:?}")]
    InvalidChannelName(String),

    // -- Envelopes / persistence --
    #[error("malformed envelope: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("malformed envelope: {0}")]
    Envelope(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

impl BridgeError {
    /// Stable error code reported back to the caller in an error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::ChannelAlreadyRegistered(_) => "channel_already_registered",
            BridgeError::InvalidChannelName(_) => "invalid_channel_name",
            BridgeError::Codec(_) | BridgeError::Envelope(_) => "malformed_envelope",
            BridgeError::Io(_) => "io_error",
            BridgeError::Config(_) => "config_error",
            BridgeError::Bridge(_) => "bridge_error",
            BridgeError::PlatformUnavailable => "platform_unavailable",
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_errors_convert_from_serde_json() {
        let err: BridgeError = serde_json::from_str::<serde_json::Value>("{")
            .expect_err("truncated json")
            .into();
        assert_eq!(err.code(), "malformed_envelope");
        assert!(err.to_string().starts_with("malformed envelope"));
    }

    #[test]
    fn envelope_shape_errors_share_the_codec_code() {
        let err = BridgeError::Envelope("result envelope must be a JSON array".into());
        assert_eq!(err.code(), "malformed_envelope");
        assert_eq!(
            err.to_string(),
            "malformed envelope: result envelope must be a JSON array"
        );
    }

    #[test]
    fn duplicate_channel_message_names_the_channel() {
        let err = BridgeError::ChannelAlreadyRegistered("reactive_sqflite".into());
        assert_eq!(err.to_string(), "channel already registered: reactive_sqflite");
    }
}
