// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the method-channel bridge.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BridgeError, Result};

/// Channel the `reactive_sqflite` plugin answers on.
pub const DEFAULT_CHANNEL: &str = "reactive_sqflite";

/// The one method the plugin documents. Lenient endpoints answer any name.
pub const GET_PLATFORM_VERSION: &str = "getPlatformVersion";

/// A single named request sent over a channel.
///
/// Arguments are opaque to the bridge; `Value::Null` stands for "no arguments".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, rename = "args")]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// A call with no arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }

    /// Decode a call envelope: `{"method": "...", "args": ...}`.
    pub fn from_envelope(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_envelope(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Outcome of one invocation, handed back to the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResult {
    Success(Value),
    Error {
        code: String,
        message: Option<String>,
        details: Value,
    },
    /// No handler claimed the call (unknown channel, or unknown method on a
    /// strict endpoint).
    NotImplemented,
}

impl MethodResult {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success(value.into())
    }

    /// The success payload as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Success(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Encode as a result envelope.
    ///
    /// Success is `[value]`, error is `[code, message, details]`, and
    /// not-implemented is the empty array.
    pub fn to_envelope(&self) -> Result<Vec<u8>> {
        let envelope = match self {
            Self::Success(value) => Value::Array(vec![value.clone()]),
            Self::Error {
                code,
                message,
                details,
            } => Value::Array(vec![
                Value::String(code.clone()),
                message.clone().map(Value::String).unwrap_or(Value::Null),
                details.clone(),
            ]),
            Self::NotImplemented => Value::Array(Vec::new()),
        };
        Ok(serde_json::to_vec(&envelope)?)
    }

    pub fn from_envelope(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        let Value::Array(mut items) = value else {
            return Err(BridgeError::Envelope(
                "result envelope must be a JSON array".into(),
            ));
        };
        match items.len() {
            0 => Ok(Self::NotImplemented),
            1 => Ok(Self::Success(items.remove(0))),
            3 => {
                let details = items.pop().unwrap_or(Value::Null);
                let message = match items.pop() {
                    Some(Value::String(m)) => Some(m),
                    Some(Value::Null) | None => None,
                    Some(other) => {
                        return Err(BridgeError::Envelope(format!(
                            "error envelope message must be a string or null, got {other}"
                        )));
                    }
                };
                let code = match items.pop() {
                    Some(Value::String(c)) => c,
                    other => {
                        return Err(BridgeError::Envelope(format!(
                            "error envelope code must be a string, got {other:?}"
                        )));
                    }
                };
                Ok(Self::Error {
                    code,
                    message,
                    details,
                })
            }
            n => Err(BridgeError::Envelope(format!(
                "result envelope has {n} elements, expected 0, 1 or 3"
            ))),
        }
    }
}

impl From<&BridgeError> for MethodResult {
    fn from(err: &BridgeError) -> Self {
        Self::Error {
            code: err.code().to_string(),
            message: Some(err.to_string()),
            details: Value::Null,
        }
    }
}

/// Platform name plus OS version, e.g. `iOS 17.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformVersion {
    pub platform: String,
    pub version: String,
}

impl PlatformVersion {
    pub fn new(platform: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.platform, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_envelope_without_args_decodes_to_null() {
        let call = MethodCall::from_envelope(br#"{"method":"getPlatformVersion"}"#)
            .expect("decode");
        assert_eq!(call, MethodCall::bare(GET_PLATFORM_VERSION));
    }

    #[test]
    fn call_envelope_keeps_opaque_args() {
        let call = MethodCall::from_envelope(
            br#"{"method":"doSomethingElse","args":{"sql":"SELECT 1","n":[1,2]}}"#,
        )
        .expect("decode");
        assert_eq!(call.method, "doSomethingElse");
        assert_eq!(call.arguments, json!({"sql": "SELECT 1", "n": [1, 2]}));
    }

    #[test]
    fn call_envelope_missing_method_is_rejected() {
        let err = MethodCall::from_envelope(br#"{"args":1}"#).expect_err("no method");
        assert!(matches!(err, BridgeError::Codec(_)));
    }

    #[test]
    fn success_envelope_wraps_value() {
        let bytes = MethodResult::success("iOS 17.0").to_envelope().expect("encode");
        assert_eq!(bytes, br#"["iOS 17.0"]"#);
    }

    #[test]
    fn error_envelope_layout() {
        let result = MethodResult::Error {
            code: "bad_args".into(),
            message: None,
            details: json!({"field": "sql"}),
        };
        let bytes = result.to_envelope().expect("encode");
        assert_eq!(bytes, br#"["bad_args",null,{"field":"sql"}]"#);
        assert_eq!(MethodResult::from_envelope(&bytes).expect("decode"), result);
    }

    #[test]
    fn not_implemented_is_empty_array() {
        let bytes = MethodResult::NotImplemented.to_envelope().expect("encode");
        assert_eq!(bytes, b"[]");
        assert_eq!(
            MethodResult::from_envelope(&bytes).expect("decode"),
            MethodResult::NotImplemented
        );
    }

    #[test]
    fn result_envelope_with_two_elements_is_rejected() {
        assert!(matches!(
            MethodResult::from_envelope(br#"["a","b"]"#),
            Err(BridgeError::Envelope(_))
        ));
        assert!(matches!(
            MethodResult::from_envelope(br#"{"a":1}"#),
            Err(BridgeError::Envelope(_))
        ));
    }

    #[test]
    fn error_envelope_with_non_string_message_is_rejected() {
        let err = MethodResult::from_envelope(br#"["c",5,null]"#).expect_err("numeric message");
        assert!(matches!(err, BridgeError::Envelope(_)));
        assert_eq!(err.code(), "malformed_envelope");
    }

    #[test]
    fn error_envelope_with_non_string_code_is_rejected() {
        let err = MethodResult::from_envelope(br#"[7,"boom",null]"#).expect_err("numeric code");
        assert!(matches!(err, BridgeError::Envelope(_)));
    }

    #[test]
    fn call_envelope_encodes_args_under_args_key() {
        let call = MethodCall::new("query", json!({"sql": "SELECT 1"}));
        let bytes = call.to_envelope().expect("encode");
        assert_eq!(bytes, br#"{"method":"query","args":{"sql":"SELECT 1"}}"#);
        assert_eq!(MethodCall::from_envelope(&bytes).expect("decode"), call);
    }

    #[test]
    fn bridge_error_becomes_error_result() {
        let result = MethodResult::from(&BridgeError::PlatformUnavailable);
        match result {
            MethodResult::Error { code, message, .. } => {
                assert_eq!(code, "platform_unavailable");
                assert_eq!(
                    message.as_deref(),
                    Some("feature not available on this platform")
                );
            }
            other => panic!("expected error result, got {other:?}"),
        }
    }

    #[test]
    fn platform_version_display() {
        assert_eq!(PlatformVersion::new("iOS", "17.0").to_string(), "iOS 17.0");
    }
}
