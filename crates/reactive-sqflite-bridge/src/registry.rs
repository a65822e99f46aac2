// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel registry: the explicit map from channel name to native handler.
//
// Populated once at startup and read by the host shim on every call.
// Handlers run under a read lock only for the lookup; the call itself happens
// on a cloned `Arc`, so concurrent dispatches never contend on a handler.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use reactive_sqflite_core::error::{BridgeError, Result};
use reactive_sqflite_core::types::{MethodCall, MethodResult};

use crate::traits::MethodCallHandler;

/// Maps channel names to the handler that answers them.
#[derive(Default)]
pub struct ChannelRegistry {
    handlers: RwLock<HashMap<String, Arc<dyn MethodCallHandler>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` to `channel`.
    ///
    /// Channel names are unique: a second registration fails with
    /// `ChannelAlreadyRegistered` and the first handler stays in place.
    pub fn register(&self, channel: &str, handler: Arc<dyn MethodCallHandler>) -> Result<()> {
        if channel.trim().is_empty() {
            return Err(BridgeError::InvalidChannelName(channel.to_string()));
        }

        let mut handlers = self.handlers.write().expect("channel registry lock poisoned");
        if handlers.contains_key(channel) {
            tracing::warn!(channel, "duplicate channel registration rejected");
            return Err(BridgeError::ChannelAlreadyRegistered(channel.to_string()));
        }
        handlers.insert(channel.to_string(), handler);
        tracing::info!(channel, "method channel registered");
        Ok(())
    }

    pub fn handler(&self, channel: &str) -> Option<Arc<dyn MethodCallHandler>> {
        self.handlers
            .read()
            .expect("channel registry lock poisoned")
            .get(channel)
            .cloned()
    }

    pub fn is_registered(&self, channel: &str) -> bool {
        self.handlers
            .read()
            .expect("channel registry lock poisoned")
            .contains_key(channel)
    }

    /// Registered channel names, sorted.
    pub fn channels(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handlers
            .read()
            .expect("channel registry lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Route `call` to the handler on `channel`.
    ///
    /// A channel nobody registered answers `NotImplemented`, the same reply
    /// the host runtime gives for unclaimed calls.
    pub fn dispatch(&self, channel: &str, call: &MethodCall) -> MethodResult {
        match self.handler(channel) {
            Some(handler) => {
                tracing::debug!(channel, method = %call.method, "dispatching method call");
                handler.handle(call)
            }
            None => {
                tracing::debug!(channel, method = %call.method, "no handler for channel");
                MethodResult::NotImplemented
            }
        }
    }

    /// Decode a call envelope, dispatch it, and encode the result envelope.
    ///
    /// Only a malformed call envelope is an `Err`; everything the handler
    /// says (including errors) travels back inside the envelope.
    pub fn dispatch_envelope(&self, channel: &str, envelope: &[u8]) -> Result<Vec<u8>> {
        let call = MethodCall::from_envelope(envelope).inspect_err(|e| {
            tracing::warn!(channel, error = %e, "rejecting malformed call envelope");
        })?;
        self.dispatch(channel, &call).to_envelope()
    }
}

/// Process-wide registry used by the host shim.
pub fn global() -> &'static ChannelRegistry {
    static REGISTRY: OnceLock<ChannelRegistry> = OnceLock::new();
    REGISTRY.get_or_init(ChannelRegistry::new)
}
