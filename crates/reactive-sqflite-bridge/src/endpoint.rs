// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The `reactive_sqflite` plugin endpoint.
//
// Answers every call with the platform-prefixed OS version ("iOS 17.0").
// Method name and arguments are ignored unless the endpoint is strict, in
// which case only `getPlatformVersion` is answered.

use std::sync::Arc;

use reactive_sqflite_core::config::BridgeConfig;
use reactive_sqflite_core::error::Result;
use reactive_sqflite_core::types::{GET_PLATFORM_VERSION, MethodCall, MethodResult};

use crate::registry::ChannelRegistry;
use crate::traits::{MethodCallHandler, PlatformBridge};

pub struct ReactiveSqflitePlugin {
    bridge: Box<dyn PlatformBridge>,
    strict_methods: bool,
}

impl ReactiveSqflitePlugin {
    /// Plugin backed by the native bridge for the compile target.
    pub fn new(config: &BridgeConfig) -> Self {
        Self::with_bridge(crate::platform_bridge(), config)
    }

    pub fn with_bridge(bridge: Box<dyn PlatformBridge>, config: &BridgeConfig) -> Self {
        Self {
            bridge,
            strict_methods: config.strict_methods,
        }
    }

    /// Create the plugin and attach it to `registry` under the configured
    /// channel name. Call once at startup.
    pub fn register(registry: &ChannelRegistry, config: &BridgeConfig) -> Result<Arc<Self>> {
        Self::register_with_bridge(registry, config, crate::platform_bridge())
    }

    pub fn register_with_bridge(
        registry: &ChannelRegistry,
        config: &BridgeConfig,
        bridge: Box<dyn PlatformBridge>,
    ) -> Result<Arc<Self>> {
        config.validate()?;
        let plugin = Arc::new(Self::with_bridge(bridge, config));
        registry.register(&config.channel_name, plugin.clone())?;
        tracing::info!(
            channel = %config.channel_name,
            platform = plugin.bridge.platform_name(),
            strict = plugin.strict_methods,
            "reactive_sqflite plugin attached"
        );
        Ok(plugin)
    }
}

impl MethodCallHandler for ReactiveSqflitePlugin {
    fn handle(&self, call: &MethodCall) -> MethodResult {
        if self.strict_methods && call.method != GET_PLATFORM_VERSION {
            tracing::debug!(method = %call.method, "strict endpoint: method not implemented");
            return MethodResult::NotImplemented;
        }

        let version = self.bridge.platform_version().to_string();
        tracing::debug!(method = %call.method, %version, "answering with platform version");
        MethodResult::success(version)
    }
}
