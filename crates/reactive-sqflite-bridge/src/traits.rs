// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the native side of a channel.

use reactive_sqflite_core::error::Result;
use reactive_sqflite_core::types::{MethodCall, MethodResult, PlatformVersion};

/// Placeholder reported when the native SDK cannot tell us the OS version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Access to the native SDK facts the bridge reports.
pub trait PlatformBridge: Send + Sync {
    /// Platform prefix used in version strings (e.g. "iOS", "Android").
    fn platform_name(&self) -> &str;

    /// OS version as reported by the native SDK (e.g. "17.0").
    fn os_version(&self) -> Result<String>;

    /// Platform name and version together. Never fails: an unreadable
    /// version is reported as [`UNKNOWN_VERSION`].
    fn platform_version(&self) -> PlatformVersion {
        let version = self.os_version().unwrap_or_else(|e| {
            tracing::warn!(error = %e, platform = self.platform_name(), "OS version unavailable");
            UNKNOWN_VERSION.to_string()
        });
        PlatformVersion::new(self.platform_name(), version)
    }
}

/// Native handler for every call arriving on one channel.
///
/// Invoked on the host's dispatch thread; must return synchronously.
pub trait MethodCallHandler: Send + Sync {
    fn handle(&self, call: &MethodCall) -> MethodResult;
}

impl<F> MethodCallHandler for F
where
    F: Fn(&MethodCall) -> MethodResult + Send + Sync,
{
    fn handle(&self, call: &MethodCall) -> MethodResult {
        self(call)
    }
}
