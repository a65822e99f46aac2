// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native mobile APIs are unavailable.
//
// Reports the host OS through `os_info` so the channel still answers
// off-device.

use reactive_sqflite_core::error::{BridgeError, Result};

use crate::traits::*;

/// Bridge returned on non-mobile platforms.
pub struct StubBridge {
    name: String,
    version: os_info::Version,
}

impl StubBridge {
    pub fn new() -> Self {
        let info = os_info::get();
        tracing::debug!(os = %info, "stub bridge using host OS details");
        Self {
            name: info.os_type().to_string(),
            version: info.version().clone(),
        }
    }
}

impl Default for StubBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        &self.name
    }

    fn os_version(&self) -> Result<String> {
        if self.version == os_info::Version::Unknown {
            tracing::warn!("PlatformBridge::os_version: host OS version unknown");
            return Err(BridgeError::PlatformUnavailable);
        }
        Ok(self.version.to_string())
    }
}
