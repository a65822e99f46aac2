// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS platform bridge via objc2.
//
// Requires compilation with the iOS SDK (Xcode). The OS version comes from
// `UIDevice.currentDevice.systemVersion`, which UIKit only allows on the main
// thread. Calls dispatched from any other thread fall back to
// `NSProcessInfo.operatingSystemVersion`, which is thread-safe and formatted
// the same way.

#![cfg(target_os = "ios")]

use objc2::MainThreadMarker;
use objc2_foundation::{NSOperatingSystemVersion, NSProcessInfo};
use objc2_ui_kit::UIDevice;

use reactive_sqflite_core::error::{BridgeError, Result};

use crate::traits::*;

/// iOS implementation of the platform bridge. Zero-sized; all state lives
/// in UIKit.
pub struct IosBridge;

impl IosBridge {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IosBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an `NSOperatingSystemVersion` the way UIKit prints `systemVersion`:
/// the patch component is omitted when it is zero.
fn format_os_version(v: NSOperatingSystemVersion) -> String {
    if v.patchVersion == 0 {
        format!("{}.{}", v.majorVersion, v.minorVersion)
    } else {
        format!("{}.{}.{}", v.majorVersion, v.minorVersion, v.patchVersion)
    }
}

impl PlatformBridge for IosBridge {
    fn platform_name(&self) -> &str {
        "iOS"
    }

    fn os_version(&self) -> Result<String> {
        if let Some(mtm) = MainThreadMarker::new() {
            // SAFETY: currentDevice / systemVersion are plain UIKit property
            // reads; MainThreadMarker proves we are on the main thread.
            let version = unsafe { UIDevice::currentDevice(mtm).systemVersion() };
            let version = version.to_string();
            if version.is_empty() {
                return Err(BridgeError::Bridge("UIDevice reported an empty systemVersion".into()));
            }
            tracing::debug!(version, "iOS: systemVersion from UIDevice");
            return Ok(version);
        }

        tracing::debug!("iOS: off main thread, reading NSProcessInfo");
        let info = NSProcessInfo::processInfo();
        Ok(format_os_version(info.operatingSystemVersion()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_name() {
        let bridge = IosBridge::new();
        assert_eq!(bridge.platform_name(), "iOS");
    }

    #[test]
    fn zero_patch_is_omitted() {
        let v = NSOperatingSystemVersion {
            majorVersion: 17,
            minorVersion: 0,
            patchVersion: 0,
        };
        assert_eq!(format_os_version(v), "17.0");
    }

    #[test]
    fn nonzero_patch_is_kept() {
        let v = NSOperatingSystemVersion {
            majorVersion: 17,
            minorVersion: 4,
            patchVersion: 1,
        };
        assert_eq!(format_os_version(v), "17.4.1");
    }

    // UIDevice reads need a running app on the main thread; they are
    // exercised in the Xcode test target rather than via `cargo test`.
}
