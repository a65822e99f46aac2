// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! reactive_sqflite — Native side of the method-channel bridge.
//!
//! The host runtime routes every call on a channel to the handler registered
//! under that name in the [`registry::ChannelRegistry`]. The
//! [`endpoint::ReactiveSqflitePlugin`] answers on `reactive_sqflite` with the
//! device OS version, which it reads through the [`traits::PlatformBridge`]
//! for the compile target (UIKit on iOS, JNI on Android, `os_info` elsewhere).

pub mod endpoint;
pub mod registry;
pub mod traits;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod stub;

pub use endpoint::ReactiveSqflitePlugin;
pub use registry::ChannelRegistry;
pub use traits::{MethodCallHandler, PlatformBridge};

/// Retrieves the bridge implementation for the target operating system.
pub fn platform_bridge() -> Box<dyn PlatformBridge> {
    #[cfg(target_os = "ios")]
    {
        // iOS: UIDevice / NSProcessInfo through `objc2`.
        Box::new(ios::IosBridge::new())
    }
    #[cfg(target_os = "android")]
    {
        // Android: android.os.Build through `jni-rs`.
        Box::new(android::AndroidBridge::new())
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        // DESKTOP/CI: host OS details from `os_info`.
        Box::new(stub::StubBridge::new())
    }
}
