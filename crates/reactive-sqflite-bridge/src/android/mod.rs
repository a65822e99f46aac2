// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. The OS version is the static field
// `android.os.Build.VERSION.RELEASE`, read through the JavaVM published by
// the NDK glue in `ndk_context`.

#![cfg(target_os = "android")]

use jni::objects::JString;
use jni::{JNIEnv, JavaVM};

use reactive_sqflite_core::error::{BridgeError, Result};

use crate::traits::*;

const BUILD_VERSION_CLASS: &str = "android/os/Build$VERSION";
const JAVA_STRING_SIG: &str = "Ljava/lang/String;";

/// Convenience: map any `jni::errors::Error` into `BridgeError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> BridgeError {
    BridgeError::Bridge(format!("{context}: {e}"))
}

/// Run `f` with a [`JNIEnv`] attached to the current thread.
///
/// The `JavaVM*` comes from `ndk_context::android_context()`, set by
/// `android_main` or `ANativeActivity_onCreate`. The thread is detached again
/// when the guard drops, unless it was already attached.
fn with_env<T>(f: impl FnOnce(&mut JNIEnv) -> Result<T>) -> Result<T> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| jni_err("failed to obtain JavaVM", e))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| jni_err("failed to attach JNI thread", e))?;
    f(&mut *env)
}

/// Android implementation of the platform bridge.
///
/// Zero-sized; the first JNI call happens lazily when the version is read.
pub struct AndroidBridge;

impl AndroidBridge {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }

    fn os_version(&self) -> Result<String> {
        with_env(|env| {
            let release = env
                .get_static_field(BUILD_VERSION_CLASS, "RELEASE", JAVA_STRING_SIG)
                .and_then(|v| v.l())
                .map_err(|e| jni_err("Build.VERSION.RELEASE", e))?;
            if release.is_null() {
                return Err(BridgeError::Bridge("Build.VERSION.RELEASE is null".into()));
            }
            let release = JString::from(release);
            let version: String = env
                .get_string(&release)
                .map_err(|e| jni_err("reading Build.VERSION.RELEASE", e))?
                .into();
            tracing::debug!(version, "Android: Build.VERSION.RELEASE");
            Ok(version)
        })
    }
}
