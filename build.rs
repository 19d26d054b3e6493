//! Build script for shadowgrain.
//!
//! Emits build-time notes about feature selection so embedders notice
//! granule-mode mismatches early.

use std::env;

fn main() {
    // Re-run if features change
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_WIDE_GRANULE");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_LOG");

    let wide_granule = env::var("CARGO_FEATURE_WIDE_GRANULE").is_ok();
    let log_enabled = env::var("CARGO_FEATURE_LOG").is_ok();

    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let is_release = profile == "release";

    if wide_granule {
        emit_info("Wide granules enabled (128 bytes per shadow byte)");
        emit_note("Fully unaddressable granules encode as the 0xff sentinel;");
        emit_note("poison tags are not recoverable from shadow bytes in this mode.");
        emit_note("The instrumentation and report consumers must be built for");
        emit_note("the same granule size.");
    }

    if log_enabled && is_release {
        emit_info("Log integration enabled in a release build");
        emit_note("Trace records fire on every poisoning entry point; keep the");
        emit_note("trace level filtered out on allocation-heavy workloads.");
    }

    if is_release {
        emit_note("Release builds skip the poison-gate contract checks");
        emit_note("(debug assertions only).");
    }
}

fn emit_info(msg: &str) {
    println!("cargo:warning=[shadowgrain] {}", msg);
}

fn emit_note(msg: &str) {
    println!("cargo:warning=[shadowgrain]    {}", msg);
}
