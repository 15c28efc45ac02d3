//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dailypick_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    let manifest = dailypick_core::extension_manifest();
    println!("dailypick_core version={}", dailypick_core::core_version());
    println!("extension id={} name={:?}", manifest.id, manifest.name);
    println!("capabilities={}", manifest.capabilities.join(","));
}
