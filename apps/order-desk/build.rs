//! Build Script for Order Desk
//!
//! Emits the `coverage` cfg when built under cargo-llvm-cov so code can use
//! `#[cfg(coverage)]` / `#[cfg(not(coverage))]`.

use std::env;

fn main() {
    // Set profile file pattern for coverage runs
    #[cfg(coverage)]
    {
        println!("cargo:rustc-env=LLVM_PROFILE_FILE=coverage-%p-%m.profraw");
    }

    println!("cargo:rerun-if-changed=build.rs");

    if env::var("CARGO_LLVM_COV").is_ok()
        || env::var("LLVM_PROFILE_FILE").is_ok()
        || env::var("RUSTFLAGS")
            .map(|f| f.contains("instrument-coverage"))
            .unwrap_or(false)
    {
        println!("cargo:rustc-cfg=coverage");
    }
}
