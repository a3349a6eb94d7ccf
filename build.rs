//! Stamps the `crease --version` line with the short commit and build date.
//!
//! Both values fall back to something printable so a tarball build without
//! git still compiles.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const UNKNOWN_COMMIT: &str = "unknown";

fn commit_hash() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|hash| hash.trim().to_string())
        // build_info tests expect exactly seven hex chars or the fallback
        .filter(|hash| hash.len() == 7)
        .unwrap_or_else(|| UNKNOWN_COMMIT.to_string())
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        commit_hash(),
        build_date()
    );

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)
        .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
