//! Embeds the version string printed by `flappy --version` at compile time:
//! build date plus short commit hash, e.g. `2026-08-24 (1a2b3c4)`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn short_commit() -> String {
    // CI sets BUILD_COMMIT; local builds ask git
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let version = format!("{} ({})", build_date(), short_commit());

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(
        Path::new(&out_dir).join("build_info.rs"),
        format!("pub const VERSION: &str = {:?};\n", version),
    )
    .unwrap();

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
