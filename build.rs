use std::env;
use std::process::Command;

fn main() {
    let base = env::var("CARGO_PKG_VERSION").unwrap();

    // Dev builds carry the short git hash so a report can name the exact build
    let version = if env::var("PROFILE").as_deref() == Ok("debug") {
        match git_short_hash() {
            Some(hash) => format!("{base}-dev+{hash}"),
            None => base,
        }
    } else {
        base
    };

    println!("cargo:rustc-env=LIMA_SETUP_VERSION={version}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}
