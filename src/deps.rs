use std::process::{Command, Stdio};

use crate::error::{Result, SetupError};

const BREW_INSTALL_SCRIPT: &str =
    "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)";

/// Confirm or install both external tools. Homebrew strictly first, since
/// limactl is installed through it.
pub fn ensure_all() -> Result<()> {
    ensure_homebrew()?;
    ensure_limactl()
}

pub fn ensure_homebrew() -> Result<()> {
    if version_check("brew") {
        return Ok(());
    }

    println!("Homebrew is not installed. Installing...");
    let status = Command::new("/bin/bash")
        .args(["-c", BREW_INSTALL_SCRIPT])
        .status()
        .map_err(|e| SetupError::BrewInstall(e.to_string()))?;

    if !status.success() {
        return Err(SetupError::BrewInstall(format!(
            "installer exited with {status}"
        )));
    }

    Ok(())
}

pub fn ensure_limactl() -> Result<()> {
    if version_check("limactl") {
        return Ok(());
    }

    println!("limactl is not installed. Installing...");
    let status = Command::new("brew")
        .args(["install", "lima"])
        .status()
        .map_err(|e| SetupError::LimaInstall(e.to_string()))?;

    if !status.success() {
        return Err(SetupError::LimaInstall(format!(
            "brew install lima exited with {status}"
        )));
    }

    Ok(())
}

/// A tool counts as present when its version query runs and exits zero.
fn version_check(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_check_missing_tool() {
        assert!(!version_check("definitely-not-a-real-tool-xyz"));
    }
}
