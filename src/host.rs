use std::process::Command;

use crate::error::{Result, SetupError};

const REQUIRED_OS: &str = "macos";
const REQUIRED_ARCH: &str = "arm64";

/// Gate everything else on the host being an Apple Silicon Mac.
/// A mismatch is permanent for the process lifetime, so there is no retry.
pub fn check_supported() -> Result<()> {
    check_os(std::env::consts::OS)?;
    let arch = probe_arch()?;
    check_arch(&arch)
}

fn check_os(os: &str) -> Result<()> {
    if os == REQUIRED_OS {
        Ok(())
    } else {
        Err(SetupError::UnsupportedOs(os.to_string()))
    }
}

fn check_arch(arch: &str) -> Result<()> {
    if arch == REQUIRED_ARCH {
        Ok(())
    } else {
        Err(SetupError::UnsupportedArch(arch.to_string()))
    }
}

/// `uname -m` reflects what the kernel reports for this process, not the
/// compile target, so a Rosetta-translated binary is rejected too.
fn probe_arch() -> Result<String> {
    let output = Command::new("uname")
        .arg("-m")
        .output()
        .map_err(|e| SetupError::ArchProbe(e.to_string()))?;

    if !output.status.success() {
        return Err(SetupError::ArchProbe(format!(
            "uname -m exited with {}",
            output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_os_passes() {
        assert!(check_os("macos").is_ok());
    }

    #[test]
    fn test_other_os_rejected() {
        let err = check_os("linux").unwrap_err();
        assert!(err.to_string().contains("macOS"));
    }

    #[test]
    fn test_required_arch_passes() {
        assert!(check_arch("arm64").is_ok());
    }

    #[test]
    fn test_intel_arch_rejected() {
        let err = check_arch("x86_64").unwrap_err();
        assert!(err.to_string().contains("x86_64"));
    }
}
