use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("this tool only runs on macOS (detected {0})")]
    UnsupportedOs(String),

    #[error("this tool requires an Apple Silicon Mac (uname -m reported '{0}')")]
    UnsupportedArch(String),

    #[error("failed to probe CPU architecture: {0}")]
    ArchProbe(String),

    #[error("Homebrew installation failed: {0}")]
    BrewInstall(String),

    #[error("limactl installation failed: {0}")]
    LimaInstall(String),

    #[error("limactl not installed. Run lima-setup without flags to install it, or see https://lima-vm.io")]
    LimaNotInstalled,

    #[error("limactl {command} failed: {detail}")]
    LimaExecution { command: String, detail: String },

    #[error("could not parse limactl list output: {0}")]
    ListParse(#[from] serde_json::Error),

    #[error("instance '{name}' did not reach Running within {seconds}s (last status: {last})")]
    ReadinessTimeout {
        name: String,
        seconds: u64,
        last: String,
    },

    #[error("instance '{0}' disappeared while waiting for it to start")]
    InstanceVanished(String),

    #[error("command exited with status {0}")]
    CommandExitCode(i32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lima_execution_names_the_command() {
        let err = SetupError::LimaExecution {
            command: "stop".to_string(),
            detail: "exited with exit status: 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("stop"));
        assert!(msg.contains("exit status: 1"));
    }

    #[test]
    fn test_readiness_timeout_message() {
        let err = SetupError::ReadinessTimeout {
            name: "debian_tools".to_string(),
            seconds: 120,
            last: "Starting".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "instance 'debian_tools' did not reach Running within 120s (last status: Starting)"
        );
    }
}
