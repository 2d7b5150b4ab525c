use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use indicatif::ProgressBar;

use crate::error::{Result, SetupError};
use crate::vm::instance::{self, InstanceRecord, InstanceSpec, InstanceState};

const READY_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// How long a freshly started instance gets to report Running before the
/// readiness poll gives up.
pub const READY_TIMEOUT: Duration = Duration::from_secs(120);

pub struct LimaCtl;

impl LimaCtl {
    /// Check if limactl is installed
    pub fn is_installed() -> bool {
        which::which("limactl").is_ok()
    }

    /// List all Lima instances as structured records.
    pub fn list() -> Result<Vec<InstanceRecord>> {
        let output = Command::new("limactl")
            .args(["list", "--json"])
            .output()
            .map_err(|e| Self::launch_error("list", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SetupError::LimaExecution {
                command: "list".to_string(),
                detail: format!("exited with {}: {}", output.status, stderr.trim()),
            });
        }

        instance::parse_records(&String::from_utf8_lossy(&output.stdout))
    }

    /// Current state of the named instance.
    pub fn state_of(name: &str) -> Result<InstanceState> {
        Ok(instance::classify(&Self::list()?, name))
    }

    /// Create the instance from its configuration file and boot it.
    /// The config file is handed to limactl unopened.
    pub fn create_and_start(spec: &InstanceSpec) -> Result<()> {
        let mut cmd = Command::new("limactl");
        cmd.arg("start")
            .arg("--debug")
            .arg(format!("--name={}", spec.name))
            .arg("--tty=false")
            .arg(&spec.config);
        Self::run("start", cmd)
    }

    /// Boot an instance that already exists but is not running.
    pub fn start_existing(name: &str) -> Result<()> {
        let mut cmd = Command::new("limactl");
        cmd.args(["start", "--tty=false", name]);
        Self::run("start", cmd)
    }

    pub fn stop(name: &str) -> Result<()> {
        let mut cmd = Command::new("limactl");
        cmd.args(["stop", name]);
        Self::run("stop", cmd)
    }

    pub fn delete(name: &str) -> Result<()> {
        let mut cmd = Command::new("limactl");
        cmd.args(["delete", name]);
        Self::run("delete", cmd)
    }

    /// Attach an interactive shell. The child owns the terminal; its exit
    /// status is handed back so the caller can propagate it.
    pub fn shell(name: &str) -> Result<ExitStatus> {
        Command::new("limactl")
            .args(["shell", name])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::launch_error("shell", e))
    }

    /// Poll the listing until the instance reports Running, bounded by
    /// `timeout`. Starting is asynchronous on limactl's side, so a start
    /// command returning zero does not mean the instance is usable yet.
    pub fn wait_until_running(name: &str, timeout: Duration) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Waiting for instance '{name}' to be running..."));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let started = Instant::now();
        loop {
            let state = Self::state_of(name)?;
            match state {
                InstanceState::Running => {
                    spinner.finish_and_clear();
                    return Ok(());
                }
                InstanceState::Absent => {
                    spinner.finish_and_clear();
                    return Err(SetupError::InstanceVanished(name.to_string()));
                }
                InstanceState::Stopped(status) => {
                    if started.elapsed() >= timeout {
                        spinner.finish_and_clear();
                        return Err(SetupError::ReadinessTimeout {
                            name: name.to_string(),
                            seconds: timeout.as_secs(),
                            last: status,
                        });
                    }
                }
            }
            std::thread::sleep(READY_POLL_INTERVAL);
        }
    }

    fn run(command: &str, mut cmd: Command) -> Result<()> {
        let status = cmd.status().map_err(|e| Self::launch_error(command, e))?;

        if !status.success() {
            return Err(SetupError::LimaExecution {
                command: command.to_string(),
                detail: format!("exited with {status}"),
            });
        }

        Ok(())
    }

    fn launch_error(command: &str, err: std::io::Error) -> SetupError {
        SetupError::LimaExecution {
            command: command.to_string(),
            detail: err.to_string(),
        }
    }
}
