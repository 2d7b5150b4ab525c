use crate::error::{Result, SetupError};
use crate::vm::instance::{InstanceSpec, InstanceState};
use crate::vm::limactl::{LimaCtl, READY_TIMEOUT};

/// Reconcile the instance against its desired state: create it when absent,
/// open a shell when it is running, and restart it first when it is not.
pub fn execute(spec: &InstanceSpec) -> Result<()> {
    match LimaCtl::state_of(&spec.name)? {
        InstanceState::Absent => {
            println!(
                "Instance '{}' not found. Creating and starting...",
                spec.name
            );
            LimaCtl::create_and_start(spec)?;
            LimaCtl::wait_until_running(&spec.name, READY_TIMEOUT)?;
            println!("Instance '{}' started successfully.", spec.name);
            Ok(())
        }
        InstanceState::Running => {
            println!(
                "Instance '{}' is already running. Opening shell...",
                spec.name
            );
            attach_shell(&spec.name)
        }
        InstanceState::Stopped(status) => {
            println!("Instance '{}' is {}. Starting...", spec.name, status);
            LimaCtl::start_existing(&spec.name)?;
            LimaCtl::wait_until_running(&spec.name, READY_TIMEOUT)?;
            attach_shell(&spec.name)
        }
    }
}

/// Hand the terminal to `limactl shell` and surface its exit status.
fn attach_shell(name: &str) -> Result<()> {
    let status = LimaCtl::shell(name)?;

    if status.success() {
        Ok(())
    } else {
        Err(SetupError::CommandExitCode(status.code().unwrap_or(1)))
    }
}
