use crate::error::{Result, SetupError};
use crate::vm::instance::{InstanceSpec, InstanceState};
use crate::vm::limactl::LimaCtl;

/// Stop and delete the instance when it exists. An absent instance is
/// reported and left alone, not treated as an error.
pub fn execute(spec: &InstanceSpec) -> Result<()> {
    if !LimaCtl::is_installed() {
        return Err(SetupError::LimaNotInstalled);
    }

    match LimaCtl::state_of(&spec.name)? {
        InstanceState::Absent => {
            println!("Instance '{}' does not exist.", spec.name);
            Ok(())
        }
        InstanceState::Running | InstanceState::Stopped(_) => {
            println!("Stopping and deleting instance '{}'...", spec.name);
            LimaCtl::stop(&spec.name)?;
            LimaCtl::delete(&spec.name)?;
            println!("Instance '{}' deleted.", spec.name);
            Ok(())
        }
    }
}
