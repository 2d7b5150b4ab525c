use crate::error::Result;
use crate::vm::instance::InstanceSpec;
use crate::vm::limactl::LimaCtl;

pub fn execute(spec: &InstanceSpec) -> Result<()> {
    println!("Stopping instance '{}'...", spec.name);
    LimaCtl::stop(&spec.name)?;
    println!("Instance '{}' stopped successfully.", spec.name);
    Ok(())
}
