pub mod instance;
pub mod limactl;
