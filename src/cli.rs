use clap::Parser;
use std::path::PathBuf;

use crate::vm::instance::InstanceSpec;

pub const DEFAULT_INSTANCE: &str = "debian_tools";
pub const DEFAULT_CONFIG: &str = "debian_tools.yaml";

#[derive(Parser, Debug)]
#[command(name = "lima-setup")]
#[command(about = "Provision and open a shell into the debian_tools Lima VM", long_about = None)]
#[command(version = env!("LIMA_SETUP_VERSION"))]
#[command(after_help = "\
BEHAVIOR:
  Without flags, lima-setup checks that the host is an Apple Silicon Mac,
  installs Homebrew and limactl when missing, then reconciles the instance:
  created and started when absent, restarted when stopped, and an
  interactive shell is attached once it is running.

EXAMPLES:
  lima-setup                 Create/start the instance, or open a shell
  lima-setup --stop          Stop the instance
  lima-setup --delete        Stop and delete the instance if it exists")]
pub struct Cli {
    /// Stop the instance instead of reconciling it
    #[arg(long, conflicts_with = "delete")]
    pub stop: bool,

    /// Stop and delete the instance if it exists
    #[arg(long)]
    pub delete: bool,

    /// Name of the managed Lima instance
    #[arg(long, default_value = DEFAULT_INSTANCE, env = "LIMA_SETUP_INSTANCE")]
    pub name: String,

    /// Lima YAML configuration used when the instance is first created
    #[arg(long, default_value = DEFAULT_CONFIG, env = "LIMA_SETUP_CONFIG")]
    pub config: PathBuf,
}

/// The single terminal action a run dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reconcile,
    Stop,
    Delete,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.delete {
            Action::Delete
        } else if self.stop {
            Action::Stop
        } else {
            Action::Reconcile
        }
    }

    pub fn instance_spec(&self) -> InstanceSpec {
        InstanceSpec {
            name: self.name.clone(),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_reconciles() {
        let cli = Cli::try_parse_from(["lima-setup"]).unwrap();
        assert_eq!(cli.action(), Action::Reconcile);
    }

    #[test]
    fn test_stop_flag() {
        let cli = Cli::try_parse_from(["lima-setup", "--stop"]).unwrap();
        assert_eq!(cli.action(), Action::Stop);
    }

    #[test]
    fn test_delete_flag() {
        let cli = Cli::try_parse_from(["lima-setup", "--delete"]).unwrap();
        assert_eq!(cli.action(), Action::Delete);
    }

    #[test]
    fn test_stop_and_delete_conflict() {
        let result = Cli::try_parse_from(["lima-setup", "--stop", "--delete"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_instance_spec() {
        let cli = Cli::try_parse_from(["lima-setup"]).unwrap();
        let spec = cli.instance_spec();
        assert_eq!(spec.name, DEFAULT_INSTANCE);
        assert_eq!(spec.config, PathBuf::from(DEFAULT_CONFIG));
    }

    #[test]
    fn test_name_and_config_overrides() {
        let cli = Cli::try_parse_from([
            "lima-setup",
            "--name",
            "scratch_vm",
            "--config",
            "scratch.yaml",
        ])
        .unwrap();
        let spec = cli.instance_spec();
        assert_eq!(spec.name, "scratch_vm");
        assert_eq!(spec.config, PathBuf::from("scratch.yaml"));
    }
}
