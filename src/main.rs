#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use lima_setup::cli::{Action, Cli};
use lima_setup::error::SetupError;
use lima_setup::{commands, deps, host};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let spec = cli.instance_spec();

    let result = match cli.action() {
        // --delete is the recovery path and works without the host and
        // dependency checks the other actions require.
        Action::Delete => commands::delete::execute(&spec),
        Action::Stop => {
            host::check_supported()?;
            deps::ensure_all()?;
            commands::stop::execute(&spec)
        }
        Action::Reconcile => {
            host::check_supported()?;
            deps::ensure_all()?;
            commands::up::execute(&spec)
        }
    };

    match result {
        Ok(()) => Ok(()),
        // An interactive shell's exit code becomes our exit code
        Err(SetupError::CommandExitCode(code)) => std::process::exit(code),
        Err(e) => Err(e.into()),
    }
}
