//! Dependency installation through the host package manager

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::config::GeneratorConfig;

/// Result of the install step
///
/// None of these fail a generation run; the files are already on disk.
#[derive(Debug)]
pub enum InstallOutcome {
    /// Installation was disabled by configuration
    Skipped,
    /// The package manager exited successfully
    Succeeded,
    /// The package manager ran and exited non-zero (`None` if killed by a signal)
    Failed(Option<i32>),
    /// The package manager could not be started
    Unavailable(io::Error),
}

impl InstallOutcome {
    /// Whether dependencies need to be installed by hand
    #[must_use]
    pub const fn needs_manual_install(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::Unavailable(_))
    }
}

/// Runs `<program> <args...>` inside a project directory
#[derive(Debug, Clone)]
pub struct PackageInstaller {
    program: String,
    args: Vec<String>,
    skip: bool,
}

impl PackageInstaller {
    /// Create an installer from its parts
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            skip: false,
        }
    }

    /// Create an installer from generator configuration
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            program: config.package_manager.clone(),
            args: config.install_args.clone(),
            skip: config.skip_install,
        }
    }

    /// The command line as typed by a user, for manual instructions
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the installer in `project_dir`, blocking until it exits
    ///
    /// Standard streams are inherited so the package manager's own progress output
    /// reaches the terminal.
    #[must_use]
    pub fn install(&self, project_dir: &Path) -> InstallOutcome {
        if self.skip {
            info!("dependency installation skipped by configuration");
            return InstallOutcome::Skipped;
        }

        info!(
            command = %self.command_line(),
            dir = %project_dir.display(),
            "installing dependencies"
        );

        match Command::new(resolve_program(&self.program))
            .args(&self.args)
            .current_dir(project_dir)
            .status()
        {
            Ok(status) if status.success() => InstallOutcome::Succeeded,
            Ok(status) => {
                warn!(code = ?status.code(), "package manager exited with failure");
                InstallOutcome::Failed(status.code())
            }
            Err(err) => {
                warn!(
                    program = %self.program,
                    error = %err,
                    "package manager could not be started"
                );
                InstallOutcome::Unavailable(err)
            }
        }
    }
}

/// npm and friends ship as `.cmd` shims on Windows
#[cfg(windows)]
fn resolve_program(program: &str) -> String {
    if Path::new(program).extension().is_some() {
        program.to_string()
    } else {
        format!("{program}.cmd")
    }
}

#[cfg(not(windows))]
fn resolve_program(program: &str) -> String {
    program.to_string()
}
