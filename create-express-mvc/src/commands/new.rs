//! Project scaffolding command

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::database::DatabaseChoice;
use crate::error::{GeneratorError, Result};
use crate::install::{InstallOutcome, PackageInstaller};
use crate::manifest::{PackageManifest, MANIFEST_PATH};
use crate::templates::{ProjectTemplate, FOLDERS};

/// What a finished run produced
#[derive(Debug)]
pub struct GenerationReport {
    /// Root of the generated project
    pub project_dir: PathBuf,
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
    /// Result of the dependency install step
    pub install: InstallOutcome,
}

/// Create a new Express MVC project
pub struct NewCommand {
    name: String,
    output_dir: PathBuf,
    database: DatabaseChoice,
    installer: PackageInstaller,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `parent` - Directory the project folder is created in
    /// * `name` - Project name, used verbatim as folder and package name
    /// * `database` - Resolved database backend
    /// * `installer` - Package manager invocation for the final step
    #[must_use]
    pub fn new(
        parent: &Path,
        name: impl Into<String>,
        database: DatabaseChoice,
        installer: PackageInstaller,
    ) -> Self {
        let name = name.into();
        let output_dir = parent.join(&name);

        Self {
            name,
            output_dir,
            database,
            installer,
        }
    }

    /// Directory the project is generated into
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the target already exists or any file cannot be written.
    /// A failed install is reported in the returned [`GenerationReport`] instead.
    pub fn execute(&self) -> Result<GenerationReport> {
        println!(
            "{} {} {} {}",
            style("Creating").green().bold(),
            style("Express MVC project:").bold(),
            style(&self.name).cyan().bold(),
            style(format!("({})", self.database.profile().label)).dim()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Generating project files...");

        let files = self.materialize();
        spinner.finish_and_clear();
        let files = files?;

        println!(
            "{} {}",
            style("✓").green().bold(),
            style(format!("Wrote {} files", files.len())).bold()
        );
        println!();
        println!("{}", style("📦 Installing dependencies...").bold());

        let install = self.installer.install(&self.output_dir);
        self.print_install_outcome(&install);
        self.print_success();

        Ok(GenerationReport {
            project_dir: self.output_dir.clone(),
            files,
            install,
        })
    }

    /// Write the whole project tree without installing dependencies
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target path already exists
    /// - A directory or file cannot be created
    /// - The manifest cannot be serialized
    pub fn materialize(&self) -> Result<Vec<PathBuf>> {
        // Checks the entry itself, so a dangling symlink also counts as taken
        if fs::symlink_metadata(&self.output_dir).is_ok() {
            return Err(GeneratorError::AlreadyExists(self.output_dir.clone()));
        }

        info!(dir = %self.output_dir.display(), database = %self.database, "creating project");
        self.create_structure()?;

        let template = ProjectTemplate::new(&self.name, self.database);
        let mut files = template.generate(&self.output_dir)?;
        files.push(self.write_manifest()?);

        Ok(files)
    }

    /// Create directory structure
    fn create_structure(&self) -> Result<()> {
        let dirs = std::iter::once("").chain(FOLDERS.iter().copied());

        for dir in dirs {
            let path = self.output_dir.join(dir);
            fs::create_dir_all(&path)
                .map_err(|source| GeneratorError::CreateDir { path, source })?;
        }

        Ok(())
    }

    /// Write package.json
    fn write_manifest(&self) -> Result<PathBuf> {
        let manifest = PackageManifest::new(&self.name, self.database);
        let path = self.output_dir.join(MANIFEST_PATH);

        let json = manifest.to_json_pretty()?;
        fs::write(&path, json).map_err(|source| GeneratorError::WriteFile {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    fn print_install_outcome(&self, outcome: &InstallOutcome) {
        println!();
        match outcome {
            InstallOutcome::Succeeded => {
                println!("{}", style("✓ Dependencies installed").green().bold());
            }
            InstallOutcome::Skipped => {
                println!("{}", style("Dependency installation skipped.").dim());
            }
            InstallOutcome::Failed(code) => {
                let message = match code {
                    Some(code) => format!("⚠️  Package manager exited with code {code}."),
                    None => "⚠️  Package manager was terminated by a signal.".to_string(),
                };
                println!("{}", style(message).yellow().bold());
            }
            InstallOutcome::Unavailable(err) => {
                let message = format!("⚠️  Could not run the package manager: {err}");
                println!("{}", style(message).yellow().bold());
            }
        }

        if outcome.needs_manual_install() {
            println!("Your project files are in place. Install dependencies manually:");
            println!(
                "  {} {}",
                style("$").dim(),
                style(format!("cd {} && {}", self.name, self.installer.command_line())).cyan()
            );
        }
        println!();
    }

    /// Print success message with next steps
    fn print_success(&self) {
        println!("{}", style("✅ Setup complete!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Navigate to project:", style("1.").cyan());
        println!("     {} {}", style("$").dim(), style(format!("cd {}", self.name)).cyan());
        println!();
        println!("  {} Review database settings in .env", style("2.").cyan());
        println!();
        println!("  {} Start the development server with nodemon:", style("3.").cyan());
        println!("     {} {}", style("$").dim(), style("npm run dev").cyan());
        println!();
        println!("  {} Open in browser:", style("4.").cyan());
        println!("     {}", style("http://localhost:3000").cyan().underlined());
        println!();
    }
}
