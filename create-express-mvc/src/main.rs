//! create-express-mvc CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use create_express_mvc_lib::{observability, prompt, GeneratorConfig, NewCommand, PackageInstaller};

#[derive(Parser)]
#[command(name = "create-express-mvc")]
#[command(version)]
#[command(about = "Scaffold an Express MVC project backed by MySQL or MongoDB", long_about = None)]
struct Cli {
    /// Project name (defaults to `my-express-app`)
    name: Option<String>,
}

fn main() -> ExitCode {
    observability::init();
    let cli = Cli::parse();

    match run(cli.name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("❌ Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(name: Option<String>) -> Result<()> {
    let config = GeneratorConfig::load().context("Failed to load configuration")?;
    let name = name.unwrap_or_else(|| config.default_project_name.clone());

    let database = prompt::select_database()?;

    let parent = std::env::current_dir().context("Failed to resolve current directory")?;
    let cmd = NewCommand::new(&parent, name, database, PackageInstaller::from_config(&config));
    cmd.execute()?;

    Ok(())
}
