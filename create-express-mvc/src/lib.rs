//! create-express-mvc library
//!
//! Scaffolds a minimal Express MVC project. The binary wires these pieces together:
//!
//! 1. [`prompt::select_database`] resolves the backend from one line of input
//! 2. [`NewCommand::materialize`] writes the directory tree, catalog, variant files
//!    and `package.json`
//! 3. [`PackageInstaller`] runs the package manager inside the new project

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod install;
pub mod manifest;
pub mod observability;
pub mod prompt;
pub mod templates;

pub use commands::{GenerationReport, NewCommand};
pub use config::GeneratorConfig;
pub use database::{DatabaseChoice, DatabaseProfile};
pub use error::GeneratorError;
pub use install::{InstallOutcome, PackageInstaller};
pub use manifest::PackageManifest;
pub use templates::ProjectTemplate;
