//! Generator configuration
//!
//! Sources, from lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. `./express-mvc.toml` in the invocation directory
//! 3. Environment variables with the `EXPRESS_MVC_` prefix
//!
//! ```toml
//! # express-mvc.toml
//! default_project_name = "storefront"
//! package_manager = "pnpm"
//! install_args = ["install"]
//! skip_install = false
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration file looked up in the invocation directory
pub const CONFIG_FILE: &str = "express-mvc.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "EXPRESS_MVC_";

/// Settings that shape a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Project name used when none is given on the command line
    pub default_project_name: String,

    /// Package manager executable, resolved from `PATH`
    pub package_manager: String,

    /// Arguments passed to the package manager
    pub install_args: Vec<String>,

    /// Skip the install step entirely
    pub skip_install: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_project_name: "my-express-app".to_string(),
            package_manager: "npm".to_string(),
            install_args: vec!["install".to_string()],
            skip_install: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration relative to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration using a specific TOML file
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(Box::new)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.default_project_name, "my-express-app");
        assert_eq!(config.package_manager, "npm");
        assert_eq!(config.install_args, vec!["install"]);
        assert!(!config.skip_install);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = GeneratorConfig::load().expect("load");
            assert_eq!(config, GeneratorConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                    package_manager = "pnpm"
                    install_args = ["install", "--silent"]
                "#,
            )?;

            let config = GeneratorConfig::load().expect("load");
            assert_eq!(config.package_manager, "pnpm");
            assert_eq!(config.install_args, vec!["install", "--silent"]);
            assert_eq!(config.default_project_name, "my-express-app");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, r#"package_manager = "pnpm""#)?;
            jail.set_env("EXPRESS_MVC_PACKAGE_MANAGER", "yarn");
            jail.set_env("EXPRESS_MVC_SKIP_INSTALL", "true");

            let config = GeneratorConfig::load().expect("load");
            assert_eq!(config.package_manager, "yarn");
            assert!(config.skip_install);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "skip_install = \"sometimes\"")?;

            assert!(GeneratorConfig::load().is_err());
            Ok(())
        });
    }
}
