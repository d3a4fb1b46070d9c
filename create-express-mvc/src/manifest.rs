//! `package.json` generation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::database::DatabaseChoice;

/// Output path of the manifest, relative to the project root
pub const MANIFEST_PATH: &str = "package.json";

/// Runtime packages every project gets
pub const BASE_DEPENDENCIES: &[(&str, &str)] = &[("express", "latest"), ("dotenv", "latest")];

/// Development packages every project gets
pub const DEV_DEPENDENCIES: &[(&str, &str)] = &[("nodemon", "^3.0.0")];

/// npm package manifest of a generated project
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Package name, the project name verbatim
    pub name: String,
    /// Package version
    pub version: String,
    /// Short description
    pub description: String,
    /// Entrypoint script
    pub main: String,
    /// `npm run` aliases
    pub scripts: BTreeMap<String, String>,
    /// Runtime dependencies
    pub dependencies: BTreeMap<String, String>,
    /// Development dependencies
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Build the manifest for a project and database backend
    #[must_use]
    pub fn new(project_name: &str, database: DatabaseChoice) -> Self {
        let scripts = [("start", "node app.js"), ("dev", "nodemon app.js")];

        Self {
            name: project_name.to_string(),
            version: "1.0.0".to_string(),
            description: format!("Express MVC Project ({})", database.profile().label),
            main: "app.js".to_string(),
            scripts: to_map(&scripts),
            dependencies: BASE_DEPENDENCIES
                .iter()
                .chain(database.profile().dependencies)
                .map(|(name, version)| ((*name).to_string(), (*version).to_string()))
                .collect(),
            dev_dependencies: to_map(DEV_DEPENDENCIES),
        }
    }

    /// Serialize as two-space indented JSON with a trailing newline
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependency_names(manifest: &PackageManifest) -> Vec<&str> {
        manifest.dependencies.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_mysql_dependencies() {
        let manifest = PackageManifest::new("demo", DatabaseChoice::Mysql);

        assert_eq!(
            dependency_names(&manifest),
            vec!["dotenv", "express", "mysql2", "sequelize"]
        );
    }

    #[test]
    fn test_mongo_dependencies() {
        let manifest = PackageManifest::new("demo", DatabaseChoice::Mongo);

        assert_eq!(dependency_names(&manifest), vec!["dotenv", "express", "mongoose"]);
    }

    #[test]
    fn test_base_dependencies_always_present() {
        for choice in DatabaseChoice::ALL {
            let manifest = PackageManifest::new("demo", choice);
            for (name, version) in BASE_DEPENDENCIES {
                assert_eq!(manifest.dependencies.get(*name).map(String::as_str), Some(*version));
            }
            assert_eq!(
                manifest.dev_dependencies.get("nodemon").map(String::as_str),
                Some("^3.0.0")
            );
        }
    }

    #[test]
    fn test_metadata() {
        let manifest = PackageManifest::new("my-express-app", DatabaseChoice::Mongo);

        assert_eq!(manifest.name, "my-express-app");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.main, "app.js");
        assert_eq!(manifest.scripts["start"], "node app.js");
        assert_eq!(manifest.scripts["dev"], "nodemon app.js");
        assert!(manifest.description.contains("MongoDB"));
    }

    #[test]
    fn test_json_layout() {
        let json = PackageManifest::new("demo", DatabaseChoice::Mysql)
            .to_json_pretty()
            .unwrap();

        assert!(json.starts_with("{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\""));
        assert!(json.contains("\"devDependencies\""));
        assert!(json.ends_with("}\n"));

        let parsed: PackageManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PackageManifest::new("demo", DatabaseChoice::Mysql));
    }
}
