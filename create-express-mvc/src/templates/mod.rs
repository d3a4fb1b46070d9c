//! Project template generation

use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde_json::json;
use tracing::debug;

use crate::database::DatabaseChoice;
use crate::error::{GeneratorError, Result};

pub mod files;
pub use files::*;

/// Subdirectories created under every project root
pub const FOLDERS: &[&str] = &[
    "controllers",
    "models",
    "routes",
    "views",
    "public",
    "public/css",
    "public/js",
];

/// Output path of the rendered environment file
pub const ENV_PATH: &str = ".env";

/// Output path of the rendered connection module
pub const CONNECTOR_PATH: &str = "models/db.js";

/// Database name used when the project name has no usable characters
pub const FALLBACK_DATABASE_NAME: &str = "mydatabase";

/// One static file of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Path relative to the project root
    pub path: &'static str,
    /// Literal file content
    pub content: &'static str,
}

impl CatalogEntry {
    const fn new(path: &'static str, content: &'static str) -> Self {
        Self { path, content }
    }
}

/// Files written verbatim regardless of the database choice
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry::new("app.js", APP_JS),
    CatalogEntry::new("routes/index.js", ROUTES_INDEX),
    CatalogEntry::new("controllers/HomeController.js", HOME_CONTROLLER),
    CatalogEntry::new("models/User.js", USER_MODEL),
    CatalogEntry::new("views/index.html", VIEW_INDEX),
    CatalogEntry::new("public/css/style.css", STYLE_CSS),
    CatalogEntry::new("public/js/main.js", MAIN_JS),
    CatalogEntry::new(".gitignore", GITIGNORE),
];

/// Derive the default database name from a project name
///
/// Characters outside `[A-Za-z0-9_]` become `_`, so `my-express-app` maps to
/// `my_express_app`. An empty project name yields [`FALLBACK_DATABASE_NAME`].
#[must_use]
pub fn database_name(project_name: &str) -> String {
    if project_name.is_empty() {
        return FALLBACK_DATABASE_NAME.to_string();
    }

    project_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Project template generator
pub struct ProjectTemplate {
    name: String,
    database: DatabaseChoice,
    handlebars: Handlebars<'static>,
}

impl ProjectTemplate {
    /// Create a new project template
    #[must_use]
    pub fn new(name: &str, database: DatabaseChoice) -> Self {
        let mut handlebars = Handlebars::new();

        // Generated files are not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self {
            name: name.to_string(),
            database,
            handlebars,
        }
    }

    /// Write the catalog and the database-specific files into `output_dir`
    ///
    /// Stops at the first failure. Returns the written paths in write order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A parent directory cannot be created
    /// - A variant template fails to render
    /// - A file cannot be written
    pub fn generate(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(CATALOG.len() + 2);

        for entry in CATALOG {
            written.push(write_file(output_dir, entry.path, entry.content)?);
        }

        let profile = self.database.profile();
        let env = self.render(ENV_PATH, profile.env_template)?;
        written.push(write_file(output_dir, ENV_PATH, &env)?);

        let connector = self.render(CONNECTOR_PATH, profile.connector_template)?;
        written.push(write_file(output_dir, CONNECTOR_PATH, &connector)?);

        Ok(written)
    }

    /// Render a variant template against the project context
    ///
    /// # Errors
    ///
    /// Returns an error if the template references an unknown variable.
    pub fn render(&self, relative_path: &'static str, template: &str) -> Result<String> {
        let context = json!({
            "project_name": self.name,
            "database_name": database_name(&self.name),
        });

        self.handlebars
            .render_template(template, &context)
            .map_err(|source| GeneratorError::Render {
                path: relative_path,
                source: Box::new(source),
            })
    }
}

/// Write a single file, creating its parent directory first
fn write_file(output_dir: &Path, relative_path: &str, contents: &str) -> Result<PathBuf> {
    let path = output_dir.join(relative_path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| GeneratorError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&path, contents).map_err(|source| GeneratorError::WriteFile {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");

    Ok(path)
}
