//! Database backends offered by the generator
//!
//! Everything that differs between backends lives in a [`DatabaseProfile`]. Adding a
//! backend means adding a variant and one profile; no call site branches on the variant.

use std::fmt;

use crate::templates::{DB_CONNECTOR_MONGO, DB_CONNECTOR_MYSQL, ENV_MONGO, ENV_MYSQL};

/// Database backend for new projects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DatabaseChoice {
    /// `MySQL` through Sequelize (default)
    #[default]
    Mysql,
    /// `MongoDB` through Mongoose
    Mongo,
}

/// Per-backend content: npm packages plus the variant templates
#[derive(Debug)]
pub struct DatabaseProfile {
    /// Human-readable name shown in console output
    pub label: &'static str,
    /// Runtime packages added on top of the base set, as `(name, version)`
    pub dependencies: &'static [(&'static str, &'static str)],
    /// Handlebars template for `.env`
    pub env_template: &'static str,
    /// Handlebars template for `models/db.js`
    pub connector_template: &'static str,
}

static MYSQL_PROFILE: DatabaseProfile = DatabaseProfile {
    label: "MySQL (Sequelize)",
    dependencies: &[("sequelize", "latest"), ("mysql2", "latest")],
    env_template: ENV_MYSQL,
    connector_template: DB_CONNECTOR_MYSQL,
};

static MONGO_PROFILE: DatabaseProfile = DatabaseProfile {
    label: "MongoDB (Mongoose)",
    dependencies: &[("mongoose", "latest")],
    env_template: ENV_MONGO,
    connector_template: DB_CONNECTOR_MONGO,
};

impl DatabaseChoice {
    /// All backends, in prompt order
    pub const ALL: [Self; 2] = [Self::Mysql, Self::Mongo];

    /// Parse operator input
    ///
    /// Input is trimmed and lowercased. `mongodb` is accepted as an alias of `mongo`.
    /// Returns `None` for anything else; callers decide on the fallback.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "mysql" => Some(Self::Mysql),
            "mongo" | "mongodb" => Some(Self::Mongo),
            _ => None,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Mongo => "mongo",
        }
    }

    /// Files and packages specific to this backend
    #[must_use]
    pub fn profile(self) -> &'static DatabaseProfile {
        match self {
            Self::Mysql => &MYSQL_PROFILE,
            Self::Mongo => &MONGO_PROFILE,
        }
    }
}

impl fmt::Display for DatabaseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_accepts_canonical_names() {
        assert_eq!(DatabaseChoice::from_input("mysql"), Some(DatabaseChoice::Mysql));
        assert_eq!(DatabaseChoice::from_input("mongo"), Some(DatabaseChoice::Mongo));
        assert_eq!(DatabaseChoice::from_input("mongodb"), Some(DatabaseChoice::Mongo));
    }

    #[test]
    fn test_from_input_normalizes() {
        assert_eq!(DatabaseChoice::from_input("  MySQL\n"), Some(DatabaseChoice::Mysql));
        assert_eq!(DatabaseChoice::from_input("Mongo"), Some(DatabaseChoice::Mongo));
        assert_eq!(DatabaseChoice::from_input("\tMONGODB "), Some(DatabaseChoice::Mongo));
    }

    #[test]
    fn test_from_input_rejects_unknown() {
        assert_eq!(DatabaseChoice::from_input(""), None);
        assert_eq!(DatabaseChoice::from_input("postgres"), None);
        assert_eq!(DatabaseChoice::from_input("1"), None);
        assert_eq!(DatabaseChoice::from_input("my sql"), None);
    }

    #[test]
    fn test_default_is_mysql() {
        assert_eq!(DatabaseChoice::default(), DatabaseChoice::Mysql);
    }

    #[test]
    fn test_display_round_trips_through_from_input() {
        for choice in DatabaseChoice::ALL {
            assert_eq!(DatabaseChoice::from_input(&choice.to_string()), Some(choice));
        }
    }

    #[test]
    fn test_profiles_have_disjoint_dependencies() {
        let names = |choice: DatabaseChoice| -> Vec<&'static str> {
            choice.profile().dependencies.iter().map(|(name, _)| *name).collect()
        };
        let mysql = names(DatabaseChoice::Mysql);
        let mongo = names(DatabaseChoice::Mongo);

        assert!(mysql.contains(&"sequelize"));
        assert!(mysql.contains(&"mysql2"));
        assert!(mongo.contains(&"mongoose"));
        assert!(mysql.iter().all(|dep| !mongo.contains(dep)));
    }
}
