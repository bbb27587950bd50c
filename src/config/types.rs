//! The resolved project configuration

use cruet::case::{kebab::to_kebab_case, pascal::to_pascal_case};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// Database backend wired into the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Postgres,
    None,
}

impl Database {
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Postgres => "postgres",
            Database::None => "none",
        }
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Database {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgres" => Ok(Database::Postgres),
            "none" => Ok(Database::None),
            other => Err(format!("unknown database '{other}'")),
        }
    }
}

/// Fully resolved options for one generation run.
///
/// Built once by the option resolver and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub author: String,
    pub db: Database,
    pub python_version: String,
    pub docker: bool,
    pub ci: bool,
    pub devcontainer: bool,
}

impl ProjectConfig {
    /// Import name of the generated Python package.
    pub fn package_name(&self) -> &str {
        &self.name
    }

    /// Distribution, image and service name (`my_app` -> `my-app`).
    pub fn slug(&self) -> String {
        to_kebab_case(&self.name)
    }

    /// Display name used in headings and class prefixes (`my_app` -> `MyApp`).
    pub fn title(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Tool target tag such as `py312`.
    pub fn python_tag(&self) -> String {
        format!("py{}", self.python_version.replace('.', ""))
    }

    pub fn uses_postgres(&self) -> bool {
        self.db == Database::Postgres
    }
}
