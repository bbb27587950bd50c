//! Static description of one entry in the generated tree

use crate::config::ProjectConfig;

/// Inclusion rule of a [`TemplateNode`], a pure predicate over the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Include {
    Always,
    Docker,
    Ci,
    Devcontainer,
    Postgres,
    /// The devcontainer runs in compose mode next to a database service.
    DevcontainerWithPostgres,
}

impl Include {
    pub fn evaluate(&self, config: &ProjectConfig) -> bool {
        match self {
            Include::Always => true,
            Include::Docker => config.docker,
            Include::Ci => config.ci,
            Include::Devcontainer => config.devcontainer,
            Include::Postgres => config.uses_postgres(),
            Include::DevcontainerWithPostgres => config.devcontainer && config.uses_postgres(),
        }
    }
}

/// What a node materializes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    /// A file with no content, e.g. a package marker.
    EmptyFile,
    /// A file rendered from the named embedded template.
    Template(&'static str),
}

/// One file or directory of the project skeleton.
///
/// `path` is relative to the project root and may contain `{{ placeholders }}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateNode {
    pub path: &'static str,
    pub kind: NodeKind,
    pub include: Include,
}

impl TemplateNode {
    pub const fn directory(path: &'static str, include: Include) -> Self {
        Self { path, kind: NodeKind::Directory, include }
    }

    pub const fn empty(path: &'static str, include: Include) -> Self {
        Self { path, kind: NodeKind::EmptyFile, include }
    }

    pub const fn template(path: &'static str, template: &'static str, include: Include) -> Self {
        Self { path, kind: NodeKind::Template(template), include }
    }

    pub fn is_included(&self, config: &ProjectConfig) -> bool {
        self.include.evaluate(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Database;

    fn config(db: Database, docker: bool, ci: bool, devcontainer: bool) -> ProjectConfig {
        ProjectConfig {
            name: "demo".to_string(),
            description: "Demo".to_string(),
            author: "Tester".to_string(),
            db,
            python_version: "3.12".to_string(),
            docker,
            ci,
            devcontainer,
        }
    }

    #[test]
    fn predicates_follow_config_fields() {
        let all = config(Database::Postgres, true, true, true);
        let none = config(Database::None, false, false, false);

        for include in [
            Include::Docker,
            Include::Ci,
            Include::Devcontainer,
            Include::Postgres,
            Include::DevcontainerWithPostgres,
        ] {
            assert!(include.evaluate(&all), "{include:?} should hold");
            assert!(!include.evaluate(&none), "{include:?} should not hold");
        }
        assert!(Include::Always.evaluate(&none));
    }

    #[test]
    fn compose_devcontainer_needs_both_toggles() {
        assert!(!Include::DevcontainerWithPostgres.evaluate(&config(Database::None, true, true, true)));
        assert!(!Include::DevcontainerWithPostgres
            .evaluate(&config(Database::Postgres, true, true, false)));
    }
}
