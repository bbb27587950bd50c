use super::ProjectConfig;
use serde_json::json;

/// Builds the variables available to every template path and body.
pub fn render_context(config: &ProjectConfig) -> serde_json::Value {
    json!({
        "project_name": config.name,
        "package_name": config.package_name(),
        "project_slug": config.slug(),
        "project_title": config.title(),
        "description": config.description,
        "author": config.author,
        "db": config.db,
        "python_version": config.python_version,
        "python_tag": config.python_tag(),
        "docker": config.docker,
        "ci": config.ci,
        "devcontainer": config.devcontainer,
        "generator_version": env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Database;

    #[test]
    fn context_exposes_name_variants_and_toggles() {
        let config = ProjectConfig {
            name: "my_app".to_string(),
            description: "Demo".to_string(),
            author: "Jane".to_string(),
            db: Database::None,
            python_version: "3.13".to_string(),
            docker: false,
            ci: true,
            devcontainer: false,
        };

        let context = render_context(&config);
        assert_eq!(context["project_name"], "my_app");
        assert_eq!(context["package_name"], "my_app");
        assert_eq!(context["project_slug"], "my-app");
        assert_eq!(context["project_title"], "MyApp");
        assert_eq!(context["db"], "none");
        assert_eq!(context["python_tag"], "py313");
        assert_eq!(context["docker"], false);
        assert_eq!(context["ci"], true);
    }
}
