//! Templates embedded into the binary at compile time.
//!
//! Every entry is registered in the renderer under its name; nodes in the
//! manifest refer to templates by that name. Template files under `templates/`
//! and the entries below must stay in sync.

macro_rules! embed {
    ($name:literal) => {
        ($name, include_str!(concat!("../../templates/", $name)))
    };
}

/// `(name, source)` pairs for every template shipped with Blueprint.
pub const TEMPLATES: &[(&str, &str)] = &[
    embed!("base/README.md.j2"),
    embed!("base/__main__.py.j2"),
    embed!("base/app.py.j2"),
    embed!("base/building_blocks.py.j2"),
    embed!("base/conftest.py.j2"),
    embed!("base/database_port.py.j2"),
    embed!("base/dependencies.py.j2"),
    embed!("base/domain_event.py.j2"),
    embed!("base/env.dev.j2"),
    embed!("base/env.j2"),
    embed!("base/events.py.j2"),
    embed!("base/exceptions/__init__.py.j2"),
    embed!("base/exceptions/base.py.j2"),
    embed!("base/exceptions/validation.py.j2"),
    embed!("base/gitignore.j2"),
    embed!("base/init.py.j2"),
    embed!("base/logger.py.j2"),
    embed!("base/logger_port.py.j2"),
    embed!("base/pre-commit-config.yaml.j2"),
    embed!("base/pyproject.toml.j2"),
    embed!("base/settings.py.j2"),
    embed!("ci/ci.yml.j2"),
    embed!("db/postgres/config.py.j2"),
    embed!("db/postgres/database.py.j2"),
    embed!("db/postgres/models.py.j2"),
    embed!("db/postgres/repositories.py.j2"),
    embed!("devcontainer/devcontainer.json.j2"),
    embed!("devcontainer/docker-compose.yml.j2"),
    embed!("devcontainer/launch.json.j2"),
    embed!("docker/Dockerfile.j2"),
    embed!("docker/docker-compose.yml.j2"),
    embed!("docker/dockerignore.j2"),
    embed!("docs/hexagonal.puml.j2"),
];
