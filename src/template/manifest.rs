//! The Hexagonal/DDD project skeleton.
//!
//! Order matters only for log output; the writer creates parent directories
//! on demand.

use super::node::{Include, TemplateNode};

const fn dir(path: &'static str) -> TemplateNode {
    TemplateNode::directory(path, Include::Always)
}

const fn init(path: &'static str, include: Include) -> TemplateNode {
    TemplateNode::empty(path, include)
}

const fn file(path: &'static str, template: &'static str) -> TemplateNode {
    TemplateNode::template(path, template, Include::Always)
}

const fn file_if(path: &'static str, template: &'static str, include: Include) -> TemplateNode {
    TemplateNode::template(path, template, include)
}

use Include::{Always, Ci, Devcontainer, DevcontainerWithPostgres, Docker, Postgres};

pub static MANIFEST: &[TemplateNode] = &[
    // Root files
    file("pyproject.toml", "base/pyproject.toml.j2"),
    file("README.md", "base/README.md.j2"),
    file(".gitignore", "base/gitignore.j2"),
    file(".pre-commit-config.yaml", "base/pre-commit-config.yaml.j2"),
    file(".env", "base/env.j2"),
    file(".env.dev", "base/env.dev.j2"),
    file("docs/architecture/hexagonal.puml", "docs/hexagonal.puml.j2"),
    // Package
    file("src/{{ package_name }}/__init__.py", "base/init.py.j2"),
    file("src/{{ package_name }}/__main__.py", "base/__main__.py.j2"),
    // Domain layer
    dir("src/{{ package_name }}/domain"),
    init("src/{{ package_name }}/domain/__init__.py", Always),
    init("src/{{ package_name }}/domain/models/__init__.py", Always),
    init("src/{{ package_name }}/domain/services/__init__.py", Always),
    init("src/{{ package_name }}/domain/events/__init__.py", Always),
    file("src/{{ package_name }}/domain/events/base.py", "base/domain_event.py.j2"),
    file("src/{{ package_name }}/domain/events/events.py", "base/events.py.j2"),
    file(
        "src/{{ package_name }}/domain/exceptions/__init__.py",
        "base/exceptions/__init__.py.j2",
    ),
    file("src/{{ package_name }}/domain/exceptions/base.py", "base/exceptions/base.py.j2"),
    file(
        "src/{{ package_name }}/domain/exceptions/validation.py",
        "base/exceptions/validation.py.j2",
    ),
    init("src/{{ package_name }}/domain/shared/__init__.py", Always),
    file(
        "src/{{ package_name }}/domain/shared/building_blocks.py",
        "base/building_blocks.py.j2",
    ),
    // Application layer
    dir("src/{{ package_name }}/application"),
    init("src/{{ package_name }}/application/__init__.py", Always),
    init("src/{{ package_name }}/application/ports/__init__.py", Always),
    init("src/{{ package_name }}/application/ports/inbound/__init__.py", Always),
    init("src/{{ package_name }}/application/ports/outbound/__init__.py", Always),
    file(
        "src/{{ package_name }}/application/ports/outbound/logger.py",
        "base/logger_port.py.j2",
    ),
    file_if(
        "src/{{ package_name }}/application/ports/outbound/database.py",
        "base/database_port.py.j2",
        Postgres,
    ),
    init("src/{{ package_name }}/application/use_cases/__init__.py", Always),
    init("src/{{ package_name }}/application/dto/__init__.py", Always),
    // Adapters layer, inbound
    dir("src/{{ package_name }}/adapters"),
    init("src/{{ package_name }}/adapters/__init__.py", Always),
    init("src/{{ package_name }}/adapters/inbound/__init__.py", Always),
    init("src/{{ package_name }}/adapters/inbound/api/__init__.py", Always),
    init("src/{{ package_name }}/adapters/inbound/api/rest/__init__.py", Always),
    file("src/{{ package_name }}/adapters/inbound/api/rest/app.py", "base/app.py.j2"),
    file(
        "src/{{ package_name }}/adapters/inbound/api/rest/dependencies.py",
        "base/dependencies.py.j2",
    ),
    init("src/{{ package_name }}/adapters/inbound/api/rest/routes/__init__.py", Always),
    // Adapters layer, outbound
    init("src/{{ package_name }}/adapters/outbound/__init__.py", Always),
    init("src/{{ package_name }}/adapters/outbound/logging/__init__.py", Always),
    file("src/{{ package_name }}/adapters/outbound/logging/logger.py", "base/logger.py.j2"),
    init("src/{{ package_name }}/adapters/outbound/persistence/__init__.py", Postgres),
    init("src/{{ package_name }}/adapters/outbound/persistence/postgres/__init__.py", Postgres),
    file_if(
        "src/{{ package_name }}/adapters/outbound/persistence/postgres/database.py",
        "db/postgres/database.py.j2",
        Postgres,
    ),
    file_if(
        "src/{{ package_name }}/adapters/outbound/persistence/postgres/models.py",
        "db/postgres/models.py.j2",
        Postgres,
    ),
    file_if(
        "src/{{ package_name }}/adapters/outbound/persistence/postgres/repositories.py",
        "db/postgres/repositories.py.j2",
        Postgres,
    ),
    file_if(
        "src/{{ package_name }}/adapters/outbound/persistence/postgres/config.py",
        "db/postgres/config.py.j2",
        Postgres,
    ),
    // Adapters layer, config
    init("src/{{ package_name }}/adapters/config/__init__.py", Always),
    file("src/{{ package_name }}/adapters/config/settings.py", "base/settings.py.j2"),
    // Tests
    file("tests/conftest.py", "base/conftest.py.j2"),
    init("tests/unit/domain/__init__.py", Always),
    init("tests/unit/application/__init__.py", Always),
    init("tests/integration/adapters/__init__.py", Always),
    // Docker
    file_if("docker/Dockerfile", "docker/Dockerfile.j2", Docker),
    file_if("docker/docker-compose.yml", "docker/docker-compose.yml.j2", Docker),
    file_if(".dockerignore", "docker/dockerignore.j2", Docker),
    // CI
    file_if(".github/workflows/ci.yml", "ci/ci.yml.j2", Ci),
    // Devcontainer
    file_if(".devcontainer/devcontainer.json", "devcontainer/devcontainer.json.j2", Devcontainer),
    file_if(
        ".devcontainer/docker-compose.yml",
        "devcontainer/docker-compose.yml.j2",
        DevcontainerWithPostgres,
    ),
    file_if(".vscode/launch.json", "devcontainer/launch.json.j2", Devcontainer),
];
