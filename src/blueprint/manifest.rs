//! The Django template tree
//!
//! Each entry is an output path, its template body and the predicate that
//! includes it. Bodies are embedded at compile time from `templates/`.
//! Directories are declared only when they carry a predicate of their own;
//! every other parent is created implicitly.

use super::features::*;
use crate::domain::entities::NodeSpec;
use crate::domain::value_objects::Predicate::{self, Always};

macro_rules! body {
    ($path:literal) => {
        include_str!(concat!("../../templates/", $path, ".hbs"))
    };
}

/// Same body, different output path
macro_rules! file {
    ($path:literal, $when:expr) => {
        NodeSpec::file($path, body!($path), $when)
    };
}

const KEEP: &str = body!("gitkeep");

pub const NODES: &[NodeSpec] = &[
    NodeSpec::executable("manage.py", body!("manage.py"), Always),
    file!("README.md", Always),
    file!(".gitignore", Always),
    file!(".env.example", Always),
    file!(".pre-commit-config.yaml", Always),
    NodeSpec::file("pyproject.toml", body!("pyproject-uv.toml"), USE_UV),
    NodeSpec::file("pyproject.toml", body!("pyproject-poetry.toml"), USE_POETRY),
    NodeSpec::file("LICENSE", body!("LICENSE-MIT"), LICENSE_MIT),
    NodeSpec::file("LICENSE", body!("LICENSE-Apache"), LICENSE_APACHE),
    NodeSpec::file("LICENSE", body!("LICENSE-Proprietary"), LICENSE_PROPRIETARY),
    // config
    file!("config/__init__.py", Always),
    file!("config/urls.py", Always),
    file!("config/wsgi.py", Always),
    file!("config/asgi.py", Always),
    file!("config/celery.py", USE_CELERY),
    file!("config/temporal.py", USE_TEMPORAL),
    file!("config/routing.py", USE_CHANNELS),
    file!("config/settings/__init__.py", Always),
    file!("config/settings/base.py", Always),
    file!("config/settings/dev.py", Always),
    file!("config/settings/prod.py", Always),
    file!("config/settings/test.py", Always),
    // apps
    file!("apps/__init__.py", Always),
    file!("apps/core/__init__.py", Always),
    file!("apps/core/apps.py", Always),
    file!("apps/core/models.py", Always),
    file!("apps/core/views.py", Always),
    file!("apps/core/urls.py", Always),
    file!("apps/core/consumers.py", USE_CHANNELS),
    file!("apps/core/tasks.py", USE_CELERY),
    file!("apps/core/workflows.py", USE_TEMPORAL),
    NodeSpec::file("apps/core/search.py", body!("apps/core/search_postgres.py"), USE_POSTGRES_FTS),
    NodeSpec::file("apps/core/search.py", body!("apps/core/search_opensearch.py"), USE_OPENSEARCH),
    file!("apps/users/__init__.py", Always),
    file!("apps/users/apps.py", Always),
    file!("apps/users/models.py", Always),
    file!("apps/users/admin.py", Always),
    file!("apps/users/migrations/__init__.py", Always),
    NodeSpec::dir("apps/api", USE_API),
    file!("apps/api/__init__.py", Always),
    file!("apps/api/apps.py", Always),
    file!("apps/api/urls.py", Always),
    file!("apps/api/views.py", USE_DRF),
    file!("apps/api/serializers.py", USE_DRF),
    file!("apps/api/schema.py", USE_GRAPHQL),
    NodeSpec::dir("apps/billing", USE_STRIPE),
    file!("apps/billing/__init__.py", Always),
    file!("apps/billing/apps.py", Always),
    file!("apps/billing/models.py", Always),
    file!("apps/billing/webhooks.py", USE_STRIPE_BASIC),
    file!("apps/billing/urls.py", USE_STRIPE_BASIC),
    NodeSpec::dir("apps/teams", USE_TEAMS),
    file!("apps/teams/__init__.py", Always),
    file!("apps/teams/apps.py", Always),
    file!("apps/teams/models.py", Always),
    file!("apps/teams/admin.py", Always),
    file!("tests/__init__.py", Always),
    file!("tests/test_health.py", Always),
    // static assets and html
    NodeSpec::file("static/.gitkeep", KEEP, Always),
    NodeSpec::file("media/.gitkeep", KEEP, Always),
    NodeSpec::file("templates/.gitkeep", KEEP, Always),
    file!("templates/base.html", USE_HTMX),
    NodeSpec::dir("locale", USE_I18N),
    NodeSpec::file("locale/.gitkeep", KEEP, Always),
    NodeSpec::dir("frontend", USE_NEXTJS),
    file!("frontend/package.json", Always),
    file!("frontend/tsconfig.json", Always),
    file!("frontend/next.config.mjs", Always),
    file!("frontend/app/layout.tsx", Always),
    file!("frontend/app/page.tsx", Always),
    // deployment
    file!("Dockerfile", HAS_DEPLOYMENT),
    file!(".dockerignore", HAS_DEPLOYMENT),
    NodeSpec::dir("deploy", HAS_DEPLOYMENT),
    NodeSpec::dir("deploy/k8s", DEPLOY_KUBERNETES),
    file!("deploy/k8s/kustomization.yaml", Always),
    file!("deploy/k8s/deployment.yaml", Always),
    file!("deploy/k8s/service.yaml", Always),
    file!("deploy/k8s/ingress.yaml", Always),
    NodeSpec::dir("deploy/compose", DEPLOY_DOCKER_COMPOSE),
    file!("deploy/compose/docker-compose.prod.yml", Always),
    NodeSpec::dir("deploy/fly", DEPLOY_FLY),
    file!("deploy/fly/fly.toml", Always),
    NodeSpec::dir("deploy/render", DEPLOY_RENDER),
    file!("deploy/render/render.yaml", Always),
    // ci and secrets
    NodeSpec::dir(".github", CI_GITHUB),
    file!(".github/workflows/ci.yml", Always),
    file!(".gitlab-ci.yml", CI_GITLAB),
    file!(".sops.yaml", USE_SOPS),
];

/// Output paths that belong to a deployment target
pub fn is_deploy_artifact(path: &str) -> bool {
    path == "Dockerfile" || path == ".dockerignore" || path == "deploy" || path.starts_with("deploy/")
}

/// Predicate gating `path`, if the manifest declares it exactly once
pub fn predicate_of(path: &str) -> Option<Predicate> {
    let mut found = NODES.iter().filter(|spec| spec.path == path);
    let first = found.next()?;
    match found.next() {
        Some(_) => None,
        None => Some(first.when),
    }
}
