//! Declared flags of the Django blueprint

use crate::domain::entities::{FlagDefault, FlagKind, FlagSpec, TextRule};

pub const DEPLOYMENT_TARGETS: &[&str] = &["kubernetes", "docker-compose", "fly", "render"];

/// Every flag the blueprint accepts, in prompt order
pub const FLAGS: &[FlagSpec] = &[
    FlagSpec {
        name: "project_name",
        kind: FlagKind::Text(TextRule::NonEmpty),
        default: FlagDefault::Text("My Django Project"),
        help: "Human-readable project name",
    },
    FlagSpec {
        name: "project_slug",
        kind: FlagKind::Text(TextRule::PythonIdentifier),
        default: FlagDefault::SlugOf("project_name"),
        help: "Python package name; derived from project_name when omitted",
    },
    FlagSpec {
        name: "project_description",
        kind: FlagKind::Text(TextRule::Any),
        default: FlagDefault::Text("A Django project"),
        help: "One-line description for README and pyproject",
    },
    FlagSpec {
        name: "author_name",
        kind: FlagKind::Text(TextRule::NonEmpty),
        default: FlagDefault::Text("Your Name"),
        help: "Author name",
    },
    FlagSpec {
        name: "author_email",
        kind: FlagKind::Text(TextRule::Email),
        default: FlagDefault::Text("you@example.com"),
        help: "Author email",
    },
    FlagSpec {
        name: "python_version",
        kind: FlagKind::Choice(&["3.12", "3.13"]),
        default: FlagDefault::Text("3.12"),
        help: "Python version for requires-python, Docker and CI",
    },
    FlagSpec {
        name: "django_version",
        kind: FlagKind::Choice(&["5.2", "6.0"]),
        default: FlagDefault::Text("5.2"),
        help: "Django release series",
    },
    FlagSpec {
        name: "dependency_manager",
        kind: FlagKind::Choice(&["uv", "poetry"]),
        default: FlagDefault::Text("uv"),
        help: "Python dependency manager",
    },
    FlagSpec {
        name: "database",
        kind: FlagKind::Choice(&["postgresql", "sqlite-dev-postgres-prod"]),
        default: FlagDefault::Text("postgresql"),
        help: "Database setup",
    },
    FlagSpec {
        name: "cache",
        kind: FlagKind::Choice(&["redis", "none"]),
        default: FlagDefault::Text("redis"),
        help: "Cache backend",
    },
    FlagSpec {
        name: "api_style",
        kind: FlagKind::Choice(&["drf", "graphql-strawberry", "both", "none"]),
        default: FlagDefault::Text("drf"),
        help: "API framework",
    },
    FlagSpec {
        name: "frontend",
        kind: FlagKind::Choice(&["none", "htmx-tailwind", "nextjs"]),
        default: FlagDefault::Text("none"),
        help: "Frontend stack",
    },
    FlagSpec {
        name: "background_tasks",
        kind: FlagKind::Choice(&["none", "celery", "temporal"]),
        default: FlagDefault::Text("none"),
        help: "Background task runner",
    },
    FlagSpec {
        name: "use_channels",
        kind: FlagKind::Bool,
        default: FlagDefault::Bool(false),
        help: "Realtime websockets with Django Channels",
    },
    FlagSpec {
        name: "auth_backend",
        kind: FlagKind::Choice(&["allauth", "jwt", "both"]),
        default: FlagDefault::Text("allauth"),
        help: "Authentication backend",
    },
    FlagSpec {
        name: "use_2fa",
        kind: FlagKind::Bool,
        default: FlagDefault::Bool(false),
        help: "TOTP two-factor authentication",
    },
    FlagSpec {
        name: "use_teams",
        kind: FlagKind::Bool,
        default: FlagDefault::Bool(false),
        help: "Teams and memberships app",
    },
    FlagSpec {
        name: "stripe_mode",
        kind: FlagKind::Choice(&["none", "basic", "advanced"]),
        default: FlagDefault::Text("none"),
        help: "Stripe billing: none, plain Stripe SDK, or dj-stripe sync",
    },
    FlagSpec {
        name: "use_i18n",
        kind: FlagKind::Bool,
        default: FlagDefault::Bool(false),
        help: "Internationalization with django-parler",
    },
    FlagSpec {
        name: "observability_level",
        kind: FlagKind::Choice(&["minimal", "standard", "full"]),
        default: FlagDefault::Text("minimal"),
        help: "Logging and metrics setup",
    },
    FlagSpec {
        name: "use_sentry",
        kind: FlagKind::Bool,
        default: FlagDefault::Bool(false),
        help: "Sentry error reporting in production",
    },
    FlagSpec {
        name: "deployment_targets",
        kind: FlagKind::MultiChoice(DEPLOYMENT_TARGETS),
        default: FlagDefault::List(&[]),
        help: "Deployment manifests to generate",
    },
    FlagSpec {
        name: "media_storage",
        kind: FlagKind::Choice(&["local-whitenoise", "aws-s3", "gcs"]),
        default: FlagDefault::Text("local-whitenoise"),
        help: "Static and media file storage",
    },
    FlagSpec {
        name: "security_profile",
        kind: FlagKind::Choice(&["standard", "strict"]),
        default: FlagDefault::Text("standard"),
        help: "Production security headers",
    },
    FlagSpec {
        name: "use_sops",
        kind: FlagKind::Bool,
        default: FlagDefault::Bool(false),
        help: "SOPS configuration for encrypted secrets",
    },
    FlagSpec {
        name: "use_search",
        kind: FlagKind::Choice(&["none", "postgres-fts", "opensearch"]),
        default: FlagDefault::Text("none"),
        help: "Search backend",
    },
    FlagSpec {
        name: "ci_provider",
        kind: FlagKind::Choice(&["github-actions", "gitlab-ci", "none"]),
        default: FlagDefault::Text("github-actions"),
        help: "Continuous integration provider",
    },
    FlagSpec {
        name: "license",
        kind: FlagKind::Choice(&["MIT", "Apache-2.0", "Proprietary"]),
        default: FlagDefault::Text("MIT"),
        help: "Project license",
    },
];

/// Look up a flag by name
pub fn flag(name: &str) -> Option<&'static FlagSpec> {
    FLAGS.iter().find(|spec| spec.name == name)
}
