//! Derived feature switches and the render context built from them
//!
//! Templates never compare flag values themselves; they test booleans from
//! [`FEATURES`]. The same predicates gate files in the manifest, so a file
//! and the settings that reference it cannot disagree.

use serde_json::{Map, Value};

use super::packages::{self, Group};
use crate::domain::entities::FlagSet;
use crate::domain::ports::ContextProvider;
use crate::domain::value_objects::Predicate;
use crate::error::RenderError;

pub const USE_CELERY: Predicate = Predicate::Equals("background_tasks", "celery");
pub const USE_TEMPORAL: Predicate = Predicate::Equals("background_tasks", "temporal");
pub const USE_CHANNELS: Predicate = Predicate::IsTrue("use_channels");
pub const USE_DRF: Predicate = Predicate::OneOf("api_style", &["drf", "both"]);
pub const USE_GRAPHQL: Predicate = Predicate::OneOf("api_style", &["graphql-strawberry", "both"]);
pub const USE_API: Predicate = Predicate::Not(&Predicate::Equals("api_style", "none"));
pub const USE_ALLAUTH: Predicate = Predicate::OneOf("auth_backend", &["allauth", "both"]);
pub const USE_JWT: Predicate = Predicate::OneOf("auth_backend", &["jwt", "both"]);
pub const USE_2FA: Predicate = Predicate::IsTrue("use_2fa");
pub const USE_TEAMS: Predicate = Predicate::IsTrue("use_teams");
pub const USE_I18N: Predicate = Predicate::IsTrue("use_i18n");
pub const USE_SENTRY: Predicate = Predicate::IsTrue("use_sentry");
pub const USE_SOPS: Predicate = Predicate::IsTrue("use_sops");
pub const USE_REDIS: Predicate = Predicate::Equals("cache", "redis");
pub const USE_STRIPE: Predicate = Predicate::Not(&Predicate::Equals("stripe_mode", "none"));
pub const USE_STRIPE_BASIC: Predicate = Predicate::Equals("stripe_mode", "basic");
pub const USE_DJSTRIPE: Predicate = Predicate::Equals("stripe_mode", "advanced");
pub const USE_HTMX: Predicate = Predicate::Equals("frontend", "htmx-tailwind");
pub const USE_NEXTJS: Predicate = Predicate::Equals("frontend", "nextjs");
pub const USE_WHITENOISE: Predicate = Predicate::Equals("media_storage", "local-whitenoise");
pub const USE_S3: Predicate = Predicate::Equals("media_storage", "aws-s3");
pub const USE_GCS: Predicate = Predicate::Equals("media_storage", "gcs");
pub const OBSERVABILITY_STANDARD: Predicate =
    Predicate::OneOf("observability_level", &["standard", "full"]);
pub const OBSERVABILITY_FULL: Predicate = Predicate::Equals("observability_level", "full");
pub const DEPLOY_KUBERNETES: Predicate = Predicate::Contains("deployment_targets", "kubernetes");
pub const DEPLOY_DOCKER_COMPOSE: Predicate =
    Predicate::Contains("deployment_targets", "docker-compose");
pub const DEPLOY_FLY: Predicate = Predicate::Contains("deployment_targets", "fly");
pub const DEPLOY_RENDER: Predicate = Predicate::Contains("deployment_targets", "render");
pub const HAS_DEPLOYMENT: Predicate = Predicate::NotEmpty("deployment_targets");
pub const USE_UV: Predicate = Predicate::Equals("dependency_manager", "uv");
pub const USE_POETRY: Predicate = Predicate::Equals("dependency_manager", "poetry");
pub const USE_POSTGRES_FTS: Predicate = Predicate::Equals("use_search", "postgres-fts");
pub const USE_OPENSEARCH: Predicate = Predicate::Equals("use_search", "opensearch");
pub const USE_SEARCH: Predicate = Predicate::Not(&Predicate::Equals("use_search", "none"));
pub const STRICT_SECURITY: Predicate = Predicate::Equals("security_profile", "strict");
pub const CI_GITHUB: Predicate = Predicate::Equals("ci_provider", "github-actions");
pub const CI_GITLAB: Predicate = Predicate::Equals("ci_provider", "gitlab-ci");
pub const SQLITE_DEV: Predicate = Predicate::Equals("database", "sqlite-dev-postgres-prod");
pub const LICENSE_MIT: Predicate = Predicate::Equals("license", "MIT");
pub const LICENSE_APACHE: Predicate = Predicate::Equals("license", "Apache-2.0");
pub const LICENSE_PROPRIETARY: Predicate = Predicate::Equals("license", "Proprietary");

/// A named boolean exposed to templates
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub name: &'static str,
    pub when: Predicate,
}

const fn feature(name: &'static str, when: Predicate) -> Feature {
    Feature { name, when }
}

pub const FEATURES: &[Feature] = &[
    feature("use_celery", USE_CELERY),
    feature("use_temporal", USE_TEMPORAL),
    feature("use_drf", USE_DRF),
    feature("use_graphql", USE_GRAPHQL),
    feature("use_api", USE_API),
    feature("use_allauth", USE_ALLAUTH),
    feature("use_jwt", USE_JWT),
    feature("use_redis", USE_REDIS),
    feature("use_stripe", USE_STRIPE),
    feature("use_stripe_basic", USE_STRIPE_BASIC),
    feature("use_djstripe", USE_DJSTRIPE),
    feature("use_htmx", USE_HTMX),
    feature("use_nextjs", USE_NEXTJS),
    feature("use_whitenoise", USE_WHITENOISE),
    feature("use_s3", USE_S3),
    feature("use_gcs", USE_GCS),
    feature("observability_standard", OBSERVABILITY_STANDARD),
    feature("observability_full", OBSERVABILITY_FULL),
    feature("deploy_kubernetes", DEPLOY_KUBERNETES),
    feature("deploy_docker_compose", DEPLOY_DOCKER_COMPOSE),
    feature("deploy_fly", DEPLOY_FLY),
    feature("deploy_render", DEPLOY_RENDER),
    feature("has_deployment", HAS_DEPLOYMENT),
    feature("use_uv", USE_UV),
    feature("use_poetry", USE_POETRY),
    feature("use_postgres_fts", USE_POSTGRES_FTS),
    feature("use_opensearch", USE_OPENSEARCH),
    feature("strict_security", STRICT_SECURITY),
    feature("ci_github", CI_GITHUB),
    feature("ci_gitlab", CI_GITLAB),
    feature("sqlite_dev", SQLITE_DEV),
];

/// Context provider for the Django blueprint
///
/// Adds every [`Feature`], the Python dependency lists and a few formatted
/// strings that templates would otherwise have to assemble.
#[derive(Debug, Clone, Copy, Default)]
pub struct DjangoContext;

impl ContextProvider for DjangoContext {
    fn extend(&self, flags: &FlagSet, context: &mut Map<String, Value>) -> Result<(), RenderError> {
        for feature in FEATURES {
            let on = feature.when.eval(flags).map_err(|e| RenderError::Context {
                message: format!("feature '{}': {}", feature.name, e),
            })?;
            context.insert(feature.name.to_string(), Value::Bool(on));
        }

        context.insert(
            "dependencies".to_string(),
            packages::render_list(flags, Group::Main)?,
        );
        context.insert(
            "dev_dependencies".to_string(),
            packages::render_list(flags, Group::Dev)?,
        );

        let slug = text(flags, "project_slug")?;
        let python = text(flags, "python_version")?;
        context.insert(
            "python_tag".to_string(),
            Value::String(format!("py{}", python.replace('.', ""))),
        );
        context.insert("dns_name".to_string(), Value::String(dns_name(slug)));
        context.insert(
            "author_line".to_string(),
            Value::String(format!(
                "{} <{}>",
                text(flags, "author_name")?,
                text(flags, "author_email")?
            )),
        );
        Ok(())
    }
}

pub(crate) fn text<'a>(flags: &'a FlagSet, name: &str) -> Result<&'a str, RenderError> {
    flags.text(name).ok_or_else(|| RenderError::Context {
        message: format!("flag '{}' is missing or not text", name),
    })
}

/// RFC 1123 label for Kubernetes, Fly and Render resource names
pub fn dns_name(slug: &str) -> String {
    let name: String = slug
        .chars()
        .map(|c| if c == '_' { '-' } else { c })
        .collect();
    let name = name.trim_matches('-');
    if name.is_empty() {
        "app".to_string()
    } else {
        name.chars().take(63).collect::<String>().trim_end_matches('-').to_string()
    }
}
