//! In-memory rendering helpers for contract and property tests.

use keel::application::ProjectPipeline;
use keel::blueprint;
use keel::domain::ports::NoopEventSink;
use keel::{KeelError, RawAnswers, RenderedArtifact};

/// Raw answers from string pairs, the way `--set` would pass them
pub fn answers(pairs: &[(&str, &str)]) -> RawAnswers {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect()
}

/// Render and syntax-check, without the answers record
pub fn try_render(pairs: &[(&str, &str)]) -> Result<RenderedArtifact, KeelError> {
    ProjectPipeline::new()
        .with_answers_file(None)
        .run(&answers(pairs), &NoopEventSink)
        .map(|prepared| prepared.artifact)
}

pub fn render(pairs: &[(&str, &str)]) -> RenderedArtifact {
    try_render(pairs).unwrap_or_else(|e| panic!("render failed for {:?}: {}", pairs, e))
}

/// Content of a rendered file; panics with the file list when missing
pub fn content<'a>(artifact: &'a RenderedArtifact, path: &str) -> &'a str {
    match artifact.file(path) {
        Some(file) => file.content(),
        None => panic!(
            "'{}' was not rendered; files:\n  {}",
            path,
            artifact.files().map(|(p, _)| p).collect::<Vec<_>>().join("\n  ")
        ),
    }
}

pub fn settings(artifact: &RenderedArtifact) -> &str {
    content(artifact, "config/settings/base.py")
}

/// Rendered deployment artifacts (`deploy/**`, `Dockerfile`, `.dockerignore`)
pub fn deploy_files(artifact: &RenderedArtifact) -> Vec<String> {
    artifact
        .files()
        .map(|(p, _)| p)
        .filter(|p| blueprint::manifest::is_deploy_artifact(p))
        .map(str::to_string)
        .collect()
}

/// Every flag switched to its most feature-rich compatible value
pub const ALL_FEATURES: &[(&str, &str)] = &[
    ("project_name", "Everything Shop"),
    ("dependency_manager", "uv"),
    ("cache", "redis"),
    ("api_style", "both"),
    ("frontend", "htmx-tailwind"),
    ("background_tasks", "celery"),
    ("use_channels", "true"),
    ("auth_backend", "both"),
    ("use_2fa", "true"),
    ("use_teams", "true"),
    ("stripe_mode", "advanced"),
    ("use_i18n", "true"),
    ("observability_level", "full"),
    ("use_sentry", "true"),
    ("deployment_targets", "kubernetes,docker-compose,fly,render"),
    ("media_storage", "aws-s3"),
    ("security_profile", "strict"),
    ("use_sops", "true"),
    ("use_search", "opensearch"),
    ("ci_provider", "github-actions"),
    ("license", "Apache-2.0"),
];
