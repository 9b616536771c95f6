//! Answer validation and syntax checking of generated files

use crate::common::*;
use keel::domain::services::Language;
use keel::{KeelError, ValidationError};

fn validation_errors(pairs: &[(&str, &str)]) -> Vec<ValidationError> {
    match try_render(pairs) {
        Err(KeelError::Validation(errors)) => errors.errors().to_vec(),
        Err(other) => panic!("expected validation errors, got {other}"),
        Ok(_) => panic!("expected {:?} to be rejected", pairs),
    }
}

#[test]
fn contract_every_feature_at_once_renders_and_validates() {
    let artifact = render(ALL_FEATURES);
    for path in [
        "config/celery.py",
        "config/routing.py",
        "apps/api/views.py",
        "apps/api/schema.py",
        "apps/billing/models.py",
        "apps/teams/models.py",
        "apps/core/search.py",
        "templates/base.html",
        "deploy/k8s/deployment.yaml",
        "deploy/render/render.yaml",
        ".sops.yaml",
    ] {
        assert_generated!(artifact, path);
    }
}

#[test]
fn contract_python_and_frontend_sources_parse() {
    let nextjs = [
        ("frontend", "nextjs"),
        ("api_style", "drf"),
        ("background_tasks", "temporal"),
    ];
    for pairs in [ALL_FEATURES, &nextjs[..]] {
        let artifact = render(pairs);
        let mut checked = Vec::new();
        for (path, file) in artifact.files() {
            if let Some(language) = Language::of(path) {
                if let Err(message) = language.check(file.content()) {
                    panic!("{path} is not valid {language}: {message}");
                }
                checked.push(language);
            }
        }
        assert!(checked.contains(&Language::Python));
        if pairs == &nextjs[..] {
            assert!(checked.contains(&Language::Tsx));
            assert!(checked.contains(&Language::JavaScript));
        }
    }
}

#[test]
fn contract_broken_python_is_caught() {
    let artifact = render(&[]);
    let broken = format!("{}\nCACHES = {{\"a\": 1 \"b\": 2}}\n", settings(&artifact));
    assert!(Language::Python.check(settings(&artifact)).is_ok());
    assert!(Language::Python.check(&broken).is_err());
}

#[test]
fn contract_legacy_flag_names_are_rejected() {
    let errors = validation_errors(&[("use_celery", "true"), ("use_stripe", "true")]);
    assert_eq!(
        errors,
        vec![
            ValidationError::UnknownFlag {
                flag: "use_celery".into()
            },
            ValidationError::UnknownFlag {
                flag: "use_stripe".into()
            },
        ]
    );
}

#[test]
fn contract_out_of_domain_values_are_rejected() {
    let errors = validation_errors(&[("cache", "memcached"), ("deployment_targets", "heroku")]);
    assert_eq!(errors.len(), 2);
    let text: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(text[0].contains("cache") || text[1].contains("cache"));
    assert!(text.iter().any(|t| t.contains("heroku")));
}

#[test]
fn contract_invalid_values_are_reported_before_rules() {
    let errors = validation_errors(&[
        ("background_tasks", "celery"),
        ("django_version", "6.0"),
        ("cache", "memcached"),
    ]);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ValidationError::InvalidValue { .. }));
}

#[test]
fn contract_slug_must_be_an_identifier() {
    let errors = validation_errors(&[("project_slug", "my-project")]);
    assert!(errors[0].flags().contains(&"project_slug"));

    let errors = validation_errors(&[("project_name", "2048 Games!")]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].flags(), vec!["project_slug"]);
    assert!(errors[0].to_string().contains("derived from project_name"));

    let explicit = render(&[("project_name", "2048 Games!"), ("project_slug", "games")]);
    assert!(content(&explicit, "README.md").starts_with("# 2048 Games!"));
}

#[test]
fn contract_underscore_keys_are_ignored() {
    render(&[("_comment", "generated by hand"), ("cache", "none")]);
}

#[test]
fn contract_generated_python_is_never_tab_indented() {
    let artifact = render(ALL_FEATURES);
    for (path, file) in artifact.files() {
        if path.ends_with(".py") {
            assert!(
                !file.content().lines().any(|l| l.starts_with('\t')),
                "{path} contains tab indentation"
            );
        }
    }
}
