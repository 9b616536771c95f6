//! Files and settings present in every generated project

use crate::common::*;

#[test]
fn contract_baseline_files_exist() {
    let artifact = render(&[]);
    for path in [
        "manage.py",
        "config/__init__.py",
        "config/urls.py",
        "config/wsgi.py",
        "config/asgi.py",
        "config/settings/__init__.py",
        "config/settings/base.py",
        "config/settings/dev.py",
        "config/settings/prod.py",
        "config/settings/test.py",
        "apps/core/views.py",
        "apps/users/models.py",
        ".gitignore",
        "README.md",
        "pyproject.toml",
    ] {
        assert_generated!(artifact, path);
    }
    for dir in ["static", "media", "templates"] {
        assert!(
            artifact.files().any(|(p, _)| p.starts_with(&format!("{dir}/"))),
            "{dir}/ should exist"
        );
    }
}

#[test]
fn contract_manage_py_is_an_executable_script() {
    let artifact = render(&[]);
    let manage = artifact.file("manage.py").unwrap();
    assert!(manage.is_executable());
    assert!(manage.content().starts_with("#!/usr/bin/env python"));
}

#[test]
fn contract_settings_baseline() {
    let artifact = render(&[]);
    assert_contains_all!(
        settings(&artifact),
        [
            "AUTH_USER_MODEL = \"users.User\"",
            "env.db(\"DATABASE_URL\")",
            "SecurityMiddleware",
            "AuthenticationMiddleware",
            "CsrfViewMiddleware",
            "TEMPLATES",
            "DjangoTemplates",
            "DIRS",
            "STATIC_URL",
            "STATIC_ROOT",
            "WSGI_APPLICATION",
        ]
    );
    assert!(content(&artifact, "config/urls.py").contains("admin.site.urls"));
    assert!(content(&artifact, "apps/users/models.py").contains("AbstractUser"));
}

#[test]
fn contract_pyproject_follows_dependency_manager() {
    let uv = render(&[("dependency_manager", "uv")]);
    let text = content(&uv, "pyproject.toml");
    assert_contains_all!(text, ["[project]", "django>=", "psycopg"]);
    assert_contains_none!(text, ["[tool.poetry]"]);

    let poetry = render(&[("dependency_manager", "poetry")]);
    let text = content(&poetry, "pyproject.toml");
    assert_contains_all!(
        text,
        ["[tool.poetry]", "[tool.poetry.dependencies]", "psycopg"]
    );
    assert_contains_none!(text, ["[project]\n"]);
}

#[test]
fn contract_django_version_pins_series() {
    let artifact = render(&[("django_version", "6.0")]);
    assert!(content(&artifact, "pyproject.toml").contains("django>=6.0,<6.1"));
}

#[test]
fn contract_project_name_reaches_readme() {
    let artifact = render(&[("project_name", "Acme Shop")]);
    assert!(content(&artifact, "README.md").contains("Acme Shop"));
    assert!(content(&artifact, "pyproject.toml").contains("name = \"acme_shop\""));
}
