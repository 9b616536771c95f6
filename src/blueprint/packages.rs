//! Python dependencies of a generated project
//!
//! One table drives both `pyproject.toml` variants; uv and Poetry differ
//! only in how a requirement is spelled.

use serde_json::{json, Value};

use super::features::*;
use crate::domain::entities::FlagSet;
use crate::domain::value_objects::Predicate;
use crate::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Main,
    Dev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// PEP 440 specifier
    Spec(&'static str),
    /// The release series chosen by `django_version`
    DjangoSeries,
}

#[derive(Debug, Clone, Copy)]
pub struct Package {
    pub name: &'static str,
    pub extras: &'static [&'static str],
    pub version: Version,
    pub group: Group,
    pub when: Predicate,
}

const fn main(name: &'static str, version: &'static str, when: Predicate) -> Package {
    Package {
        name,
        extras: &[],
        version: Version::Spec(version),
        group: Group::Main,
        when,
    }
}

const fn dev(name: &'static str, version: &'static str) -> Package {
    Package {
        name,
        extras: &[],
        version: Version::Spec(version),
        group: Group::Dev,
        when: Predicate::Always,
    }
}

const fn with_extras(mut package: Package, extras: &'static [&'static str]) -> Package {
    package.extras = extras;
    package
}

pub const PACKAGES: &[Package] = &[
    Package {
        name: "django",
        extras: &[],
        version: Version::DjangoSeries,
        group: Group::Main,
        when: Predicate::Always,
    },
    main("django-environ", ">=0.12", Predicate::Always),
    with_extras(main("psycopg", ">=3.2", Predicate::Always), &["binary"]),
    main("gunicorn", ">=23.0", Predicate::Always),
    main("whitenoise", ">=6.8", USE_WHITENOISE),
    with_extras(main("django-storages", ">=1.14", USE_S3), &["s3"]),
    with_extras(main("django-storages", ">=1.14", USE_GCS), &["google"]),
    main("django-redis", ">=5.4", USE_REDIS),
    main("redis", ">=5.2", USE_REDIS),
    main("celery", ">=5.4", USE_CELERY),
    main("django-celery-beat", ">=2.7", USE_CELERY),
    main("django-celery-results", ">=2.5", USE_CELERY),
    main("temporalio", ">=1.9", USE_TEMPORAL),
    main("channels", ">=4.2", USE_CHANNELS),
    main("daphne", ">=4.1", USE_CHANNELS),
    main(
        "channels-redis",
        ">=4.2",
        Predicate::All(&[USE_CHANNELS, USE_REDIS]),
    ),
    main("djangorestframework", ">=3.15", USE_DRF),
    main("drf-spectacular", ">=0.28", USE_DRF),
    main("django-filter", ">=24.3", USE_DRF),
    main("django-cors-headers", ">=4.6", USE_DRF),
    main("djangorestframework-simplejwt", ">=5.3", USE_JWT),
    main("strawberry-graphql-django", ">=0.50", USE_GRAPHQL),
    main("django-allauth", ">=65.3", USE_ALLAUTH),
    main("django-otp", ">=1.5", USE_2FA),
    main("qrcode", ">=8.0", USE_2FA),
    main("stripe", ">=11.4", USE_STRIPE),
    main("dj-stripe", ">=2.9", USE_DJSTRIPE),
    main("django-parler", ">=2.3", USE_I18N),
    main("django-htmx", ">=1.21", USE_HTMX),
    main("django-csp", ">=4.0", STRICT_SECURITY),
    with_extras(main("sentry-sdk", ">=2.19", USE_SENTRY), &["django"]),
    main("python-json-logger", ">=3.2", OBSERVABILITY_STANDARD),
    main("django-prometheus", ">=2.3", OBSERVABILITY_FULL),
    main("opentelemetry-sdk", ">=1.29", OBSERVABILITY_FULL),
    main(
        "opentelemetry-instrumentation-django",
        ">=0.50b0",
        OBSERVABILITY_FULL,
    ),
    main("django-opensearch-dsl", ">=0.6", USE_OPENSEARCH),
    dev("pytest", ">=8.3"),
    dev("pytest-django", ">=4.9"),
    dev("factory-boy", ">=3.3"),
    dev("ruff", ">=0.8"),
    dev("django-debug-toolbar", ">=4.4"),
    dev("pre-commit", ">=4.0"),
];

impl Package {
    fn specifier(&self, flags: &FlagSet) -> Result<String, RenderError> {
        match self.version {
            Version::Spec(spec) => Ok(spec.to_string()),
            Version::DjangoSeries => {
                let series = text(flags, "django_version")?;
                django_series_spec(series).ok_or_else(|| RenderError::Context {
                    message: format!("django_version '{}' is not MAJOR.MINOR", series),
                })
            }
        }
    }

    /// `name[extra]>=x` as written in `[project].dependencies`
    pub fn requirement(&self, flags: &FlagSet) -> Result<String, RenderError> {
        let extras = if self.extras.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.extras.join(","))
        };
        Ok(format!("{}{}{}", self.name, extras, self.specifier(flags)?))
    }

    /// TOML value for a `[tool.poetry.dependencies]` entry
    pub fn poetry_spec(&self, flags: &FlagSet) -> Result<String, RenderError> {
        let version = Value::String(self.specifier(flags)?).to_string();
        if self.extras.is_empty() {
            return Ok(version);
        }
        let extras: Vec<String> = self
            .extras
            .iter()
            .map(|e| Value::String(e.to_string()).to_string())
            .collect();
        Ok(format!(
            "{{ version = {}, extras = [{}] }}",
            version,
            extras.join(", ")
        ))
    }
}

/// `5.2` becomes `>=5.2,<5.3`
fn django_series_spec(series: &str) -> Option<String> {
    let (major, minor) = series.split_once('.')?;
    let major: u32 = major.parse().ok()?;
    let minor: u32 = minor.parse().ok()?;
    Some(format!(">={}.{},<{}.{}", major, minor, major, minor + 1))
}

/// Packages of `group` selected by `flags`, in table order
pub fn selected(flags: &FlagSet, group: Group) -> Result<Vec<&'static Package>, RenderError> {
    let mut out = Vec::new();
    for package in PACKAGES.iter().filter(|p| p.group == group) {
        let included = package.when.eval(flags).map_err(|e| RenderError::Context {
            message: format!("package '{}': {}", package.name, e),
        })?;
        if included {
            out.push(package);
        }
    }
    Ok(out)
}

/// Template-ready list of `{name, requirement, poetry_spec}` objects
pub fn render_list(flags: &FlagSet, group: Group) -> Result<Value, RenderError> {
    let mut items = Vec::new();
    for package in selected(flags, group)? {
        items.push(json!({
            "name": package.name,
            "requirement": package.requirement(flags)?,
            "poetry_spec": package.poetry_spec(flags)?,
        }));
    }
    Ok(Value::Array(items))
}
