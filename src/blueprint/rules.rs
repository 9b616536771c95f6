//! Known-incompatible flag combinations

use crate::domain::entities::CompatibilityRule;
use crate::domain::value_objects::Predicate;

pub const RULES: &[CompatibilityRule] = &[
    CompatibilityRule {
        id: "celery-django-6",
        violated_when: Predicate::All(&[
            Predicate::Equals("background_tasks", "celery"),
            Predicate::Equals("django_version", "6.0"),
        ]),
        message: "Django 6.0 is not yet supported with Celery; use django_version 5.2 or another background_tasks option",
    },
    CompatibilityRule {
        id: "jwt-requires-drf",
        violated_when: Predicate::All(&[
            Predicate::OneOf("auth_backend", &["jwt", "both"]),
            Predicate::Not(&Predicate::OneOf("api_style", &["drf", "both"])),
        ]),
        message: "JWT authentication is provided by SimpleJWT and needs Django REST framework (api_style drf or both)",
    },
    CompatibilityRule {
        id: "two-factor-requires-allauth",
        violated_when: Predicate::All(&[
            Predicate::IsTrue("use_2fa"),
            Predicate::Equals("auth_backend", "jwt"),
        ]),
        message: "two-factor authentication is wired through allauth; use auth_backend allauth or both",
    },
    CompatibilityRule {
        id: "nextjs-requires-api",
        violated_when: Predicate::All(&[
            Predicate::Equals("frontend", "nextjs"),
            Predicate::Equals("api_style", "none"),
        ]),
        message: "the Next.js frontend talks to the backend through an API; choose an api_style",
    },
    CompatibilityRule {
        id: "fts-requires-postgres",
        violated_when: Predicate::All(&[
            Predicate::Equals("use_search", "postgres-fts"),
            Predicate::Equals("database", "sqlite-dev-postgres-prod"),
        ]),
        message: "Postgres full-text search needs PostgreSQL in every environment; use database postgresql",
    },
];
