//! Each optional feature shows up exactly when its flag selects it

use crate::common::*;

#[test]
fn contract_celery_files_follow_background_tasks() {
    let on = render(&[("background_tasks", "celery")]);
    assert_generated!(on, "config/celery.py");
    assert_generated!(on, "apps/core/tasks.py");
    assert_contains_all!(settings(&on), ["CELERY_BROKER_URL", "django_celery_beat"]);
    assert!(content(&on, "pyproject.toml").contains("celery>="));

    let off = render(&[("background_tasks", "none")]);
    assert_not_generated!(off, "config/celery.py");
    assert_not_generated!(off, "apps/core/tasks.py");
    assert_contains_none!(settings(&off), ["CELERY_", "django_celery"]);
    assert!(!content(&off, "pyproject.toml").contains("celery"));
}

#[test]
fn contract_temporal_replaces_celery() {
    let artifact = render(&[("background_tasks", "temporal")]);
    assert_generated!(artifact, "config/temporal.py");
    assert_generated!(artifact, "apps/core/workflows.py");
    assert_not_generated!(artifact, "config/celery.py");
    assert!(settings(&artifact).contains("TEMPORAL_HOST"));
    assert!(content(&artifact, "pyproject.toml").contains("temporalio"));
}

#[test]
fn contract_channels_wiring() {
    let on = render(&[("use_channels", "true")]);
    assert_generated!(on, "config/routing.py");
    assert_generated!(on, "apps/core/consumers.py");
    assert_contains_all!(
        settings(&on),
        ["\"channels\"", "ASGI_APPLICATION", "CHANNEL_LAYERS"]
    );
    assert!(content(&on, "config/asgi.py").contains("ProtocolTypeRouter"));

    let off = render(&[("use_channels", "false")]);
    assert_not_generated!(off, "config/routing.py");
    assert_not_generated!(off, "apps/core/consumers.py");
    assert_contains_none!(settings(&off), ["channels", "ASGI_APPLICATION"]);
    assert!(!content(&off, "config/asgi.py").contains("channels"));
}

#[test]
fn contract_channels_layer_follows_cache() {
    let redis = render(&[("use_channels", "true"), ("cache", "redis")]);
    assert!(settings(&redis).contains("RedisChannelLayer"));

    let memory = render(&[("use_channels", "true"), ("cache", "none")]);
    assert!(settings(&memory).contains("InMemoryChannelLayer"));
}

#[test]
fn contract_cache_redis_vs_none() {
    let redis = render(&[("cache", "redis")]);
    assert_contains_all!(settings(&redis), ["CACHES", "django_redis", "RedisCache"]);
    assert!(content(&redis, "apps/core/views.py").contains("from django.core.cache import cache"));

    let none = render(&[("cache", "none")]);
    assert_contains_none!(settings(&none), ["CACHES", "django_redis", "RedisCache"]);
    assert!(!content(&none, "apps/core/views.py").contains("django.core.cache"));
    assert!(!content(&none, "pyproject.toml").contains("django-redis"));
}

#[test]
fn contract_billing_follows_stripe_mode() {
    let none = render(&[("stripe_mode", "none")]);
    assert_not_generated!(none, "apps/billing");
    assert_not_generated!(none, "apps/billing/models.py");
    assert_contains_none!(settings(&none), ["STRIPE_", "apps.billing"]);

    let basic = render(&[("stripe_mode", "basic")]);
    assert_generated!(basic, "apps/billing/models.py");
    assert_generated!(basic, "apps/billing/webhooks.py");
    let models = content(&basic, "apps/billing/models.py");
    assert_contains_all!(models, ["StripeCustomer", "stripe_customer_id"]);
    assert_contains_none!(models, ["djstripe"]);
    assert_contains_all!(settings(&basic), ["apps.billing", "STRIPE_SECRET_KEY"]);
    assert!(!settings(&basic).contains("\"djstripe\""));

    let advanced = render(&[("stripe_mode", "advanced")]);
    assert_generated!(advanced, "apps/billing/models.py");
    assert_not_generated!(advanced, "apps/billing/webhooks.py");
    assert!(content(&advanced, "apps/billing/models.py").contains("from djstripe.models import"));
    assert_contains_all!(settings(&advanced), ["\"djstripe\"", "DJSTRIPE_WEBHOOK_SECRET"]);
    assert!(content(&advanced, "config/urls.py").contains("djstripe.urls"));
    assert!(content(&advanced, "pyproject.toml").contains("dj-stripe"));
}

#[test]
fn contract_two_factor() {
    let on = render(&[("use_2fa", "true")]);
    assert_contains_all!(
        settings(&on),
        ["django_otp", "django_otp.plugins.otp_totp", "OTPMiddleware"]
    );

    let off = render(&[("use_2fa", "false")]);
    assert_contains_none!(settings(&off), ["django_otp"]);
}

#[test]
fn contract_teams_app() {
    let on = render(&[("use_teams", "true")]);
    assert_generated!(on, "apps/teams/models.py");
    assert!(content(&on, "apps/teams/models.py").contains("class Membership"));
    assert!(settings(&on).contains("\"apps.teams\""));

    let off = render(&[]);
    assert_not_generated!(off, "apps/teams");
    assert!(!settings(&off).contains("apps.teams"));
}

#[test]
fn contract_i18n() {
    let on = render(&[("use_i18n", "true")]);
    assert_contains_all!(
        settings(&on),
        ["\"parler\"", "USE_I18N = True", "LANGUAGES", "LOCALE_PATHS", "LocaleMiddleware"]
    );
    assert_generated!(on, "locale");
    assert!(content(&on, "pyproject.toml").contains("django-parler"));

    let off = render(&[("use_i18n", "false")]);
    assert_contains_none!(
        settings(&off),
        ["parler", "USE_I18N = True", "LANGUAGES", "LOCALE_PATHS"]
    );
    assert!(settings(&off).contains("USE_I18N = False"));
    assert_not_generated!(off, "locale");
}

#[test]
fn contract_api_style() {
    let drf = render(&[("api_style", "drf")]);
    assert_generated!(drf, "apps/api/views.py");
    assert_generated!(drf, "apps/api/serializers.py");
    assert_not_generated!(drf, "apps/api/schema.py");
    assert_contains_all!(
        settings(&drf),
        ["rest_framework", "drf_spectacular", "django_filters", "corsheaders"]
    );
    assert!(!settings(&drf).contains("strawberry"));
    assert!(content(&drf, "config/urls.py").contains("apps.api.urls"));

    let graphql = render(&[("api_style", "graphql-strawberry"), ("auth_backend", "allauth")]);
    assert_generated!(graphql, "apps/api/schema.py");
    assert_not_generated!(graphql, "apps/api/views.py");
    assert!(settings(&graphql).contains("strawberry.django"));
    assert!(!settings(&graphql).contains("REST_FRAMEWORK"));

    let both = render(&[("api_style", "both")]);
    assert_generated!(both, "apps/api/views.py");
    assert_generated!(both, "apps/api/schema.py");

    let none = render(&[("api_style", "none"), ("auth_backend", "allauth")]);
    assert_not_generated!(none, "apps/api");
    assert!(!content(&none, "config/urls.py").contains("apps.api.urls"));
    assert!(!settings(&none).contains("rest_framework"));
}

#[test]
fn contract_auth_backend() {
    let allauth = render(&[("auth_backend", "allauth")]);
    assert_contains_all!(
        settings(&allauth),
        [
            "allauth.account",
            "allauth.socialaccount",
            "allauth.account.middleware.AccountMiddleware",
            "django.contrib.sites",
            "ACCOUNT_LOGIN_METHODS",
            "SITE_ID = 1",
        ]
    );
    assert!(!settings(&allauth).contains("simplejwt"));

    let jwt = render(&[("auth_backend", "jwt")]);
    assert_contains_all!(settings(&jwt), ["rest_framework_simplejwt", "SIMPLE_JWT"]);
    assert!(!settings(&jwt).contains("allauth"));
    assert!(content(&jwt, "apps/api/urls.py").contains("TokenObtainPairView"));

    let both = render(&[("auth_backend", "both")]);
    assert_contains_all!(settings(&both), ["allauth.account", "SIMPLE_JWT"]);
}

#[test]
fn contract_frontend() {
    let htmx = render(&[("frontend", "htmx-tailwind")]);
    assert_generated!(htmx, "templates/base.html");
    assert_contains_all!(
        content(&htmx, "templates/base.html"),
        ["{% block", "tailwindcss", "htmx"]
    );
    assert!(settings(&htmx).contains("django_htmx"));
    assert_not_generated!(htmx, "frontend/package.json");

    let nextjs = render(&[("frontend", "nextjs")]);
    assert_generated!(nextjs, "frontend/package.json");
    assert_generated!(nextjs, "frontend/app/page.tsx");
    assert!(content(&nextjs, "frontend/package.json").contains("\"next\""));
    assert_not_generated!(nextjs, "templates/base.html");

    let none = render(&[("frontend", "none")]);
    assert_not_generated!(none, "frontend");
    assert_not_generated!(none, "templates/base.html");
}

#[test]
fn contract_project_name_cannot_break_the_base_template() {
    let artifact = render(&[
        ("frontend", "htmx-tailwind"),
        ("project_name", "Shop {% endblock %} <b>&"),
        ("project_slug", "shop"),
    ]);
    let base = content(&artifact, "templates/base.html");

    assert!(
        base.contains("<title>{% block title %}Shop &#123;% endblock %&#125; &lt;b&gt;&amp;{% endblock %}</title>"),
        "{base}"
    );
    assert_eq!(base.matches("{% block").count(), base.matches("{% endblock %}").count());
    assert!(!base.contains("<b>"));
}

#[test]
fn contract_media_storage() {
    let local = render(&[("media_storage", "local-whitenoise")]);
    assert_contains_all!(settings(&local), ["whitenoise", "WhiteNoiseMiddleware"]);
    assert_contains_none!(settings(&local), ["AWS_", "GS_BUCKET_NAME", "\"storages\""]);

    let s3 = render(&[("media_storage", "aws-s3")]);
    assert_contains_all!(settings(&s3), ["AWS_", "S3", "S3Storage", "\"storages\""]);
    assert!(!settings(&s3).contains("whitenoise"));

    let gcs = render(&[("media_storage", "gcs")]);
    assert_contains_all!(settings(&gcs), ["GS_BUCKET_NAME", "GoogleCloudStorage"]);
    assert!(!settings(&gcs).contains("AWS_"));
}

#[test]
fn contract_security_profile() {
    let strict = render(&[("security_profile", "strict")]);
    assert_contains_all!(
        content(&strict, "config/settings/prod.py"),
        ["SECURE_HSTS_PRELOAD = True", "CONTENT_SECURITY_POLICY"]
    );
    assert!(settings(&strict).contains("CSPMiddleware"));

    let standard = render(&[("security_profile", "standard")]);
    assert!(!content(&standard, "config/settings/prod.py").contains("CONTENT_SECURITY_POLICY"));
    assert!(!settings(&standard).contains("csp"));
}

#[test]
fn contract_observability_and_sentry() {
    let full = render(&[("observability_level", "full"), ("use_sentry", "true")]);
    assert!(settings(&full).contains("django_prometheus"));
    assert!(content(&full, "config/settings/prod.py").contains("sentry_sdk.init"));

    let minimal = render(&[]);
    assert_contains_none!(settings(&minimal), ["django_prometheus", "pythonjsonlogger"]);
    assert!(!content(&minimal, "config/settings/prod.py").contains("sentry_sdk"));
}

#[test]
fn contract_search_backend() {
    let fts = render(&[("use_search", "postgres-fts")]);
    assert!(content(&fts, "apps/core/search.py").contains("SearchVector"));
    assert!(settings(&fts).contains("django.contrib.postgres"));

    let opensearch = render(&[("use_search", "opensearch")]);
    assert!(settings(&opensearch).contains("OPENSEARCH_DSL"));

    assert_not_generated!(render(&[]), "apps/core/search.py");
}

#[test]
fn contract_ci_sops_and_license() {
    let github = render(&[("ci_provider", "github-actions")]);
    assert_generated!(github, ".github/workflows/ci.yml");
    assert_not_generated!(github, ".gitlab-ci.yml");

    let gitlab = render(&[("ci_provider", "gitlab-ci")]);
    assert_generated!(gitlab, ".gitlab-ci.yml");
    assert_not_generated!(gitlab, ".github/workflows/ci.yml");

    let none = render(&[("ci_provider", "none"), ("use_sops", "true")]);
    assert_not_generated!(none, ".gitlab-ci.yml");
    assert_not_generated!(none, ".github");
    assert_generated!(none, ".sops.yaml");

    let apache = render(&[("license", "Apache-2.0")]);
    assert!(content(&apache, "LICENSE").contains("Apache License"));
}
