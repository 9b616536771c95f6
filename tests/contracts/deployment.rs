//! Deployment artifacts are exactly the union of the selected targets

use crate::common::*;

const TARGET_FILES: &[(&str, &[&str])] = &[
    (
        "kubernetes",
        &[
            "deploy/k8s/deployment.yaml",
            "deploy/k8s/service.yaml",
            "deploy/k8s/ingress.yaml",
            "deploy/k8s/kustomization.yaml",
        ],
    ),
    ("docker-compose", &["deploy/compose/docker-compose.prod.yml"]),
    ("fly", &["deploy/fly/fly.toml"]),
    ("render", &["deploy/render/render.yaml"]),
];

fn files_of(target: &str) -> &'static [&'static str] {
    TARGET_FILES
        .iter()
        .find(|(name, _)| *name == target)
        .map(|(_, files)| *files)
        .unwrap_or_else(|| panic!("unknown target {target}"))
}

#[test]
fn contract_no_targets_means_no_deploy_files() {
    let artifact = render(&[("deployment_targets", "")]);
    assert!(deploy_files(&artifact).is_empty(), "{:?}", deploy_files(&artifact));
    assert_not_generated!(artifact, "Dockerfile");
    assert_not_generated!(artifact, "deploy");
}

#[test]
fn contract_kubernetes_manifests_iff_kubernetes_selected() {
    let with = render(&[("deployment_targets", "kubernetes")]);
    for path in files_of("kubernetes") {
        assert_generated!(with, path);
    }

    let without = render(&[("deployment_targets", "fly,render")]);
    assert!(
        !without.files().any(|(p, _)| p.starts_with("deploy/k8s/")),
        "k8s manifests rendered without the kubernetes target"
    );
}

#[test]
fn contract_each_target_renders_only_its_files() {
    for (target, expected) in TARGET_FILES {
        let artifact = render(&[("deployment_targets", target)]);
        let mut rendered = deploy_files(&artifact);
        rendered.retain(|p| p.starts_with("deploy/"));

        let mut expected: Vec<String> = expected.iter().map(|p| p.to_string()).collect();
        expected.sort();
        rendered.sort();
        assert_eq!(rendered, expected, "target {target}");

        assert_generated!(artifact, "Dockerfile");
        assert_generated!(artifact, ".dockerignore");
    }
}

#[test]
fn contract_targets_combine_as_a_union() {
    let artifact = render(&[("deployment_targets", "docker-compose,fly")]);
    let mut rendered = deploy_files(&artifact);
    rendered.retain(|p| p.starts_with("deploy/"));
    rendered.sort();

    let mut expected: Vec<String> = files_of("docker-compose")
        .iter()
        .chain(files_of("fly"))
        .map(|p| p.to_string())
        .collect();
    expected.sort();
    assert_eq!(rendered, expected);
}

#[test]
fn contract_manifests_use_the_project_name() {
    let artifact = render(&[
        ("project_name", "Acme Shop"),
        ("deployment_targets", "kubernetes,fly"),
    ]);
    assert!(content(&artifact, "deploy/k8s/deployment.yaml").contains("acme-shop-web"));
    assert!(content(&artifact, "deploy/fly/fly.toml").contains("acme-shop"));
}

#[test]
fn contract_dockerfile_follows_dependency_manager() {
    let uv = render(&[("deployment_targets", "fly"), ("dependency_manager", "uv")]);
    assert!(content(&uv, "Dockerfile").contains("uv pip install"));
    assert!(!content(&uv, "Dockerfile").contains("poetry"));

    let poetry = render(&[("deployment_targets", "fly"), ("dependency_manager", "poetry")]);
    assert!(content(&poetry, "Dockerfile").contains("poetry install"));
}
