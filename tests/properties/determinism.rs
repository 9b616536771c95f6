//! Property tests for reproducible output.

use proptest::prelude::*;

use keel::application::ProjectPipeline;
use keel::domain::ports::NoopEventSink;
use keel::infrastructure::LocalFs;
use keel::{GenerateOptions, GenerateUseCase};

use crate::answers::in_domain_answers;
use crate::common::list_all_files;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the same answers always render the same bytes.
    #[test]
    fn property_render_is_deterministic(raw in in_domain_answers()) {
        let pipeline = ProjectPipeline::new();
        let first = pipeline.run(&raw, &NoopEventSink);
        prop_assume!(first.is_ok());
        let first = first.unwrap().artifact;
        let second = pipeline.run(&raw, &NoopEventSink).unwrap().artifact;

        prop_assert_eq!(first.digest(), second.digest());
        let paths_a: Vec<&str> = first.entries().map(|(p, _)| p).collect();
        let paths_b: Vec<&str> = second.entries().map(|(p, _)| p).collect();
        prop_assert_eq!(paths_a, paths_b);
    }

    /// PROPERTY: generating twice into fresh directories yields identical trees.
    #[test]
    fn property_generated_trees_are_identical(raw in in_domain_answers()) {
        prop_assume!(keel::blueprint::resolver().resolve(&raw).is_ok());

        let dir = tempfile::tempdir().unwrap();
        let use_case = GenerateUseCase::new(LocalFs::new());
        let a = use_case
            .execute(&raw, &GenerateOptions::new(dir.path().join("a")), &NoopEventSink)
            .unwrap();
        let b = use_case
            .execute(&raw, &GenerateOptions::new(dir.path().join("b")), &NoopEventSink)
            .unwrap();
        prop_assert_eq!(&a.digest, &b.digest);

        let files_a = list_all_files(&dir.path().join("a"));
        let files_b = list_all_files(&dir.path().join("b"));
        prop_assert_eq!(&files_a, &files_b);
        for file in &files_a {
            let left = std::fs::read(dir.path().join("a").join(file)).unwrap();
            let right = std::fs::read(dir.path().join("b").join(file)).unwrap();
            prop_assert!(left == right, "{} differs", file);
        }
    }
}
