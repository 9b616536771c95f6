//! Property tests for deployment target selection.

use proptest::prelude::*;

use keel::blueprint::flags::DEPLOYMENT_TARGETS;

use crate::common::{deploy_files, render};

fn targets() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(DEPLOYMENT_TARGETS.to_vec(), 0..=DEPLOYMENT_TARGETS.len())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: adding targets only ever adds deployment files.
    #[test]
    fn property_deploy_files_grow_with_targets(
        (all, keep) in targets().prop_flat_map(|all| {
            let len = all.len();
            (Just(all.clone()), proptest::sample::subsequence(all, 0..=len))
        })
    ) {
        let keep_answer = keep.join(",");
        let all_answer = all.join(",");
        let small = deploy_files(&render(&[("deployment_targets", keep_answer.as_str())]));
        let large = deploy_files(&render(&[("deployment_targets", all_answer.as_str())]));

        for path in &small {
            prop_assert!(large.contains(path), "{} vanished when adding targets", path);
        }
        prop_assert_eq!(small.is_empty(), keep.is_empty());
    }

    /// PROPERTY: the answer order of targets does not matter.
    #[test]
    fn property_target_order_is_irrelevant(selected in targets()) {
        let forward_answer = selected.join(",");
        let backward_answer = selected.iter().rev().copied().collect::<Vec<_>>().join(",");
        let forward = render(&[("deployment_targets", forward_answer.as_str())]);
        let backward = render(&[("deployment_targets", backward_answer.as_str())]);
        prop_assert_eq!(deploy_files(&forward), deploy_files(&backward));
    }
}
