//! Property tests for answer resolution.

use proptest::prelude::*;
use serde_json::Value;

use keel::blueprint::{self, FLAGS};
use keel::domain::entities::FlagKind;
use keel::{KeelError, RawAnswers, ValidationError};

/// Any JSON scalar or short list, including shapes no flag accepts
fn arbitrary_value() -> impl Strategy<Value = Value> {
    let scalar = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        ".{0,24}".prop_map(Value::String),
    ];
    prop_oneof![
        4 => scalar.clone(),
        1 => proptest::collection::vec(scalar, 0..4).prop_map(Value::Array),
    ]
}

/// Keys drawn mostly from the declared flags, plus some unknown ones
fn arbitrary_answers() -> impl Strategy<Value = RawAnswers> {
    let declared: Vec<String> = FLAGS.iter().map(|f| f.name.to_string()).collect();
    let key = prop_oneof![
        3 => proptest::sample::select(declared),
        1 => "[a-z_]{1,12}",
    ];
    proptest::collection::vec((key, arbitrary_value()), 0..12)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Answers that pick an in-domain value for a random subset of flags
pub fn in_domain_answers() -> impl Strategy<Value = RawAnswers> {
    let picks: Vec<BoxedStrategy<Option<(String, Value)>>> = FLAGS
        .iter()
        .map(|spec| {
            let name = spec.name.to_string();
            let value: BoxedStrategy<Value> = match spec.kind {
                FlagKind::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
                FlagKind::Choice(domain) => proptest::sample::select(domain.to_vec())
                    .prop_map(|v| Value::String(v.to_string()))
                    .boxed(),
                FlagKind::MultiChoice(domain) => {
                    proptest::sample::subsequence(domain.to_vec(), 0..=domain.len())
                        .prop_map(|vs| Value::Array(vs.into_iter().map(Value::from).collect()))
                        .boxed()
                }
                FlagKind::Text(_) => return Just(None).boxed(),
            };
            proptest::option::of(value.prop_map(move |v| (name.clone(), v))).boxed()
        })
        .collect();
    picks.prop_map(|pairs| pairs.into_iter().flatten().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolution never panics and either covers every flag or explains why not.
    #[test]
    fn property_resolver_never_panics(raw in arbitrary_answers()) {
        match blueprint::resolver().resolve(&raw) {
            Ok(resolution) => {
                prop_assert_eq!(resolution.flags.len(), FLAGS.len());
                for name in &resolution.defaulted {
                    prop_assert!(
                        raw.get(*name).map_or(true, Value::is_null),
                        "{} was answered but reported as defaulted", name
                    );
                }
            }
            Err(errors) => prop_assert!(!errors.is_empty()),
        }
    }

    /// PROPERTY: in-domain answers fail only on compatibility rules.
    #[test]
    fn property_in_domain_answers_only_fail_on_rules(raw in in_domain_answers()) {
        if let Err(errors) = blueprint::resolver().resolve(&raw) {
            for error in errors.errors() {
                prop_assert!(
                    matches!(error, ValidationError::Incompatible { .. }),
                    "unexpected error: {}", error
                );
            }
        }
    }

    /// PROPERTY: override parsing never panics; a parsed key is never empty.
    #[test]
    fn property_override_parsing_never_panics(s in ".{0,64}") {
        match keel::infrastructure::answers::parse_override(&s) {
            Ok((key, _)) => prop_assert!(!key.is_empty()),
            Err(err) => {
                let is_invalid_override = matches!(err, KeelError::InvalidOverride { .. });
                prop_assert!(is_invalid_override);
            }
        }
    }
}
