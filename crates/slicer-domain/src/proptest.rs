//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Count conservation and verdict derivation
//! - Display filtering and ordering
//! - Store eligibility
//! - Determinism of model validation

use crate::classify::DisplayOptions;
use crate::engine::{aggregate, validate_model};
use crate::filter::StoreFilter;
use crate::report::compute_verdict;
use crate::test_support::{cube, dimension, model};
use proptest::prelude::*;
use slicer_types::{Scope, Severity, ValidationCounts, ValidationFinding, Verdict};

// ============================================================================
// Strategies
// ============================================================================

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Error),
        Just(Severity::Warning),
        Just(Severity::Default),
    ]
}

fn arb_scope() -> impl Strategy<Value = Scope> {
    prop_oneof![
        Just(Scope::Model),
        Just(Scope::Cube),
        Just(Scope::Dimension),
        Just(Scope::Level),
        Just(Scope::Attribute),
        Just(Scope::Hierarchy),
        Just(Scope::Measure),
        Just(Scope::Aggregate),
    ]
}

fn arb_finding() -> impl Strategy<Value = ValidationFinding> {
    (
        arb_severity(),
        arb_scope(),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of("[a-z_]{1,8}"),
        "[a-z ]{0,24}",
    )
        .prop_map(|(severity, scope, object_name, property_name, message)| {
            ValidationFinding {
                severity,
                scope,
                object_name,
                property_name,
                message,
            }
        })
}

fn arb_options() -> impl Strategy<Value = DisplayOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(show_warnings, show_defaults)| DisplayOptions {
        show_warnings,
        show_defaults,
    })
}

fn arb_store() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("default".to_string()),
        Just("dw".to_string()),
        Just("mart".to_string()),
        "[a-z]{1,4}",
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn every_finding_is_counted_once(
        findings in prop::collection::vec(arb_finding(), 0..40),
        opts in arb_options(),
    ) {
        let report = aggregate(&findings, opts);
        prop_assert_eq!(report.counts.total() as usize, findings.len());

        let errors = findings.iter().filter(|f| f.severity == Severity::Error).count();
        prop_assert_eq!(report.counts.error as usize, errors);
    }

    #[test]
    fn verdict_depends_only_on_counts(
        findings in prop::collection::vec(arb_finding(), 0..40),
        opts in arb_options(),
    ) {
        let report = aggregate(&findings, opts);
        prop_assert_eq!(report.verdict, compute_verdict(&report.counts));
        if report.counts.error > 0 {
            prop_assert_eq!(report.verdict, Verdict::Unusable);
        }
    }

    #[test]
    fn verdict_table_holds_for_all_counts(error in 0u32..5, warning in 0u32..5, default in 0u32..5) {
        let counts = ValidationCounts { error, warning, default };
        let expected = if error > 0 {
            Verdict::Unusable
        } else if warning > 0 {
            Verdict::NotRecommended
        } else if default > 0 {
            Verdict::UsableWithDefaults
        } else {
            Verdict::Usable
        };
        prop_assert_eq!(compute_verdict(&counts), expected);
    }

    #[test]
    fn shown_findings_are_an_ordered_subsequence(
        findings in prop::collection::vec(arb_finding(), 0..40),
        opts in arb_options(),
    ) {
        let report = aggregate(&findings, opts);
        let mut rest = findings.iter();
        for shown in &report.shown {
            prop_assert!(rest.any(|f| f.message == shown.message && f.severity == shown.severity));
        }
        let shown_errors = report.shown.iter().filter(|s| s.severity == Severity::Error).count();
        prop_assert_eq!(shown_errors as u32, report.counts.error);
    }

    #[test]
    fn aggregation_is_idempotent(
        findings in prop::collection::vec(arb_finding(), 0..40),
        opts in arb_options(),
    ) {
        prop_assert_eq!(aggregate(&findings, opts), aggregate(&findings, opts));
    }

    #[test]
    fn exclusion_always_wins(
        store in arb_store(),
        include in prop::collection::btree_set(arb_store(), 0..4),
    ) {
        let mut filter = StoreFilter { exclude: Default::default(), include };
        filter.exclude.insert(store.clone());
        prop_assert!(!filter.is_eligible(&store));
    }

    #[test]
    fn eligibility_matches_definition(
        store in arb_store(),
        exclude in prop::collection::btree_set(arb_store(), 0..4),
        include in prop::collection::btree_set(arb_store(), 0..4),
    ) {
        let expected = !exclude.contains(&store) && (include.is_empty() || include.contains(&store));
        let filter = StoreFilter { exclude, include };
        prop_assert_eq!(filter.is_eligible(&store), expected);
    }

    #[test]
    fn validation_is_deterministic(
        cubes in prop::collection::vec(("[a-z]{1,6}", prop::collection::vec("[a-z]{1,4}", 0..3)), 0..4),
        dims in prop::collection::vec(("[a-z]{1,4}", prop::collection::vec("[a-z]{1,4}", 0..3)), 0..4),
    ) {
        let cubes = cubes
            .iter()
            .map(|(name, ds)| {
                let ds: Vec<&str> = ds.iter().map(String::as_str).collect();
                cube(name, &ds, &["amount"])
            })
            .collect();
        let dims = dims
            .iter()
            .map(|(name, levels)| {
                let levels: Vec<&str> = levels.iter().map(String::as_str).collect();
                dimension(name, &levels)
            })
            .collect();
        let doc = model(cubes, dims);

        let first = validate_model(&doc);
        let second = validate_model(&doc);
        prop_assert_eq!(&first, &second);

        let opts = DisplayOptions::default();
        prop_assert_eq!(aggregate(&first, opts), aggregate(&second, opts));
    }
}
