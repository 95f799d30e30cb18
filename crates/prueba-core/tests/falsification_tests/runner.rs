//! Falsification Tests: Category A - Runner Accounting (P001-P010, P019)
//!
//! # Toyota Way: Jidoka (自働化)
//! A failing test stops itself, never the line.

use proptest::prelude::*;

use prueba_core::assert::assert_true;
use prueba_core::{
    DuplicateTestName, FailureEntry, NullReporter, RecordingReporter, ReportEvent, RunSummary,
    TestCase, TestRunner, TestStatus, TestSuite,
};

/// Builds one case per flag: `true` passes, `false` fails an assertion.
fn suite_from(outcomes: &[bool]) -> TestSuite {
    let cases = outcomes
        .iter()
        .enumerate()
        .map(|(i, &ok)| TestCase::new(format!("case_{i:03}"), move || assert_true(&ok, None)))
        .collect();
    TestSuite::from_cases(cases).unwrap()
}

fn summary_of(outcomes: &[bool]) -> RunSummary {
    TestRunner::with_reporter(NullReporter).execute(&suite_from(outcomes))
}

// =============================================================================
// P001-P004: Summary invariants
// =============================================================================

proptest! {
    /// P001: total always equals passed + failed
    #[test]
    fn p001_total_is_passed_plus_failed(outcomes in prop::collection::vec(any::<bool>(), 0..40)) {
        let summary = summary_of(&outcomes);
        prop_assert_eq!(
            summary.total(),
            summary.passed() + summary.failed(),
            "P001 FALSIFIED: counts do not add up"
        );
        prop_assert_eq!(summary.passed(), outcomes.iter().filter(|ok| **ok).count());
    }

    /// P002: one detail per input, in input order
    #[test]
    fn p002_details_follow_declaration_order(outcomes in prop::collection::vec(any::<bool>(), 0..40)) {
        let summary = summary_of(&outcomes);
        prop_assert_eq!(summary.details().len(), summary.total());
        prop_assert_eq!(summary.details().len(), outcomes.len());
        for (i, (detail, ok)) in summary.details().iter().zip(&outcomes).enumerate() {
            prop_assert_eq!(&detail.name, &format!("case_{i:03}"), "P002 FALSIFIED: order broken");
            let expected = if *ok { TestStatus::Passed } else { TestStatus::Failed };
            prop_assert_eq!(detail.status, expected);
        }
    }

    /// P003: errors is exactly the failed projection of details
    #[test]
    fn p003_errors_are_failed_projection(outcomes in prop::collection::vec(any::<bool>(), 0..40)) {
        let summary = summary_of(&outcomes);
        let projected: Vec<FailureEntry> = summary
            .details()
            .iter()
            .filter(|d| d.status == TestStatus::Failed)
            .map(|d| FailureEntry {
                test: d.name.clone(),
                error: d.error.clone().unwrap_or_default(),
                duration_ms: d.duration_ms,
            })
            .collect();
        prop_assert_eq!(summary.errors(), projected, "P003 FALSIFIED: errors diverge from details");
    }

    /// P004: the verdict matches the failure count
    #[test]
    fn p004_verdict_matches_failures(outcomes in prop::collection::vec(any::<bool>(), 1..40)) {
        let failures = outcomes.iter().filter(|ok| !**ok).count();
        let verdict = TestRunner::with_reporter(NullReporter).run(&suite_from(&outcomes));
        match verdict {
            Ok(summary) => {
                prop_assert_eq!(summary.failed(), 0);
                prop_assert_eq!(failures, 0, "P004 FALSIFIED: failing run accepted");
            }
            Err(err) => {
                prop_assert!(failures > 0, "P004 FALSIFIED: passing run rejected");
                prop_assert_eq!(
                    err.to_string(),
                    format!("Tests failed: {} out of {}", failures, outcomes.len())
                );
            }
        }
    }
}

// =============================================================================
// P005-P008: Isolation
// =============================================================================

/// P005: a failure in the middle does not abort later tests
///
/// # Falsification Attempt
/// Run [A(pass), B(fail), C(pass)] and look for C in the details.
#[test]
fn p005_middle_failure_does_not_abort() {
    let err = TestRunner::with_reporter(NullReporter)
        .run(&suite_from(&[true, false, true]))
        .expect_err("P005 FALSIFIED: failing run accepted");
    let summary = err.summary();

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.details()[1].status, TestStatus::Failed);
    assert!(
        summary.details()[2].is_passed(),
        "P005 FALSIFIED: test after failure did not run"
    );
}

/// P006: the aggregate message names both counts
#[test]
fn p006_aggregate_message_has_counts() {
    let err = TestRunner::with_reporter(NullReporter)
        .run(&suite_from(&[true, false, true]))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains('1'), "P006 FALSIFIED: failed count missing");
    assert!(message.contains('3'), "P006 FALSIFIED: total count missing");
}

/// P007: panics are contained like assertion failures
#[test]
fn p007_panic_is_contained() {
    let suite = TestSuite::builder()
        .test("first", || Ok(()))
        .test("explodes", || panic!("{}", String::from("owned payload")))
        .test("last", || Ok(()))
        .build()
        .unwrap();
    let err = TestRunner::with_reporter(NullReporter)
        .run(&suite)
        .expect_err("P007 FALSIFIED: panicking run accepted");
    let summary = err.into_summary();

    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.errors()[0].test, "explodes");
    assert_eq!(summary.errors()[0].error, "test panicked: owned payload");
    assert!(summary.details()[2].is_passed());
}

/// P008: every failure is traced before the aggregate is raised
#[test]
fn p008_failures_reported_before_verdict() {
    let mut recorder = RecordingReporter::new();
    let result = TestRunner::with_reporter(&mut recorder).run(&suite_from(&[false, true, false]));
    assert!(result.is_err());

    let last = recorder.events().last().cloned();
    assert_eq!(
        last,
        Some(ReportEvent::RunFailed(vec![
            "case_000".to_string(),
            "case_002".to_string(),
        ])),
        "P008 FALSIFIED: failures not listed at end of run"
    );
}

/// P009: a fully passing run returns the summary
#[test]
fn p009_passing_run_returns_summary() {
    let summary = TestRunner::with_reporter(NullReporter)
        .run(&suite_from(&[true, true, true, true]))
        .expect("P009 FALSIFIED: passing run rejected");
    assert_eq!(summary.failed(), 0);
    assert_eq!(summary.passed(), 4);
    assert!(summary.errors().is_empty());
}

/// P010: the summary serializes with the report field names
#[test]
fn p010_summary_report_fields() {
    let summary = summary_of(&[true, false]);
    let json = serde_json::to_value(&summary).unwrap();
    for field in ["total", "passed", "failed", "errors", "details"] {
        assert!(json.get(field).is_some(), "P010 FALSIFIED: missing {field}");
    }
}

/// P019: a run never sees two tests with the same name
///
/// # Falsification Attempt
/// Declare the same name twice and try to get the suite to the runner.
#[test]
fn p019_duplicate_names_rejected_before_run() {
    let result = TestSuite::from_cases(vec![
        TestCase::new("same", || Ok(())),
        TestCase::new("same", || Ok(())),
    ]);
    assert_eq!(
        result.unwrap_err(),
        DuplicateTestName("same".into()),
        "P019 FALSIFIED: duplicate names accepted"
    );

    let summary = summary_of(&[true, false, true, false]);
    let mut names: Vec<&str> = summary.details().iter().map(|d| d.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), summary.total());
}
