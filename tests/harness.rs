use pbpbench::backend::{Backend, SqliteBackend};
use pbpbench::core::BenchError;
use pbpbench::harness::{TrialOutput, run_trials};
use pbpbench::testutil::{ProgressEvent, RecordingSink};

fn memory_backend() -> SqliteBackend {
    let mut backend = SqliteBackend::open_in_memory().unwrap();
    backend
        .execute("CREATE TABLE t (idx BIGINT, score BIGINT)")
        .unwrap();
    backend.execute("INSERT INTO t VALUES (0, 0)").unwrap();
    backend
}

#[test]
fn ticks_equal_trial_count() {
    let mut backend = memory_backend();
    let sink = RecordingSink::new();

    let results = run_trials(
        "tick_check",
        &mut backend,
        10,
        &sink,
        |_| Ok(()),
        |b| Ok(TrialOutput::Affected(b.execute("UPDATE t SET score = 1 WHERE idx = 0")?)),
    )
    .unwrap();

    assert_eq!(results.len(), 10);
    assert_eq!(sink.ticks("tick_check/sqlite"), 10);

    let events = sink.events();
    assert_eq!(
        events.first(),
        Some(&ProgressEvent::Start("tick_check/sqlite".to_string(), 10))
    );
    assert_eq!(
        events.last(),
        Some(&ProgressEvent::Finish("tick_check/sqlite".to_string()))
    );
}

#[test]
fn results_are_ordered_by_trial_index() {
    let mut backend = memory_backend();
    let sink = RecordingSink::new();

    let results = run_trials(
        "ordering",
        &mut backend,
        5,
        &sink,
        |_| Ok(()),
        |_| Ok(TrialOutput::Affected(0)),
    )
    .unwrap();

    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.trial, i);
        assert_eq!(result.backend, "sqlite");
        assert_eq!(result.scenario, "ordering");
    }
}

#[test]
fn work_failure_aborts_run_and_still_finishes_task() {
    let mut backend = memory_backend();
    let sink = RecordingSink::new();
    let mut calls = 0usize;

    let outcome = run_trials(
        "failing",
        &mut backend,
        10,
        &sink,
        |_| Ok(()),
        |_| {
            calls += 1;
            if calls == 4 {
                Err(BenchError::BackendError("boom".to_string()))
            } else {
                Ok(TrialOutput::Affected(0))
            }
        },
    );

    assert!(matches!(outcome, Err(BenchError::BackendError(_))));
    assert_eq!(calls, 4);
    // Three trials completed before the failure, so three ticks.
    assert_eq!(sink.ticks("failing/sqlite"), 3);
    // Finish still fires on the error path.
    assert_eq!(
        sink.events().last(),
        Some(&ProgressEvent::Finish("failing/sqlite".to_string()))
    );
}

#[test]
fn setup_failure_is_untimed_and_aborts() {
    let mut backend = memory_backend();
    let sink = RecordingSink::new();
    let mut works = 0usize;

    let outcome = run_trials(
        "bad_setup",
        &mut backend,
        3,
        &sink,
        |_| Err(BenchError::BackendError("setup failed".to_string())),
        |_| {
            works += 1;
            Ok(TrialOutput::Affected(0))
        },
    );

    assert!(outcome.is_err());
    assert_eq!(works, 0);
    assert_eq!(sink.ticks("bad_setup/sqlite"), 0);
}
