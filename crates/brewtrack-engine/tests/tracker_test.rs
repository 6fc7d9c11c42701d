use brewtrack_core::{Formula, Snapshot};
use brewtrack_engine::{DiffOutcome, NewOutcome, Tracker, TrackError, UpdateOutcome};
use brewtrack_store::SnapshotStore;

fn tracker(dir: &tempfile::TempDir) -> Tracker {
    Tracker::new(SnapshotStore::open(dir.path()).unwrap())
}

fn snapshot(records: Vec<Formula>) -> Snapshot {
    Snapshot::from_records(records)
}

#[test]
fn first_update_establishes_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = tracker(&dir);

    let current = snapshot(vec![
        Formula::new("a").with_version("1"),
        Formula::new("b").with_version("1"),
    ]);

    // First run is a baseline, never a 2-item "added" diff.
    match tracker.run_update(&current).unwrap() {
        UpdateOutcome::BaselineEstablished(metadata) => {
            assert_eq!(metadata.formula_count, 2);
        }
        other => panic!("expected baseline established, got {:?}", other),
    }
}

#[test]
fn diff_without_baseline_is_a_distinct_signal() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = tracker(&dir);

    let current = snapshot(vec![Formula::new("a").with_version("1")]);
    assert_eq!(tracker.run_diff(&current).unwrap(), DiffOutcome::NoBaseline);
    assert_eq!(
        tracker.run_new(&current, None).unwrap(),
        NewOutcome::NoBaseline
    );

    // And the store is still empty: diff never persists.
    assert_eq!(
        tracker.store().load_previous().unwrap(),
        brewtrack_core::Baseline::Absent
    );
}

#[test]
fn identical_content_short_circuits() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = tracker(&dir);

    let current = snapshot(vec![Formula::new("ripgrep").with_version("14.1.0")]);
    tracker.run_update(&current).unwrap();

    match tracker.run_update(&current).unwrap() {
        UpdateOutcome::Unchanged(metadata) => assert_eq!(metadata.formula_count, 1),
        other => panic!("expected unchanged, got {:?}", other),
    }
    assert_eq!(tracker.run_diff(&current).unwrap(), DiffOutcome::Unchanged);
}

#[test]
fn diff_reports_all_three_categories() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = tracker(&dir);

    tracker
        .run_update(&snapshot(vec![
            Formula::new("oldtool").with_version("0.9.0"),
            Formula::new("httpie").with_version("3.2.0"),
        ]))
        .unwrap();

    let current = snapshot(vec![
        Formula::new("httpie").with_version("3.3.0"),
        Formula::new("xh").with_version("0.22.0"),
    ]);

    let DiffOutcome::Changes(result) = tracker.run_diff(&current).unwrap() else {
        panic!("expected changes");
    };

    assert_eq!(result.added.len(), 1);
    assert_eq!(result.added[0].name, "xh");
    assert_eq!(result.removed.len(), 1);
    assert_eq!(result.removed[0].name, "oldtool");
    assert_eq!(result.updated.len(), 1);
    assert_eq!(result.updated[0].previous.version.as_deref(), Some("3.2.0"));
}

#[test]
fn update_replaces_the_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = tracker(&dir);

    tracker
        .run_update(&snapshot(vec![Formula::new("a").with_version("1")]))
        .unwrap();

    let next = snapshot(vec![Formula::new("a").with_version("2")]);
    match tracker.run_update(&next).unwrap() {
        UpdateOutcome::Updated(metadata) => assert_eq!(metadata.formula_count, 1),
        other => panic!("expected updated, got {:?}", other),
    }

    // A subsequent diff against the same content sees nothing.
    assert_eq!(tracker.run_diff(&next).unwrap(), DiffOutcome::Unchanged);
}

#[test]
fn empty_catalog_is_an_anomaly_not_a_mass_removal() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = tracker(&dir);

    let baseline = snapshot(vec![Formula::new("a").with_version("1")]);
    tracker.run_update(&baseline).unwrap();

    let empty = Snapshot::new();
    for result in [
        tracker.run_update(&empty).map(|_| ()),
        tracker.run_diff(&empty).map(|_| ()),
        tracker.run_new(&empty, None).map(|_| ()),
    ] {
        match result {
            Err(TrackError::EmptyCatalog { previous_count }) => {
                assert_eq!(previous_count, 1);
            }
            other => panic!("expected empty-catalog anomaly, got {:?}", other),
        }
    }

    // The baseline survived untouched.
    assert_eq!(
        tracker.store().load_previous().unwrap(),
        brewtrack_core::Baseline::Present(baseline)
    );
}

#[test]
fn new_truncates_to_a_prefix_of_the_name_order() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = tracker(&dir);

    tracker
        .run_update(&snapshot(vec![Formula::new("base").with_version("1")]))
        .unwrap();

    let current = snapshot(vec![
        Formula::new("base").with_version("1"),
        Formula::new("delta"),
        Formula::new("alpha"),
        Formula::new("charlie"),
        Formula::new("bravo"),
    ]);

    let NewOutcome::Added { formulas, total } = tracker.run_new(&current, Some(2)).unwrap() else {
        panic!("expected added list");
    };
    assert_eq!(total, 4);
    let names: Vec<_> = formulas.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "bravo"]);

    // The truncated list is a prefix of the untruncated one.
    let NewOutcome::Added { formulas: all, .. } = tracker.run_new(&current, None).unwrap() else {
        panic!("expected added list");
    };
    assert_eq!(&all[..2], &formulas[..]);
}
