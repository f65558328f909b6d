//! Integration tests for keeping a list screen in sync with its model.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rowcast::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn screen_tracks_random_operation_sequence() {
    init_tracing();
    let screen = ListScreen::new(ObservableList::new());
    let mut rng = StdRng::seed_from_u64(2020);

    let mut inserts = 0;
    let mut accepted_deletes = 0;
    for _ in 0..200 {
        if rng.gen_bool(0.5) {
            screen.add_item(&mut rng);
            inserts += 1;
        } else {
            let row = rng.gen_range(0..screen.row_count() + 3);
            if row < screen.model().len() {
                accepted_deletes += 1;
            }
            screen.delete_row(row);
        }
        assert!(screen.is_in_sync());
    }

    assert_eq!(screen.model().len(), 10 + inserts - accepted_deletes);
}

#[test]
fn presenter_sees_model_state_matching_event() {
    init_tracing();
    let model = Arc::new(ObservableList::with_items(vec![0, 1, 2]));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let source = Arc::downgrade(&model);
    let seen_clone = seen.clone();
    let _subscription = model.subscribe(move |change| {
        if let Some(source) = source.upgrade() {
            seen_clone.lock().push((change.clone(), source.snapshot()));
        }
    });

    model.insert(1, -1);
    model.insert(2, 99);
    model.delete(4);
    model.delete(0);

    assert_eq!(
        *seen.lock(),
        vec![
            (Change::inserted_at(0), vec![1, 0, 1, 2]),
            (Change::inserted_at(4), vec![1, 0, 1, 2, 2]),
            (Change::deleted_at(4), vec![1, 0, 1, 2]),
            (Change::deleted_at(0), vec![0, 1, 2]),
        ]
    );
}

#[test]
fn screen_recovers_from_reentrant_mutation() {
    init_tracing();
    let model = Arc::new(ObservableList::with_items(vec![0, 1, 2]));
    let fired = Arc::new(AtomicBool::new(false));

    // Registered before the screen, so it runs first and its nested insert
    // reaches the screen ahead of the change that triggered it.
    let source = Arc::downgrade(&model);
    let fired_clone = fired.clone();
    let _nested = model.subscribe(move |_| {
        if !fired_clone.swap(true, Ordering::SeqCst) {
            if let Some(source) = source.upgrade() {
                source.insert(50, 0);
            }
        }
    });

    let screen = ListScreen::with_model(model.clone());
    screen.take_updates();

    screen.insert_item(9, 3);

    assert_eq!(model.snapshot(), vec![50, 0, 1, 2, 9]);
    assert_eq!(screen.rows(), vec!["50", "0", "1", "2", "9"]);
    assert!(screen.is_in_sync());
    assert!(screen.take_updates().contains(&RowUpdate::Reload));

    screen.delete_row(0);
    assert_eq!(screen.take_updates(), vec![RowUpdate::DeleteRows(vec![0])]);
    assert!(screen.is_in_sync());
}

#[test]
fn second_observer_runs_after_screen() {
    init_tracing();
    let screen = ListScreen::new(ObservableList::with_items(vec![0, 1, 2]));
    let rows_seen = Arc::new(Mutex::new(Vec::new()));

    let table = Arc::downgrade(screen.table());
    let rows_clone = rows_seen.clone();
    let _subscription = screen.model().subscribe(move |_| {
        if let Some(table) = table.upgrade() {
            rows_clone.lock().push(table.lock().row_count());
        }
    });

    screen.insert_item(5, 0);
    screen.delete_row(1);

    // The screen subscribed first, so its table is already updated.
    assert_eq!(*rows_seen.lock(), vec![4, 3]);
}

#[test]
fn released_table_ignores_changes() {
    init_tracing();
    let model = Arc::new(ObservableList::with_items(vec![0, 1]));
    let table = Arc::new(Mutex::new(RowTable::for_source(&model)));

    let source = Arc::downgrade(&model);
    let view = Arc::downgrade(&table);
    let subscription = model.subscribe(move |change| {
        if let (Some(source), Some(view)) = (source.upgrade(), view.upgrade()) {
            view.lock().apply(change, &source);
        }
    });

    drop(table);
    model.insert(7, 0);

    assert!(subscription.is_active());
    assert_eq!(model.snapshot(), vec![7, 0, 1]);
}

#[test]
fn screen_from_toml_config() {
    init_tracing();
    let config = ListConfig::from_toml_str(
        r#"
        title = "Dice"
        initial_items = [1, 2, 3, 4, 5, 6]
        value_min = 1
        value_max = 6
        "#,
    )
    .unwrap();
    let screen = ListScreen::from_config(&config).unwrap();
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..10 {
        let (value, _) = screen.add_item(&mut rng);
        assert!((1..=6).contains(&value));
    }

    assert_eq!(screen.title(), "Dice");
    assert_eq!(screen.row_count(), 16);
    assert!(screen.is_in_sync());
}
