use calclog::{calc::Calculation, history::manager::HistoryManager, ops::ArithmeticOp};
use rust_decimal::Decimal;

fn addition(a: i64, b: i64) -> Calculation {
    Calculation::new(ArithmeticOp::Addition, Decimal::from(a), Decimal::from(b)).unwrap()
}

fn results(manager: &HistoryManager) -> Vec<Decimal> {
    manager
        .history()
        .iter()
        .map(|calculation| calculation.result())
        .collect()
}

#[test]
fn perform_undo_redo_round_trips_one_entry() {
    let mut manager = HistoryManager::new();
    let calculation = addition(2, 3);
    assert_eq!(calculation.result(), Decimal::from(5));

    manager.perform(calculation.clone());
    assert_eq!(manager.history().to_vec(), vec![calculation.clone()]);

    assert!(manager.undo());
    assert!(manager.history().is_empty());

    assert!(manager.redo());
    assert_eq!(manager.history().to_vec(), vec![calculation]);
}

#[test]
fn undo_on_empty_stack_reports_false_and_changes_nothing() {
    let mut manager = HistoryManager::new();
    assert!(!manager.undo());
    assert!(manager.history().is_empty());
    assert_eq!(manager.undo_len(), 0);
    assert_eq!(manager.redo_len(), 0);
}

#[test]
fn redo_on_empty_stack_reports_false() {
    let mut manager = HistoryManager::new();
    manager.perform(addition(1, 1));
    assert!(!manager.redo());
    assert_eq!(results(&manager), [Decimal::from(2)]);
}

#[test]
fn perform_after_undo_discards_redo() {
    let mut manager = HistoryManager::new();
    manager.perform(addition(1, 1));
    manager.perform(addition(2, 2));
    assert!(manager.undo());
    assert_eq!(manager.redo_len(), 1);

    manager.perform(addition(3, 3));
    assert_eq!(manager.redo_len(), 0);
    assert!(!manager.redo());
    assert_eq!(results(&manager), [Decimal::from(2), Decimal::from(6)]);
}

#[test]
fn as_many_undos_as_performs_restore_the_initial_state() {
    let mut manager = HistoryManager::new();
    for i in 0..8 {
        manager.perform(addition(i, i));
    }
    for _ in 0..8 {
        assert!(manager.undo());
    }
    assert!(manager.history().is_empty());
    assert!(!manager.undo());
}

#[test]
fn clear_history_empties_history_and_both_stacks() {
    let mut manager = HistoryManager::new();
    manager.perform(addition(1, 2));
    manager.perform(addition(3, 4));
    assert!(manager.undo());

    manager.clear_history();
    assert!(manager.history().is_empty());
    assert!(!manager.undo());
    assert!(!manager.redo());
}

#[test]
fn bounded_undo_depth_drops_the_oldest_snapshot() {
    let mut manager = HistoryManager::with_limits(2, 0);
    manager.perform(addition(1, 1));
    manager.perform(addition(2, 2));
    manager.perform(addition(3, 3));

    assert!(manager.undo());
    assert!(manager.undo());
    assert!(!manager.undo());
    // the deepest reachable state still holds the first calculation
    assert_eq!(results(&manager), [Decimal::from(2)]);
}

#[test]
fn history_cap_trims_oldest_entries() {
    let mut manager = HistoryManager::with_limits(0, 2);
    manager.perform(addition(1, 1));
    manager.perform(addition(2, 2));
    manager.perform(addition(3, 3));
    assert_eq!(results(&manager), [Decimal::from(4), Decimal::from(6)]);
}

#[test]
fn undo_restores_the_state_captured_before_a_trim() {
    let mut manager = HistoryManager::with_limits(0, 2);
    manager.perform(addition(1, 1));
    manager.perform(addition(2, 2));
    manager.perform(addition(3, 3));

    assert!(manager.undo());
    assert_eq!(results(&manager), [Decimal::from(2), Decimal::from(4)]);
}

#[test]
fn replace_history_installs_baseline_and_clears_stacks() {
    let mut manager = HistoryManager::new();
    manager.perform(addition(1, 1));
    assert!(manager.undo());
    assert_eq!(manager.redo_len(), 1);

    manager.replace_history(vec![addition(5, 5), addition(6, 6)]);
    assert_eq!(results(&manager), [Decimal::from(10), Decimal::from(12)]);
    assert!(!manager.undo());
    assert!(!manager.redo());
}

#[test]
fn replace_history_trims_oversized_input_to_the_cap() {
    let mut manager = HistoryManager::with_limits(0, 2);
    manager.replace_history(vec![
        addition(1, 1),
        addition(2, 2),
        addition(3, 3),
        addition(4, 4),
    ]);
    assert_eq!(results(&manager), [Decimal::from(6), Decimal::from(8)]);
    assert!(!manager.undo());
}
