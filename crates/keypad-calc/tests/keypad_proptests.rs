//! Property-based tests for the keypad model

use std::collections::HashSet;

use keypad_calc::core::Operator;
use keypad_calc::keypad::{parse_sequence, Keypad, KeypadAction};
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any operator
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Generate any keypad action
fn keypad_action_strategy() -> impl Strategy<Value = KeypadAction> {
    prop_oneof![
        digit_strategy().prop_map(KeypadAction::Digit),
        Just(KeypadAction::Decimal),
        operator_strategy().prop_map(KeypadAction::Operator),
        Just(KeypadAction::Equals),
        Just(KeypadAction::Clear),
    ]
}

// ===== Property tests for KeypadAction =====

proptest! {
    /// Every action's label types that same action
    #[test]
    fn prop_label_parses_back(action in keypad_action_strategy()) {
        let label = action.label();
        prop_assert_eq!(label.chars().count(), 1);
        prop_assert_eq!(parse_sequence(&label).unwrap(), vec![action]);
        prop_assert_eq!(KeypadAction::from_key(&label), Some(action));
    }

    /// Every action has exactly one button, and its ID maps back to it
    #[test]
    fn prop_every_action_has_a_button(action in keypad_action_strategy()) {
        let keypad = Keypad::new();
        let button = keypad.find_button_by_action(action);
        prop_assert!(button.is_some());
        let button = button.unwrap();
        prop_assert_eq!(&button.id, &action.element_id());
        prop_assert_eq!(keypad.handle_click(&button.id), Some(action));
    }

    /// A sequence of labels parses to the same sequence of actions
    #[test]
    fn prop_sequence_of_labels_parses(actions in prop::collection::vec(keypad_action_strategy(), 0..40)) {
        let keys: String = actions.iter().map(KeypadAction::label).collect();
        prop_assert_eq!(parse_sequence(&keys).unwrap(), actions);
    }

    /// Whitespace between keys is ignored
    #[test]
    fn prop_whitespace_ignored(actions in prop::collection::vec(keypad_action_strategy(), 0..20)) {
        let keys: Vec<String> = actions.iter().map(KeypadAction::label).collect();
        let spaced = keys.join(" \t");
        prop_assert_eq!(parse_sequence(&spaced).unwrap(), actions);
    }

    /// Letters without a button are rejected
    #[test]
    fn prop_unknown_letters_rejected(c in "[abd-wyzA-BD-WYZ]") {
        prop_assert!(parse_sequence(&c).is_err());
    }
}

// ===== Property tests for Keypad =====

proptest! {
    /// Rows below the grid are empty
    #[test]
    fn prop_button_at_invalid_row_missing(row in 5usize..100usize, col in 0usize..4usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Columns right of the grid are empty
    #[test]
    fn prop_button_at_invalid_col_missing(row in 0usize..5usize, col in 4usize..100usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// The first four rows are full
    #[test]
    fn prop_number_rows_are_full(row in 0usize..4usize, col in 0usize..4usize) {
        let keypad = Keypad::new();
        let button = keypad.get_button_at(row, col);
        prop_assert!(button.is_some());
        let button = button.unwrap();
        prop_assert_eq!((button.row, button.col), (row, col));
    }
}

// ===== Layout invariants =====

#[test]
fn test_all_buttons_have_unique_ids() {
    let keypad = Keypad::new();
    let mut ids = HashSet::new();
    for btn in keypad.buttons() {
        assert!(ids.insert(btn.id.clone()), "Duplicate ID: {}", btn.id);
    }
}

#[test]
fn test_all_buttons_have_unique_positions() {
    let keypad = Keypad::new();
    let mut positions = HashSet::new();
    for btn in keypad.buttons() {
        assert!(
            positions.insert((btn.row, btn.col)),
            "Duplicate position: {:?}",
            (btn.row, btn.col)
        );
    }
}

#[test]
fn test_operators_are_the_last_column() {
    let keypad = Keypad::new();
    let column: Vec<_> = (0..4)
        .filter_map(|row| keypad.get_button_at(row, 3))
        .filter_map(|b| b.operator())
        .collect();
    assert_eq!(column, Operator::ALL.to_vec());
}
