//! Calculator keypad shared by the TUI and DOM front ends
//!
//! Every view turns clicks and key presses into [`KeypadAction`]s, so the
//! state machine sees exactly one kind of input whatever the front end.

use crate::core::{CalcError, CalcResult, Operator};

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Type a digit (0-9)
    Digit(u8),
    /// Type a decimal point
    Decimal,
    /// Select an operator
    Operator(Operator),
    /// Compute the result
    Equals,
    /// Reset the calculator
    Clear,
}

impl KeypadAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            KeypadAction::Digit(d) => d.to_string(),
            KeypadAction::Decimal => ".".to_string(),
            KeypadAction::Operator(op) => op.symbol().to_string(),
            KeypadAction::Equals => "=".to_string(),
            KeypadAction::Clear => "C".to_string(),
        }
    }

    /// Maps a typed character to an action
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(KeypadAction::Digit(d as u8));
        }
        match c {
            '.' | ',' => Some(KeypadAction::Decimal),
            '=' => Some(KeypadAction::Equals),
            'c' | 'C' => Some(KeypadAction::Clear),
            _ => Operator::from_char(c).map(KeypadAction::Operator),
        }
    }

    /// Maps a keyboard key name (as reported by the browser) to an action
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(KeypadAction::Equals),
            "Escape" | "Delete" => Some(KeypadAction::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Returns the DOM element ID of the button for this action
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            KeypadAction::Digit(d) => format!("btn-{}", d),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op.name()),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Clear => "btn-clear".to_string(),
        }
    }
}

/// Parses a key sequence such as `"12+3.5="` into actions.
///
/// Whitespace is skipped; any other character without a button is an error.
pub fn parse_sequence(keys: &str) -> CalcResult<Vec<KeypadAction>> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| KeypadAction::from_char(c).ok_or_else(|| CalcError::UnknownKey(c.to_string())))
        .collect()
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            id: action.element_id(),
            action,
            row,
            col,
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Returns the operator this button selects, if it is an operator button
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        match self.action {
            KeypadAction::Operator(op) => Some(op),
            _ => None,
        }
    }
}

/// Keypad layout definition
/// Layout:
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ / ]
/// [ 4 ] [ 5 ] [ 6 ] [ * ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ C ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Button definitions in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: 7 8 9 /
            KeypadButton::new(KeypadAction::Digit(7), 0, 0),
            KeypadButton::new(KeypadAction::Digit(8), 0, 1),
            KeypadButton::new(KeypadAction::Digit(9), 0, 2),
            KeypadButton::new(KeypadAction::Operator(Operator::Divide), 0, 3),
            // Row 1: 4 5 6 *
            KeypadButton::new(KeypadAction::Digit(4), 1, 0),
            KeypadButton::new(KeypadAction::Digit(5), 1, 1),
            KeypadButton::new(KeypadAction::Digit(6), 1, 2),
            KeypadButton::new(KeypadAction::Operator(Operator::Multiply), 1, 3),
            // Row 2: 1 2 3 -
            KeypadButton::new(KeypadAction::Digit(1), 2, 0),
            KeypadButton::new(KeypadAction::Digit(2), 2, 1),
            KeypadButton::new(KeypadAction::Digit(3), 2, 2),
            KeypadButton::new(KeypadAction::Operator(Operator::Subtract), 2, 3),
            // Row 3: 0 . = +
            KeypadButton::new(KeypadAction::Digit(0), 3, 0),
            KeypadButton::new(KeypadAction::Decimal, 3, 1),
            KeypadButton::new(KeypadAction::Equals, 3, 2),
            KeypadButton::new(KeypadAction::Operator(Operator::Add), 3, 3),
            // Row 4: C
            KeypadButton::new(KeypadAction::Clear, 4, 0),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button for an action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Finds the button a typed character would press
    #[must_use]
    pub fn find_button_by_char(&self, ch: char) -> Option<&KeypadButton> {
        KeypadAction::from_char(ch).and_then(|action| self.find_button_by_action(action))
    }

    /// Finds the button for an operator
    #[must_use]
    pub fn operator_button(&self, op: Operator) -> Option<&KeypadButton> {
        self.find_button_by_action(KeypadAction::Operator(op))
    }

    /// Processes a button click and returns its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadAction tests =====

    #[test]
    fn test_keypad_action_label() {
        assert_eq!(KeypadAction::Digit(5).label(), "5");
        assert_eq!(KeypadAction::Decimal.label(), ".");
        assert_eq!(KeypadAction::Operator(Operator::Add).label(), "+");
        assert_eq!(KeypadAction::Equals.label(), "=");
        assert_eq!(KeypadAction::Clear.label(), "C");
    }

    #[test]
    fn test_from_char_digits() {
        for d in 0..=9u8 {
            let c = char::from_digit(u32::from(d), 10).unwrap();
            assert_eq!(KeypadAction::from_char(c), Some(KeypadAction::Digit(d)));
        }
    }

    #[test]
    fn test_from_char_specials() {
        assert_eq!(KeypadAction::from_char('.'), Some(KeypadAction::Decimal));
        assert_eq!(KeypadAction::from_char('='), Some(KeypadAction::Equals));
        assert_eq!(KeypadAction::from_char('C'), Some(KeypadAction::Clear));
        assert_eq!(
            KeypadAction::from_char('x'),
            Some(KeypadAction::Operator(Operator::Multiply))
        );
        assert_eq!(KeypadAction::from_char('^'), None);
        assert_eq!(KeypadAction::from_char('('), None);
    }

    #[test]
    fn test_from_key_names() {
        assert_eq!(KeypadAction::from_key("Enter"), Some(KeypadAction::Equals));
        assert_eq!(KeypadAction::from_key("Escape"), Some(KeypadAction::Clear));
        assert_eq!(KeypadAction::from_key("7"), Some(KeypadAction::Digit(7)));
        assert_eq!(
            KeypadAction::from_key("/"),
            Some(KeypadAction::Operator(Operator::Divide))
        );
        assert_eq!(KeypadAction::from_key("Shift"), None);
        assert_eq!(KeypadAction::from_key(""), None);
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(KeypadAction::Digit(5).element_id(), "btn-5");
        assert_eq!(
            KeypadAction::Operator(Operator::Add).element_id(),
            "btn-plus"
        );
        assert_eq!(
            KeypadAction::Operator(Operator::Divide).element_id(),
            "btn-divide"
        );
        assert_eq!(KeypadAction::Decimal.element_id(), "btn-decimal");
        assert_eq!(KeypadAction::Equals.element_id(), "btn-equals");
        assert_eq!(KeypadAction::Clear.element_id(), "btn-clear");
    }

    // ===== parse_sequence tests =====

    #[test]
    fn test_parse_sequence() {
        let actions = parse_sequence("12 + 3.=").unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Digit(1),
                KeypadAction::Digit(2),
                KeypadAction::Operator(Operator::Add),
                KeypadAction::Digit(3),
                KeypadAction::Decimal,
                KeypadAction::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_sequence_empty() {
        assert!(parse_sequence("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_sequence_unknown_key() {
        assert_eq!(
            parse_sequence("2^3"),
            Err(CalcError::UnknownKey("^".to_string()))
        );
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 17);
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(
            keypad.get_button_at(0, 0).unwrap().action,
            KeypadAction::Digit(7)
        );
        assert_eq!(
            keypad.get_button_at(3, 2).unwrap().action,
            KeypadAction::Equals
        );
        assert_eq!(
            keypad.get_button_at(4, 0).unwrap().action,
            KeypadAction::Clear
        );
        assert!(keypad.get_button_at(4, 1).is_none());
        assert!(keypad.get_button_at(9, 9).is_none());
    }

    #[test]
    fn test_keypad_get_button_by_index() {
        let keypad = Keypad::default();
        assert_eq!(keypad.get_button(3).unwrap().id, "btn-divide");
        assert!(keypad.get_button(17).is_none());
    }

    #[test]
    fn test_keypad_operators_in_last_column() {
        let keypad = Keypad::new();
        for op in Operator::ALL {
            let btn = keypad.operator_button(op).unwrap();
            assert_eq!(btn.col, 3);
            assert_eq!(btn.operator(), Some(op));
        }
    }

    #[test]
    fn test_keypad_find_by_char() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button_by_char('5').unwrap().id, "btn-5");
        assert_eq!(keypad.find_button_by_char('*').unwrap().id, "btn-times");
        assert!(keypad.find_button_by_char('%').is_none());
    }

    #[test]
    fn test_keypad_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.handle_click("btn-minus"),
            Some(KeypadAction::Operator(Operator::Subtract))
        );
        assert_eq!(keypad.handle_click("btn-nope"), None);
    }

    #[test]
    fn test_button_label_and_operator() {
        let btn = KeypadButton::new(KeypadAction::Digit(4), 1, 0);
        assert_eq!(btn.label(), "4");
        assert_eq!(btn.operator(), None);
    }
}
