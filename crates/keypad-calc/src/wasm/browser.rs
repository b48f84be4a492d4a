//! Browser bindings for the keypad calculator
//!
//! JavaScript owns the page; it forwards button clicks and key presses here
//! and renders the returned display text and active operator.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::{Calculator, Operator};
use crate::keypad::{Keypad, KeypadAction};

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            calculator: Calculator::new(),
            keypad: Keypad::new(),
        }
    }

    /// Type a digit; returns the display text
    pub fn digit(&mut self, digit: u8) -> String {
        self.calculator.enter_digit(digit).display
    }

    /// Type a decimal point; returns the display text
    pub fn decimal(&mut self) -> String {
        self.calculator.enter_decimal().display
    }

    /// Select an operator by symbol (`+`, `-`, `*`, `/`); returns the display
    /// text, or `None` for an unknown symbol
    pub fn operator(&mut self, symbol: char) -> Option<String> {
        let op = Operator::from_char(symbol)?;
        Some(self.calculator.select_operator(op).display)
    }

    /// Press equals; returns the display text
    pub fn equals(&mut self) -> String {
        self.calculator.equals().display
    }

    /// Reset to `0`
    pub fn clear(&mut self) -> String {
        self.calculator.reset().display
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    /// Element ID of the operator button to highlight, if any
    #[wasm_bindgen(getter)]
    pub fn active_operator(&self) -> Option<String> {
        self.calculator
            .active_operator()
            .map(|op| KeypadAction::Operator(op).element_id())
    }

    /// Handle a keypad button click by element ID
    pub fn handle_button(&mut self, button_id: &str) -> Option<String> {
        let action = self.keypad.handle_click(button_id)?;
        Some(self.calculator.press(action).display)
    }

    /// Handle a keyboard key press
    pub fn handle_key(&mut self, key: &str) -> Option<String> {
        let action = KeypadAction::from_key(key)?;
        Some(self.calculator.press(action).display)
    }

    /// Current snapshot as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.calculator.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Keypad calculator initialized".into());
}
