//! WASM Driver - the DOM page under test
//!
//! Events go in as clicks and key presses; assertions read the page back,
//! so the unified specifications check the rendered view as well as the
//! state machine behind it.

use tracing::debug;

use super::dom::{DomEvent, MockDom};
use super::view::DomView;
use crate::config::CalcConfig;
use crate::core::{Calculator, Operator, Snapshot};
use crate::driver::CalculatorDriver;
use crate::keypad::KeypadAction;

/// WASM Driver wrapping calculator, view and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    calculator: Calculator,
    view: DomView,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates a WASM driver from configuration
    #[must_use]
    pub fn from_config(config: &CalcConfig) -> Self {
        Self::with_calculator(Calculator::from_config(config))
    }

    /// Creates a WASM driver around an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        let view = DomView::new();
        let mut dom = MockDom::calculator(view.keypad());
        view.render(&mut dom, &calculator.snapshot());
        Self {
            calculator,
            view,
            dom,
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the view
    #[must_use]
    pub fn view(&self) -> &DomView {
        &self.view
    }

    /// Simulates a click; returns the new snapshot if the element is a key
    pub fn click(&mut self, element_id: &str) -> Option<Snapshot> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let Some(action) = self.view.keypad().handle_click(element_id) else {
            debug!(element_id, "click outside the keypad");
            return None;
        };
        Some(self.apply(action))
    }

    /// Simulates a keyboard key; returns the new snapshot if the key maps
    /// to a button
    pub fn key_press(&mut self, key: &str) -> Option<Snapshot> {
        self.dom.dispatch_event(DomEvent::key_press(key));
        let Some(action) = KeypadAction::from_key(key) else {
            debug!(key, "key without a button");
            return None;
        };
        Some(self.apply(action))
    }

    /// Runs one action through the state machine and re-renders
    fn apply(&mut self, action: KeypadAction) -> Snapshot {
        let snapshot = self.calculator.press(action);
        self.view.render(&mut self.dom, &snapshot);
        snapshot
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, action: KeypadAction) {
        self.click(&action.element_id());
    }

    fn display(&self) -> String {
        self.view
            .read_display(&self.dom)
            .unwrap_or_default()
            .to_string()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.view.read_active_operator(&self.dom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        run_full_specification, verify_active_operator, verify_chained_operators,
        verify_divide_by_zero,
    };
    use crate::wasm::dom::ACTIVE_CLASS;

    #[test]
    fn test_wasm_driver_new_renders_zero() {
        let driver = WasmDriver::new();
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.active_operator(), None);
    }

    #[test]
    fn test_wasm_driver_click_sequence() {
        let mut driver = WasmDriver::default();
        for id in ["btn-7", "btn-times", "btn-6", "btn-equals"] {
            assert!(driver.click(id).is_some());
        }
        assert_eq!(driver.display(), "42");
        assert_eq!(driver.dom().event_history().len(), 4);
    }

    #[test]
    fn test_wasm_driver_click_unknown_element() {
        let mut driver = WasmDriver::new();
        assert!(driver.click("calc-display").is_none());
        assert_eq!(driver.dom().event_history().len(), 1);
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_wasm_driver_keyboard() {
        let mut driver = WasmDriver::new();
        driver.key_press("9");
        driver.key_press("/");
        driver.key_press("2");
        let snap = driver.key_press("Enter").unwrap();
        assert_eq!(snap.display, "4.5");
        assert_eq!(driver.display(), "4.5");
        assert!(driver.key_press("Shift").is_none());
        driver.key_press("Escape");
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_wasm_driver_active_class_moves() {
        let mut driver = WasmDriver::new();
        driver.press_keys("5+").unwrap();
        assert_eq!(driver.dom().ids_with_class(ACTIVE_CLASS), vec!["btn-plus"]);
        driver.press_keys("-").unwrap();
        assert_eq!(driver.dom().ids_with_class(ACTIVE_CLASS), vec!["btn-minus"]);
        driver.press_keys("2").unwrap();
        assert!(driver.dom().ids_with_class(ACTIVE_CLASS).is_empty());
    }

    #[test]
    fn test_wasm_driver_view_matches_machine() {
        let mut driver = WasmDriver::new();
        driver.press_keys("1.5*4=").unwrap();
        assert_eq!(driver.display(), driver.calculator().display());
        assert_eq!(driver.display(), "6");
    }

    #[test]
    fn test_wasm_driver_from_config() {
        let config = CalcConfig::new().with_error_text("Nope");
        let mut driver = WasmDriver::from_config(&config);
        driver.press_keys("3/0=").unwrap();
        assert_eq!(driver.display(), "Nope");
    }

    // ===== Unified Specification Tests =====

    #[test]
    fn test_unified_chained_operators() {
        verify_chained_operators(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_unified_divide_by_zero() {
        verify_divide_by_zero(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_unified_active_operator() {
        verify_active_operator(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_full_specification() {
        run_full_specification(&mut WasmDriver::new()).unwrap();
    }
}
