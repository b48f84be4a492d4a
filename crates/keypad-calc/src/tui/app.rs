//! TUI Application State

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::hit_test;
use crate::config::CalcConfig;
use crate::core::{Calculator, Snapshot};
use crate::keypad::{Keypad, KeypadAction};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The state machine behind the display
    calculator: Calculator,
    /// Button layout, shared with mouse hit-testing
    keypad: Keypad,
    /// Last button pressed, flashed on the keypad
    pressed: Option<KeypadAction>,
    /// Whether the help sidebar is visible
    show_help: bool,
    /// Title of the display panel
    title: String,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&CalcConfig::default())
    }

    /// Creates a calculator app from configuration
    #[must_use]
    pub fn from_config(config: &CalcConfig) -> Self {
        Self {
            calculator: Calculator::from_config(config),
            keypad: Keypad::new(),
            pressed: None,
            show_help: config.tui.show_help,
            title: config.tui.title.clone(),
            should_quit: false,
        }
    }

    /// Returns the state machine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the last pressed button
    #[must_use]
    pub fn pressed(&self) -> Option<KeypadAction> {
        self.pressed
    }

    /// Returns the display panel title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the help sidebar is shown
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Shows or hides the help sidebar
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns the display text
    #[must_use]
    pub fn display_text(&self) -> String {
        self.calculator.display().to_string()
    }

    /// Presses a keypad button
    pub fn press(&mut self, action: KeypadAction) -> Snapshot {
        self.pressed = Some(action);
        self.calculator.press(action)
    }

    /// Applies a keyboard action
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(action) => {
                self.press(action);
            }
            KeyAction::ToggleHelp => self.toggle_help(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at `(x, y)` on a keypad drawn in `keypad_area`
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Snapshot> {
        let action = hit_test(&self.keypad, keypad_area, x, y)?.action;
        Some(self.press(action))
    }
}
