//! Unified Calculator Driver
//!
//! Every front end implements [`CalculatorDriver`], so each keypad scenario
//! is written once below and replayed against the bare state machine, the
//! terminal app and the DOM view alike.

use crate::core::{CalcResult, Calculator, Operator};
use crate::keypad::{parse_sequence, KeypadAction};

/// Abstract driver trait for keypad interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::driver::{verify_repeated_equals, CalculatorDriver};
/// use keypad_calc::core::Calculator;
///
/// let mut calc = Calculator::new();
/// verify_repeated_equals(&mut calc).unwrap();
/// ```
pub trait CalculatorDriver {
    /// Presses one keypad button
    fn press(&mut self, action: KeypadAction);

    /// Gets the text currently on the display
    fn display(&self) -> String;

    /// Gets the operator currently highlighted
    fn active_operator(&self) -> Option<Operator>;

    /// Presses the clear button
    fn clear(&mut self) {
        self.press(KeypadAction::Clear);
    }

    /// Presses every key of a sequence such as `"5+3="`
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnknownKey`](crate::core::CalcError::UnknownKey)
    /// before pressing anything if a character has no button.
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for action in parse_sequence(keys)? {
            self.press(action);
        }
        Ok(())
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: KeypadAction) {
        Calculator::press(self, action);
    }

    fn display(&self) -> String {
        Calculator::display(self).to_string()
    }

    fn active_operator(&self) -> Option<Operator> {
        Calculator::active_operator(self)
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, KeypadAction, Operator};
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: KeypadAction) {
            self.app.press(action);
        }

        fn display(&self) -> String {
            self.app.display_text()
        }

        fn active_operator(&self) -> Option<Operator> {
            self.app.calculator().active_operator()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation

/// Verifies digit entry and leading-zero suppression
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.display(), "0");

    driver.press_keys("0")?;
    assert_eq!(driver.display(), "0");
    driver.press_keys("5")?;
    assert_eq!(driver.display(), "5");
    driver.press_keys("07")?;
    assert_eq!(driver.display(), "507");
    driver.clear();

    // Decimal on a fresh entry keeps the zero
    driver.press_keys(".5")?;
    assert_eq!(driver.display(), "0.5");
    driver.clear();
    Ok(())
}

/// Verifies that a second decimal point in the same number is ignored
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_decimal_idempotent<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_keys("1..")?;
    assert_eq!(driver.display(), "1.");
    driver.press_keys("5.")?;
    assert_eq!(driver.display(), "1.5");
    driver.clear();
    Ok(())
}

/// Verifies `5 + 3 =` shows 8
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_simple_addition<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_keys("5+3=")?;
    assert_eq!(driver.display(), "8");
    driver.clear();

    driver.press_keys("6*7=")?;
    assert_eq!(driver.display(), "42");
    driver.clear();

    driver.press_keys("7/2=")?;
    assert_eq!(driver.display(), "3.5");
    driver.clear();
    Ok(())
}

/// Verifies that an operator after a right operand computes first
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_chained_operators<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_keys("5+3+")?;
    assert_eq!(driver.display(), "8");
    assert_eq!(driver.active_operator(), Some(Operator::Add));
    driver.press_keys("2=")?;
    assert_eq!(driver.display(), "10");
    driver.clear();
    Ok(())
}

/// Verifies division by zero shows the error and the next digit starts clean
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_keys("6/0=")?;
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.active_operator(), None);

    driver.press_keys("7")?;
    assert_eq!(driver.display(), "7");
    driver.press_keys("+1=")?;
    assert_eq!(driver.display(), "8");
    driver.clear();
    Ok(())
}

/// Verifies `4 + 2 = = =` shows 6, 8, 10
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_repeated_equals<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_keys("4+2=")?;
    assert_eq!(driver.display(), "6");
    driver.press_keys("=")?;
    assert_eq!(driver.display(), "8");
    driver.press_keys("=")?;
    assert_eq!(driver.display(), "10");
    driver.clear();
    Ok(())
}

/// Verifies a second operator before any digit replaces the first
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_operator_switch<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_keys("5+*")?;
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.active_operator(), Some(Operator::Multiply));
    driver.press_keys("3=")?;
    assert_eq!(driver.display(), "15");
    driver.clear();
    Ok(())
}

/// Verifies the operator highlight follows the key presses
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_active_operator<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.active_operator(), None);
    driver.press_keys("9-")?;
    assert_eq!(driver.active_operator(), Some(Operator::Subtract));
    driver.press_keys("4")?;
    assert_eq!(driver.active_operator(), None);
    driver.press_keys("/")?;
    assert_eq!(driver.active_operator(), Some(Operator::Divide));
    driver.press_keys("=")?;
    assert_eq!(driver.active_operator(), None);
    driver.clear();
    Ok(())
}

/// Verifies clear restores the fresh state, including the repeat memory
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_keys("4+2==*")?;
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.active_operator(), None);

    // Nothing is left to repeat
    driver.press_keys("7=")?;
    assert_eq!(driver.display(), "7");
    driver.clear();
    Ok(())
}

/// Verifies a number typed over a result does not replace the result as
/// left operand: `2 + 3 = 7 + 1 =` continues from 5
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_operator_after_typed_result<D: CalculatorDriver>(
    driver: &mut D,
) -> CalcResult<()> {
    driver.clear();
    driver.press_keys("2+3=7")?;
    assert_eq!(driver.display(), "7");
    driver.press_keys("+")?;
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.active_operator(), Some(Operator::Add));
    driver.press_keys("1=")?;
    assert_eq!(driver.display(), "6");
    driver.clear();

    // Equals instead of an operator repeats against the typed number
    driver.press_keys("2+3=7=")?;
    assert_eq!(driver.display(), "10");
    driver.clear();
    Ok(())
}

/// Verifies a failed chained operation keeps the new operator but has
/// nothing to apply it to until another operator stores a left operand
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn verify_failed_chain<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_keys("6/0+")?;
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.active_operator(), Some(Operator::Add));

    driver.press_keys("=")?;
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.active_operator(), None);
    driver.clear();

    driver.press_keys("6/0+5=")?;
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.active_operator(), None);
    driver.press_keys("+1=")?;
    assert_eq!(driver.display(), "6");
    driver.clear();
    Ok(())
}

/// Complete verification suite - runs all specifications
///
/// # Errors
///
/// Only fails if a scenario key has no button.
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_digit_entry(driver)?;
    verify_decimal_idempotent(driver)?;
    verify_simple_addition(driver)?;
    verify_chained_operators(driver)?;
    verify_divide_by_zero(driver)?;
    verify_repeated_equals(driver)?;
    verify_operator_switch(driver)?;
    verify_active_operator(driver)?;
    verify_operator_after_typed_result(driver)?;
    verify_failed_chain(driver)?;
    verify_clear(driver)
}
