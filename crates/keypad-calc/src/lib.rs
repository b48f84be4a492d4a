//! Keypad Calculator
//!
//! A pocket-calculator state machine driven one key press at a time:
//! digits, a decimal point, the four operators, equals and clear. Operators
//! chain (`5 + 3 +` shows 8), pressing equals again repeats the last
//! operation, and division by zero shows an error instead of a number.
//!
//! The same [`Calculator`](core::Calculator) sits behind a terminal front end
//! (feature `tui`) and a DOM view (`wasm` module, browser bindings behind
//! feature `wasm`). Both go through the shared [`keypad`] model.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_keys("4+2==").unwrap();
//! assert_eq!(calc.display(), "8");
//!
//! calc.press_keys("C6/0=").unwrap();
//! assert_eq!(calc.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// DOM view - always available for testing
/// (the mock DOM needs no browser)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, TuiConfig};
    pub use crate::core::{
        format_number, CalcError, CalcResult, Calculator, Entry, Operator, Phase, Snapshot,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{CliError, CliResult};
    pub use crate::keypad::{parse_sequence, Keypad, KeypadAction, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, DomView, MockDom, WasmDriver};
}
