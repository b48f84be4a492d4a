//! Core calculator: operators, entry text and the keypad state machine
//!
//! Nothing in here knows about terminals or the DOM. Views feed
//! [`KeypadAction`](crate::keypad::KeypadAction)s in and render
//! [`Snapshot`]s out.

pub mod entry;
pub mod format;
pub mod machine;
mod operator;

pub use entry::Entry;
pub use format::format_number;
pub use machine::{Calculator, Phase, Snapshot};
pub use operator::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a number
    #[error("Invalid result: NaN")]
    NotANumber,
    /// A key in a replayed sequence has no keypad button
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
}

impl CalcError {
    /// Returns true for errors produced by arithmetic (shown as the error display)
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow | Self::NotANumber)
    }
}
