//! Keypad calculator state machine
//!
//! Each input event runs to completion and returns a [`Snapshot`] of the two
//! things a view shows: the display text and which operator (if any) is lit.

use serde::Serialize;
use tracing::{debug, warn};

use super::entry::Entry;
use super::format::format_number;
use super::{CalcError, CalcResult, Operator};
use crate::config::CalcConfig;
use crate::keypad::KeypadAction;

/// Where the calculator is in an `a op b =` sequence
///
/// `left` is `None` in the pending phases only after a chained operation
/// failed: the new operator is kept, but there is nothing to apply it to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Typing the left operand, nothing stored yet
    Entering,
    /// Operator chosen; the next digit starts the right operand
    OperatorPending {
        /// Stored left operand
        left: Option<f64>,
        /// Operator awaiting a right operand
        op: Operator,
    },
    /// Typing the right operand
    RightOperand {
        /// Stored left operand
        left: Option<f64>,
        /// Operator to apply once the right operand is complete
        op: Operator,
    },
    /// A result (`None` after an error) is on the display
    ResultShown {
        /// The shown result
        value: Option<f64>,
    },
    /// Typing a number over a shown result, which stays the left operand.
    /// An operator press continues from `left` and drops the typed number.
    TypingOverResult {
        /// The result still held as left operand
        left: f64,
    },
}

impl Phase {
    /// Returns the pending operator, if one is waiting for its right operand
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        match self {
            Self::OperatorPending { op, .. } | Self::RightOperand { op, .. } => Some(*op),
            Self::Entering | Self::ResultShown { .. } | Self::TypingOverResult { .. } => None,
        }
    }

    /// Returns the stored left operand
    #[must_use]
    pub const fn left_operand(&self) -> Option<f64> {
        match self {
            Self::OperatorPending { left, .. } | Self::RightOperand { left, .. } => *left,
            Self::ResultShown { value } => *value,
            Self::TypingOverResult { left } => Some(*left),
            Self::Entering => None,
        }
    }

    /// True right after an operator press, before any digit or decimal
    #[must_use]
    pub const fn awaiting_right_operand(&self) -> bool {
        matches!(self, Self::OperatorPending { .. })
    }
}

/// What a view renders after an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Display text
    pub display: String,
    /// Operator button to mark as active
    pub active_operator: Option<Operator>,
    /// Whether the display is showing the error text
    pub error: bool,
}

/// Calculator state: one record, mutated only by the input events
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Number being typed (or the last result)
    entry: Entry,
    /// Position in the operand/operator sequence
    phase: Phase,
    /// Arithmetic error currently on the display
    error: Option<CalcError>,
    /// Last operator and right operand, re-applied by repeated equals
    repeat: Option<(Operator, f64)>,
    /// Operator highlighted in the view
    active: Option<Operator>,
    /// Text shown in place of a number after an error
    error_text: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Default display text for arithmetic errors
    pub const DEFAULT_ERROR_TEXT: &'static str = "Error";

    /// Creates a calculator showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::with_error_text(Self::DEFAULT_ERROR_TEXT)
    }

    /// Creates a calculator with custom error display text
    #[must_use]
    pub fn with_error_text(error_text: impl Into<String>) -> Self {
        Self {
            entry: Entry::new(),
            phase: Phase::Entering,
            error: None,
            repeat: None,
            active: None,
            error_text: error_text.into(),
        }
    }

    /// Creates a calculator from configuration
    #[must_use]
    pub fn from_config(config: &CalcConfig) -> Self {
        Self::with_error_text(config.error_text.as_str())
    }

    /// Returns the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current entry
    #[must_use]
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Returns the error on the display, if any
    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Returns the operator/operand pair a repeated equals would apply
    #[must_use]
    pub fn repeat(&self) -> Option<(Operator, f64)> {
        self.repeat
    }

    /// Returns the highlighted operator
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.active
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        if self.error.is_some() {
            &self.error_text
        } else {
            self.entry.as_str()
        }
    }

    /// Returns the current outputs
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display().to_string(),
            active_operator: self.active,
            error: self.error.is_some(),
        }
    }

    /// Dispatches a keypad action to its handler
    pub fn press(&mut self, action: KeypadAction) -> Snapshot {
        match action {
            KeypadAction::Digit(d) => self.enter_digit(d),
            KeypadAction::Decimal => self.enter_decimal(),
            KeypadAction::Operator(op) => self.select_operator(op),
            KeypadAction::Equals => self.equals(),
            KeypadAction::Clear => self.reset(),
        }
    }

    /// Types a digit (0-9)
    pub fn enter_digit(&mut self, digit: u8) -> Snapshot {
        if digit > 9 {
            warn!(digit, "ignoring out-of-range digit");
            return self.snapshot();
        }

        self.start_new_number_if_needed();
        self.entry.push_digit(digit);
        self.error = None;
        self.active = None;

        debug!(digit, entry = %self.entry, "digit entered");
        self.snapshot()
    }

    /// Types a decimal point; a second point in the same number is ignored
    pub fn enter_decimal(&mut self) -> Snapshot {
        self.start_new_number_if_needed();

        if self.entry.push_decimal() {
            self.error = None;
            self.active = None;
            debug!(entry = %self.entry, "decimal point entered");
        } else {
            debug!(entry = %self.entry, "entry already has a decimal point");
        }
        self.snapshot()
    }

    /// Selects a binary operator.
    ///
    /// With a right operand typed, the pending operation is computed first
    /// (implicit equals). Pressed again before any digit, the new operator
    /// replaces the pending one. With no left operand held, the entry
    /// becomes the left operand.
    pub fn select_operator(&mut self, op: Operator) -> Snapshot {
        let phase = self.phase;
        let left = match phase {
            Phase::Entering
            | Phase::OperatorPending { left: None, .. }
            | Phase::RightOperand { left: None, .. } => Some(self.entry.value()),
            Phase::OperatorPending {
                left: Some(left),
                op: replaced,
            } => {
                debug!(%replaced, %op, "operator switched");
                Some(left)
            }
            Phase::ResultShown { value } => Some(value.unwrap_or_else(|| self.entry.value())),
            Phase::TypingOverResult { left } => Some(left),
            Phase::RightOperand {
                left: Some(left),
                op: pending,
            } => {
                let right = self.entry.value();
                self.complete(left, pending, right)
            }
        };
        self.phase = Phase::OperatorPending { left, op };
        self.active = Some(op);

        debug!(%op, phase = ?self.phase, "operator selected");
        self.snapshot()
    }

    /// Computes the pending operation, or repeats the last one.
    ///
    /// Always clears the operator highlight. With an operator pending and
    /// nothing typed, the left operand is used twice (`5 + =` gives 10).
    /// With no operator pending, the memorized operator and right operand
    /// are applied to the displayed value.
    pub fn equals(&mut self) -> Snapshot {
        self.active = None;

        let phase = self.phase;
        match phase {
            Phase::OperatorPending { left: None, .. } | Phase::RightOperand { left: None, .. } => {
                debug!("equals with no left operand");
            }
            Phase::OperatorPending {
                left: Some(left),
                op,
            } => {
                let value = self.complete(left, op, left);
                self.phase = Phase::ResultShown { value };
            }
            Phase::RightOperand {
                left: Some(left),
                op,
            } => {
                let right = self.entry.value();
                let value = self.complete(left, op, right);
                self.phase = Phase::ResultShown { value };
            }
            Phase::Entering | Phase::ResultShown { .. } | Phase::TypingOverResult { .. } => {
                let Some((op, right)) = self.repeat else {
                    debug!("equals with nothing to compute");
                    return self.snapshot();
                };
                let result = match &self.error {
                    Some(err) => Err(err.clone()),
                    None => op.apply(self.entry.value(), right),
                };
                let value = self.show_result(result);
                self.phase = Phase::ResultShown { value };
                debug!(%op, right, "repeated equals");
            }
        }

        self.snapshot()
    }

    /// Restores the freshly constructed state
    pub fn reset(&mut self) -> Snapshot {
        let error_text = std::mem::take(&mut self.error_text);
        *self = Self::with_error_text(error_text);
        debug!("calculator reset");
        self.snapshot()
    }

    /// Resets the entry when the previous number is finished
    fn start_new_number_if_needed(&mut self) {
        match self.phase {
            Phase::OperatorPending { left, op } => {
                self.entry = Entry::new();
                self.phase = Phase::RightOperand { left, op };
            }
            Phase::ResultShown { value } => {
                self.entry = Entry::new();
                self.phase = match value {
                    Some(left) => Phase::TypingOverResult { left },
                    None => Phase::Entering,
                };
            }
            Phase::Entering | Phase::RightOperand { .. } | Phase::TypingOverResult { .. } => {}
        }
    }

    /// Applies `left op right`, memorizes the pair and shows the outcome
    fn complete(&mut self, left: f64, op: Operator, right: f64) -> Option<f64> {
        self.repeat = Some((op, right));
        let value = self.show_result(op.apply(left, right));
        debug!(left, %op, right, result = ?value, "computed");
        value
    }

    /// Puts a result (or the error text) on the display
    fn show_result(&mut self, result: CalcResult<f64>) -> Option<f64> {
        match result {
            Ok(value) => {
                self.entry = Entry::from_result(format_number(value));
                self.error = None;
                Some(value)
            }
            Err(err) => {
                warn!(%err, "calculation failed");
                self.entry = Entry::new();
                self.error = Some(err);
                None
            }
        }
    }
}
