//! The number being typed on the keypad

use std::fmt;

/// Text of the number currently being entered.
///
/// Never empty, holds at most one decimal point and starts out as `"0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry(String);

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl Entry {
    /// Creates the default `"0"` entry
    #[must_use]
    pub fn new() -> Self {
        Self(String::from("0"))
    }

    /// Creates an entry showing a formatted result
    #[must_use]
    pub(crate) fn from_result(text: String) -> Self {
        debug_assert!(!text.is_empty());
        Self(text)
    }

    /// Returns the entry text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the entry already contains a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.0.contains('.')
    }

    /// Appends a digit, replacing a lone leading zero
    pub fn push_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.0 == "0" {
            self.0.clear();
        }
        self.0.push(c);
    }

    /// Appends a decimal point. Returns false if one is already present.
    pub fn push_decimal(&mut self) -> bool {
        if self.has_decimal() {
            return false;
        }
        self.0.push('.');
        true
    }

    /// Parses the entry as a number (`"3."` reads as 3)
    #[must_use]
    pub fn value(&self) -> f64 {
        // Only digits and one '.' ever get in, so this always parses.
        self.0.parse().unwrap_or(0.0)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_default_is_zero() {
        assert_eq!(Entry::default().as_str(), "0");
        assert_eq!(Entry::new().value(), 0.0);
    }

    #[test]
    fn test_push_digit_replaces_leading_zero() {
        let mut entry = Entry::new();
        entry.push_digit(5);
        assert_eq!(entry.as_str(), "5");
    }

    #[test]
    fn test_push_zero_on_zero_stays_zero() {
        let mut entry = Entry::new();
        entry.push_digit(0);
        entry.push_digit(0);
        assert_eq!(entry.as_str(), "0");
    }

    #[test]
    fn test_push_digits_append() {
        let mut entry = Entry::new();
        for d in [1, 2, 0, 4] {
            entry.push_digit(d);
        }
        assert_eq!(entry.as_str(), "1204");
        assert_eq!(entry.value(), 1204.0);
    }

    #[test]
    fn test_push_digit_out_of_range_ignored() {
        let mut entry = Entry::new();
        entry.push_digit(12);
        assert_eq!(entry.as_str(), "0");
    }

    #[test]
    fn test_decimal_keeps_leading_zero() {
        let mut entry = Entry::new();
        assert!(entry.push_decimal());
        entry.push_digit(5);
        assert_eq!(entry.as_str(), "0.5");
        assert_eq!(entry.value(), 0.5);
    }

    #[test]
    fn test_second_decimal_rejected() {
        let mut entry = Entry::new();
        entry.push_digit(3);
        assert!(entry.push_decimal());
        assert!(!entry.push_decimal());
        assert_eq!(entry.as_str(), "3.");
        assert_eq!(entry.value(), 3.0);
    }

    #[test]
    fn test_digit_after_decimal_zero() {
        let mut entry = Entry::new();
        entry.push_decimal();
        entry.push_digit(0);
        entry.push_digit(7);
        assert_eq!(entry.as_str(), "0.07");
    }

    #[test]
    fn test_display() {
        let mut entry = Entry::new();
        entry.push_digit(9);
        assert_eq!(format!("{entry}"), "9");
    }
}
