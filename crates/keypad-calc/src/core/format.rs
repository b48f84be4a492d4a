//! Result formatting

/// Formats a finite result for the display.
///
/// Uses the shortest decimal text that reads back to the same `f64`, so a
/// shown result parses to exactly the value that produced it. Negative zero
/// is shown as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    format!("{value}")
}
