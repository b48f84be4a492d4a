//! Keypad widget for the terminal calculator
//!
//! Draws the shared [`Keypad`] as a grid inside a bordered block. The active
//! operator stays highlighted until a digit or equals clears it; the last
//! pressed key flashes. Mouse clicks map back to buttons via [`hit_test`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::core::Operator;
use crate::keypad::{Keypad, KeypadAction, KeypadButton};

/// Inner area of the keypad block (inside the border)
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Size of one button cell, or `None` if the area is too small
fn cell_size(keypad: &Keypad, inner: Rect) -> Option<(u16, u16)> {
    let (rows, cols) = keypad.dimensions();
    let width = inner.width / cols as u16;
    let height = inner.height / rows as u16;
    (width > 0 && height > 0).then_some((width, height))
}

/// Converts a click position inside `area` to the button under it
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<&KeypadButton> {
    let inner = inner_area(area);
    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }
    let (width, height) = cell_size(keypad, inner)?;
    let col = usize::from((x - inner.x) / width);
    let row = usize::from((y - inner.y) / height);
    keypad.get_button_at(row, col)
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    active: Option<Operator>,
    pressed: Option<KeypadAction>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            active: None,
            pressed: None,
        }
    }

    /// Highlights an operator button
    #[must_use]
    pub fn active(mut self, active: Option<Operator>) -> Self {
        self.active = active;
        self
    }

    /// Flashes the last pressed button
    #[must_use]
    pub fn pressed(mut self, pressed: Option<KeypadAction>) -> Self {
        self.pressed = pressed;
        self
    }

    fn button_style(&self, button: &KeypadButton) -> Style {
        if self.pressed == Some(button.action) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match button.action {
            KeypadAction::Operator(op) if self.active == Some(op) => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            KeypadAction::Operator(_) => Style::default().fg(Color::Yellow),
            KeypadAction::Digit(_) | KeypadAction::Decimal => Style::default().fg(Color::White),
            KeypadAction::Equals => Style::default().fg(Color::Green),
            KeypadAction::Clear => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = inner_area(area);
        let Some((width, height)) = cell_size(self.keypad, inner) else {
            return;
        };
        if width < 3 {
            return;
        }

        for button in self.keypad.buttons() {
            let x = inner.x + button.col as u16 * width;
            let y = inner.y + button.row as u16 * height + height / 2;
            let label = format!("[{}]", button.label());
            let label_x = x + width.saturating_sub(label.len() as u16) / 2;
            buf.set_stringn(
                label_x,
                y,
                &label,
                usize::from(width),
                self.button_style(button),
            );
        }
    }
}
