//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::format_number;

/// Width of the keypad column
const KEYPAD_WIDTH: u16 = 22;

/// Width of the help sidebar
const HELP_WIDTH: u16 = 24;

/// Outer frame title
pub const APP_TITLE: &str = " Keypad Calculator ";

/// Key help for the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Type number"),
    ("+ - * /", "Operator"),
    ("Enter =", "Equals"),
    ("Esc c", "Clear"),
    ("?", "Toggle help"),
    ("q", "Quit"),
];

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Splits the screen into (main, keypad, help) columns
fn columns(area: Rect, show_help: bool) -> (Rect, Rect, Option<Rect>) {
    let mut constraints = vec![Constraint::Min(20), Constraint::Length(KEYPAD_WIDTH)];
    if show_help {
        constraints.push(Constraint::Length(HELP_WIDTH));
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints(constraints)
        .split(area);
    (chunks[0], chunks[1], chunks.get(2).copied())
}

/// Where the keypad is drawn for a given screen size (for mouse hit-testing)
#[must_use]
pub fn keypad_area(area: Rect, show_help: bool) -> Rect {
    columns(area, show_help).1
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the number display
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.calculator();
        let style = if calc.error().is_some() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(calc.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(format!(" {} ", self.app.title()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    /// Renders the pending operation and repeat memory
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.calculator();
        let mut lines = Vec::new();

        if let (Some(left), Some(op)) = (
            calc.phase().left_operand(),
            calc.phase().pending_operator(),
        ) {
            lines.push(Line::from(vec![
                Span::styled("pending ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{} {op}", format_number(left)),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        if let Some((op, right)) = calc.repeat() {
            lines.push(Line::from(vec![
                Span::styled("repeat  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{op} {}", format_number(right)),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        if let Some(err) = calc.error() {
            lines.push(Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help(area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let (main, keypad, help) = columns(area, self.app.show_help());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(5), // Status
                Constraint::Min(0),
            ])
            .split(main);
        self.render_display(rows[0], buf);
        self.render_status(rows[1], buf);

        KeypadWidget::new(self.app.keypad())
            .active(self.app.calculator().active_operator())
            .pressed(self.app.pressed())
            .render(keypad, buf);

        if let Some(help) = help {
            Self::render_help(help, buf);
        }
    }
}
