//! Interactive terminal loop

use std::io;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use super::app::CalculatorApp;
use super::input::InputHandler;
use super::ui::{keypad_area, render};
use crate::config::CalcConfig;

/// Runs the calculator in the current terminal until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn or restored.
pub fn run(config: &CalcConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    info!("terminal calculator started");
    let result = run_app(&mut terminal, CalculatorApp::from_config(config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("terminal calculator stopped");

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> io::Result<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.handle_key_action(input_handler.handle_key(key)),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(&mut app, Rect::new(0, 0, size.width, size.height), mouse);
            }
            _ => {}
        }
    }

    Ok(())
}

/// Presses the keypad button under a left click
fn handle_mouse(app: &mut CalculatorApp, screen: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let area = keypad_area(screen, app.show_help());
    if app.click(area, mouse.column, mouse.row).is_none() {
        debug!(x = mouse.column, y = mouse.row, "click outside keypad");
    }
}
