//! Interactive terminal front-end.
//!
//! Draws the display and keypad with crossterm, then feeds keyboard and
//! mouse events into a [`Session`] until the user quits.

use crate::calculator::Calculator;
use crate::config::Config;
use crate::keys::{CELL_WIDTH, Keypad, classify_key, key_name};
use crate::render::RenderSink;
use crate::session::Session;
use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{Stdout, Write, stdout};

/// Rows taken by the boxed display above the keypad.
const DISPLAY_HEIGHT: u16 = 3;

/// Renders into the terminal's alternate screen.
pub struct TerminalSink {
    out: Stdout,
    keypad: Option<Keypad>,
}

impl TerminalSink {
    pub fn new(show_keypad: bool) -> Self {
        Self {
            out: stdout(),
            keypad: show_keypad.then(|| Keypad::new(0, DISPLAY_HEIGHT + 1)),
        }
    }

    pub fn keypad(&self) -> Option<Keypad> {
        self.keypad
    }

    fn inner_width(&self) -> usize {
        let width = self.keypad.map_or(4 * CELL_WIDTH, |k| k.width());
        width.saturating_sub(2) as usize
    }
}

/// Fit the display into `width` columns, right-aligned, keeping the last
/// digits when it is too long.
fn fit_display(display: &str, width: usize) -> String {
    let len = display.chars().count();
    if len <= width {
        format!("{:>width$}", display, width = width)
    } else {
        display.chars().skip(len - width).collect()
    }
}

impl RenderSink for TerminalSink {
    fn render(&mut self, display: &str) -> Result<()> {
        let inner = self.inner_width();
        let border = "─".repeat(inner);

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(self.out, Print(format!("┌{}┐", border)), MoveTo(0, 1))?;
        queue!(
            self.out,
            Print(format!("│{}│", fit_display(display, inner))),
            MoveTo(0, 2)
        )?;
        queue!(self.out, Print(format!("└{}┘", border)))?;

        let mut help_row = DISPLAY_HEIGHT + 1;
        if let Some(keypad) = self.keypad {
            for (i, row) in keypad.rows().iter().enumerate() {
                let line: String = row
                    .iter()
                    .map(|button| format!("[{:^3}]", button.label))
                    .collect();
                queue!(self.out, MoveTo(keypad.left, keypad.top + i as u16), Print(line))?;
            }
            help_row = keypad.top + keypad.height() + 1;
        }

        queue!(
            self.out,
            MoveTo(0, help_row),
            Print("q / Esc to quit")
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// Restores the terminal when dropped, even on error.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)
            .context("Failed to set up terminal")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Run the calculator interactively until the user quits.
pub fn run_interactive(config: &Config) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let calculator = Calculator::with_precision(config.precision);
    let mut session = Session::new(calculator, TerminalSink::new(config.show_keypad))
        .with_copy_on_equals(config.copy_on_equals);
    session.refresh()?;

    tracing::info!("interactive session started");

    loop {
        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit(&key) {
                    break;
                }
                match key_name(&key).as_deref().and_then(classify_key) {
                    Some(input) => session.dispatch(input)?,
                    None => tracing::debug!(?key, "ignoring key"),
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let button = session
                    .sink()
                    .keypad()
                    .and_then(|keypad| keypad.button_at(column, row));
                if let Some(button) = button {
                    session.dispatch(button.input())?;
                }
            }
            Event::Resize(..) => session.refresh()?,
            _ => {}
        }
    }

    tracing::info!(
        display = session.calculator().display_value(),
        "interactive session ended"
    );
    Ok(())
}
