//! Interactive four-step wizard in the terminal.
//!
//! # Usage
//!
//! ```rust,no_run
//! use qmsim::tui::WizardTui;
//! use qmsim::wizard::Wizard;
//!
//! let mut tui = WizardTui::new(Wizard::default())?;
//! tui.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod actions;
pub mod app;
pub mod layout;
pub mod radar;
pub mod theme;
pub mod views;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::observability::set_tui_active;
use crate::wizard::Wizard;
pub use app::WizardApp;

/// Wizard TUI manager
pub struct WizardTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: WizardApp,
    active: bool,
}

impl WizardTui {
    /// Enter raw mode and the alternate screen.
    pub fn new(wizard: Wizard) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        set_tui_active(true);

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: WizardApp::new(wizard),
            active: true,
        })
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    if self.app.handle_key(key) {
                        break;
                    }
                }
            }
        }

        self.cleanup()?;
        Ok(())
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for WizardTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &WizardApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut WizardApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_define_screen_renders() {
        let app = WizardApp::new(Wizard::default());
        let text = screen_text(&app, 110, 50);
        assert!(text.contains("ISO 15939 Measurement Process Simulator"));
        assert!(text.contains("Step 1: Define Quality Dimensions"));
        assert!(text.contains("IoT System"));
        assert!(text.contains("4 dimensions included"));
        assert!(text.contains("1 / 4"));
    }

    #[test]
    fn test_every_step_renders_at_small_sizes() {
        let mut app = WizardApp::new(Wizard::default());
        press(&mut app, KeyCode::Enter); // first scenario
        for _ in 0..3 {
            for (w, h) in [(120, 50), (60, 20), (20, 8)] {
                screen_text(&app, w, h);
            }
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.wizard().step(), crate::wizard::Step::Analyze);
        let text = screen_text(&app, 120, 50);
        assert!(text.contains("Overall Weighted Quality Score"));
        assert!(text.contains("New Measurement"));
    }

    #[test]
    fn test_gate_dialog_renders() {
        let mut app = WizardApp::new(Wizard::default());
        press(&mut app, KeyCode::Right);
        let text = screen_text(&app, 100, 40);
        assert!(text.contains("Notice"));
    }
}
