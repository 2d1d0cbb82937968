//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod field_canvas;
pub mod status_bar;

pub use field_canvas::{visible_count, FieldCanvas};
pub use status_bar::StatusBar;

use crate::model::BubbleOptions;
use crate::state::{handle_mouse_event, BubbleField, MouseOutcome};
use constants::{CELL_SCALE, KEY_SCROLL_STEP, POLL_INTERVAL, STATUS_BAR_HEIGHT, WHEEL_SCROLL_STEP};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    field: BubbleField<String>,
    /// Last rendered field area (for mouse coordinate conversion)
    last_field_area: Rect,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(field: BubbleField<String>) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            field,
            last_field_area: Rect::default(),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q, Esc or Ctrl+C). Redraws only after
    /// input or a resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if self.handle_mouse(mouse) == MouseOutcome::Ignored {
                        continue;
                    }
                }
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }

            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => self.field.scroll_by(-KEY_SCROLL_STEP, 0.0),
            KeyCode::Down | KeyCode::Char('j') => self.field.scroll_by(KEY_SCROLL_STEP, 0.0),
            KeyCode::Left | KeyCode::Char('h') => self.field.scroll_by(0.0, -KEY_SCROLL_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.field.scroll_by(0.0, KEY_SCROLL_STEP),
            KeyCode::Char('r') => self.field.centre(),
            KeyCode::Char('c') => {
                let compact = !self.field.config().compact;
                self.update_options(|options| options.compact = Some(compact));
            }
            KeyCode::Char('g') => {
                let show_guides = !self.field.config().show_guides;
                self.update_options(|options| options.show_guides = Some(show_guides));
            }
            _ => {}
        }

        false
    }

    /// Apply `change` to the current options, keeping the old layout if the
    /// result is rejected.
    fn update_options(&mut self, change: impl FnOnce(&mut BubbleOptions)) {
        let mut options = self.field.options().clone();
        change(&mut options);
        match self.field.set_options(options) {
            Ok(()) => info!(options = ?self.field.options(), "Options changed"),
            Err(e) => warn!(error = %e, "Rejected option change"),
        }
    }

    /// Handle a single mouse event against the last rendered field area
    fn handle_mouse(&mut self, mouse: MouseEvent) -> MouseOutcome {
        handle_mouse_event(
            &mut self.field,
            mouse,
            self.last_field_area,
            CELL_SCALE,
            WHEEL_SCROLL_STEP,
        )
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        // Frames are viewport-relative; only the drawable area changes.
        debug!("Handling resize to {}x{}", width, height);
    }

    /// Render the current frame
    ///
    /// Recomputes the field if it is dirty, then draws the canvas above a
    /// one-line status bar.
    fn draw(&mut self) -> Result<(), TuiError> {
        self.field.recompute();

        let field = &self.field;
        let mut field_area = Rect::default();
        self.terminal.draw(|frame| {
            let [main, status] = Layout::vertical([
                Constraint::Min(1),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(frame.area());

            let visible = visible_count(field, main);
            frame.render_widget(FieldCanvas::new(field), main);
            frame.render_widget(StatusBar::new(field, visible), status);
            field_area = main;
        })?;
        self.last_field_area = field_area;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the crate.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization so any backend can be used.
    pub(crate) fn new_for_test(terminal: Terminal<B>, field: BubbleField<String>) -> Self {
        Self {
            terminal,
            field,
            last_field_area: Rect::default(),
        }
    }

    /// Get reference to the field (test-only accessor)
    pub(crate) fn field(&self) -> &BubbleField<String> {
        &self.field
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== Benchmark Helpers =====
//
// Public wrappers for benchmarks when bench-internals feature is enabled.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking (benchmark-only constructor)
    ///
    /// Delegates to new_for_test. Only available with bench-internals feature.
    pub fn new_for_bench(terminal: Terminal<B>, field: BubbleField<String>) -> Self {
        Self::new_for_test(terminal, field)
    }

    /// Handle a single keyboard event (benchmark-only accessor)
    pub fn handle_key_bench(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame (benchmark-only accessor)
    pub fn render_bench(&mut self) -> Result<(), TuiError> {
        self.render_test()
    }
}

/// Initialize and run the TUI application over `field`
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_field(field: BubbleField<String>) -> Result<(), TuiError> {
    let mut app = TuiApp::new(field)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
