use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::warn;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::Game;
use crate::renderer;

type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode and alternate screen, undone when dropped.
struct ScreenGuard;

impl ScreenGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, an early return drops the guard and restores the screen.
        let guard = Self;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        restore_screen();
    }
}

/// The terminal the game is drawn on for the length of one session.
pub struct TerminalSession {
    terminal: GameTerminal,
    _guard: ScreenGuard,
}

impl TerminalSession {
    /// Takes over the terminal. It is handed back when the session drops.
    pub fn enter() -> io::Result<Self> {
        let guard = ScreenGuard::acquire()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    /// Draws one frame of `game`.
    pub fn draw(&mut self, game: &Game, paused: bool) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, game, paused))?;
        Ok(())
    }
}

/// Hands the screen back before the panic message is printed, so it stays
/// readable.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_screen();
        log::error!("panic: {panic_info}");
        default_hook(panic_info);
    }));
}

fn restore_screen() {
    if let Err(error) = disable_raw_mode() {
        warn!("could not leave raw mode: {error}");
    }
    let mut stdout = io::stdout();
    if let Err(error) = execute!(stdout, Show, LeaveAlternateScreen) {
        warn!("could not leave the alternate screen: {error}");
    }
}
