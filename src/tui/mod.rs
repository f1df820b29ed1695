//! Interactive TUI.

mod input;
pub mod state;
mod text;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};

use crate::clipboard::SystemClipboard;
use crate::settings::Settings;
use crate::terminal::{ScreenGuard, print_error};

pub use input::{Action, action_for};
pub use state::State;
pub use text::print_help;

/// Poll interval; bounds how late the copy status is cleared.
const TICK: Duration = Duration::from_millis(100);

/// Run TUI interactive mode.
pub fn run() {
    if let Err(e) = event_loop(Settings::default()) {
        print_error(&format!("Terminal error: {e}"));
    }
}

fn event_loop(settings: Settings) -> io::Result<()> {
    let mut guard = ScreenGuard::new()?;
    let mut rng = rand::thread_rng();
    let mut clipboard = SystemClipboard::new();
    let mut state = State::new(settings);

    tracing::debug!("interactive session started");
    draw(&state)?;

    loop {
        let mut dirty = false;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key)
        {
            state = match action {
                Action::Quit => break,
                Action::Step(delta) => state::on_slider_step(state, delta),
                Action::SetLength(value) => state::on_slider(state, value),
                Action::Toggle(category) => state::on_toggle(state, category),
                Action::Generate => state::on_generate(state, &mut rng),
                Action::Copy => state::on_copy(state, &mut clipboard, Instant::now()),
                Action::Help => state::on_help(state),
            };
            dirty = true;
        }

        let had_status = state.status.is_some();
        state = state::on_tick(state, Instant::now());
        if dirty || had_status != state.status.is_some() {
            draw(&state)?;
        }
    }

    guard.restore();
    Ok(())
}

fn draw(state: &State) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "\x1b[2J\x1b[H{}", text::main_panel(state).render(true))?;
    out.flush()
}
