//! Interactive state and the handlers that advance it.
//!
//! Handlers take the current [`State`] and an event payload and return the
//! next state. Randomness, the clipboard and the clock are passed in, so
//! every transition is testable without a terminal.

use std::time::{Duration, Instant};

use rand::Rng;
use zeroize::Zeroizing;

use crate::clipboard::Clipboard;
use crate::error::Error;
use crate::pass::{self, Category, Strength};
use crate::settings::{LENGTH_MAX, LENGTH_MIN, Settings};

/// How long the copy status stays on screen.
pub const COPY_STATUS_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn label(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "copied",
            CopyOutcome::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyStatus {
    pub outcome: CopyOutcome,
    pub expires: Instant,
}

#[derive(Debug, Default)]
pub struct State {
    pub settings: Settings,
    pub password: Zeroizing<String>,
    pub strength: Option<Strength>,
    /// Entropy of the shown password, fixed when it was generated.
    pub bits: f64,
    pub status: Option<CopyStatus>,
    /// Prompt shown until the next action.
    pub notice: Option<String>,
    pub show_help: bool,
}

impl State {
    pub fn new(settings: Settings) -> Self {
        let mut settings = settings;
        settings.length = settings.length.clamp(LENGTH_MIN, LENGTH_MAX);
        settings.coerce_length();
        Self {
            settings,
            ..Default::default()
        }
    }
}

pub fn on_slider(mut state: State, value: usize) -> State {
    state.notice = None;
    state.settings.length = value.clamp(LENGTH_MIN, LENGTH_MAX);
    state
}

/// Move the slider by `delta` steps.
pub fn on_slider_step(state: State, delta: isize) -> State {
    let value = state.settings.length.saturating_add_signed(delta);
    on_slider(state, value)
}

pub fn on_toggle(mut state: State, category: Category) -> State {
    state.notice = None;
    state.settings.categories.toggle(category);
    if state.settings.coerce_length() {
        tracing::debug!(length = state.settings.length, "length raised to category count");
    }
    state
}

pub fn on_generate<R: Rng + ?Sized>(mut state: State, rng: &mut R) -> State {
    state.notice = None;
    state.settings.coerce_length();

    let settings = &state.settings;
    match pass::generate(rng, settings.length, &settings.categories) {
        Ok(password) => {
            state.strength = Some(pass::rate(&settings.categories, settings.length));
            state.bits = pass::entropy_bits(&settings.categories, password.len());
            state.password = password;
        }
        Err(e) => {
            tracing::info!(error = %e, "generation refused");
            state.notice = Some(e.to_string());
        }
    }
    state
}

pub fn on_copy<C: Clipboard + ?Sized>(mut state: State, clipboard: &mut C, now: Instant) -> State {
    state.notice = None;

    let result = if state.password.is_empty() {
        Err(Error::EmptyPassword)
    } else {
        clipboard.set_text(&state.password)
    };

    let outcome = match result {
        Ok(()) => CopyOutcome::Copied,
        Err(Error::EmptyPassword) => {
            state.notice = Some(Error::EmptyPassword.to_string());
            CopyOutcome::Failed
        }
        Err(e) => {
            tracing::info!(error = %e, "copy failed");
            CopyOutcome::Failed
        }
    };

    state.status = Some(CopyStatus {
        outcome,
        expires: now + COPY_STATUS_TTL,
    });
    state
}

/// Clear the copy status once its timer has run out.
pub fn on_tick(mut state: State, now: Instant) -> State {
    if state.status.is_some_and(|s| now >= s.expires) {
        state.status = None;
    }
    state
}

pub fn on_help(mut state: State) -> State {
    state.show_help = !state.show_help;
    state
}
