//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};

use rand::Rng;
use zeroize::{Zeroize, Zeroizing};

use super::{CliFlags, prompts, quiet};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::Error;
use crate::pass;
use crate::settings::Settings;
use crate::tui::print_help;

/// Why the CLI stopped before or instead of completing normally.
#[derive(Debug, PartialEq, Eq)]
pub enum Exit {
    /// Early exit - not an error, just done.
    Done,
    /// Stop with the given process status.
    Fail(i32),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Box<dyn Clipboard>>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, Error> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.open_clipboard()?;

        let mut rng = rand::thread_rng();
        let stdout = io::stdout();
        let mut out = pass::SecureBufWriter::new(stdout.lock());
        self.generate_output(&mut rng, &mut out)
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    pub fn apply_flags(&mut self) {
        self.settings.categories = self.flags.categories();
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        self.settings.to_clipboard = self.flags.clipboard;
        self.settings.show_strength = self.flags.strength;

        let requested = self.settings.length;
        if self.settings.coerce_length() {
            prompts::length_raised(requested, self.settings.length);
        }
        tracing::debug!(settings = ?self.settings, "cli settings applied");
    }

    fn open_clipboard(&mut self) -> Result<(), Exit> {
        if !self.settings.to_clipboard || self.clipboard.is_some() {
            return Ok(());
        }
        match SystemClipboard::open() {
            Ok(c) => self.clipboard = Some(Box::new(c)),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                } else {
                    return Err(Exit::Done);
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and write them to `out` or the clipboard.
    pub fn generate_output<R, W>(&mut self, rng: &mut R, out: &mut W) -> Result<(), Exit>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        let settings = &self.settings;
        let count = settings.number_of_passwords.max(1);

        let length = match pass::validate(settings.length, &settings.categories) {
            Ok(len) => len,
            Err(e) => {
                prompts::error(&e.to_string());
                return Err(Exit::Fail(1));
            }
        };

        if settings.show_strength {
            prompts::strength(
                pass::rate(&settings.categories, length),
                pass::entropy_bits(&settings.categories, length),
            );
        }

        match self.clipboard.as_mut() {
            Some(clipboard) if settings.to_clipboard => {
                let passwords = pass::generate_batch(rng, length, &settings.categories, count)
                    .map_err(|_| Exit::Fail(1))?;
                let joined = Zeroizing::new(
                    passwords
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join("\n"),
                );
                match clipboard.set_text(&joined) {
                    Ok(()) => prompts::clipboard_copied(),
                    Err(e) => {
                        prompts::clipboard_error(&e.to_string());
                        return Err(Exit::Fail(2));
                    }
                }
            }
            _ => {
                // Stream: one password in memory at a time
                let mut line = Vec::with_capacity(length + 1);
                for _ in 0..count {
                    let password = pass::generate(rng, length, &settings.categories)
                        .map_err(|_| Exit::Fail(1))?;
                    line.extend_from_slice(password.as_bytes());
                    line.push(b'\n');
                    let written = out.write_all(&line);
                    line.zeroize();
                    if let Err(e) = written {
                        // Closed pipe: reader has what it wanted
                        tracing::debug!(error = %e, "stdout closed");
                        return Ok(());
                    }
                }
                if let Err(e) = out.flush() {
                    tracing::debug!(error = %e, "stdout flush failed");
                }
            }
        }
        Ok(())
    }
}
