//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Destination for copied passwords.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Native clipboard, opened lazily so a missing display only fails the copy.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the clipboard up front; used by the CLI to fail early.
    pub fn open() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { ctx: Some(ctx) })
    }

    fn context(&mut self) -> Result<&mut ClipboardContext> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| Error::Clipboard("unavailable".into()))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Read back so X11 hands the selection over before we move on
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        tracing::debug!("clipboard updated");
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records writes, or fails every write when `deny` is set.
    #[derive(Default)]
    pub struct RecordingClipboard {
        pub contents: Vec<String>,
        pub deny: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.deny {
                return Err(Error::Clipboard("permission denied".into()));
            }
            self.contents.push(text.to_owned());
            Ok(())
        }
    }
}
