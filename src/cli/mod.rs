//! Flag-driven, non-interactive mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode and exit with its status.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run with --help for usage.");
            std::process::exit(1);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Exit::Done) => {}
        Err(Exit::Fail(code)) => std::process::exit(code),
    }
}
