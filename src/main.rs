use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod clipboard;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("PASSGEN_LOG").unwrap_or_else(|_| "passgen=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    init_logging();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
