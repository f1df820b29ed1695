use crate::pass::Category;
use crate::pass::strength::UNRATED_COLOR;
use crate::settings::{LENGTH_MAX, LENGTH_MIN};
use crate::terminal::{
    DIM, Frame, GREEN, RED, RESET, UNDERLINE, checkbox, fill_percent, slider_bar,
};

use super::state::{CopyOutcome, State};

const SLIDER_WIDTH: usize = 52;

/// Build the main panel for the current state.
pub fn main_panel(state: &State) -> Frame {
    let settings = &state.settings;
    let mut frame = Frame::new();

    frame.top("Password Generator");
    frame.line("");

    // Password display with copy status
    let shown = if state.password.is_empty() {
        format!("{DIM}PASSWORD{RESET}")
    } else {
        state.password.to_string()
    };
    let status = match state.status.map(|s| s.outcome) {
        Some(CopyOutcome::Copied) => format!("{GREEN}{}{RESET}", CopyOutcome::Copied.label()),
        Some(CopyOutcome::Failed) => format!("{RED}{}{RESET}", CopyOutcome::Failed.label()),
        None => String::new(),
    };
    frame.line(&format!("  {shown}    {status}"));
    frame.line("");
    frame.rule();

    // Length slider
    let percent = fill_percent(settings.length, LENGTH_MIN, LENGTH_MAX);
    frame.line(&format!("{UNDERLINE}Password Length{RESET}: {}", settings.length));
    frame.line(&format!("  {}", slider_bar(percent, SLIDER_WIDTH)));
    frame.line("");

    for (i, category) in Category::ALL.into_iter().enumerate() {
        let checked = settings.categories.contains(category);
        frame.line(&format!("  {}) {}", i + 1, checkbox(checked, category.label())));
    }
    frame.line("");

    // Strength indicator
    let (color, label) = match state.strength {
        Some(strength) => (
            strength.color(),
            format!("{} ({:.1} bits)", strength.label(), state.bits),
        ),
        None => (UNRATED_COLOR, String::new()),
    };
    frame.line(&format!("Strength: {color}●{RESET} {label}"));
    frame.line("");
    frame.rule();
    frame.line_center("←/→ length | 1-4 toggle | Enter generate | c copy | ? help | q quit");
    frame.bottom();

    match &state.notice {
        Some(notice) => frame.raw(&format!("{RED}{notice}{RESET}")),
        None => frame.raw(""),
    };

    if state.show_help {
        help_panel(&mut frame);
    }
    frame
}

fn help_panel(frame: &mut Frame) {
    frame.top("Keys");
    frame.opt("  ← / h, → / l", "Shorten or lengthen the password by one");
    frame.opt("  Home, End", "Jump to the shortest or longest length");
    frame.opt("  1 2 3 4", "Toggle uppercase, lowercase, numbers, symbols");
    frame.opt("  Enter, g", "Generate a password");
    frame.opt("  c", "Copy the password to the clipboard");
    frame.opt("  ?", "Show or hide this panel");
    frame.opt("  Esc, q, Ctrl+C", "Quit");
    frame.bottom();
}

/// Help for CLI usage.
pub fn print_help() {
    help_frame().print();
}

fn help_frame() -> Frame {
    let mut frame = Frame::new();
    frame.top("Passgen");
    frame.line_center("Password generator");
    frame.line("");
    frame.line("MODES:");
    frame.line("  1) Interactive: Run without arguments. Opens a panel with a");
    frame.line("     length slider, category toggles and a strength indicator.");
    frame.line("  2) Client: Pass flags directly (e.g., -l 16 -U -d) to generate");
    frame.line("     passwords without the panel.");
    frame.line("");
    frame.line("USAGE:");
    frame.line("  passgen [OPTIONS]");
    frame.line("");
    frame.line("OPTIONS:");
    frame.line(" Password:");
    frame.opt("  -l, --length <N>", "Characters per password (default: 10). Raised to the number of enabled categories.");
    frame.opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    frame.opt("  -U, --upper", Category::Uppercase.label());
    frame.opt("  -L, --lower", Category::Lowercase.label());
    frame.opt("  -d, --digits", Category::Digit.label());
    frame.opt("  -s, --symbols", Category::Symbol.label());
    frame.line("  With no category flags all four are used.");
    frame.line("");
    frame.line(" Output:");
    frame.opt("  -b, --board", "Copy to clipboard instead of printing");
    frame.opt("  -S, --strength", "Print the strength rating to stderr");
    frame.opt("  -q, --quiet", "Suppress all output except passwords");
    frame.line("");
    frame.line(" Info:");
    frame.opt("  -h, --help", "Display this help message");
    frame.opt("  -V, --version", "Display version");
    frame.line("");
    frame.line("ENVIRONMENT:");
    frame.opt("  PASSGEN_LOG", "Log filter, e.g. passgen=debug (default: passgen=warn)");
    frame.line("");
    frame.line("EXAMPLES:");
    frame.line("  passgen                  Interactive panel");
    frame.line("  passgen -l 16            One password, 16 characters, all categories");
    frame.line("  passgen -l 20 -n 3       Three passwords, 20 characters each");
    frame.line("  passgen -l 8 -U -L -d    Letters and numbers only");
    frame.line("  passgen -b -S            Copy to clipboard and show strength");
    frame.line("");
    frame.bottom();
    frame
}
