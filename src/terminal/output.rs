//! Terminal output utilities.
//!
//! Box drawing, slider bar, ANSI helpers.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const DIM: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Lines of a boxed panel, built up then written in one go.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// ┌─ Title ───────────────────────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        let line = if title.is_empty() {
            format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            format!("┌{}{}┐", title_part, "─".repeat(remaining))
        };
        self.lines.push(line);
        self
    }

    /// │ content                            │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let padding = INNER_WIDTH.saturating_sub(console_width(content));
        self.lines.push(format!("│ {}{} │", content, " ".repeat(padding)));
        self
    }

    /// │          content          │
    pub fn line_center(&mut self, content: &str) -> &mut Self {
        let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
        self
    }

    /// ├──────────────────────────────────┤
    pub fn rule(&mut self) -> &mut Self {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// └──────────────────────────────────┘
    pub fn bottom(&mut self) -> &mut Self {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Unboxed line (messages under the panel).
    pub fn raw(&mut self, content: &str) -> &mut Self {
        self.lines.push(content.to_string());
        self
    }

    /// Flag and description, description word-wrapped in its own column.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let flag_col = 27;
        let desc_col = INNER_WIDTH - flag_col;

        let flag_width = flag.chars().count();
        let flag_padded = if flag_width < flag_col {
            format!("{}{}", flag, " ".repeat(flag_col - flag_width))
        } else {
            flag.chars().take(flag_col).collect()
        };

        let wrapped = wrap_words(desc, desc_col);
        let indent = " ".repeat(flag_col);
        if wrapped.is_empty() {
            self.lines
                .push(format!("│ {}{} │", flag_padded, " ".repeat(desc_col)));
        }
        for (i, line) in wrapped.iter().enumerate() {
            let lead = if i == 0 { &flag_padded } else { &indent };
            let padding = desc_col.saturating_sub(line.len());
            self.lines
                .push(format!("│ {}{}{} │", lead, line, " ".repeat(padding)));
        }
        self
    }

    /// Join lines; raw mode needs an explicit carriage return.
    pub fn render(&self, raw_mode: bool) -> String {
        let eol = if raw_mode { "\r\n" } else { "\n" };
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str(eol);
        }
        out
    }

    pub fn print(&self) {
        print!("{}", self.render(false));
        flush();
    }
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Display width ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Slider
// ============================================================================

/// Share of the track that is filled: `(value - min) * 100 / (max - min)`.
pub fn fill_percent(value: usize, min: usize, max: usize) -> f32 {
    if max <= min {
        return 100.0;
    }
    let value = value.clamp(min, max);
    (value - min) as f32 * 100.0 / (max - min) as f32
}

/// Slider track with a filled part and a thumb: ▕██████●░░░░░░░▏
pub fn slider_bar(percent: f32, width: usize) -> String {
    let track = width.saturating_sub(2).max(1);
    let thumb = (((percent.clamp(0.0, 100.0) / 100.0) * (track - 1) as f32).round()) as usize;

    let mut bar = String::with_capacity(width * 3);
    bar.push('▕');
    for i in 0..track {
        bar.push(match i.cmp(&thumb) {
            std::cmp::Ordering::Less => '█',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '░',
        });
    }
    bar.push('▏');
    bar
}

/// Checkbox item: [x] label
pub fn checkbox(checked: bool, label: &str) -> String {
    if checked {
        format!("[{GREEN}x{RESET}] {label}")
    } else {
        format!("[ ] {label}")
    }
}
