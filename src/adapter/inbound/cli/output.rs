//! CLI output formatting.
//!
//! Every report line goes through these helpers so that JSON mode (one
//! object per line, for scripting) and quiet mode behave the same across
//! commands. Styling uses `owo-colors` and honours the global color override
//! set from `--color`.

use std::fmt::Display;
use std::sync::RwLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use owo_colors::{OwoColorize, Stream};
use serde_json::{json, Value};

/// Width of the label column in [`field`] lines.
pub const LABEL_WIDTH: usize = 26;

/// Output flags shared by every report printer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// One JSON object per line instead of aligned text.
    pub json: bool,
    /// Drop the banner, section titles and notes.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Decorations are dropped in quiet mode but kept in JSON mode.
    const fn hides_decorations(self) -> bool {
        !self.json && self.quiet
    }
}

static CURRENT: Lazy<RwLock<OutputConfig>> = Lazy::new(|| RwLock::new(OutputConfig::default()));

fn current() -> OutputConfig {
    *CURRENT.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write `{"type": kind, "payload": payload}` as one stdout line.
fn emit(kind: &str, payload: Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Install the flags parsed from the command line.
pub fn configure(config: OutputConfig) {
    *CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

/// Print a bold section title preceded by a blank line.
pub fn section(title: &str) {
    let config = current();
    if config.json {
        emit("section", json!({ "title": title }));
        return;
    }
    if config.hides_decorations() {
        return;
    }

    println!("\n{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Print `label:` padded to [`LABEL_WIDTH`], then the value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    if is_json() {
        emit("field", json!({ "label": label, "value": value }));
        return;
    }

    let label = format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH);
    println!(
        "{} {value}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

/// Print a plain informational line that is part of the report itself.
pub fn message(text: &str) {
    if is_json() {
        emit("message", json!({ "message": text }));
        return;
    }

    println!("{text}");
}

/// Report a command-line token that matches no report.
pub fn unknown_option(token: &str) {
    if is_json() {
        emit("unknown_option", json!({ "option": token }));
        return;
    }

    println!("Unknown option: {token}");
}

/// Print a dimmed hint.
pub fn note(text: &str) {
    let config = current();
    if config.json {
        emit("note", json!({ "message": text }));
        return;
    }
    if config.hides_decorations() {
        return;
    }

    println!("{}", text.if_supports_color(Stream::Stdout, |t| t.dimmed()));
}

/// Print an error on stderr; as a JSON `error` object in JSON mode.
pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": text } }));
    } else {
        let tag = "error:";
        eprintln!("{} {text}", tag.if_supports_color(Stream::Stderr, |t| t.red()));
    }
}

/// Print pre-rendered lines (banner, chart, table) as they are.
///
/// In JSON mode the whole block becomes one object with a `lines` array.
pub fn lines(kind: &str, content: &[String]) {
    if is_json() {
        emit(kind, json!({ "lines": content }));
    } else {
        content.iter().for_each(|line| println!("{line}"));
    }
}

/// Emit a report-specific JSON payload.
pub fn json_output(kind: &str, payload: Value) {
    emit(kind, payload);
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a spinner on stderr. Hidden in JSON and quiet mode.
pub fn spinner(text: &str) -> ProgressBar {
    let config = current();
    let pb = if config.json || config.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(SPINNER_FRAMES)
            .template("{spinner:.cyan} {msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };
    pb.set_message(text.to_string());
    pb
}

pub fn spinner_done(pb: &ProgressBar) {
    pb.finish_and_clear();
}

/// Format a two-decimal statistic.
#[must_use]
pub fn number(value: f64) -> String {
    format!("{value:.2}")
}
