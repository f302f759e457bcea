//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars,
//! colored output, and formatted messages to the user.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crossterm::style::{Color, ContentStyle, Stylize};
use indicatif::{ProgressBar, ProgressStyle};

use crate::core::mode::Mode;

static QUIET: AtomicBool = AtomicBool::new(false);
static JSON: AtomicBool = AtomicBool::new(false);
static COLOR: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicU8 = AtomicU8::new(0);

/// Process-wide output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub quiet: bool,
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
}

impl OutputConfig {
    /// Output settings with color enabled
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
            color: true,
        }
    }

    /// Override color
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Make these settings visible to every output helper
    pub fn apply_global(&self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
        JSON.store(self.json, Ordering::Relaxed);
        COLOR.store(self.color && !self.json, Ordering::Relaxed);
        VERBOSE.store(self.verbose, Ordering::Relaxed);
    }
}

/// Quiet mode active
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// JSON mode active
pub fn is_json() -> bool {
    JSON.load(Ordering::Relaxed)
}

/// Colors enabled
pub fn use_color() -> bool {
    COLOR.load(Ordering::Relaxed)
}

/// Verbosity level (`-v` count)
pub fn verbosity() -> u8 {
    VERBOSE.load(Ordering::Relaxed)
}

/// Decide whether to color output
///
/// `--no-color` and a `false` setting always win. Otherwise `NO_COLOR`
/// disables color unless it is set to `0` or `false`.
pub fn resolve_color(no_color_flag: bool, setting: Option<bool>, no_color_env: Option<&str>) -> bool {
    if no_color_flag || setting == Some(false) {
        return false;
    }
    match no_color_env {
        Some(v) => matches!(v.to_lowercase().as_str(), "false" | "0"),
        None => true,
    }
}

/// Render `text` with `style` when colors are enabled
pub fn paint<D: Display>(text: D, style: ContentStyle) -> String {
    if use_color() {
        style.apply(text).to_string()
    } else {
        text.to_string()
    }
}

/// Console style of a mode
pub fn mode_style(mode: Mode) -> ContentStyle {
    let style = ContentStyle::new().bold();
    match mode {
        Mode::TD => style.with(Color::Cyan),
        Mode::DM => style.with(Color::Red),
        Mode::Chaser => style.with(Color::Green),
        Mode::BR => style.with(Color::Magenta).dim(),
        Mode::Captain => style.with(Color::Magenta),
        Mode::Siege => style.with(Color::Yellow),
    }
}

/// Mode name in its color
pub fn styled_mode(mode: Mode) -> String {
    paint(mode, mode_style(mode))
}

/// Menu key in bold white
pub fn choice_key<D: Display>(key: D) -> String {
    paint(key, ContentStyle::new().with(Color::White).bold())
}

/// Share as an italic percentage, e.g. `12.34%`
pub fn percent(share: f64) -> String {
    paint(format!("{:.2}%", share * 100.0), ContentStyle::new().italic())
}

/// Print a success line unless quiet
pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {message}", paint(status::SUCCESS, ContentStyle::new().green()));
    }
}

/// Print an info line unless quiet
pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {message}", paint(status::INFO, ContentStyle::new().blue()));
    }
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", paint(status::WARNING, ContentStyle::new().yellow()));
}

/// Print an indented detail line when verbose
pub fn print_detail(message: &str) {
    if verbosity() > 0 && !is_quiet() {
        println!("  {message}");
    }
}

/// Print an error and its cause chain to stderr
pub fn display_error(error: &anyhow::Error) {
    if is_json() {
        let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
        let json = serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "causes": causes,
        });
        eprintln!("{json}");
        return;
    }

    eprintln!("{} {error}", paint(status::ERROR, ContentStyle::new().red()));
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    if is_quiet() || is_json() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Create a progress bar for simulation rounds
pub fn create_rounds_bar(total: u64) -> ProgressBar {
    if is_quiet() || is_json() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rounds ({eta})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_color_defaults_on() {
        assert!(resolve_color(false, None, None));
        assert!(resolve_color(false, Some(true), None));
    }

    #[test]
    fn test_resolve_color_flag_and_setting_win() {
        assert!(!resolve_color(true, Some(true), None));
        assert!(!resolve_color(false, Some(false), Some("0")));
    }

    #[test]
    fn test_resolve_color_no_color_env() {
        assert!(!resolve_color(false, None, Some("1")));
        assert!(!resolve_color(false, None, Some("")));
        assert!(resolve_color(false, None, Some("0")));
        assert!(resolve_color(false, None, Some("FALSE")));
    }

    #[test]
    fn test_percent_format_without_color() {
        // COLOR stays off unless apply_global turned it on
        assert_eq!(percent(0.123_45), "12.35%");
    }

    #[test]
    fn test_output_config_new_enables_color() {
        let config = OutputConfig::new(false, false, 0);
        assert!(config.color);
        assert!(!config.with_color(false).color);
    }
}
