//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn prompt_style(&self) -> ColoredString;
    fn banner_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255)
    }
    fn banner_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
