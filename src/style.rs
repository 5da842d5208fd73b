//! ANSI escape sequences used in the prompt.
//!
//! Shells embed the output in `PS1`, so the emitted bytes must not change.

/// Foreground colors
pub struct Color;

impl Color {
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const MAGENTA: &'static str = "\x1b[35m";
    pub const CYAN: &'static str = "\x1b[36m";
    pub const WHITE: &'static str = "\x1b[37m";
    /// Foreground back to the terminal's white
    pub const RESET: &'static str = Self::WHITE;
}

/// Intensity attributes
pub struct Style;

impl Style {
    pub const BRIGHT: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
    pub const NORMAL: &'static str = "\x1b[0m";
}
