//! Closed ANSI palette + per-category colour assignment.

use std::{fmt, str::FromStr};

use crate::core::error::ConfigError;

const RESET: &str = "\x1b[0m";

// --- Color ---
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Magenta,
    Yellow,
    Black,
    Cyan,
    White,
    /// Plain terminal colour; paints nothing.
    Reset,
}

impl Color {
    /// Every accepted colour, in the order `--list-colors` prints them.
    pub const ALL: [Self; 9] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Magenta,
        Self::Yellow,
        Self::Black,
        Self::Cyan,
        Self::White,
        Self::Reset,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::Black => "black",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Reset => "reset",
        }
    }

    /// Foreground escape sequence.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::Reset => RESET,
        }
    }

    /// Look up a palette entry by name (case-insensitive).
    pub fn from_name(s: &str) -> Result<Self, ConfigError> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownColor {
                name: s.to_owned(),
                valid: palette_names(),
            })
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comma separated list of accepted names, for error messages.
#[must_use]
pub fn palette_names() -> String {
    Color::ALL.map(Color::name).join(", ")
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: Color, text: &str) -> String {
    format!("{}{text}{RESET}", c.code())
}

// --- ColorAssignment ---

/// One escape sequence per category, in header order.
///
/// With no colours requested every token, `reset` included, is empty so the
/// output carries no escape sequences at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorAssignment {
    tokens: Vec<&'static str>,
    reset: &'static str,
}

impl ColorAssignment {
    /// Cycle `requested` to cover `categories` entries, truncating any excess.
    #[must_use]
    pub fn new(categories: usize, requested: &[Color]) -> Self {
        if requested.is_empty() {
            return Self {
                tokens: vec![""; categories],
                reset: "",
            };
        }
        let tokens = requested
            .iter()
            .cycle()
            .take(categories)
            .map(|c| c.code())
            .collect();
        Self {
            tokens,
            reset: RESET,
        }
    }

    /// Colour token for the category at `index`.
    #[inline]
    #[must_use]
    pub fn token(&self, index: usize) -> &'static str {
        self.tokens.get(index).copied().unwrap_or("")
    }

    #[inline]
    #[must_use]
    pub fn reset(&self) -> &'static str {
        self.reset
    }

    #[inline]
    #[must_use]
    pub fn is_colored(&self) -> bool {
        !self.reset.is_empty()
    }
}
