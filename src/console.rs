//! Console mirroring of log lines.

use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, LogLevel};

/// Fixed palette for host output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl ConsoleColor {
    pub const ALL: [ConsoleColor; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkCyan,
        Self::DarkRed,
        Self::DarkMagenta,
        Self::DarkYellow,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Yellow,
        Self::White,
    ];

    /// Default colour for a level, if it has one.
    pub fn for_level(level: LogLevel) -> Option<Self> {
        match level {
            LogLevel::Host | LogLevel::Information => None,
            LogLevel::Debug | LogLevel::Verbose => Some(Self::DarkGray),
            LogLevel::Warning => Some(Self::Yellow),
            LogLevel::Error => Some(Self::Red),
        }
    }

    #[cfg(feature = "ansi")]
    fn to_colored(self) -> colored::Color {
        use colored::Color;
        match self {
            Self::Black => Color::Black,
            Self::DarkBlue => Color::Blue,
            Self::DarkGreen => Color::Green,
            Self::DarkCyan => Color::Cyan,
            Self::DarkRed => Color::Red,
            Self::DarkMagenta => Color::Magenta,
            Self::DarkYellow => Color::Yellow,
            Self::Gray => Color::White,
            Self::DarkGray => Color::BrightBlack,
            Self::Blue => Color::BrightBlue,
            Self::Green => Color::BrightGreen,
            Self::Cyan => Color::BrightCyan,
            Self::Red => Color::BrightRed,
            Self::Magenta => Color::BrightMagenta,
            Self::Yellow => Color::BrightYellow,
            Self::White => Color::BrightWhite,
        }
    }
}

impl FromStr for ConsoleColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|color| format!("{:?}", color).eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Config(format!("unknown console color: {}", s)))
    }
}

/// Render `line` in `color` (plain text without the `ansi` feature).
pub fn paint(line: &str, color: Option<ConsoleColor>) -> String {
    #[cfg(feature = "ansi")]
    if let Some(color) = color {
        use colored::Colorize;
        return line.color(color.to_colored()).to_string();
    }
    #[cfg(not(feature = "ansi"))]
    let _ = color;
    line.to_string()
}

/// Write one painted line to `out`.
pub fn mirror(out: &mut dyn Write, line: &str, color: Option<ConsoleColor>) -> io::Result<()> {
    writeln!(out, "{}", paint(line, color))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!("darkyellow".parse::<ConsoleColor>().unwrap(), ConsoleColor::DarkYellow);
        assert_eq!("Cyan".parse::<ConsoleColor>().unwrap(), ConsoleColor::Cyan);
        assert!(matches!("Chartreuse".parse::<ConsoleColor>(), Err(Error::Config(_))));
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(ConsoleColor::for_level(LogLevel::Error), Some(ConsoleColor::Red));
        assert_eq!(ConsoleColor::for_level(LogLevel::Warning), Some(ConsoleColor::Yellow));
        assert_eq!(ConsoleColor::for_level(LogLevel::Information), None);
    }

    #[test]
    fn test_mirror_writes_line() {
        let mut out = Vec::new();
        mirror(&mut out, "[t] [HOST] hi", None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[t] [HOST] hi\n");
    }

    #[cfg(not(feature = "ansi"))]
    #[test]
    fn test_paint_is_plain_without_ansi() {
        assert_eq!(paint("text", Some(ConsoleColor::Red)), "text");
    }
}
