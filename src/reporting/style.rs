//! # Text Style Module / 文本样式模块
//!
//! A small colorizing helper: wraps a text string with the terminal escape
//! sequence for a color/style combination, with a reset appended. Built on
//! the `colored` crate, which also handles tty detection and `NO_COLOR`.
//!
//! 一个小型着色辅助模块：用颜色/样式组合的终端转义序列包装文本字符串。

use colored::{Color, Colorize};

/// The fixed set of report colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    White,
}

impl From<AnsiColor> for Color {
    fn from(color: AnsiColor) -> Self {
        match color {
            AnsiColor::Black => Color::Black,
            AnsiColor::Red => Color::Red,
            AnsiColor::Green => Color::Green,
            AnsiColor::Yellow => Color::Yellow,
            AnsiColor::Blue => Color::Blue,
            // ANSI "purple" (code 35) is the magenta slot
            AnsiColor::Purple => Color::Magenta,
            AnsiColor::White => Color::White,
        }
    }
}

/// The fixed set of text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Plain,
    Bold,
    Italic,
}

/// Wraps `text` in the escape sequence for the given color and style,
/// followed by a reset sequence.
pub fn colorize(text: &str, color: AnsiColor, style: TextStyle) -> String {
    let colored = text.color(Color::from(color));
    match style {
        TextStyle::Plain => colored,
        TextStyle::Bold => colored.bold(),
        TextStyle::Italic => colored.italic(),
    }
    .to_string()
}
