//! The fixed color palette accepted by [`ConCol`] instances.
//!
//! Colors are plain names. How each name becomes a terminal escape sequence
//! is left to the [`colored`] crate, which also decides whether to emit escape
//! sequences at all (see `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`).
//!
//! # Examples
//!
//! ```
//! use concol::Color;
//!
//! let cyan: Color = "cyan".parse().unwrap();
//! assert_eq!(cyan, Color::Cyan);
//!
//! // Node-style and snake_case names for the bright variants both work.
//! assert_eq!("yellowBright".parse::<Color>().unwrap(), Color::BrightYellow);
//! assert_eq!("bright_red".parse::<Color>().unwrap(), Color::BrightRed);
//!
//! assert!("mauve".parse::<Color>().is_err());
//! ```
//!
//! [`ConCol`]: crate::ConCol
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A named color from the palette.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Also known as grey, or bright black.
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Every color in the palette.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Gray,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Returns the canonical name of the color.
    pub const fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Gray => "gray",
            Color::BrightRed => "redBright",
            Color::BrightGreen => "greenBright",
            Color::BrightYellow => "yellowBright",
            Color::BrightBlue => "blueBright",
            Color::BrightMagenta => "magentaBright",
            Color::BrightCyan => "cyanBright",
            Color::BrightWhite => "whiteBright",
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => colored::Color::Black,
            Color::Red => colored::Color::Red,
            Color::Green => colored::Color::Green,
            Color::Yellow => colored::Color::Yellow,
            Color::Blue => colored::Color::Blue,
            Color::Magenta => colored::Color::Magenta,
            Color::Cyan => colored::Color::Cyan,
            Color::White => colored::Color::White,
            Color::Gray => colored::Color::BrightBlack,
            Color::BrightRed => colored::Color::BrightRed,
            Color::BrightGreen => colored::Color::BrightGreen,
            Color::BrightYellow => colored::Color::BrightYellow,
            Color::BrightBlue => colored::Color::BrightBlue,
            Color::BrightMagenta => colored::Color::BrightMagenta,
            Color::BrightCyan => colored::Color::BrightCyan,
            Color::BrightWhite => colored::Color::BrightWhite,
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let color = match key.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" | "blackbright" | "brightblack" => Color::Gray,
            "redbright" | "brightred" => Color::BrightRed,
            "greenbright" | "brightgreen" => Color::BrightGreen,
            "yellowbright" | "brightyellow" => Color::BrightYellow,
            "bluebright" | "brightblue" => Color::BrightBlue,
            "magentabright" | "brightmagenta" => Color::BrightMagenta,
            "cyanbright" | "brightcyan" => Color::BrightCyan,
            "whitebright" | "brightwhite" => Color::BrightWhite,
            _ => return Err(ParseColorError(s.to_string())),
        };

        Ok(color)
    }
}

/// Error returned when parsing a [`Color`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl ParseColorError {
    /// Returns the name that failed to parse.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Error for ParseColorError {}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown color name `{}`", self.0)
    }
}
