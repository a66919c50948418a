//! Color model.
//!
//! Three representations exist:
//! - `Foreground` / `Background`: the 16 standard ANSI colors plus default
//! - `Palette`: an index into the xterm 256-color palette
//! - `Rgb`: a 24-bit truecolor triple
//!
//! A `ColorPair` holds a foreground and background of the same
//! representation. It can only be built from two values of one kind, so a
//! named foreground over an RGB background does not compile.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::palette::Palette;

/// A 4-bit foreground color. The discriminant is the SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Foreground {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
    #[default]
    Default = 39,
    BrightBlack = 90,
    BrightRed = 91,
    BrightGreen = 92,
    BrightYellow = 93,
    BrightBlue = 94,
    BrightMagenta = 95,
    BrightCyan = 96,
    BrightWhite = 97,
}

/// A 4-bit background color. The discriminant is the SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Background {
    Black = 40,
    Red = 41,
    Green = 42,
    Yellow = 43,
    Blue = 44,
    Magenta = 45,
    Cyan = 46,
    White = 47,
    #[default]
    Default = 49,
    BrightBlack = 100,
    BrightRed = 101,
    BrightGreen = 102,
    BrightYellow = 103,
    BrightBlue = 104,
    BrightMagenta = 105,
    BrightCyan = 106,
    BrightWhite = 107,
}

impl Foreground {
    /// All foreground colors: the 8 standard, the 8 bright, then default.
    pub const ALL: [Foreground; 17] = [
        Foreground::Black,
        Foreground::Red,
        Foreground::Green,
        Foreground::Yellow,
        Foreground::Blue,
        Foreground::Magenta,
        Foreground::Cyan,
        Foreground::White,
        Foreground::BrightBlack,
        Foreground::BrightRed,
        Foreground::BrightGreen,
        Foreground::BrightYellow,
        Foreground::BrightBlue,
        Foreground::BrightMagenta,
        Foreground::BrightCyan,
        Foreground::BrightWhite,
        Foreground::Default,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The background color with the same hue.
    pub fn on(self) -> Background {
        match self {
            Self::Black => Background::Black,
            Self::Red => Background::Red,
            Self::Green => Background::Green,
            Self::Yellow => Background::Yellow,
            Self::Blue => Background::Blue,
            Self::Magenta => Background::Magenta,
            Self::Cyan => Background::Cyan,
            Self::White => Background::White,
            Self::Default => Background::Default,
            Self::BrightBlack => Background::BrightBlack,
            Self::BrightRed => Background::BrightRed,
            Self::BrightGreen => Background::BrightGreen,
            Self::BrightYellow => Background::BrightYellow,
            Self::BrightBlue => Background::BrightBlue,
            Self::BrightMagenta => Background::BrightMagenta,
            Self::BrightCyan => Background::BrightCyan,
            Self::BrightWhite => Background::BrightWhite,
        }
    }

    /// Kebab-case name, as accepted by the parser.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Default => "default",
            Self::BrightBlack => "bright-black",
            Self::BrightRed => "bright-red",
            Self::BrightGreen => "bright-green",
            Self::BrightYellow => "bright-yellow",
            Self::BrightBlue => "bright-blue",
            Self::BrightMagenta => "bright-magenta",
            Self::BrightCyan => "bright-cyan",
            Self::BrightWhite => "bright-white",
        }
    }
}

impl Background {
    /// All background colors: the 8 standard, the 8 bright, then default.
    pub const ALL: [Background; 17] = [
        Background::Black,
        Background::Red,
        Background::Green,
        Background::Yellow,
        Background::Blue,
        Background::Magenta,
        Background::Cyan,
        Background::White,
        Background::BrightBlack,
        Background::BrightRed,
        Background::BrightGreen,
        Background::BrightYellow,
        Background::BrightBlue,
        Background::BrightMagenta,
        Background::BrightCyan,
        Background::BrightWhite,
        Background::Default,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The foreground color with the same hue.
    pub fn fg(self) -> Foreground {
        Foreground::ALL
            .into_iter()
            .find(|fg| fg.on() == self)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        self.fg().name()
    }
}

impl fmt::Display for Foreground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 24-bit color. Channels are trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness (ITU-R BT.601 weights), 0-255.
    pub fn brightness(self) -> u8 {
        let weighted = u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114;
        // Max is 255 * 1000, so the quotient always fits
        u8::try_from(weighted / 1000).unwrap_or(u8::MAX)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A foreground/background pair of one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorPair {
    Named { fg: Foreground, bg: Background },
    Palette { fg: Palette, bg: Palette },
    Rgb { fg: Rgb, bg: Rgb },
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::Named {
            fg: Foreground::Default,
            bg: Background::Default,
        }
    }
}

impl From<(Foreground, Background)> for ColorPair {
    fn from((fg, bg): (Foreground, Background)) -> Self {
        Self::Named { fg, bg }
    }
}

impl From<(Palette, Palette)> for ColorPair {
    fn from((fg, bg): (Palette, Palette)) -> Self {
        Self::Palette { fg, bg }
    }
}

impl From<(Rgb, Rgb)> for ColorPair {
    fn from((fg, bg): (Rgb, Rgb)) -> Self {
        Self::Rgb { fg, bg }
    }
}

impl ColorPair {
    /// Combine two parsed colors, rejecting a mix of representations.
    pub fn from_specs(fg: ColorSpec, bg: ColorSpec) -> Result<Self, ParseError> {
        match (fg, bg) {
            (ColorSpec::Named(fg), ColorSpec::Named(bg)) => Ok(Self::Named { fg, bg: bg.on() }),
            (ColorSpec::Palette(fg), ColorSpec::Palette(bg)) => Ok(Self::Palette { fg, bg }),
            (ColorSpec::Rgb(fg), ColorSpec::Rgb(bg)) => Ok(Self::Rgb { fg, bg }),
            (fg, bg) => Err(ParseError::MixedKinds {
                fg: fg.to_string(),
                fg_kind: fg.kind(),
                bg: bg.to_string(),
                bg_kind: bg.kind(),
            }),
        }
    }
}

/// One color of any representation, as written in config files and on the
/// command line.
///
/// Named colors are stored as their foreground variant; `ColorPair::from_specs`
/// maps the background side with `Foreground::on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorSpec {
    Named(Foreground),
    Palette(Palette),
    Rgb(Rgb),
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::Named(Foreground::Default)
    }
}

impl ColorSpec {
    /// Short description of the representation, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Named(_) => "a named color",
            Self::Palette(_) => "a palette color",
            Self::Rgb(_) => "an RGB color",
        }
    }
}

impl TryFrom<String> for ColorSpec {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorSpec> for String {
    fn from(spec: ColorSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(fg) => fg.fmt(f),
            Self::Palette(p) => write!(f, "{}", p.index()),
            Self::Rgb(rgb) => rgb.fmt(f),
        }
    }
}
