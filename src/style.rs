//! Text style (the attribute slot of an SGR sequence).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A text attribute.
///
/// The discriminant is the SGR parameter written in front of every color
/// code, so `Style::Bold` turns `\x1b[{style};31m` into `\x1b[1;31m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Style {
    #[default]
    Standard = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    Blink = 5,
}

impl Style {
    /// Every style, in code order.
    pub const ALL: [Style; 6] = [
        Style::Standard,
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underline,
        Style::Blink,
    ];

    /// The SGR parameter for this style.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as accepted by the parser.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Style {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.name().to_string()
    }
}
