//! Text forms of styles and colors.
//!
//! Accepted color forms:
//! - named: `red`, `bright-red` (also `brred`), `default`
//! - palette: `196`, `palette:196`, `palette:deep-sky-blue3`, or a bare
//!   xterm name that is not also a named color (`deep-sky-blue3`)
//! - RGB: `#ff8000` or `255,128,0`
//!
//! Matching ignores case, `-`, `_` and spaces. A bare name that is both a
//! named color and a palette name (`red`) is the named color.

use std::str::FromStr;

use crate::color::{Background, ColorSpec, Foreground, Rgb};
use crate::error::ParseError;
use crate::palette::{normalize, Palette};
use crate::style::Style;

const PALETTE_PREFIX: &str = "palette:";

impl FromStr for Style {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Style::ALL
            .into_iter()
            .find(|style| style.name() == wanted || style.code().to_string() == wanted)
            .or(match wanted.as_str() {
                "none" | "normal" | "regular" => Some(Style::Standard),
                "dimmed" | "faint" => Some(Style::Dim),
                _ => None,
            })
            .ok_or_else(|| ParseError::UnknownStyle(s.to_string()))
    }
}

impl FromStr for Foreground {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        named(s).ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}

impl FromStr for Background {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Foreground>().map(Foreground::on)
    }
}

impl FromStr for Palette {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim();
        let body = body.strip_prefix(PALETTE_PREFIX).unwrap_or(body);

        if !body.is_empty() && body.chars().all(|c| c.is_ascii_digit()) {
            return body
                .parse::<u8>()
                .map(Palette)
                .map_err(|_| ParseError::PaletteOutOfRange(s.to_string()));
        }

        Palette::from_name(body).ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedRgb(s.to_string());
        let body = s.trim();

        if let Some(hex) = body.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(malformed());
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| malformed())
            };
            return Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        let channels = body
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>, _>>()?;
        match channels.as_slice() {
            [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
            _ => Err(malformed()),
        }
    }
}

impl FromStr for ColorSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim();

        if body.starts_with('#') || body.contains(',') {
            return body.parse().map(ColorSpec::Rgb);
        }
        if body.starts_with(PALETTE_PREFIX) || body.chars().all(|c| c.is_ascii_digit()) {
            return body.parse().map(ColorSpec::Palette);
        }
        if let Some(fg) = named(body) {
            return Ok(ColorSpec::Named(fg));
        }
        Palette::from_name(body)
            .map(ColorSpec::Palette)
            .ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}

/// Look up a 4-bit color by name.
fn named(s: &str) -> Option<Foreground> {
    let wanted = normalize(s);
    let base = ["bright", "br"]
        .iter()
        .find_map(|prefix| wanted.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty());

    match base {
        Some(base) => Foreground::ALL[8..16]
            .iter()
            .copied()
            .find(|fg| normalize(fg.name()) == format!("bright{base}")),
        None => Foreground::ALL
            .into_iter()
            .find(|fg| normalize(fg.name()) == wanted)
            .or(match wanted.as_str() {
                "reset" | "none" => Some(Foreground::Default),
                "gray" | "grey" => Some(Foreground::BrightBlack),
                _ => None,
            }),
    }
}
