//! Color values used by formatting settings and the renderer.
//!
//! The property pane persists fills either as a bare hex string or as a fill
//! object `{"solid": {"color": "#RRGGBB"}}`; both deserialize into [`Rgb`].
//! Colors always serialize back as `#RRGGBB`.

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FillRepr", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Color string that is not `#RGB` or `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a #RGB or #RRGGBB color, got {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16);
        match hex.len() {
            6 => Ok(Rgb::new(
                channel(0, 2).map_err(|_| err())?,
                channel(2, 2).map_err(|_| err())?,
                channel(4, 2).map_err(|_| err())?,
            )),
            3 => {
                let r = channel(0, 1).map_err(|_| err())?;
                let g = channel(1, 1).map_err(|_| err())?;
                let b = channel(2, 1).map_err(|_| err())?;
                Ok(Rgb::new(r * 17, g * 17, b * 17))
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.r, c.g, c.b)
    }
}

// ------------------------ Wire shapes ------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum FillRepr {
    Hex(String),
    Fill { solid: SolidFill },
}

#[derive(Deserialize)]
struct SolidFill {
    color: String,
}

impl TryFrom<FillRepr> for Rgb {
    type Error = ParseColorError;

    fn try_from(repr: FillRepr) -> Result<Self, Self::Error> {
        match repr {
            FillRepr::Hex(s) => s.parse(),
            FillRepr::Fill { solid } => solid.color.parse(),
        }
    }
}
