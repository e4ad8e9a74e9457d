//! Deterministic bundle colors for progress output.
//!
//! A name is hashed into three 8-bit channels. When the result is too close
//! to the background in YIQ luma, the name is salted and hashed again.

use std::fmt::Write as _;

use crate::error::{Error, Result};

/// Background the progress bars are drawn on.
pub const DEFAULT_BACKGROUND: &str = "#000000";

/// Minimum luma distance between a color and the background.
pub const CONTRAST_THRESHOLD: f64 = 128.0;

const SALT: &str = "-10102010";
const MAX_ROUNDS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rgb` or `#rrggbb` (the `#` is optional).
    pub fn parse(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(Error::InvalidColor(hex.to_string())),
        };

        let value =
            u32::from_str_radix(&expanded, 16).map_err(|_| Error::InvalidColor(hex.to_string()))?;
        Ok(Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    /// Perceived brightness on a 0-255 scale.
    pub fn luma(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0) / 1000.0
    }
}

/// Hash `input` into a `#rrggbb` string.
///
/// The hash runs over UTF-16 code units with 32-bit wrapping arithmetic, so a
/// name maps to the same color on every platform.
pub fn hash_color(input: &str) -> String {
    let hash = input.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(9).wrapping_sub(hash))
    });

    let mut color = String::with_capacity(7);
    color.push('#');
    for i in 0..3 {
        let channel = (hash >> (i * 8)) & 0xff;
        let _ = write!(color, "{channel:02x}");
    }
    color
}

/// Assigns each bundle name a stable color legible on a fixed background.
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    background: Rgb,
}

impl Default for Colorizer {
    fn default() -> Self {
        Self {
            background: Rgb { r: 0, g: 0, b: 0 },
        }
    }
}

impl Colorizer {
    pub fn new(background: &str) -> Result<Self> {
        Ok(Self {
            background: Rgb::parse(background)?,
        })
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Luma distance between `color` and the background.
    pub fn contrast(&self, color: Rgb) -> f64 {
        (self.background.luma() - color.luma()).abs()
    }

    /// Color for `name`.
    ///
    /// Retries with the salt appended to the previous attempt until the
    /// contrast threshold passes. After the last round the candidate with the
    /// highest contrast is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use wordpack_compose::color::Colorizer;
    ///
    /// let colors = Colorizer::default();
    /// assert_eq!(colors.assign("basic"), colors.assign("basic"));
    /// ```
    pub fn assign(&self, name: &str) -> String {
        let mut candidate = name.to_string();
        let mut best: Option<(f64, String)> = None;

        for round in 0..MAX_ROUNDS {
            let color = hash_color(&candidate);
            let contrast = Rgb::parse(&color).map_or(0.0, |rgb| self.contrast(rgb));

            if contrast >= CONTRAST_THRESHOLD {
                if round > 0 {
                    tracing::trace!(name, round, %color, "color passed after salting");
                }
                return color;
            }

            if best.as_ref().is_none_or(|(score, _)| contrast > *score) {
                best = Some((contrast, color));
            }
            candidate.push_str(SALT);
        }

        tracing::debug!(name, "no color reached the contrast threshold");
        best.map(|(_, color)| color)
            .unwrap_or_else(|| hash_color(name))
    }
}
