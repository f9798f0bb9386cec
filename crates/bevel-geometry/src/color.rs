//! Border colors
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgba {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

/// Result of [`Rgba::dark`] for opaque white.
pub const DARKENED_WHITE: Rgba = Rgba::new(171, 171, 171, 255);

/// Largest `f32` strictly below 256.0.
///
/// Scaling a unit channel by this and truncating maps 1.0 to 255 and never
/// overflows to 256.
const BYTE_SCALE: f32 = f32::from_bits(0x437F_FFFF);

impl Default for Rgba {
    /// Opaque black, the initial value of an unset border color.
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    /// Black (#000000)
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// White (#ffffff)
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a color from its four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// True if the alpha channel is zero.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Channels as `[r, g, b, a]` in the unit interval.
    #[must_use]
    pub fn to_unit(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }

    /// A darker shade of this color, used to shade border sides when no
    /// explicit color distinguishes them.
    ///
    /// ```text
    /// v          = max(r, g, b)            (channels in [0, 1])
    /// multiplier = max(0, (v - 0.33) / v)  (0 when v = 0)
    /// channel'   = trunc(multiplier * channel * BYTE_SCALE)
    /// ```
    ///
    /// Alpha is kept as is. Opaque white short-circuits to
    /// [`DARKENED_WHITE`], which is what the formula yields for it.
    #[must_use]
    pub fn dark(self) -> Self {
        if self == Self::WHITE {
            return DARKENED_WHITE;
        }
        self.darken_channels()
    }

    fn darken_channels(self) -> Self {
        let [r, g, b, _] = self.to_unit();

        let v = r.max(g).max(b);
        let multiplier = if v > 0.0 {
            ((v - 0.33) / v).max(0.0)
        } else {
            0.0
        };

        // Operands are in [0, 1) * BYTE_SCALE, so truncation stays in 0..=255.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let to_byte = |channel: f32| (multiplier * channel * BYTE_SCALE) as u8;

        Self::new(to_byte(r), to_byte(g), to_byte(b), self.a)
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let short = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            // [§ 4.2.1]
            // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
            // by replicating digits, not by adding zeros."
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::new(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self::new(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// The basic sixteen HTML colors plus `transparent` and the common
    /// aliases.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "transparent" => Self::TRANSPARENT,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "aqua" | "cyan" => Self::rgb(0, 255, 255),
            "fuchsia" | "magenta" => Self::rgb(255, 0, 255),
            "lime" => Self::rgb(0, 255, 0),
            "maroon" => Self::rgb(128, 0, 0),
            "navy" => Self::rgb(0, 0, 128),
            "olive" => Self::rgb(128, 128, 0),
            "purple" => Self::rgb(128, 0, 128),
            "silver" => Self::rgb(192, 192, 192),
            "teal" => Self::rgb(0, 128, 128),
            _ => return None,
        };
        Some(color)
    }

    /// Convert to hex string notation (#RRGGBB or #RRGGBBAA if alpha != 255)
    ///
    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    #[must_use]
    pub fn to_hex_string(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_fast_path_matches_formula() {
        assert_eq!(Rgba::WHITE.darken_channels(), DARKENED_WHITE);
        assert_eq!(Rgba::WHITE.dark(), DARKENED_WHITE);
    }

    #[test]
    fn test_byte_scale_is_just_below_256() {
        assert!(BYTE_SCALE < 256.0);
        assert!(BYTE_SCALE > 255.999);
    }

    #[test]
    fn test_translucent_white_takes_general_path() {
        let dark = Rgba::new(255, 255, 255, 128).dark();
        assert_eq!(dark, Rgba::new(171, 171, 171, 128));
    }
}
