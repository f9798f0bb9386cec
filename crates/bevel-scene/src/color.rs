//! Color values as written in scene files.
//!
//! Accepted forms:
//!
//! ```text
//! "red"              basic color keyword
//! "#f00", "#ff000080" hex notation
//! "255 0 0"          r g b, channels in 0..=255
//! "255 0 0 0.5"      r g b a, alpha in 0..=1
//! [255, 0, 0, 0.5]   the same as a JSON array
//! ```

use bevel_geometry::Rgba;

use crate::error::SceneError;

/// Parse a textual color.
///
/// # Errors
///
/// Returns [`SceneError::BadColor`] if `text` matches none of the forms.
pub fn parse_color(text: &str) -> Result<Rgba, SceneError> {
    let text = text.trim();
    let bad = || SceneError::BadColor(text.to_string());

    if text.starts_with('#') {
        return Rgba::from_hex(text).ok_or_else(bad);
    }
    if let Some(color) = Rgba::from_named(text) {
        return Ok(color);
    }

    let channels = text
        .split_whitespace()
        .map(str::parse::<f32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| bad())?;
    color_from_channels(&channels).ok_or_else(bad)
}

/// Build a color from 3 or 4 numbers: `r g b` in `0..=255`, optional `a` in
/// `0..=1`. Returns `None` for any other count or an out-of-range value.
pub(crate) fn color_from_channels(channels: &[f32]) -> Option<Rgba> {
    let (rgb, alpha) = match *channels {
        [r, g, b] => ([r, g, b], 1.0),
        [r, g, b, a] => ([r, g, b], a),
        _ => return None,
    };
    if !(0.0..=1.0).contains(&alpha) {
        return None;
    }
    let [r, g, b] = [to_byte(rgb[0])?, to_byte(rgb[1])?, to_byte(rgb[2])?];
    Some(Rgba::new(r, g, b, to_byte(alpha * 255.0)?))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(value: f32) -> Option<u8> {
    // Range checked, so the cast cannot wrap. NaN fails the check.
    (0.0..=255.0).contains(&value).then(|| value.round() as u8)
}
