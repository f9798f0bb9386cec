//! Serde records mirroring the scene JSON.
//!
//! These are the raw document shapes. [`crate::loader`] validates them and
//! converts them into geometry types.

use serde::Deserialize;

use bevel_geometry::{CornerRadii, Rect, Rgba, Size};

use crate::color::{color_from_channels, parse_color};
use crate::error::SceneError;

/// A field that holds either a single value or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Clone> OneOrMany<T> {
    /// Expand to one value per side, top, right, bottom, left.
    ///
    /// Short lists are padded with their first element.
    pub(crate) fn broadcast(self, field: &'static str) -> Result<[T; 4], SceneError> {
        let mut values = match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        };
        let Some(first) = values.first().cloned() else {
            return Err(SceneError::ListArity { field, len: 0 });
        };
        if values.len() > 4 {
            return Err(SceneError::ListArity {
                field,
                len: values.len(),
            });
        }
        values.resize(4, first);
        <[T; 4]>::try_from(values).map_err(|values| SceneError::ListArity {
            field,
            len: values.len(),
        })
    }
}

/// `[x, y, w, h]` or `"x y w h"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum BoundsRecord {
    Array([f32; 4]),
    Text(String),
}

impl BoundsRecord {
    pub(crate) fn to_rect(&self) -> Result<Rect, SceneError> {
        let values = match self {
            Self::Array(values) => *values,
            Self::Text(text) => {
                let parsed = text
                    .split_whitespace()
                    .map(str::parse::<f32>)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| SceneError::BadBounds(text.clone()))?;
                <[f32; 4]>::try_from(parsed).map_err(|_| SceneError::BadBounds(text.clone()))?
            }
        };
        if values.iter().any(|value| !value.is_finite()) {
            return Err(SceneError::BadBounds(format!("{values:?}")));
        }
        let [x, y, width, height] = values;
        Ok(Rect::new(x, y, width, height))
    }
}

/// A color as text or as a channel array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ColorRecord {
    Text(String),
    Channels(Vec<f32>),
}

impl ColorRecord {
    pub(crate) fn to_rgba(&self) -> Result<Rgba, SceneError> {
        match self {
            Self::Text(text) => parse_color(text),
            Self::Channels(channels) => color_from_channels(channels)
                .ok_or_else(|| SceneError::BadColor(format!("{channels:?}"))),
        }
    }
}

/// A single corner: one number for a circle, or `[w, h]`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub(crate) enum CornerRecord {
    Circle(f32),
    Ellipse([f32; 2]),
}

impl CornerRecord {
    const fn to_size(self) -> Size {
        match self {
            Self::Circle(radius) => Size::new(radius, radius),
            Self::Ellipse([width, height]) => Size::new(width, height),
        }
    }
}

/// Named corners; missing corners are square.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CornersRecord {
    top_left: Option<CornerRecord>,
    top_right: Option<CornerRecord>,
    bottom_left: Option<CornerRecord>,
    bottom_right: Option<CornerRecord>,
}

/// `radius`: one number for all corners, or a [`CornersRecord`].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub(crate) enum RadiusRecord {
    Uniform(f32),
    Corners(CornersRecord),
}

impl RadiusRecord {
    pub(crate) fn to_radii(self) -> CornerRadii {
        match self {
            Self::Uniform(radius) => CornerRadii::circular(radius),
            Self::Corners(corners) => {
                let size = |corner: Option<CornerRecord>| {
                    corner.map_or(Size::ZERO, CornerRecord::to_size)
                };
                CornerRadii::new(
                    size(corners.top_left),
                    size(corners.top_right),
                    size(corners.bottom_left),
                    size(corners.bottom_right),
                )
            }
        }
    }
}

const fn include_edge() -> bool {
    true
}

/// `"type": "border"`.
///
/// Missing `width`, `style` or `color` take the initial value of the
/// property on every side.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BorderRecord {
    #[serde(alias = "rect")]
    pub bounds: BoundsRecord,
    #[serde(default)]
    pub width: Option<OneOrMany<f32>>,
    #[serde(default)]
    pub style: Option<OneOrMany<String>>,
    #[serde(default)]
    pub color: Option<OneOrMany<ColorRecord>>,
    #[serde(default)]
    pub radius: Option<RadiusRecord>,
    #[serde(default)]
    pub writing_mode: Option<String>,
    #[serde(default = "include_edge")]
    pub include_logical_left: bool,
    #[serde(default = "include_edge")]
    pub include_logical_right: bool,
}

/// `"type": "stacking_context"`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StackingContextRecord {
    #[serde(default)]
    pub bounds: Option<BoundsRecord>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// One display item, tagged by `"type"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ItemRecord {
    Border(BorderRecord),
    StackingContext(StackingContextRecord),
    /// Text, images, glyphs and other item kinds this engine does not draw.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RootRecord {
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// The whole document: `{ "root": { "items": [...] } }`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SceneRecord {
    pub root: RootRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_pads_with_first_element() {
        let widths = OneOrMany::Many(vec![1.0, 2.0]).broadcast("width").unwrap();
        assert_eq!(widths, [1.0, 2.0, 1.0, 1.0]);
        let widths = OneOrMany::One(3.0).broadcast("width").unwrap();
        assert_eq!(widths, [3.0; 4]);
    }

    #[test]
    fn test_broadcast_rejects_empty_and_long_lists() {
        let empty = OneOrMany::<f32>::Many(Vec::new()).broadcast("width");
        assert!(matches!(empty, Err(SceneError::ListArity { len: 0, .. })));
        let long = OneOrMany::Many(vec![1.0; 5]).broadcast("width");
        assert!(matches!(long, Err(SceneError::ListArity { len: 5, .. })));
    }

    #[test]
    fn test_bounds_text_form() {
        let bounds = BoundsRecord::Text("1 2 30 40".to_string()).to_rect().unwrap();
        assert_eq!(bounds, Rect::new(1.0, 2.0, 30.0, 40.0));
        assert!(BoundsRecord::Text("1 2 3".to_string()).to_rect().is_err());
        assert!(BoundsRecord::Text("a b c d".to_string()).to_rect().is_err());
    }

    #[test]
    fn test_radius_forms() {
        let uniform: RadiusRecord = serde_json::from_str("4").unwrap();
        assert_eq!(uniform.to_radii(), CornerRadii::circular(4.0));

        let corners: RadiusRecord =
            serde_json::from_str(r#"{"top_left": [4, 2], "bottom_right": 3}"#).unwrap();
        let radii = corners.to_radii();
        assert_eq!(radii.top_left, Size::new(4.0, 2.0));
        assert_eq!(radii.bottom_right, Size::new(3.0, 3.0));
        assert_eq!(radii.top_right, Size::ZERO);
    }
}
