//! Writing modes and the logical-to-physical side mapping
//!
//! [§ 2 Block Flow Direction](https://www.w3.org/TR/css-writing-modes-4/#block-flow)

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// [§ 2 Block Flow Direction](https://www.w3.org/TR/css-writing-modes-4/#block-flow)
///
/// "The writing-mode property specifies whether lines of text are laid out
/// horizontally or vertically and the direction in which blocks progress."
///
/// Border geometry only cares whether the mode is horizontal or vertical:
/// that decides which physical sides carry the logical left (inline-start)
/// and logical right (inline-end) edges of a box fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum WritingMode {
    /// `horizontal-tb`: lines run left to right, blocks stack downwards.
    #[default]
    HorizontalTb,
    /// `vertical-rl`: lines run top to bottom, blocks stack leftwards.
    VerticalRl,
    /// `vertical-lr`: lines run top to bottom, blocks stack rightwards.
    VerticalLr,
}

/// One of the four physical sides of a box; indexes per-side border data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PhysicalSide {
    /// Top edge of the box
    Top,
    /// Right edge of the box
    Right,
    /// Bottom edge of the box
    Bottom,
    /// Left edge of the box
    Left,
}

impl PhysicalSide {
    /// All four sides in top, right, bottom, left order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

impl WritingMode {
    /// True for `horizontal-tb`, false for both vertical modes.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalTb)
    }

    /// The physical side carrying the logical left (inline-start) edge.
    #[must_use]
    pub const fn logical_left_side(self) -> PhysicalSide {
        if self.is_horizontal() {
            PhysicalSide::Left
        } else {
            PhysicalSide::Top
        }
    }

    /// The physical side carrying the logical right (inline-end) edge.
    #[must_use]
    pub const fn logical_right_side(self) -> PhysicalSide {
        if self.is_horizontal() {
            PhysicalSide::Right
        } else {
            PhysicalSide::Bottom
        }
    }

    /// [§ 5.4 Box fragmentation](https://www.w3.org/TR/css-break-3/#break-decoration)
    ///
    /// Whether `side` carries border decoration for a fragment that includes
    /// only some of its logical edges.
    ///
    /// Sides on the block axis are always included. The sides returned by
    /// [`Self::logical_left_side`] and [`Self::logical_right_side`] are only
    /// included when the matching flag is set.
    ///
    /// | side   | included when                               |
    /// |--------|---------------------------------------------|
    /// | top    | horizontal or `include_logical_left`        |
    /// | right  | vertical or `include_logical_right`         |
    /// | bottom | horizontal or `include_logical_right`       |
    /// | left   | vertical or `include_logical_left`          |
    #[must_use]
    pub fn includes_side(
        self,
        side: PhysicalSide,
        include_logical_left: bool,
        include_logical_right: bool,
    ) -> bool {
        if side == self.logical_left_side() {
            include_logical_left
        } else if side == self.logical_right_side() {
            include_logical_right
        } else {
            true
        }
    }
}
