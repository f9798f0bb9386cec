//! JSON scene fixtures for the Bevel border engine.
//!
//! A scene describes boxes with borders:
//!
//! ```json
//! {
//!   "root": {
//!     "items": [
//!       { "type": "border", "bounds": [10, 10, 100, 50],
//!         "width": 4, "style": "solid", "color": "black", "radius": 8 },
//!       { "type": "stacking_context", "bounds": [200, 0, 0, 0],
//!         "items": [
//!           { "type": "border", "bounds": "0 0 60 20",
//!             "width": [2, 1], "style": ["dashed", "dotted"],
//!             "color": ["red", "#00f"],
//!             "include_logical_right": false }
//!         ] }
//!     ]
//!   }
//! }
//! ```
//!
//! Per-side lists are in top, right, bottom, left order and shorter lists
//! are padded with their first value. Item types other than `border` and
//! `stacking_context` are skipped.

/// Color values as written in scene files.
pub mod color;
/// Errors raised while loading a scene.
pub mod error;
/// Scene loading and flattening.
pub mod loader;
mod record;

pub use color::parse_color;
pub use error::SceneError;
pub use loader::{BorderItem, LoaderConfig, Scene, SceneLoader};
