//! Scene loading and flattening.
//!
//! A scene is a tree of display items. Stacking contexts only offset their
//! children, so loading flattens the tree into a list of borders with their
//! bounds in scene coordinates.

use std::path::{Path, PathBuf};

use serde::Serialize;

use bevel_geometry::{
    BorderPaintPlan, BorderPainter, BorderSpec, BorderStyle, CornerRadii, EdgeSpec, Point, Rect,
    WritingMode,
};

use crate::error::SceneError;
use crate::record::{BorderRecord, ItemRecord, RadiusRecord, SceneRecord};

/// Loader settings.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Directory that relative scene paths are resolved against.
    ///
    /// Empty means the process working directory.
    pub base_dir: PathBuf,
}

impl LoaderConfig {
    /// Settings resolving relative paths against `base_dir`.
    #[must_use]
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

/// One border of a loaded scene, in scene coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderItem {
    /// Border box.
    pub bounds: Rect,
    /// Per-side width, style and color.
    pub spec: BorderSpec,
    /// Requested corner radii.
    pub radii: CornerRadii,
    /// Writing mode of the box.
    pub writing_mode: WritingMode,
    /// Whether this fragment carries its inline-start edge.
    pub include_logical_left: bool,
    /// Whether this fragment carries its inline-end edge.
    pub include_logical_right: bool,
}

impl BorderItem {
    /// A painter configured for this border.
    #[must_use]
    pub const fn painter(&self) -> BorderPainter<'_> {
        BorderPainter::new(self.bounds, &self.spec, self.radii, self.writing_mode)
            .include_logical_left_edge(self.include_logical_left)
            .include_logical_right_edge(self.include_logical_right)
    }

    /// Compute the paint plan of this border.
    #[must_use]
    pub fn plan(&self) -> BorderPaintPlan {
        self.painter().plan()
    }

    fn from_record(record: BorderRecord, offset: Point) -> Result<Self, SceneError> {
        let bounds = record.bounds.to_rect()?.translated(offset.x, offset.y);

        let initial = EdgeSpec::default();
        let widths = match record.width {
            Some(widths) => widths.broadcast("width")?,
            None => [initial.width; 4],
        };
        let mut styles = [initial.style; 4];
        if let Some(tokens) = record.style {
            for (style, token) in styles.iter_mut().zip(tokens.broadcast("style")?) {
                *style = token
                    .parse::<BorderStyle>()
                    .map_err(|_: strum::ParseError| SceneError::UnknownStyle(token))?;
            }
        }
        let mut colors = [initial.color; 4];
        if let Some(records) = record.color {
            for (color, value) in colors.iter_mut().zip(records.broadcast("color")?) {
                *color = value.to_rgba()?;
            }
        }

        let [top, right, bottom, left] = [0, 1, 2, 3]
            .map(|index| EdgeSpec::new(widths[index], styles[index], colors[index]));

        let writing_mode = match record.writing_mode {
            Some(token) => token
                .parse::<WritingMode>()
                .map_err(|_: strum::ParseError| SceneError::UnknownWritingMode(token))?,
            None => WritingMode::default(),
        };

        Ok(Self {
            bounds,
            spec: BorderSpec::new(top, right, bottom, left),
            radii: record.radius.map_or(CornerRadii::ZERO, RadiusRecord::to_radii),
            writing_mode,
            include_logical_left: record.include_logical_left,
            include_logical_right: record.include_logical_right,
        })
    }
}

/// A loaded scene: every border in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    /// Borders, flattened out of nested stacking contexts.
    pub borders: Vec<BorderItem>,
}

impl Scene {
    /// Paint plans for every border, in document order.
    #[must_use]
    pub fn plans(&self) -> Vec<BorderPaintPlan> {
        self.borders.iter().map(BorderItem::plan).collect()
    }

    fn collect(&mut self, items: Vec<ItemRecord>, offset: Point) -> Result<(), SceneError> {
        for item in items {
            match item {
                ItemRecord::Border(record) => {
                    self.borders.push(BorderItem::from_record(record, offset)?);
                }
                ItemRecord::StackingContext(context) => {
                    let origin = match context.bounds {
                        Some(bounds) => bounds.to_rect()?.origin(),
                        None => Point::default(),
                    };
                    let offset = Point::new(offset.x + origin.x, offset.y + origin.y);
                    self.collect(context.items, offset)?;
                }
                ItemRecord::Unsupported => {
                    tracing::debug!("skipping unsupported display item");
                }
            }
        }
        Ok(())
    }
}

/// Reads scene documents.
#[derive(Debug, Clone, Default)]
pub struct SceneLoader {
    config: LoaderConfig,
}

impl SceneLoader {
    /// Create a loader with the given settings.
    #[must_use]
    pub const fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// The loader settings.
    #[must_use]
    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Resolve `path` against the configured base directory.
    ///
    /// Absolute paths are returned unchanged.
    #[must_use]
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config.base_dir.join(path)
        }
    }

    /// Read and load the scene at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] if the file cannot be read, or any error of
    /// [`Self::load_str`].
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Scene, SceneError> {
        let path = self.resolve_path(path.as_ref());
        tracing::debug!(path = %path.display(), "loading scene");
        let source = std::fs::read_to_string(&path).map_err(|source| SceneError::Io {
            path: path.clone(),
            source,
        })?;
        self.load_str(&source)
    }

    /// Load a scene from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] for malformed documents, or the matching
    /// [`SceneError`] variant for an invalid field value.
    #[allow(clippy::unused_self)]
    pub fn load_str(&self, source: &str) -> Result<Scene, SceneError> {
        let record: SceneRecord = serde_json::from_str(source)?;
        let mut scene = Scene::default();
        scene.collect(record.root.items, Point::default())?;
        tracing::debug!(borders = scene.borders.len(), "loaded scene");
        Ok(scene)
    }
}
