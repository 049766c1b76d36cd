//! Placed photo model.
//!
//! A [`PlacedPhoto`] is the persisted geometry of one photo on the canvas:
//! position, size, scale multiplier, rotation and an optional crop. It is
//! created from whatever the store holds, filling gaps from the default
//! placement table, and then only changes when a gesture completes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::canvas::{clamp, clamp_to_canvas, CanvasConfig};
use crate::geometry::{Point, Rect};
use crate::transform::normalize_degrees;

/// Default width for a photo with no stored size.
pub const DEFAULT_PHOTO_WIDTH: f64 = 300.0;
/// Default height for a photo with no stored size.
pub const DEFAULT_PHOTO_HEIGHT: f64 = 300.0;

/// Default top-left corners, assigned by a photo's index in its sequence.
pub const DEFAULT_POSITIONS: [Point; 4] = [
    Point::new(100.0, 100.0),
    Point::new(600.0, 200.0),
    Point::new(200.0, 700.0),
    Point::new(700.0, 900.0),
];

/// Default position for the photo at `index`, cycling through
/// [`DEFAULT_POSITIONS`] when there are more photos than entries.
pub fn default_position(index: usize) -> Point {
    DEFAULT_POSITIONS[index % DEFAULT_POSITIONS.len()]
}

/// Identifier of a photo entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Sub-rectangle of the photo in its natural (source image) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamp the crop into an image of the given natural size.
    ///
    /// The origin stays inside the image, the far edges never pass the
    /// image bounds, and the result is at least 1×1 pixel.
    pub fn clamp_to(&self, natural_width: f64, natural_height: f64) -> CropRect {
        let x = clamp(self.x, 0.0, (natural_width - 1.0).max(0.0));
        let y = clamp(self.y, 0.0, (natural_height - 1.0).max(0.0));
        let width = clamp(self.width, 1.0, (natural_width - x).max(1.0));
        let height = clamp(self.height, 1.0, (natural_height - y).max(1.0));
        CropRect::new(x, y, width, height)
    }
}

/// Photo geometry as held by the store. Every field except the id may be
/// missing for photos that were never arranged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPhoto {
    pub id: String,
    #[serde(default)]
    pub position_x: Option<f64>,
    #[serde(default)]
    pub position_y: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub crop_data: Option<CropRect>,
}

/// Geometry of one photo on the canvas, in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPhoto {
    pub id: PhotoId,
    /// Left edge (0 to W - width)
    pub position_x: f64,
    /// Top edge (0 to H - height)
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    /// Uniform multiplier on width/height (min_scale to max_scale)
    pub scale: f64,
    /// Degrees in [0, 360)
    pub rotation: f64,
    pub crop_data: Option<CropRect>,
}

impl PlacedPhoto {
    /// A photo at the default placement for its index.
    pub fn with_defaults(id: impl Into<PhotoId>, index: usize) -> Self {
        let position = default_position(index);
        Self {
            id: id.into(),
            position_x: position.x,
            position_y: position.y,
            width: DEFAULT_PHOTO_WIDTH,
            height: DEFAULT_PHOTO_HEIGHT,
            scale: 1.0,
            rotation: 0.0,
            crop_data: None,
        }
    }

    /// Build from a stored record, filling missing fields from the defaults
    /// for `index` and normalizing the result into the canvas.
    ///
    /// A stored width or height of zero counts as missing.
    pub fn from_stored(stored: StoredPhoto, index: usize, config: &CanvasConfig) -> Self {
        let defaults = Self::with_defaults(stored.id, index);
        let present = |v: Option<f64>| v.filter(|v| v.is_finite() && *v != 0.0);

        let photo = Self {
            position_x: stored
                .position_x
                .filter(|v| v.is_finite())
                .unwrap_or(defaults.position_x),
            position_y: stored
                .position_y
                .filter(|v| v.is_finite())
                .unwrap_or(defaults.position_y),
            width: present(stored.width).unwrap_or(defaults.width),
            height: present(stored.height).unwrap_or(defaults.height),
            scale: present(stored.scale).unwrap_or(defaults.scale),
            rotation: stored
                .rotation
                .filter(|v| v.is_finite())
                .unwrap_or(defaults.rotation),
            crop_data: stored.crop_data,
            ..defaults
        };
        photo.normalized(config)
    }

    /// Clamp every field into the ranges the editor maintains.
    pub fn normalized(mut self, config: &CanvasConfig) -> Self {
        self.width = clamp(self.width, config.min_size, config.max_size);
        self.height = clamp(self.height, config.min_size, config.max_size);
        let position = clamp_to_canvas(
            self.position_x,
            self.position_y,
            self.width,
            self.height,
            config,
        );
        self.position_x = position.x;
        self.position_y = position.y;
        self.scale = clamp(self.scale, config.min_scale, config.max_scale);
        self.rotation = normalize_degrees(self.rotation);
        self
    }

    /// Placement rectangle in canvas pixels (scale not applied).
    pub fn rect(&self) -> Rect {
        Rect::new(self.position_x, self.position_y, self.width, self.height)
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.position_x = rect.x;
        self.position_y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }
}
