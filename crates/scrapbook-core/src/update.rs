//! Finalized transform payloads.
//!
//! A [`TransformUpdate`] is what a completed gesture hands to the
//! persistence callback: only the fields that gesture kind changes are
//! present. [`PhotoPatch`] is the same change shaped as a storage row
//! update, with positions and sizes rounded to whole pixels.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::photo::{CropRect, PlacedPhoto};

/// Partial update emitted once per completed gesture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_data: Option<CropRect>,
}

impl TransformUpdate {
    /// `{positionX, positionY}`, emitted by a drag.
    pub fn position(position: Point) -> Self {
        Self {
            position_x: Some(position.x),
            position_y: Some(position.y),
            ..Default::default()
        }
    }

    /// `{positionX, positionY, width, height}`, emitted by a resize.
    pub fn rect(rect: Rect) -> Self {
        Self {
            position_x: Some(rect.x),
            position_y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            ..Default::default()
        }
    }

    /// `{scale}`, emitted by the scale buttons.
    pub fn scale(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Default::default()
        }
    }

    /// `{rotation}`, emitted by a rotate gesture or the rotate buttons.
    pub fn rotation(rotation: f64) -> Self {
        Self {
            rotation: Some(rotation),
            ..Default::default()
        }
    }

    /// `{cropData}`, emitted when the crop changes.
    pub fn crop(crop: CropRect) -> Self {
        Self {
            crop_data: Some(crop),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every present field into `photo`.
    pub fn apply_to(&self, photo: &mut PlacedPhoto) {
        if let Some(v) = self.position_x {
            photo.position_x = v;
        }
        if let Some(v) = self.position_y {
            photo.position_y = v;
        }
        if let Some(v) = self.width {
            photo.width = v;
        }
        if let Some(v) = self.height {
            photo.height = v;
        }
        if let Some(v) = self.scale {
            photo.scale = v;
        }
        if let Some(v) = self.rotation {
            photo.rotation = v;
        }
        if let Some(crop) = self.crop_data {
            photo.crop_data = Some(crop);
        }
    }

    /// Shape the update as a storage row patch.
    pub fn to_patch(&self) -> PhotoPatch {
        let px = |v: Option<f64>| v.map(|v| v.round() as i64);
        PhotoPatch {
            position_x: px(self.position_x),
            position_y: px(self.position_y),
            width: px(self.width),
            height: px(self.height),
            scale: self.scale,
            rotation: self.rotation,
            crop_data: self.crop_data,
        }
    }
}

/// Row update for the photos table. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_data: Option<CropRect>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drag_payload_shape() {
        let update = TransformUpdate::position(Point::new(150.0, 150.0));
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "positionX": 150.0, "positionY": 150.0 })
        );
    }

    #[test]
    fn test_resize_payload_shape() {
        let update = TransformUpdate::rect(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "positionX": 1.0, "positionY": 2.0, "width": 3.0, "height": 4.0 })
        );
    }

    #[test]
    fn test_scale_and_rotation_payloads() {
        assert_eq!(
            serde_json::to_value(TransformUpdate::scale(1.4)).unwrap(),
            json!({ "scale": 1.4 })
        );
        assert_eq!(
            serde_json::to_value(TransformUpdate::rotation(45.0)).unwrap(),
            json!({ "rotation": 45.0 })
        );
    }

    #[test]
    fn test_apply_to_only_touches_present_fields() {
        let mut photo = PlacedPhoto::with_defaults("p1", 0);
        TransformUpdate::rotation(90.0).apply_to(&mut photo);
        assert_eq!(photo.rotation, 90.0);
        assert_eq!(photo.position_x, 100.0);
        assert_eq!(photo.width, 300.0);

        TransformUpdate::crop(CropRect::new(0.0, 0.0, 10.0, 10.0)).apply_to(&mut photo);
        assert!(photo.crop_data.is_some());
    }

    #[test]
    fn test_is_empty() {
        assert!(TransformUpdate::default().is_empty());
        assert!(!TransformUpdate::scale(1.0).is_empty());
    }

    #[test]
    fn test_patch_rounds_pixels() {
        let update = TransformUpdate {
            position_x: Some(100.4),
            position_y: Some(99.6),
            width: Some(333.5),
            rotation: Some(12.5),
            ..Default::default()
        };
        let patch = update.to_patch();
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "position_x": 100, "position_y": 100, "width": 334, "rotation": 12.5 })
        );
    }
}
