//! WASM-compatible wrapper types for editor geometry and updates.
//!
//! These mirror the core types with JavaScript-friendly accessors. Plain
//! geometry is exposed as small copyable structs; updates keep the core
//! value and serialize it on demand.

use scrapbook_core::{PhotoId, Point, Rect, TransformUpdate};
use wasm_bindgen::prelude::*;

/// A point in screen or canvas pixels.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for JsPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A rectangle in screen or canvas pixels.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for JsRect {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

/// A finalized transform for one photo.
///
/// Fields that the gesture did not change read as `undefined`.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsTransformUpdate {
    photo_id: PhotoId,
    inner: TransformUpdate,
}

#[wasm_bindgen]
impl JsTransformUpdate {
    #[wasm_bindgen(getter, js_name = photoId)]
    pub fn photo_id(&self) -> String {
        self.photo_id.to_string()
    }

    #[wasm_bindgen(getter, js_name = positionX)]
    pub fn position_x(&self) -> Option<f64> {
        self.inner.position_x
    }

    #[wasm_bindgen(getter, js_name = positionY)]
    pub fn position_y(&self) -> Option<f64> {
        self.inner.position_y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> Option<f64> {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> Option<f64> {
        self.inner.height
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> Option<f64> {
        self.inner.scale
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> Option<f64> {
        self.inner.rotation
    }

    /// Request body for the position PATCH endpoint (camelCase keys).
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Storage row patch (snake_case columns, whole-pixel positions).
    #[wasm_bindgen(js_name = toPatch)]
    pub fn to_patch(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_patch())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsTransformUpdate {
    pub(crate) fn new(photo_id: PhotoId, inner: TransformUpdate) -> Self {
        Self { photo_id, inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_core() {
        let r = JsRect::from(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(r.x, 1.0);
        assert_eq!(r.height, 4.0);
    }

    #[test]
    fn test_point_from_core() {
        let p = JsPoint::from(Point::new(5.0, 6.0));
        assert_eq!(p, JsPoint { x: 5.0, y: 6.0 });
    }

    #[test]
    fn test_update_getters() {
        let update = JsTransformUpdate::new(
            PhotoId::from("p1"),
            TransformUpdate::position(Point::new(150.0, 150.0)),
        );
        assert_eq!(update.photo_id(), "p1");
        assert_eq!(update.position_x(), Some(150.0));
        assert_eq!(update.position_y(), Some(150.0));
        assert_eq!(update.width(), None);
        assert_eq!(update.rotation(), None);
    }
}
