//! WASM bindings for the photo board.
//!
//! `JsBoard` wraps the core [`Board`] for a scrapbook page. The host feeds
//! it pointer events (coordinates relative to the canvas container) and
//! registers a commit callback that persists finalized transforms.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const board = new JsBoard({ width: 1200, height: 1600 });
//! for (const photo of photos) board.add_photo(photo);
//! board.set_edit_mode(true);
//! board.set_viewport(container.clientWidth, container.clientHeight);
//! board.set_on_commit((photoId, update) =>
//!   fetch(`/api/photos/${photoId}/position`, { method: 'PATCH', body: JSON.stringify(update) }));
//!
//! el.onpointerdown = (e) => board.pointer_down(id, e.target.dataset.handle ?? 'body', x, y);
//! window.onpointermove = (e) => board.pointer_move(x, y);
//! window.onpointerup = () => board.pointer_up();
//! ```

use scrapbook_core::{
    Board, CanvasConfig, EditorError, Handle, PhotoEditor, PhotoId, Point, PointerTarget,
    StoredPhoto, TransformSink, TransformUpdate,
};
use wasm_bindgen::prelude::*;

use crate::types::{JsRect, JsTransformUpdate};

fn to_js(err: EditorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Resolve a host target name into a pointer target.
///
/// `body` (or `drag`) starts a drag; handle names start a resize; `rotate`
/// rotates about `center`, or about `fallback_center` when none is given.
pub(crate) fn parse_target(
    target: &str,
    center: Option<Point>,
    fallback_center: Point,
) -> Result<PointerTarget, EditorError> {
    match target {
        "body" | "drag" => Ok(PointerTarget::Body),
        other => Ok(match other.parse::<Handle>()? {
            Handle::Resize(handle) => PointerTarget::Handle(handle),
            Handle::Rotate => PointerTarget::Rotate {
                center: center.unwrap_or(fallback_center),
            },
        }),
    }
}

/// Forwards commits to a JavaScript callback `(photoId, update) => void`.
struct JsCommitSink<'a> {
    callback: Option<&'a js_sys::Function>,
}

impl TransformSink for JsCommitSink<'_> {
    fn commit(&mut self, photo_id: &PhotoId, update: &TransformUpdate) {
        let Some(callback) = self.callback else {
            return;
        };
        let payload = match serde_wasm_bindgen::to_value(update) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("photo {}: could not serialize update: {}", photo_id, e);
                return;
            }
        };
        let id = JsValue::from_str(photo_id.as_str());
        if let Err(e) = callback.call2(&JsValue::NULL, &id, &payload) {
            log::error!("photo {}: commit callback threw: {:?}", photo_id, e);
        }
    }
}

/// A scrapbook page: photos on one canvas, with selection and gestures.
#[wasm_bindgen]
pub struct JsBoard {
    inner: Board,
    on_commit: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl JsBoard {
    /// Create a board. `config` is an optional partial canvas configuration
    /// (`width`, `height`, `minSize`, `maxSize`, `minScale`, `maxScale`,
    /// `scaleStep`, `rotationStep`); missing fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsBoard, JsValue> {
        let config: CanvasConfig = if config.is_undefined() || config.is_null() {
            CanvasConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid canvas config: {}", e)))?
        };
        Self::with_config(config).map_err(to_js)
    }

    /// Register the callback that receives `(photoId, update)` for every
    /// completed gesture or control press.
    pub fn set_on_commit(&mut self, callback: js_sys::Function) {
        self.on_commit = Some(callback);
    }

    /// Add a stored photo record (`{ id, positionX?, positionY?, width?,
    /// height?, scale?, rotation?, cropData? }`). Returns the photo id.
    pub fn add_photo(&mut self, photo: JsValue) -> Result<String, JsValue> {
        let stored: StoredPhoto = serde_wasm_bindgen::from_value(photo)
            .map_err(|e| JsValue::from_str(&format!("Invalid photo: {}", e)))?;
        self.inner
            .add_photo(stored)
            .map(|id| id.to_string())
            .map_err(to_js)
    }

    /// Add a photo from individual fields.
    #[allow(clippy::too_many_arguments)]
    pub fn add_photo_at(
        &mut self,
        id: String,
        position_x: Option<f64>,
        position_y: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
        scale: Option<f64>,
        rotation: Option<f64>,
    ) -> Result<String, JsValue> {
        let stored = StoredPhoto {
            id,
            position_x,
            position_y,
            width,
            height,
            scale,
            rotation,
            crop_data: None,
        };
        self.inner
            .add_photo(stored)
            .map(|id| id.to_string())
            .map_err(to_js)
    }

    pub fn remove_photo(&mut self, id: &str) -> Result<(), JsValue> {
        self.inner
            .remove_photo(&PhotoId::from(id))
            .map(|_| ())
            .map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.inner.set_edit_mode(enabled);
    }

    #[wasm_bindgen(getter)]
    pub fn edit_mode(&self) -> bool {
        self.inner.edit_mode()
    }

    /// Recompute the canvas scale from the container size; returns it.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> f64 {
        self.inner.set_viewport(width, height)
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_scale(&self) -> f64 {
        self.inner.canvas_scale()
    }

    pub fn select(&mut self, id: &str) -> Result<bool, JsValue> {
        self.inner.select(&PhotoId::from(id)).map_err(to_js)
    }

    pub fn deselect(&mut self) {
        self.inner.deselect();
    }

    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<String> {
        self.inner.selected().map(PhotoId::to_string)
    }

    /// Start a gesture on a photo. `target` is `body`, a handle name
    /// (`tl`, `tr`, `bl`, `br`, `mt`, `mb`, `ml`, `mr`) or `rotate`. For
    /// `rotate`, pass the photo's on-screen center; it defaults to the
    /// center of the photo's screen rectangle.
    pub fn pointer_down(
        &mut self,
        id: &str,
        target: &str,
        x: f64,
        y: f64,
        center_x: Option<f64>,
        center_y: Option<f64>,
    ) -> Result<bool, JsValue> {
        let id = PhotoId::from(id);
        let editor = self
            .inner
            .editor(&id)
            .ok_or_else(|| to_js(EditorError::UnknownPhoto(id.clone())))?;
        let center = center_x.zip(center_y).map(|(cx, cy)| Point::new(cx, cy));
        let target = parse_target(target, center, editor.screen_rect().center()).map_err(to_js)?;
        self.inner
            .pointer_down(&id, target, Point::new(x, y))
            .map_err(to_js)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.pointer_move(Point::new(x, y));
    }

    /// Finish the gesture in progress, invoking the commit callback.
    pub fn pointer_up(&mut self) -> Option<JsTransformUpdate> {
        let id = self.inner.active().cloned()?;
        let mut sink = JsCommitSink {
            callback: self.on_commit.as_ref(),
        };
        let update = self.inner.pointer_up(&mut sink)?;
        Some(JsTransformUpdate::new(id, update))
    }

    /// Abandon the gesture in progress (Escape / pointercancel).
    pub fn cancel(&mut self) -> bool {
        self.inner.cancel()
    }

    /// Press the scale `+` (`direction > 0`) or `−` (`direction < 0`) button.
    pub fn adjust_scale(
        &mut self,
        id: &str,
        direction: i32,
    ) -> Result<Option<JsTransformUpdate>, JsValue> {
        let id = PhotoId::from(id);
        let delta = f64::from(direction.signum()) * self.inner.config().scale_step;
        let mut sink = JsCommitSink {
            callback: self.on_commit.as_ref(),
        };
        let update = self
            .inner
            .adjust_scale(&id, delta, &mut sink)
            .map_err(to_js)?;
        Ok(update.map(|u| JsTransformUpdate::new(id, u)))
    }

    /// Press the rotate clockwise (`direction > 0`) or counter-clockwise button.
    pub fn adjust_rotation(
        &mut self,
        id: &str,
        direction: i32,
    ) -> Result<Option<JsTransformUpdate>, JsValue> {
        let id = PhotoId::from(id);
        let delta = f64::from(direction.signum()) * self.inner.config().rotation_step;
        let mut sink = JsCommitSink {
            callback: self.on_commit.as_ref(),
        };
        let update = self
            .inner
            .adjust_rotation(&id, delta, &mut sink)
            .map_err(to_js)?;
        Ok(update.map(|u| JsTransformUpdate::new(id, u)))
    }

    /// Set the crop in natural image pixels.
    #[allow(clippy::too_many_arguments)]
    pub fn set_crop(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        natural_width: f64,
        natural_height: f64,
    ) -> Result<Option<JsTransformUpdate>, JsValue> {
        let id = PhotoId::from(id);
        let crop = scrapbook_core::CropRect::new(x, y, width, height);
        let mut sink = JsCommitSink {
            callback: self.on_commit.as_ref(),
        };
        let update = self
            .inner
            .set_crop(&id, crop, natural_width, natural_height, &mut sink)
            .map_err(to_js)?;
        Ok(update.map(|u| JsTransformUpdate::new(id, u)))
    }

    /// Live placement of a photo in screen pixels, for rendering.
    pub fn screen_rect(&self, id: &str) -> Option<JsRect> {
        self.editor(id).map(|e| e.screen_rect().into())
    }

    /// Live placement of a photo in canvas pixels.
    pub fn canvas_rect(&self, id: &str) -> Option<JsRect> {
        self.editor(id).map(|e| e.live_rect().into())
    }

    /// Live rotation of a photo in degrees.
    pub fn rotation(&self, id: &str) -> Option<f64> {
        self.editor(id).map(PhotoEditor::live_rotation)
    }

    /// Scale multiplier of a photo.
    pub fn scale(&self, id: &str) -> Option<f64> {
        self.editor(id).map(|e| e.photo().scale)
    }
}

impl JsBoard {
    pub(crate) fn with_config(config: CanvasConfig) -> Result<JsBoard, EditorError> {
        Ok(JsBoard {
            inner: Board::new(config)?,
            on_commit: None,
        })
    }

    fn editor(&self, id: &str) -> Option<&PhotoEditor> {
        self.inner.editor(&PhotoId::from(id))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_new_with_custom_config() {
        let config = serde_wasm_bindgen::to_value(&small_canvas()).unwrap();
        let mut board = JsBoard::new(config).unwrap();
        // 400 / 800 = 0.5, 1000 / 1000 = 1.0
        assert_eq!(board.set_viewport(400.0, 1000.0), 0.5);
    }

    #[wasm_bindgen_test]
    fn test_new_rejects_bad_config() {
        let mut config = CanvasConfig::default();
        config.min_size = 900.0;
        let value = serde_wasm_bindgen::to_value(&config).unwrap();
        assert!(JsBoard::new(value).is_err());
    }

    #[wasm_bindgen_test]
    fn test_unknown_photo_is_error() {
        let mut board = JsBoard::new(JsValue::UNDEFINED).unwrap();
        assert!(board.pointer_down("nope", "body", 0.0, 0.0, None, None).is_err());
    }

    #[wasm_bindgen_test]
    fn test_update_to_json() {
        let mut board = JsBoard::new(JsValue::UNDEFINED).unwrap();
        board
            .add_photo_at("p1".into(), None, None, None, None, None, None)
            .unwrap();
        board.set_edit_mode(true);
        board.pointer_down("p1", "body", 0.0, 0.0, None, None).unwrap();
        let update = board.pointer_up().unwrap();
        let json = update.to_json().unwrap();
        let back: TransformUpdate = serde_wasm_bindgen::from_value(json).unwrap();
        assert_eq!(back.position_x, Some(100.0));
        assert_eq!(back.width, None);
    }

    fn small_canvas() -> CanvasConfig {
        CanvasConfig {
            width: 800.0,
            height: 1000.0,
            max_size: 500.0,
            ..CanvasConfig::default()
        }
    }
}
