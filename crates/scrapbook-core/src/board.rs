//! Board of placed photos sharing one canvas.
//!
//! The board owns a [`PhotoEditor`] per photo, the id of the single
//! selected photo, and the id of the photo whose gesture is in progress.
//! Selecting a photo deselects the previous one. Completed gestures are
//! handed to a [`TransformSink`], the host's persistence callback.

use std::collections::HashSet;

use log::{debug, warn};

use crate::canvas::{try_canvas_scale, CanvasConfig};
use crate::editor::{PhotoEditor, PointerTarget};
use crate::error::EditorError;
use crate::geometry::Point;
use crate::photo::{CropRect, PhotoId, PlacedPhoto, StoredPhoto};
use crate::update::TransformUpdate;

/// Receives finalized transforms. Persisting them, retrying, and reporting
/// failures are the sink's concern.
pub trait TransformSink {
    fn commit(&mut self, photo_id: &PhotoId, update: &TransformUpdate);
}

impl<F> TransformSink for F
where
    F: FnMut(&PhotoId, &TransformUpdate),
{
    fn commit(&mut self, photo_id: &PhotoId, update: &TransformUpdate) {
        self(photo_id, update)
    }
}

/// Collects commits in order.
impl TransformSink for Vec<(PhotoId, TransformUpdate)> {
    fn commit(&mut self, photo_id: &PhotoId, update: &TransformUpdate) {
        self.push((photo_id.clone(), update.clone()));
    }
}

/// All photos of one scrapbook page.
#[derive(Debug, Clone)]
pub struct Board {
    config: CanvasConfig,
    editors: Vec<PhotoEditor>,
    /// Placement index for the next added photo. Never reused after removal.
    next_index: usize,
    selected: Option<PhotoId>,
    active: Option<PhotoId>,
    edit_mode: bool,
    canvas_scale: f64,
}

impl Board {
    /// Create an empty board after validating `config`.
    pub fn new(config: CanvasConfig) -> Result<Self, EditorError> {
        config.validate()?;
        Ok(Self {
            config,
            editors: Vec::new(),
            next_index: 0,
            selected: None,
            active: None,
            edit_mode: false,
            canvas_scale: 1.0,
        })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Add a stored photo. The order photos were added in picks the default
    /// placement, so a photo added after a removal does not land on a slot
    /// still in use.
    pub fn add_photo(&mut self, stored: StoredPhoto) -> Result<PhotoId, EditorError> {
        let id = PhotoId::from(stored.id.as_str());
        if self.position(&id).is_some() {
            return Err(EditorError::DuplicatePhoto(id));
        }
        let photo = PlacedPhoto::from_stored(stored, self.next_index, &self.config);
        self.next_index += 1;
        let mut editor = PhotoEditor::new(photo, self.config);
        editor.set_edit_mode(self.edit_mode);
        editor.set_canvas_scale(self.canvas_scale);
        self.editors.push(editor);
        debug!("board: added photo {}", id);
        Ok(id)
    }

    /// Add several stored photos in sequence order.
    ///
    /// The batch is all or nothing: an id repeated within it, or already on
    /// the board, fails the load and leaves the board unchanged.
    pub fn load<I>(&mut self, photos: I) -> Result<Vec<PhotoId>, EditorError>
    where
        I: IntoIterator<Item = StoredPhoto>,
    {
        let photos: Vec<StoredPhoto> = photos.into_iter().collect();
        let mut seen = HashSet::with_capacity(photos.len());
        for stored in &photos {
            let id = PhotoId::from(stored.id.as_str());
            if self.position(&id).is_some() || !seen.insert(stored.id.as_str()) {
                warn!("board: load rejected, duplicate photo {}", id);
                return Err(EditorError::DuplicatePhoto(id));
            }
        }
        photos.into_iter().map(|p| self.add_photo(p)).collect()
    }

    /// Remove a photo, dropping its selection and any gesture in progress.
    pub fn remove_photo(&mut self, id: &PhotoId) -> Result<PlacedPhoto, EditorError> {
        let index = self.require(id)?;
        let editor = self.editors.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        Ok(editor.photo().clone())
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    pub fn photo(&self, id: &PhotoId) -> Option<&PlacedPhoto> {
        self.editor(id).map(PhotoEditor::photo)
    }

    pub fn editor(&self, id: &PhotoId) -> Option<&PhotoEditor> {
        self.editors.iter().find(|e| e.id() == id)
    }

    pub fn photos(&self) -> impl Iterator<Item = &PlacedPhoto> {
        self.editors.iter().map(PhotoEditor::photo)
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Toggle edit mode for every photo. Leaving edit mode cancels the
    /// gesture in progress and clears the selection.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        for editor in &mut self.editors {
            editor.set_edit_mode(enabled);
        }
        if !enabled {
            self.active = None;
            self.selected = None;
        }
        self.edit_mode = enabled;
    }

    pub fn canvas_scale(&self) -> f64 {
        self.canvas_scale
    }

    /// Recompute the canvas scale from the container size. An unmeasured
    /// container keeps the previous scale.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> f64 {
        match try_canvas_scale(width, height, &self.config) {
            Some(scale) => {
                self.canvas_scale = scale;
                for editor in &mut self.editors {
                    editor.set_canvas_scale(scale);
                }
            }
            None => warn!(
                "board: viewport {}x{} not measured, keeping scale {}",
                width, height, self.canvas_scale
            ),
        }
        self.canvas_scale
    }

    pub fn selected(&self) -> Option<&PhotoId> {
        self.selected.as_ref()
    }

    /// Select a photo, deselecting any other. Ignored outside edit mode.
    pub fn select(&mut self, id: &PhotoId) -> Result<bool, EditorError> {
        self.require(id)?;
        if !self.edit_mode {
            return Ok(false);
        }
        self.selected = Some(id.clone());
        Ok(true)
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Id of the photo whose gesture is in progress.
    pub fn active(&self) -> Option<&PhotoId> {
        self.active.as_ref()
    }

    /// Route a pointer-down to a photo.
    ///
    /// A pointer-down on a body selects that photo and starts a drag.
    /// Handles only respond on the selected photo. While any gesture is in
    /// progress further pointer-downs are ignored. Returns whether a
    /// gesture started.
    pub fn pointer_down(
        &mut self,
        id: &PhotoId,
        target: PointerTarget,
        pointer: Point,
    ) -> Result<bool, EditorError> {
        let index = self.require(id)?;
        if !self.edit_mode || self.active.is_some() {
            return Ok(false);
        }
        match target {
            PointerTarget::Body => self.selected = Some(id.clone()),
            _ if self.selected.as_ref() != Some(id) => {
                debug!("board: handle on unselected photo {} ignored", id);
                return Ok(false);
            }
            _ => {}
        }
        let started = self.editors[index].pointer_down(target, pointer);
        if started {
            self.active = Some(id.clone());
        }
        Ok(started)
    }

    /// Forward a pointer-move to the photo whose gesture is in progress.
    pub fn pointer_move(&mut self, pointer: Point) {
        if let Some(editor) = self.active_editor() {
            editor.pointer_move(pointer);
        }
    }

    /// Finish the gesture in progress and commit it to `sink`.
    pub fn pointer_up<S>(&mut self, sink: &mut S) -> Option<TransformUpdate>
    where
        S: TransformSink + ?Sized,
    {
        let update = self.active_editor()?.pointer_up()?;
        let id = self.active.take()?;
        sink.commit(&id, &update);
        Some(update)
    }

    /// Abandon the gesture in progress. Returns whether one was cancelled.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self
            .active_editor()
            .map(PhotoEditor::cancel)
            .unwrap_or(false);
        self.active = None;
        cancelled
    }

    /// Step the scale of the selected photo.
    pub fn adjust_scale<S>(
        &mut self,
        id: &PhotoId,
        delta: f64,
        sink: &mut S,
    ) -> Result<Option<TransformUpdate>, EditorError>
    where
        S: TransformSink + ?Sized,
    {
        self.control(id, sink, |editor| editor.adjust_scale(delta))
    }

    /// Step the rotation of the selected photo.
    pub fn adjust_rotation<S>(
        &mut self,
        id: &PhotoId,
        delta: f64,
        sink: &mut S,
    ) -> Result<Option<TransformUpdate>, EditorError>
    where
        S: TransformSink + ?Sized,
    {
        self.control(id, sink, |editor| editor.adjust_rotation(delta))
    }

    /// Set the crop of the selected photo.
    pub fn set_crop<S>(
        &mut self,
        id: &PhotoId,
        crop: CropRect,
        natural_width: f64,
        natural_height: f64,
        sink: &mut S,
    ) -> Result<Option<TransformUpdate>, EditorError>
    where
        S: TransformSink + ?Sized,
    {
        self.control(id, sink, |editor| {
            editor.set_crop(crop, natural_width, natural_height)
        })
    }

    /// Run a button-style control on the selected photo and commit its update.
    fn control<S, F>(
        &mut self,
        id: &PhotoId,
        sink: &mut S,
        apply: F,
    ) -> Result<Option<TransformUpdate>, EditorError>
    where
        S: TransformSink + ?Sized,
        F: FnOnce(&mut PhotoEditor) -> Option<TransformUpdate>,
    {
        let index = self.require(id)?;
        if self.selected.as_ref() != Some(id) {
            return Ok(None);
        }
        let update = apply(&mut self.editors[index]);
        if let Some(update) = &update {
            sink.commit(id, update);
        }
        Ok(update)
    }

    fn active_editor(&mut self) -> Option<&mut PhotoEditor> {
        let id = self.active.as_ref()?;
        self.editors.iter_mut().find(|e| e.id() == id)
    }

    fn position(&self, id: &PhotoId) -> Option<usize> {
        self.editors.iter().position(|e| e.id() == id)
    }

    fn require(&self, id: &PhotoId) -> Result<usize, EditorError> {
        self.position(id).ok_or_else(|| {
            warn!("board: unknown photo {}", id);
            EditorError::UnknownPhoto(id.clone())
        })
    }
}
