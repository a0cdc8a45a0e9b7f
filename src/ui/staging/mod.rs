// SPDX-License-Identifier: MPL-2.0
//! Image staging list for the content dialog.
//!
//! The staging list holds the images shown under the content form: images
//! already stored on the server for the record being edited, and files the
//! user just picked that have not been uploaded yet. It never grows past
//! [`MAX_IMAGES`] entries.
//!
//! Picking files is a two-step affair: [`StagingList::select`] checks the cap
//! and reserves one slot per accepted image, then each decoded preview comes
//! back through [`StagingList::push_decoded`]. Reserved slots count toward the
//! cap so two quick selections cannot overshoot it while previews decode.
//!
//! Every reset bumps a session counter; previews decoded for an older session
//! are dropped on arrival.

mod preview;
mod render;

pub use preview::{
    decode_in_background, is_image_file, load_preview, StagedImage, IMAGE_EXTENSIONS, THUMBNAIL_SIZE,
};
pub use render::{render, PreviewSource, PreviewTile};

use crate::api::ImageUpload;
use crate::content::{ImageId, StoredImage};
use iced::widget::image::Handle;
use std::collections::HashSet;
use std::path::PathBuf;

/// Maximum number of images attached to one content record.
pub const MAX_IMAGES: usize = 5;

/// One image in the staging list.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    id: Option<ImageId>,
    filename: String,
    source: PreviewSource,
    thumbnail: Option<Handle>,
    raw: Option<ImageUpload>,
}

impl ImageEntry {
    /// Entry for an image the server already stores.
    #[must_use]
    pub fn stored(image: StoredImage) -> Self {
        Self {
            id: Some(image.id),
            filename: image.filename,
            source: PreviewSource::Remote(image.url),
            thumbnail: None,
            raw: None,
        }
    }

    /// Entry for a freshly picked file.
    #[must_use]
    pub fn unsaved(staged: StagedImage) -> Self {
        Self {
            id: None,
            filename: staged.upload.filename.clone(),
            source: PreviewSource::Local,
            thumbnail: Some(staged.thumbnail),
            raw: Some(staged.upload),
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&ImageId> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn source(&self) -> &PreviewSource {
        &self.source
    }

    #[must_use]
    pub fn thumbnail(&self) -> Option<&Handle> {
        self.thumbnail.as_ref()
    }

    /// Returns the file still to be uploaded, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&ImageUpload> {
        self.raw.as_ref()
    }

    /// Whether the server has assigned this image an identifier.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }
}

/// A selection that would push the list past [`MAX_IMAGES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRejected {
    /// Entries already present or reserved.
    pub current: usize,
    /// Files in the rejected selection.
    pub selected: usize,
}

/// Result of asking to remove an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    /// Unsaved entry, dropped immediately.
    Removed,
    /// Saved entry; the caller must confirm and delete it on the server,
    /// then call [`StagingList::confirm_removed`].
    NeedsServerDelete(ImageId),
    /// A delete for this saved entry is already awaiting confirmation or the
    /// server.
    AlreadyPending,
    /// No entry at that index.
    OutOfRange,
}

/// Ordered list of images attached to the content being edited.
#[derive(Debug, Clone, Default)]
pub struct StagingList {
    entries: Vec<ImageEntry>,
    reserved: usize,
    session: u64,
    deleting: HashSet<ImageId>,
}

impl StagingList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts or rejects a file selection as a whole.
    ///
    /// On success returns the session token and the image files to decode;
    /// non-image files are skipped without notice. One slot is reserved for
    /// each returned path.
    pub fn select(
        &mut self,
        files: Vec<PathBuf>,
    ) -> Result<(u64, Vec<PathBuf>), SelectionRejected> {
        let current = self.occupied();
        if current + files.len() > MAX_IMAGES {
            return Err(SelectionRejected {
                current,
                selected: files.len(),
            });
        }

        let images: Vec<PathBuf> = files.into_iter().filter(|p| is_image_file(p)).collect();
        self.reserved += images.len();
        Ok((self.session, images))
    }

    /// Appends a decoded preview picked during `session`.
    ///
    /// Returns `false` when the preview belongs to a session that has since
    /// been reset.
    pub fn push_decoded(&mut self, session: u64, staged: StagedImage) -> bool {
        if session != self.session {
            return false;
        }
        self.reserved = self.reserved.saturating_sub(1);
        if self.entries.len() >= MAX_IMAGES {
            return false;
        }
        self.entries.push(ImageEntry::unsaved(staged));
        true
    }

    /// Releases the slot reserved for a file whose preview failed to load.
    pub fn release(&mut self, session: u64) {
        if session == self.session {
            self.reserved = self.reserved.saturating_sub(1);
        }
    }

    /// Replaces the whole list with images fetched from the server.
    pub fn replace_with_stored(&mut self, images: Vec<StoredImage>) {
        self.clear();
        self.entries = images
            .into_iter()
            .take(MAX_IMAGES)
            .map(ImageEntry::stored)
            .collect();
    }

    /// Handles a delete request for the entry at `index`.
    ///
    /// A saved entry stays marked as deleting until [`StagingList::confirm_removed`]
    /// or [`StagingList::cancel_removal`]; further requests for it are refused.
    pub fn remove(&mut self, index: usize) -> Removal {
        let Some(entry) = self.entries.get(index) else {
            return Removal::OutOfRange;
        };

        match entry.id.clone() {
            Some(id) if self.deleting.contains(&id) => Removal::AlreadyPending,
            Some(id) => {
                self.deleting.insert(id.clone());
                Removal::NeedsServerDelete(id)
            }
            None => {
                self.entries.remove(index);
                Removal::Removed
            }
        }
    }

    /// Keeps a saved entry after its delete was declined or failed.
    pub fn cancel_removal(&mut self, id: &ImageId) {
        self.deleting.remove(id);
    }

    /// Whether a delete of the saved entry `id` is pending.
    #[must_use]
    pub fn is_deleting(&self, id: &ImageId) -> bool {
        self.deleting.contains(id)
    }

    /// Drops a saved entry once the server confirmed its deletion.
    ///
    /// Looks the entry up by identifier since indices may have shifted while
    /// the call was in flight.
    pub fn confirm_removed(&mut self, id: &ImageId) -> bool {
        self.deleting.remove(id);
        match self.entries.iter().position(|e| e.id.as_ref() == Some(id)) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Attaches a downloaded thumbnail to a saved entry.
    pub fn set_thumbnail(&mut self, id: &ImageId, thumbnail: Handle) -> bool {
        match self.entries.iter_mut().find(|e| e.id.as_ref() == Some(id)) {
            Some(entry) => {
                entry.thumbnail = Some(thumbnail);
                true
            }
            None => false,
        }
    }

    /// Files still to be uploaded, in list order.
    #[must_use]
    pub fn pending_uploads(&self) -> Vec<ImageUpload> {
        self.entries.iter().filter_map(|e| e.raw.clone()).collect()
    }

    /// Saved entries whose thumbnail still has to be downloaded.
    #[must_use]
    pub fn missing_thumbnails(&self) -> Vec<(ImageId, String)> {
        self.entries
            .iter()
            .filter(|e| e.thumbnail.is_none())
            .filter_map(|e| match (&e.id, &e.source) {
                (Some(id), PreviewSource::Remote(path)) => Some((id.clone(), path.clone())),
                _ => None,
            })
            .collect()
    }

    /// Empties the list and invalidates pending previews.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.reserved = 0;
        self.deleting.clear();
        self.session = self.session.wrapping_add(1);
    }

    /// Builds the preview render instructions for the current list.
    #[must_use]
    pub fn render(&self) -> Vec<PreviewTile> {
        render(&self.entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries plus slots reserved for previews still decoding.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.entries.len() + self.reserved
    }

    /// Token of the current selection session; bumped by [`StagingList::clear`].
    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Whether previews are still being decoded.
    #[must_use]
    pub fn is_decoding(&self) -> bool {
        self.reserved > 0
    }

    /// How many more files may be picked.
    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.occupied())
    }
}
