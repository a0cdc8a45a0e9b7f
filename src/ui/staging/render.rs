// SPDX-License-Identifier: MPL-2.0
//! Pure mapping from the staging list to preview render instructions.
//!
//! The dialog view never inspects [`ImageEntry`] directly; it asks for a list
//! of [`PreviewTile`]s and turns each one into widgets. This keeps ordering,
//! index binding and source selection testable without a window.

use super::ImageEntry;
use iced::widget::image::Handle;

/// Where a preview image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    /// Decoded locally from a picked file.
    Local,
    /// Stored on the server under this relative path.
    Remote(String),
}

/// Render instruction for one preview.
#[derive(Debug, Clone)]
pub struct PreviewTile {
    /// Position in the list; the delete control is bound to it.
    pub index: usize,
    pub filename: String,
    pub source: PreviewSource,
    /// Decoded thumbnail, if available yet.
    pub thumbnail: Option<Handle>,
    pub saved: bool,
}

/// Builds one tile per entry, in list order.
#[must_use]
pub fn render(entries: &[ImageEntry]) -> Vec<PreviewTile> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| PreviewTile {
            index,
            filename: entry.filename().to_string(),
            source: entry.source().clone(),
            thumbnail: entry.thumbnail().cloned(),
            saved: entry.is_saved(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ImageUpload;
    use crate::content::{ImageId, StoredImage};
    use crate::ui::staging::StagedImage;

    #[test]
    fn tiles_follow_list_order_and_sources() {
        let entries = vec![
            ImageEntry::stored(StoredImage {
                id: ImageId::from(5),
                filename: "old.png".into(),
                url: "/uploads/old.png".into(),
            }),
            ImageEntry::unsaved(StagedImage {
                upload: ImageUpload::new("new.png", vec![1u8]),
                thumbnail: Handle::from_rgba(1, 1, vec![0u8; 4]),
            }),
        ];

        let tiles = render(&entries);

        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].index, 0);
        assert_eq!(tiles[0].source, PreviewSource::Remote("/uploads/old.png".into()));
        assert!(tiles[0].saved);
        assert!(tiles[0].thumbnail.is_none());

        assert_eq!(tiles[1].index, 1);
        assert_eq!(tiles[1].filename, "new.png");
        assert_eq!(tiles[1].source, PreviewSource::Local);
        assert!(!tiles[1].saved);
        assert!(tiles[1].thumbnail.is_some());
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render(&[]).is_empty());
    }
}
