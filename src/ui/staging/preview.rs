// SPDX-License-Identifier: MPL-2.0
//! Reading picked files and decoding their preview thumbnails.

use crate::api::ImageUpload;
use crate::error::ImageError;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

/// Longest edge of a preview thumbnail, in pixels.
pub const THUMBNAIL_SIZE: u32 = 160;

/// File extensions accepted as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A picked file, read into memory and decoded for preview.
#[derive(Debug, Clone)]
pub struct StagedImage {
    pub upload: ImageUpload,
    pub thumbnail: Handle,
}

/// Checks the file extension against the accepted image types.
#[must_use]
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Decodes image bytes into a preview-sized RGBA handle.
fn decode_thumbnail(bytes: &[u8]) -> Result<Handle, ImageError> {
    let image = image_rs::load_from_memory(bytes)
        .map_err(|e| ImageError::Undecodable(e.to_string()))?;
    let rgba = image.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE).to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Decodes a thumbnail on the blocking pool and hands the bytes back
/// alongside the thumbnail.
pub async fn decode_in_background(bytes: Vec<u8>) -> Result<(Vec<u8>, Handle), ImageError> {
    tokio::task::spawn_blocking(move || {
        let thumbnail = decode_thumbnail(&bytes)?;
        Ok::<_, ImageError>((bytes, thumbnail))
    })
    .await
    .map_err(|e| ImageError::Undecodable(e.to_string()))?
}

/// Reads a picked file and builds its preview.
pub async fn load_preview(path: PathBuf) -> Result<StagedImage, ImageError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| ImageError::Unreadable(format!("{}: {e}", path.display())))?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();

    let (bytes, thumbnail) = decode_in_background(bytes).await?;

    Ok(StagedImage {
        upload: ImageUpload::new(filename, bytes),
        thumbnail,
    })
}
