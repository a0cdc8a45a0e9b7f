// SPDX-License-Identifier: MPL-2.0
//! Asynchronous fetches composed from several API calls.

use crate::api::{ApiResult, ContentApi};
use crate::content::{Content, ContentId, StoredImage};
use crate::error::Error;
use crate::ui::staging::decode_in_background;
use iced::widget::image::Handle;

/// Fetches a record and its stored images for the edit flow.
///
/// The images are only requested once the record itself loaded.
pub async fn load_for_edit<A: ContentApi>(
    api: A,
    id: ContentId,
) -> ApiResult<(Content, Vec<StoredImage>)> {
    let content = api.fetch_content(&id).await?;
    let images = api.fetch_images(&id).await?;
    Ok((content, images))
}

/// Downloads a stored image and decodes it into a preview thumbnail.
pub async fn download_thumbnail<A: ContentApi>(api: A, path: String) -> Result<Handle, Error> {
    let bytes = api.download(&path).await?;
    let (_, thumbnail) = decode_in_background(bytes).await?;
    Ok(thumbnail)
}
