// SPDX-License-Identifier: MPL-2.0
//! Content server API: port trait and HTTP adapter.
//!
//! [`ContentApi`] is the seam between the admin UI and the server. The UI
//! layer only talks to the trait, so flows such as the submit pipeline can be
//! exercised against an in-memory implementation in tests while the
//! application uses [`HttpClient`].
//!
//! # Design Notes
//!
//! - Methods return `Send` futures so they can be driven by `iced::Task`
//! - Implementations are cheap to clone (the HTTP client is reference counted)
//! - A server-reported `error` field always wins over the HTTP status

mod error;
mod http;
mod types;

pub use error::{ApiError, ApiResult};
pub use http::{interpret, HttpClient};
pub use types::{Ack, Created, ImageUpload};

use crate::content::{Content, ContentId, ContentSummary, Draft, ImageId, StoredImage};
use std::future::Future;

/// Operations the admin panel needs from the content server.
pub trait ContentApi: Clone + Send + Sync + 'static {
    /// Lists every content record, newest first.
    fn list_contents(&self) -> impl Future<Output = ApiResult<Vec<ContentSummary>>> + Send;

    /// Loads one content record for editing.
    fn fetch_content(&self, id: &ContentId) -> impl Future<Output = ApiResult<Content>> + Send;

    /// Creates a new content record.
    fn create_content(&self, draft: &Draft) -> impl Future<Output = ApiResult<Created>> + Send;

    /// Replaces title and body of an existing record.
    fn update_content(
        &self,
        id: &ContentId,
        draft: &Draft,
    ) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// Deletes a content record.
    fn delete_content(&self, id: &ContentId) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// Lists the images attached to a content record.
    fn fetch_images(
        &self,
        id: &ContentId,
    ) -> impl Future<Output = ApiResult<Vec<StoredImage>>> + Send;

    /// Uploads one image and attaches it to a content record.
    fn upload_image(
        &self,
        id: &ContentId,
        image: &ImageUpload,
    ) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// Deletes one stored image.
    fn delete_image(&self, id: &ImageId) -> impl Future<Output = ApiResult<Ack>> + Send;

    /// Downloads raw bytes from a server-relative path (image thumbnails).
    fn download(&self, path: &str) -> impl Future<Output = ApiResult<Vec<u8>>> + Send;
}
