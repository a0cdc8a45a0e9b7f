// SPDX-License-Identifier: MPL-2.0
//! Request and response shapes shared by API implementations.

use crate::content::{ContentId, ContentSummary, ImageId, StoredImage};
use serde::Deserialize;
use std::sync::Arc;

/// Plain acknowledgement: `{message}` plus an optional identifier.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
    /// Identifier of the stored image, when the call created one.
    #[serde(default)]
    pub id: Option<ImageId>,
}

/// Reply to a create-content call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Created {
    #[serde(default)]
    pub id: Option<ContentId>,
    #[serde(default)]
    pub message: String,
}

/// An image read from disk, waiting to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub filename: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl ImageUpload {
    /// Builds an upload, guessing the MIME type from the file name.
    pub fn new(filename: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let filename = filename.into();
        let mime = mime_guess::from_path(&filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            filename,
            mime,
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ContentsEnvelope {
    pub contents: Vec<ContentSummary>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ImagesEnvelope {
    #[serde(default)]
    pub images: Vec<StoredImage>,
}
