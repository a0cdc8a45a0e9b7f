// SPDX-License-Identifier: MPL-2.0
//! Test helpers: a scripted, call-recording [`ContentApi`].
//!
//! Every call is appended to a shared log before its scripted reply is
//! returned, so tests can assert both on what was sent and in which order.

use crate::api::{Ack, ApiError, ApiResult, ContentApi, Created, ImageUpload};
use crate::content::{Content, ContentId, ContentSummary, Draft, ImageId, StoredImage};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One recorded API call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Fetch(ContentId),
    Create(Draft),
    Update(ContentId, Draft),
    DeleteContent(ContentId),
    FetchImages(ContentId),
    Upload { content: ContentId, filename: String },
    DeleteImage(ImageId),
    Download(String),
}

#[derive(Debug)]
struct Script {
    calls: Vec<Call>,
    content: ApiResult<Content>,
    images: ApiResult<Vec<StoredImage>>,
    create: ApiResult<Created>,
    update: ApiResult<Ack>,
    uploads: VecDeque<ApiResult<Ack>>,
    download: ApiResult<Vec<u8>>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            content: Err(ApiError::Http {
                status: 404,
                body: String::new(),
            }),
            images: Ok(Vec::new()),
            create: Ok(Created {
                id: Some(ContentId::from(1)),
                message: "created".into(),
            }),
            update: Ok(ack("updated")),
            uploads: VecDeque::new(),
            download: Err(ApiError::Http {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

/// Scripted in-memory API.
#[derive(Debug, Clone, Default)]
pub struct RecordingApi {
    script: Arc<Mutex<Script>>,
}

impl RecordingApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn edit(self, f: impl FnOnce(&mut Script)) -> Self {
        f(&mut self.script.lock().expect("script lock"));
        self
    }

    #[must_use]
    pub fn with_content(self, reply: ApiResult<Content>) -> Self {
        self.edit(|s| s.content = reply)
    }

    #[must_use]
    pub fn with_images(self, reply: ApiResult<Vec<StoredImage>>) -> Self {
        self.edit(|s| s.images = reply)
    }

    #[must_use]
    pub fn with_create(self, reply: ApiResult<Created>) -> Self {
        self.edit(|s| s.create = reply)
    }

    #[must_use]
    pub fn with_update(self, reply: ApiResult<Ack>) -> Self {
        self.edit(|s| s.update = reply)
    }

    /// Replies for successive uploads; once exhausted, uploads succeed.
    #[must_use]
    pub fn with_uploads(self, replies: Vec<ApiResult<Ack>>) -> Self {
        self.edit(|s| s.uploads = replies.into())
    }

    #[must_use]
    pub fn with_download(self, reply: ApiResult<Vec<u8>>) -> Self {
        self.edit(|s| s.download = reply)
    }

    /// Returns every call made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().expect("script lock").calls.clone()
    }

    /// Returns the recorded upload calls only.
    #[must_use]
    pub fn uploads(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Upload { .. }))
            .collect()
    }

    fn record<T>(&self, call: Call, reply: impl FnOnce(&mut Script) -> T) -> T {
        let mut script = self.script.lock().expect("script lock");
        script.calls.push(call);
        reply(&mut script)
    }
}

impl ContentApi for RecordingApi {
    async fn list_contents(&self) -> ApiResult<Vec<ContentSummary>> {
        self.record(Call::List, |_| Ok(Vec::new()))
    }

    async fn fetch_content(&self, id: &ContentId) -> ApiResult<Content> {
        self.record(Call::Fetch(id.clone()), |s| s.content.clone())
    }

    async fn create_content(&self, draft: &Draft) -> ApiResult<Created> {
        self.record(Call::Create(draft.clone()), |s| s.create.clone())
    }

    async fn update_content(&self, id: &ContentId, draft: &Draft) -> ApiResult<Ack> {
        self.record(Call::Update(id.clone(), draft.clone()), |s| s.update.clone())
    }

    async fn delete_content(&self, id: &ContentId) -> ApiResult<Ack> {
        self.record(Call::DeleteContent(id.clone()), |_| Ok(ack("deleted")))
    }

    async fn fetch_images(&self, id: &ContentId) -> ApiResult<Vec<StoredImage>> {
        self.record(Call::FetchImages(id.clone()), |s| s.images.clone())
    }

    async fn upload_image(&self, id: &ContentId, image: &ImageUpload) -> ApiResult<Ack> {
        let call = Call::Upload {
            content: id.clone(),
            filename: image.filename.clone(),
        };
        self.record(call, |s| {
            s.uploads.pop_front().unwrap_or_else(|| Ok(ack("uploaded")))
        })
    }

    async fn delete_image(&self, id: &ImageId) -> ApiResult<Ack> {
        self.record(Call::DeleteImage(id.clone()), |_| Ok(ack("image deleted")))
    }

    async fn download(&self, path: &str) -> ApiResult<Vec<u8>> {
        self.record(Call::Download(path.to_string()), |s| s.download.clone())
    }
}

fn ack(message: &str) -> Ack {
    Ack {
        message: message.to_string(),
        id: None,
    }
}

/// Builds an upload with a few bytes of payload.
#[must_use]
pub fn upload(filename: &str) -> ImageUpload {
    ImageUpload::new(filename, vec![0u8; 8])
}
