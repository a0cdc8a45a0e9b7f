// SPDX-License-Identifier: MPL-2.0
//! `reqwest`-backed implementation of [`ContentApi`].

use super::types::{ContentsEnvelope, ImagesEnvelope};
use super::{Ack, ApiError, ApiResult, ContentApi, Created, ImageUpload};
use crate::content::{Content, ContentId, ContentSummary, Draft, ImageId, StoredImage};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Multipart field name the server reads the image from.
const IMAGE_FIELD: &str = "image";

/// HTTP client bound to one content server.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cms_admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Returns the server base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a server-relative path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret(status, &body)
    }
}

/// Turns a raw HTTP reply into a typed result.
///
/// An `error` field in a JSON body is reported as [`ApiError::Server`]
/// regardless of status. Otherwise a non-2xx status is [`ApiError::Http`],
/// and a body that does not match `T` is [`ApiError::Parse`].
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
            return Err(ApiError::Server(message.to_string()));
        }
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            body: body.trim().to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Parse(format!("{e}; body: {body}")))
}

impl ContentApi for HttpClient {
    async fn list_contents(&self) -> ApiResult<Vec<ContentSummary>> {
        tracing::debug!("listing contents");
        let envelope: ContentsEnvelope = self
            .send(self.request(Method::GET, "/api/contents"))
            .await?;
        Ok(envelope.contents)
    }

    async fn fetch_content(&self, id: &ContentId) -> ApiResult<Content> {
        tracing::debug!(%id, "fetching content");
        self.send(self.request(Method::GET, &format!("/api/contents/{id}")))
            .await
    }

    async fn create_content(&self, draft: &Draft) -> ApiResult<Created> {
        tracing::debug!(title = %draft.title, "creating content");
        self.send(self.request(Method::POST, "/api/contents").json(draft))
            .await
    }

    async fn update_content(&self, id: &ContentId, draft: &Draft) -> ApiResult<Ack> {
        tracing::debug!(%id, "updating content");
        self.send(
            self.request(Method::PUT, &format!("/api/contents/{id}"))
                .json(draft),
        )
        .await
    }

    async fn delete_content(&self, id: &ContentId) -> ApiResult<Ack> {
        tracing::debug!(%id, "deleting content");
        self.send(self.request(Method::DELETE, &format!("/api/contents/{id}")))
            .await
    }

    async fn fetch_images(&self, id: &ContentId) -> ApiResult<Vec<StoredImage>> {
        tracing::debug!(%id, "fetching images");
        let envelope: ImagesEnvelope = self
            .send(self.request(Method::GET, &format!("/api/contents/{id}/images")))
            .await?;
        Ok(envelope.images)
    }

    async fn upload_image(&self, id: &ContentId, image: &ImageUpload) -> ApiResult<Ack> {
        tracing::debug!(%id, filename = %image.filename, "uploading image");
        let part = Part::bytes(image.bytes.to_vec())
            .file_name(image.filename.clone())
            .mime_str(&image.mime)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        self.send(
            self.request(Method::POST, &format!("/api/contents/{id}/images"))
                .multipart(form),
        )
        .await
    }

    async fn delete_image(&self, id: &ImageId) -> ApiResult<Ack> {
        tracing::debug!(%id, "deleting image");
        self.send(self.request(Method::DELETE, &format!("/api/images/{id}")))
            .await
    }

    async fn download(&self, path: &str) -> ApiResult<Vec<u8>> {
        let response = self.request(Method::GET, path).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: String::new(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
