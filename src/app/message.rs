// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{Ack, ApiResult, HttpClient};
use crate::app::config::Config;
use crate::content::{Content, ContentId, ContentSummary, ImageId, StoredImage};
use crate::error::{Error, ImageError};
use crate::ui::content_form::{SubmitFailure, SubmitReport};
use crate::ui::content_list;
use crate::ui::modal;
use crate::ui::notifications;
use crate::ui::staging::StagedImage;
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    List(content_list::Message),
    Modal(modal::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification expiry
    EscapePressed,
    ContentsLoaded(ApiResult<Vec<ContentSummary>>),
    /// Record and images fetched for the edit flow.
    EditLoaded {
        id: ContentId,
        result: ApiResult<(Content, Vec<StoredImage>)>,
    },
    /// Thumbnail of a stored image downloaded and decoded.
    ThumbnailLoaded {
        id: ImageId,
        path: String,
        result: Result<Handle, Error>,
    },
    /// Result from the image file picker; `None` when cancelled.
    ImagesPicked(Option<Vec<PathBuf>>),
    /// A picked file was read and its preview decoded.
    PreviewDecoded {
        session: u64,
        path: PathBuf,
        result: Result<StagedImage, ImageError>,
    },
    DeleteImageConfirmed {
        id: ImageId,
        confirmed: bool,
    },
    ImageDeleted {
        id: ImageId,
        result: ApiResult<Ack>,
    },
    DeleteContentConfirmed {
        id: ContentId,
        confirmed: bool,
    },
    ContentDeleted {
        id: ContentId,
        result: ApiResult<Ack>,
    },
    /// Outcome of the submission started from dialog `session`.
    Submitted {
        session: u64,
        result: Result<SubmitReport, SubmitFailure>,
    },
    /// A blocking alert was dismissed.
    AlertClosed,
}

/// Everything the application needs at startup, prepared by the launcher.
#[derive(Debug)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Loaded configuration, with CLI overrides already applied.
    pub config: Config,
    /// i18n key of a warning raised while loading the configuration.
    pub config_warning: Option<String>,
    /// Client for the configured content server.
    pub api: HttpClient,
}
