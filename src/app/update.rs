// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are forwarded to their component, which answers with an
//! event; the handlers here turn those events into API calls, native dialogs
//! and toasts. Every API call runs as a `Task` and reports back through a
//! dedicated [`Message`] variant.

use super::{dialogs, tasks, Message};
use crate::api::{Ack, ApiError, ApiResult, ContentApi, HttpClient};
use crate::content::{Content, ContentId, ContentSummary, ImageId, StoredImage};
use crate::error::{Error, ImageError};
use crate::i18n::fluent::I18n;
use crate::ui::content_form::{
    self, FailedStage, SubmitFailure, SubmitRejected, SubmitReport,
};
use crate::ui::content_list::{self, Event as ListEvent};
use crate::ui::modal::{self, CloseReason, Event as ModalEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::staging::{load_preview, StagedImage, MAX_IMAGES};
use iced::widget::image::Handle;
use iced::widget::text_editor;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub api: &'a HttpClient,
    pub list: &'a mut content_list::State,
    pub modal: &'a mut modal::State,
    /// Editor backing the dialog's body field.
    pub body_editor: &'a mut text_editor::Content,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Translates an API error for display.
    fn api_error_text(&self, error: &ApiError) -> String {
        let detail = error.detail();
        self.i18n
            .tr_with_args(error.i18n_key(), &[("detail", detail.as_str())])
    }

    /// Shows a blocking error alert.
    fn alert(&self, description: String) -> Task<Message> {
        let title = self.i18n.tr("dialog-error-title");
        Task::perform(dialogs::alert(title, description), |()| {
            Message::AlertClosed
        })
    }

    /// Shows a blocking alert made of a context line and the API error.
    fn alert_api_error(&self, context_key: &str, error: &ApiError) -> Task<Message> {
        let description = format!("{}\n{}", self.i18n.tr(context_key), self.api_error_text(error));
        self.alert(description)
    }

    /// Pushes the server's acknowledgement message as a toast, if any.
    fn notify_server_message(&mut self, message: &str, fallback_key: Option<&str>) {
        if !message.trim().is_empty() {
            self.notifications.push(
                Notification::info("notification-server-message").with_arg("message", message),
            );
        } else if let Some(key) = fallback_key {
            self.notifications.push(Notification::info(key));
        }
    }

    fn reset_editor(&mut self) {
        *self.body_editor = text_editor::Content::with_text(self.modal.body());
    }
}

// =============================================================================
// Content list
// =============================================================================

/// Re-fetches the content list from the server.
pub fn reload_contents(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    tracing::debug!("reloading content list");
    ctx.list.begin_load();
    let api = ctx.api.clone();
    Task::perform(
        async move { api.list_contents().await },
        Message::ContentsLoaded,
    )
}

pub fn handle_contents_loaded(
    ctx: &mut UpdateContext<'_>,
    result: ApiResult<Vec<ContentSummary>>,
) -> Task<Message> {
    match result {
        Ok(rows) => ctx.list.loaded(rows),
        Err(error) => {
            tracing::warn!(%error, "content list could not be loaded");
            ctx.list.load_failed();
            let detail = error.detail();
            ctx.notifications
                .push(Notification::error(error.i18n_key()).with_arg("detail", detail));
        }
    }
    Task::none()
}

/// Handles content list messages.
pub fn handle_list_message(
    ctx: &mut UpdateContext<'_>,
    message: content_list::Message,
) -> Task<Message> {
    match content_list::update(message) {
        ListEvent::None => Task::none(),
        ListEvent::Reload => reload_contents(ctx),
        ListEvent::OpenCreate => {
            ctx.modal.open_create();
            ctx.reset_editor();
            Task::none()
        }
        ListEvent::OpenEdit(id) => {
            ctx.modal.begin_edit(id.clone());
            ctx.reset_editor();
            let api = ctx.api.clone();
            Task::perform(tasks::load_for_edit(api, id.clone()), move |result| {
                Message::EditLoaded {
                    id: id.clone(),
                    result,
                }
            })
        }
        ListEvent::ConfirmDelete(id) => {
            let title = ctx
                .list
                .title_of(&id)
                .map_or_else(|| id.to_string(), str::to_string);
            let question = ctx
                .i18n
                .tr_with_args("confirm-delete-content", &[("title", title.as_str())]);
            Task::perform(
                dialogs::confirm(ctx.i18n.tr("dialog-confirm-title"), question),
                move |confirmed| Message::DeleteContentConfirmed {
                    id: id.clone(),
                    confirmed,
                },
            )
        }
    }
}

pub fn handle_delete_content_confirmed(
    ctx: &mut UpdateContext<'_>,
    id: ContentId,
    confirmed: bool,
) -> Task<Message> {
    if !confirmed {
        return Task::none();
    }

    tracing::info!(%id, "deleting content");
    let api = ctx.api.clone();
    let target = id.clone();
    Task::perform(
        async move { api.delete_content(&target).await },
        move |result| Message::ContentDeleted {
            id: id.clone(),
            result,
        },
    )
}

pub fn handle_content_deleted(
    ctx: &mut UpdateContext<'_>,
    id: ContentId,
    result: ApiResult<Ack>,
) -> Task<Message> {
    match result {
        Ok(ack) => {
            tracing::info!(%id, "content deleted");
            ctx.notify_server_message(&ack.message, None);
            reload_contents(ctx)
        }
        Err(error) => {
            tracing::warn!(%id, %error, "content deletion failed");
            ctx.alert_api_error("alert-delete-content-failed", &error)
        }
    }
}

// =============================================================================
// Content dialog
// =============================================================================

/// Handles content dialog messages.
pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    match modal::update(ctx.modal, ctx.body_editor, message) {
        ModalEvent::None => Task::none(),
        ModalEvent::PickImages { remaining } => {
            if remaining == 0 {
                return Task::none();
            }
            Task::perform(
                dialogs::pick_images(
                    ctx.i18n.tr("picker-title"),
                    ctx.i18n.tr("picker-filter-images"),
                ),
                Message::ImagesPicked,
            )
        }
        ModalEvent::DeleteStoredImage(id) => {
            let filename = ctx
                .modal
                .staging()
                .entries()
                .iter()
                .find(|entry| entry.id() == Some(&id))
                .map_or_else(|| id.to_string(), |entry| entry.filename().to_string());
            let question = ctx
                .i18n
                .tr_with_args("confirm-delete-image", &[("filename", filename.as_str())]);
            Task::perform(
                dialogs::confirm(ctx.i18n.tr("dialog-confirm-title"), question),
                move |confirmed| Message::DeleteImageConfirmed {
                    id: id.clone(),
                    confirmed,
                },
            )
        }
        ModalEvent::Submit { session, plan } => {
            tracing::info!(
                target = ?plan.target,
                uploads = plan.uploads.len(),
                "submitting content"
            );
            Task::perform(
                content_form::execute(ctx.api.clone(), plan),
                move |result| Message::Submitted { session, result },
            )
        }
        ModalEvent::Rejected(SubmitRejected::Invalid(error)) => {
            tracing::debug!(%error, "submission rejected");
            ctx.alert(ctx.i18n.tr(error.i18n_key()))
        }
        ModalEvent::Rejected(SubmitRejected::InFlight) => Task::none(),
        ModalEvent::Closed(_) => {
            ctx.reset_editor();
            Task::none()
        }
    }
}

/// Closes the dialog on Escape.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.modal.is_visible() {
        return Task::none();
    }
    handle_modal_message(ctx, modal::Message::Close(CloseReason::Escape))
}

pub fn handle_edit_loaded(
    ctx: &mut UpdateContext<'_>,
    id: ContentId,
    result: ApiResult<(Content, Vec<StoredImage>)>,
) -> Task<Message> {
    match result {
        Ok((content, images)) => {
            if !ctx.modal.finish_edit(&id, content, images) {
                return Task::none();
            }
            ctx.reset_editor();

            let downloads = ctx
                .modal
                .staging()
                .missing_thumbnails()
                .into_iter()
                .map(|(image_id, path)| {
                    let api = ctx.api.clone();
                    Task::perform(
                        tasks::download_thumbnail(api, path.clone()),
                        move |result| Message::ThumbnailLoaded {
                            id: image_id.clone(),
                            path: path.clone(),
                            result,
                        },
                    )
                });
            Task::batch(downloads)
        }
        Err(error) => {
            tracing::warn!(%id, %error, "content could not be loaded for editing");
            if ctx.modal.edit_failed(&id) {
                ctx.alert_api_error("alert-load-content-failed", &error)
            } else {
                Task::none()
            }
        }
    }
}

pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    id: ImageId,
    path: String,
    result: Result<Handle, Error>,
) -> Task<Message> {
    match result {
        Ok(handle) => {
            if !ctx.modal.staging_mut().set_thumbnail(&id, handle) {
                tracing::debug!(%id, "discarding thumbnail of an image no longer listed");
            }
        }
        Err(error) => {
            tracing::warn!(%id, %path, %error, "thumbnail could not be loaded");
            let filename = ctx
                .modal
                .staging()
                .entries()
                .iter()
                .find(|entry| entry.id() == Some(&id))
                .map(|entry| entry.filename().to_string());
            if let Some(filename) = filename {
                ctx.notifications.push(
                    Notification::error("notification-thumbnail-failed")
                        .with_arg("filename", filename),
                );
            }
        }
    }
    Task::none()
}

/// Stages the picked files and starts decoding their previews.
pub fn handle_images_picked(
    ctx: &mut UpdateContext<'_>,
    files: Option<Vec<PathBuf>>,
) -> Task<Message> {
    let Some(files) = files.filter(|files| !files.is_empty()) else {
        return Task::none();
    };
    if !ctx.modal.is_visible() {
        return Task::none();
    }

    match ctx.modal.staging_mut().select(files) {
        Ok((session, paths)) => {
            tracing::debug!(session, count = paths.len(), "decoding picked images");
            Task::batch(paths.into_iter().map(move |path| {
                Task::perform(load_preview(path.clone()), move |result| {
                    Message::PreviewDecoded {
                        session,
                        path: path.clone(),
                        result,
                    }
                })
            }))
        }
        Err(rejected) => {
            let max = MAX_IMAGES.to_string();
            let current = rejected.current.to_string();
            let selected = rejected.selected.to_string();
            let description = ctx.i18n.tr_with_args(
                "selection-too-many",
                &[
                    ("max", max.as_str()),
                    ("current", current.as_str()),
                    ("selected", selected.as_str()),
                ],
            );
            ctx.alert(description)
        }
    }
}

pub fn handle_preview_decoded(
    ctx: &mut UpdateContext<'_>,
    session: u64,
    path: PathBuf,
    result: Result<StagedImage, ImageError>,
) -> Task<Message> {
    let staging = ctx.modal.staging_mut();
    match result {
        Ok(staged) => {
            if !staging.push_decoded(session, staged) {
                tracing::debug!(path = %path.display(), "discarding stale preview");
            }
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "picked file skipped");
            let current = session == staging.session();
            staging.release(session);
            if current {
                let filename = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
                ctx.notifications.push(
                    Notification::error("notification-image-skipped")
                        .with_arg("filename", filename)
                        .with_arg("detail", error.detail()),
                );
            }
        }
    }
    Task::none()
}

pub fn handle_delete_image_confirmed(
    ctx: &mut UpdateContext<'_>,
    id: ImageId,
    confirmed: bool,
) -> Task<Message> {
    if !confirmed {
        ctx.modal.staging_mut().cancel_removal(&id);
        return Task::none();
    }

    tracing::info!(%id, "deleting image");
    let api = ctx.api.clone();
    let target = id.clone();
    Task::perform(
        async move { api.delete_image(&target).await },
        move |result| Message::ImageDeleted {
            id: id.clone(),
            result,
        },
    )
}

pub fn handle_image_deleted(
    ctx: &mut UpdateContext<'_>,
    id: ImageId,
    result: ApiResult<Ack>,
) -> Task<Message> {
    match result {
        Ok(ack) => {
            // The dialog may have been closed while the call was running
            if ctx.modal.staging_mut().confirm_removed(&id) {
                tracing::info!(%id, "image deleted");
            }
            ctx.notify_server_message(&ack.message, None);
            Task::none()
        }
        Err(error) => {
            tracing::warn!(%id, %error, "image deletion failed");
            ctx.modal.staging_mut().cancel_removal(&id);
            ctx.alert_api_error("alert-delete-image-failed", &error)
        }
    }
}

/// Reports a finished submission.
///
/// Toasts, alerts and list reloads happen even when the dialog it came from
/// has been closed; only that dialog is ever closed by a success.
pub fn handle_submitted(
    ctx: &mut UpdateContext<'_>,
    session: u64,
    result: Result<SubmitReport, SubmitFailure>,
) -> Task<Message> {
    match result {
        Ok(report) => {
            tracing::info!(
                id = ?report.content_id,
                created = report.created,
                uploaded = report.uploaded,
                "content saved"
            );
            if ctx.modal.submit_finished(session, true) {
                ctx.reset_editor();
            }
            ctx.notify_server_message(&report.message, Some("notification-content-saved"));
            reload_contents(ctx)
        }
        Err(failure) => {
            tracing::warn!(
                stage = ?failure.stage,
                uploaded = failure.uploaded,
                error = %failure.error,
                "submission failed"
            );
            ctx.modal.submit_finished(session, false);
            let error_text = ctx.api_error_text(&failure.error);

            match &failure.stage {
                FailedStage::Content => {
                    let description = format!("{}\n{}", ctx.i18n.tr("alert-save-failed"), error_text);
                    let alert = ctx.alert(description);
                    if failure.error == ApiError::MissingId {
                        // The record was created even though its id is unknown
                        Task::batch([alert, reload_contents(ctx)])
                    } else {
                        alert
                    }
                }
                FailedStage::Upload { filename, .. } => {
                    // The record itself was saved, so the list is stale
                    let uploaded = failure.uploaded.to_string();
                    let context = ctx.i18n.tr_with_args(
                        "alert-upload-failed",
                        &[("filename", filename.as_str()), ("uploaded", uploaded.as_str())],
                    );
                    let alert = ctx.alert(format!("{context}\n{error_text}"));
                    Task::batch([alert, reload_contents(ctx)])
                }
            }
        }
    }
}
