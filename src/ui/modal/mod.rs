// SPDX-License-Identifier: MPL-2.0
//! Content dialog controller.
//!
//! Owns the dialog's visibility, the record being edited, the field values,
//! the image staging list and the submission phase. There is a single
//! instance, held by the application; every close trigger goes through
//! [`State::close`] so the transient state is always reset the same way.
//!
//! A running submission outlives the dialog it was started from: closing
//! keeps the in-flight guard, and each open starts a new dialog session so
//! the late result can tell whether its dialog is still on screen.

mod view;

pub use view::{view, ViewContext};

use crate::content::{Content, ContentId, ImageId, StoredImage};
use crate::ui::content_form::{validate, SubmitPlan, SubmitRejected, Submission};
use crate::ui::staging::{Removal, StagingList};
use iced::widget::text_editor;

/// What closed the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The close or cancel button.
    Button,
    /// A click on the backdrop outside the dialog surface.
    OutsideClick,
    /// The Escape key.
    Escape,
    /// The content was saved.
    Saved,
}

/// Dialog visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    /// Waiting for the record and its images before showing the dialog.
    Loading,
    Open,
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    BodyEdited(text_editor::Action),
    AddImages,
    RemoveImage(usize),
    Submit,
    Close(CloseReason),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the file picker for up to `remaining` images.
    PickImages { remaining: usize },
    /// A saved image must be confirmed and deleted on the server.
    DeleteStoredImage(ImageId),
    /// Run the submission started from dialog `session`.
    Submit { session: u64, plan: SubmitPlan },
    /// The form was refused locally.
    Rejected(SubmitRejected),
    Closed(CloseReason),
}

/// Dialog state.
#[derive(Debug, Default)]
pub struct State {
    phase: Phase,
    edit_target: Option<ContentId>,
    title: String,
    body: String,
    staging: StagingList,
    submission: Submission,
    session: u64,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows an empty dialog for a new record.
    pub fn open_create(&mut self) {
        self.reset();
        self.phase = Phase::Open;
        tracing::debug!("content dialog opened for a new record");
    }

    /// Starts loading `id` for editing; the dialog stays hidden until
    /// [`State::finish_edit`] succeeds.
    pub fn begin_edit(&mut self, id: ContentId) {
        self.reset();
        tracing::debug!(%id, "loading content for editing");
        self.edit_target = Some(id);
        self.phase = Phase::Loading;
    }

    /// Populates the dialog with a loaded record and shows it.
    ///
    /// Returns `false` and changes nothing when `id` is no longer the record
    /// being loaded.
    pub fn finish_edit(&mut self, id: &ContentId, content: Content, images: Vec<StoredImage>) -> bool {
        if !self.is_loading(id) {
            tracing::debug!(%id, "discarding stale content response");
            return false;
        }

        self.title = content.title;
        self.body = content.body;
        self.staging.replace_with_stored(images);
        self.phase = Phase::Open;
        tracing::debug!(%id, images = self.staging.len(), "content dialog opened for editing");
        true
    }

    /// Abandons loading `id` after a failed fetch.
    ///
    /// Returns `false` when `id` is no longer the record being loaded.
    pub fn edit_failed(&mut self, id: &ContentId) -> bool {
        if !self.is_loading(id) {
            return false;
        }
        self.reset();
        true
    }

    /// Hides the dialog and forgets the edit target, fields and images.
    pub fn close(&mut self, reason: CloseReason) {
        if self.phase != Phase::Hidden {
            tracing::debug!(?reason, target = ?self.edit_target, "content dialog closed");
        }
        self.reset();
    }

    /// Validates the form and enters the submitting phase.
    ///
    /// The in-flight guard runs first, so a double submit never reaches
    /// validation or the network.
    pub fn prepare_submit(&mut self) -> Result<SubmitPlan, SubmitRejected> {
        if self.submission.is_submitting() {
            tracing::debug!("submit ignored, a submission is already running");
            return Err(SubmitRejected::InFlight);
        }

        let draft = validate(&self.title, &self.body).map_err(SubmitRejected::Invalid)?;
        self.submission.begin()?;

        Ok(SubmitPlan {
            target: self.edit_target.clone(),
            draft,
            uploads: self.staging.pending_uploads(),
        })
    }

    /// Records the outcome of the submission started from dialog `session`.
    ///
    /// The in-flight guard is always released. A success closes the dialog
    /// only when it is still the one the submission came from; returns
    /// `false` when that dialog has been closed since.
    pub fn submit_finished(&mut self, session: u64, succeeded: bool) -> bool {
        self.submission.finish(succeeded);
        if session != self.session {
            tracing::debug!(session, current = self.session, "submission finished for a closed dialog");
            return false;
        }
        if succeeded {
            self.close(CloseReason::Saved);
        }
        true
    }

    fn reset(&mut self) {
        self.phase = Phase::Hidden;
        self.edit_target = None;
        self.title.clear();
        self.body.clear();
        self.staging.clear();
        self.session = self.session.wrapping_add(1);
        if !self.submission.is_submitting() {
            self.submission.reset();
        }
    }

    fn is_loading(&self, id: &ContentId) -> bool {
        self.phase == Phase::Loading && self.edit_target.as_ref() == Some(id)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Identifies the current dialog; changes on every open and close.
    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    #[must_use]
    pub fn edit_target(&self) -> Option<&ContentId> {
        self.edit_target.as_ref()
    }

    /// i18n key of the dialog header.
    #[must_use]
    pub fn header_key(&self) -> &'static str {
        if self.edit_target.is_some() {
            "modal-title-edit"
        } else {
            "modal-title-new"
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: String) {
        self.body = body;
    }

    #[must_use]
    pub fn staging(&self) -> &StagingList {
        &self.staging
    }

    pub fn staging_mut(&mut self) -> &mut StagingList {
        &mut self.staging
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }
}

/// Process a dialog message and return the corresponding event.
///
/// `editor` is the text editor backing the body field; its text is copied
/// into the state after each edit.
pub fn update(state: &mut State, editor: &mut text_editor::Content, message: Message) -> Event {
    match message {
        Message::TitleChanged(title) => {
            state.set_title(title);
            Event::None
        }
        Message::BodyEdited(action) => {
            let is_edit = action.is_edit();
            editor.perform(action);
            if is_edit {
                state.set_body(editor.text());
            }
            Event::None
        }
        Message::AddImages => Event::PickImages {
            remaining: state.staging().remaining(),
        },
        Message::RemoveImage(index) => match state.staging_mut().remove(index) {
            Removal::NeedsServerDelete(id) => Event::DeleteStoredImage(id),
            Removal::Removed | Removal::AlreadyPending | Removal::OutOfRange => Event::None,
        },
        Message::Submit => match state.prepare_submit() {
            Ok(plan) => Event::Submit {
                session: state.session(),
                plan,
            },
            Err(rejected) => Event::Rejected(rejected),
        },
        Message::Close(reason) => {
            state.close(reason);
            Event::Closed(reason)
        }
    }
}
