// SPDX-License-Identifier: MPL-2.0
//! Content list screen.
//!
//! Lists the records fetched from the server and exposes the create, edit
//! and delete triggers. The list is re-fetched after every successful
//! mutation, so rows are never patched locally.

use crate::content::{ContentId, ContentSummary};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub i18n: &'a I18n,
}

/// Messages emitted by the list.
#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    New,
    Edit(ContentId),
    Delete(ContentId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Reload,
    OpenCreate,
    OpenEdit(ContentId),
    /// Ask for confirmation, then delete.
    ConfirmDelete(ContentId),
}

/// Loading state of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    rows: Vec<ContentSummary>,
    status: Status,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a reload as running; current rows stay on screen meanwhile.
    pub fn begin_load(&mut self) {
        self.status = Status::Loading;
    }

    pub fn loaded(&mut self, rows: Vec<ContentSummary>) {
        tracing::debug!(count = rows.len(), "content list loaded");
        self.rows = rows;
        self.status = Status::Ready;
    }

    pub fn load_failed(&mut self) {
        self.status = Status::Failed;
    }

    #[must_use]
    pub fn rows(&self) -> &[ContentSummary] {
        &self.rows
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Title of a listed record, used in confirmation prompts.
    #[must_use]
    pub fn title_of(&self, id: &ContentId) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| &row.id == id)
            .map(|row| row.title.as_str())
    }
}

/// Process a list message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Refresh => Event::Reload,
        Message::New => Event::OpenCreate,
        Message::Edit(id) => Event::OpenEdit(id),
        Message::Delete(id) => Event::ConfirmDelete(id),
    }
}

/// Render the list screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("list-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("list-refresh")).size(typography::BODY))
                .on_press(Message::Refresh)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("list-new")).size(typography::BODY))
                .on_press(Message::New)
                .style(styles::button::primary),
        );

    let body: Element<'_, Message> = match (ctx.state.status, ctx.state.rows.is_empty()) {
        (Status::Loading, true) => notice(ctx.i18n.tr("list-loading")),
        (Status::Failed, true) => notice(ctx.i18n.tr("list-load-failed")),
        (_, true) => notice(ctx.i18n.tr("list-empty")),
        (_, false) => {
            let rows = ctx
                .state
                .rows
                .iter()
                .fold(Column::new().spacing(spacing::XS), |column, row| {
                    column.push(build_row(row, ctx.i18n))
                });
            scrollable(rows).height(Length::Fill).into()
        }
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(body)
        .into()
}

fn notice<'a>(message: String) -> Element<'a, Message> {
    Text::new(message).size(typography::BODY).into()
}

fn build_row<'a>(row: &'a ContentSummary, i18n: &'a I18n) -> Element<'a, Message> {
    let mut meta = Vec::new();
    if let Some(author) = row.author.as_deref().filter(|a| !a.is_empty()) {
        meta.push(author.to_string());
    }
    let created = row.created_label();
    if !created.is_empty() {
        meta.push(created);
    }

    let info = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(row.title.as_str()).size(typography::BODY_LG))
        .push(Text::new(meta.join(" · ")).size(typography::CAPTION));

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("list-edit")).size(typography::BODY))
                .on_press(Message::Edit(row.id.clone()))
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("list-delete")).size(typography::BODY))
                .on_press(Message::Delete(row.id.clone()))
                .style(styles::button::danger),
        );

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(info)
            .push(actions),
    )
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}
