// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The content list is always rendered; the content dialog and the toast
//! overlay are stacked on top of it when present.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::content_list;
use crate::ui::modal;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{stack, text_editor, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub list: &'a content_list::State,
    pub modal: &'a modal::State,
    pub body_editor: &'a text_editor::Content,
    pub notifications: &'a Manager,
}

/// Renders the list with the dialog and toasts layered above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let list = content_list::view(content_list::ViewContext {
        state: ctx.list,
        i18n: ctx.i18n,
    })
    .map(Message::List);

    let base = Container::new(list)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![base].width(Length::Fill).height(Length::Fill);

    if ctx.modal.is_visible() {
        layers = layers.push(
            modal::view(modal::ViewContext {
                state: ctx.modal,
                editor: ctx.body_editor,
                i18n: ctx.i18n,
            })
            .map(Message::Modal),
        );
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.into()
}
