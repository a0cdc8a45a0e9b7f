// SPDX-License-Identifier: MPL-2.0
//! Content dialog rendering.

use super::{CloseReason, Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::staging::{PreviewTile, MAX_IMAGES};
use crate::ui::styles;
use iced::widget::{
    button, center, container, image, mouse_area, opaque, text, text_editor, text_input, Column,
    Container, Row, Space, Text,
};
use iced::{alignment::Vertical, ContentFit, Element, Length};

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub state: &'a State,
    /// Editor backing the body field.
    pub editor: &'a text_editor::Content,
    pub i18n: &'a I18n,
}

/// Renders the dialog layer: a dimmed backdrop with the form centered on it.
///
/// Clicks on the backdrop close the dialog; clicks on the form surface are
/// swallowed so they never reach the backdrop.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = Column::new()
        .spacing(spacing::MD)
        .push(build_header(&ctx))
        .push(build_fields(&ctx))
        .push(build_images(&ctx))
        .push(build_footer(&ctx));

    let card = Container::new(form)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel);

    opaque(
        mouse_area(center(opaque(card)).style(styles::container::backdrop))
            .on_press(Message::Close(CloseReason::OutsideClick)),
    )
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new("×").size(typography::TITLE_SM))
        .on_press(Message::Close(CloseReason::Button))
        .padding([0.0, spacing::XS])
        .style(styles::button::secondary);

    Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr(ctx.state.header_key())).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(close)
        .into()
}

fn build_fields<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text_input(&ctx.i18n.tr("modal-title-placeholder"), ctx.state.title())
        .on_input(Message::TitleChanged)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let body = text_editor(ctx.editor)
        .placeholder(ctx.i18n.tr("modal-body-placeholder"))
        .on_action(Message::BodyEdited)
        .padding(spacing::XS)
        .size(typography::BODY)
        .height(Length::Fixed(sizing::EDITOR_HEIGHT));

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("modal-title-label")).size(typography::BODY_SM))
        .push(title)
        .push(Text::new(ctx.i18n.tr("modal-body-label")).size(typography::BODY_SM))
        .push(body)
        .into()
}

fn build_images<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let staging = ctx.state.staging();
    let count = staging.occupied().to_string();
    let max = MAX_IMAGES.to_string();
    let label = ctx.i18n.tr_with_args(
        "modal-images-label",
        &[("count", count.as_str()), ("max", max.as_str())],
    );

    let can_add = staging.remaining() > 0 && !ctx.state.is_submitting();
    let add = button(Text::new(ctx.i18n.tr("modal-add-images")).size(typography::BODY))
        .on_press_maybe(can_add.then_some(Message::AddImages))
        .style(styles::button::secondary);

    let tiles = staging
        .render()
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, tile| {
            row.push(build_tile(tile))
        });

    let mut section = Column::new().spacing(spacing::XS).push(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(label).size(typography::BODY_SM))
            .push(Space::new().width(Length::Fill))
            .push(add),
    );

    if staging.is_decoding() {
        section = section.push(Text::new(ctx.i18n.tr("modal-images-loading")).size(typography::CAPTION));
    }

    section.push(tiles).into()
}

fn build_tile<'a>(tile: PreviewTile) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match tile.thumbnail {
        Some(handle) => image(handle)
            .width(Length::Fixed(sizing::PREVIEW_TILE))
            .height(Length::Fixed(sizing::PREVIEW_TILE))
            .content_fit(ContentFit::Cover)
            .into(),
        // Remote thumbnail not downloaded yet
        None => center(text(tile.filename.clone()).size(typography::CAPTION))
            .width(Length::Fixed(sizing::PREVIEW_TILE))
            .height(Length::Fixed(sizing::PREVIEW_TILE))
            .into(),
    };

    let delete = button(Text::new("×").size(typography::BODY))
        .on_press(Message::RemoveImage(tile.index))
        .padding([0.0, spacing::XXS])
        .style(styles::button::danger);

    let caption = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(
            Container::new(text(tile.filename).size(typography::CAPTION))
                .width(Length::Fill)
                .clip(true),
        )
        .push(delete);

    container(
        Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fixed(sizing::PREVIEW_TILE))
            .push(preview)
            .push(caption),
    )
    .padding(spacing::XXS)
    .style(styles::container::preview_tile(tile.saved))
    .into()
}

fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let submitting = ctx.state.is_submitting();

    let cancel = button(Text::new(ctx.i18n.tr("modal-cancel")).size(typography::BODY))
        .on_press(Message::Close(CloseReason::Button))
        .style(styles::button::secondary);

    let submit_label = if submitting {
        ctx.i18n.tr("modal-submitting")
    } else {
        ctx.i18n.tr("modal-submit")
    };
    let submit = button(Text::new(submit_label).size(typography::BODY))
        .on_press_maybe((!submitting).then_some(Message::Submit))
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(cancel)
        .push(submit)
        .into()
}
