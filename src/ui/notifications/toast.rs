// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with a severity-colored accent and a dismiss button. During
//! the exit transition they fade out while sliding towards the right edge.

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Distance a leaving toast travels before it disappears.
const EXIT_SLIDE: f32 = 40.0;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let visibility = visibility(notification.phase());
        let accent_color = fade(severity.color(), visibility);

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let glyph = Text::new(severity.glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget =
            Text::new(message_text)
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(fade(theme.palette().text, visibility)),
                });

        let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XXS])
            .style(dismiss_button_style);

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, visibility));

        // The slot's right gutter closes while leaving, moving the card towards the edge
        let slide = (1.0 - visibility) * EXIT_SLIDE;
        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH + EXIT_SLIDE))
            .align_x(alignment::Horizontal::Right)
            .padding(Padding {
                right: EXIT_SLIDE - slide,
                ..Padding::ZERO
            })
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Opacity factor for a lifetime phase.
fn visibility(phase: Phase) -> f32 {
    match phase {
        Phase::Showing => opacity::OPAQUE,
        Phase::Leaving { progress } => (1.0 - progress).clamp(0.0, 1.0),
        Phase::Expired => opacity::TRANSPARENT,
    }
}

fn fade(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, visibility: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, visibility))),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, visibility * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, visibility)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        _ => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn leaving_toasts_fade_out() {
        assert_eq!(visibility(Phase::Showing), 1.0);
        assert!((visibility(Phase::Leaving { progress: 0.25 }) - 0.75).abs() < f32::EPSILON);
        assert_eq!(visibility(Phase::Expired), 0.0);

        let faded = fade(palette::ERROR_500, 0.5);
        assert!((faded.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn dismiss_button_only_fills_on_interaction() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }
}
