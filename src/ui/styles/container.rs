// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the content dialog and the list rows.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed layer covering the window while the dialog is open.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theming::backdrop(theme))),
        ..Default::default()
    }
}

/// Frame around an image preview; saved images get the brand accent.
pub fn preview_tile(saved: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let weak = theme.extended_palette().background.weak.color;
        container::Style {
            background: Some(Background::Color(weak)),
            border: Border {
                color: if saved {
                    palette::PRIMARY_500
                } else {
                    palette::GRAY_400
                },
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_tile_border_marks_saved_images() {
        let theme = Theme::Dark;
        assert_eq!(preview_tile(true)(&theme).border.color, palette::PRIMARY_500);
        assert_eq!(preview_tile(false)(&theme).border.color, palette::GRAY_400);
    }

    #[test]
    fn backdrop_has_background() {
        assert!(backdrop(&Theme::Light).background.is_some());
    }
}
