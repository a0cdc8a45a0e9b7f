// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the content list, the
//! content dialog and the toast notifications.
//!
//! The `App` struct wires together the components and the content server
//! client, and translates component events into side effects such as API
//! calls and native dialogs. Only one content dialog exists; it is shown on
//! top of the list whenever a record is being created or edited.

pub mod config;
mod dialogs;
mod message;
pub mod paths;
mod subscription;
mod tasks;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::HttpClient;
use crate::i18n::fluent::I18n;
use crate::ui::content_list;
use crate::ui::modal;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::widget::text_editor;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    api: HttpClient,
    theme_mode: ThemeMode,
    list: content_list::State,
    modal: modal::State,
    /// Editor backing the dialog's body field.
    body_editor: text_editor::Content,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("server", &self.api.base_url())
            .field("rows", &self.list.rows().len())
            .field("modal", &self.modal.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn requirement of
    // iced 0.14 while only consuming them once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and starts loading the content list.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            config,
            config_warning,
            api,
        } = flags;

        let mut app = App {
            i18n: I18n::new(lang, &config),
            api,
            theme_mode: config.general.theme_mode,
            list: content_list::State::new(),
            modal: modal::State::new(),
            body_editor: text_editor::Content::new(),
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::error(key));
        }

        tracing::info!(server = app.api.base_url(), "content admin started");
        let task = update::reload_contents(&mut app.context());
        (app, task)
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            api: &self.api,
            list: &mut self.list,
            modal: &mut self.modal,
            body_editor: &mut self.body_editor,
            notifications: &mut self.notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        if self.modal.is_visible() {
            format!("{} - {app_name}", self.i18n.tr(self.modal.header_key()))
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.modal.is_visible());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::List(list_message) => update::handle_list_message(&mut ctx, list_message),
            Message::Modal(modal_message) => {
                update::handle_modal_message(&mut ctx, modal_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.tick_at(now);
                Task::none()
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::ContentsLoaded(result) => update::handle_contents_loaded(&mut ctx, result),
            Message::EditLoaded { id, result } => update::handle_edit_loaded(&mut ctx, id, result),
            Message::ThumbnailLoaded { id, path, result } => {
                update::handle_thumbnail_loaded(&mut ctx, id, path, result)
            }
            Message::ImagesPicked(files) => update::handle_images_picked(&mut ctx, files),
            Message::PreviewDecoded {
                session,
                path,
                result,
            } => update::handle_preview_decoded(&mut ctx, session, path, result),
            Message::DeleteImageConfirmed { id, confirmed } => {
                update::handle_delete_image_confirmed(&mut ctx, id, confirmed)
            }
            Message::ImageDeleted { id, result } => {
                update::handle_image_deleted(&mut ctx, id, result)
            }
            Message::DeleteContentConfirmed { id, confirmed } => {
                update::handle_delete_content_confirmed(&mut ctx, id, confirmed)
            }
            Message::ContentDeleted { id, result } => {
                update::handle_content_deleted(&mut ctx, id, result)
            }
            Message::Submitted { session, result } => {
                update::handle_submitted(&mut ctx, session, result)
            }
            Message::AlertClosed => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            list: &self.list,
            modal: &self.modal,
            body_editor: &self.body_editor,
            notifications: &self.notifications,
        })
    }
}
