// SPDX-License-Identifier: MPL-2.0

use crate::config::Config;
use crate::fl;
use crate::pages;
use crate::shades::{self, Shade};
use crate::widgets::chip_group::{ChipGroupMessage, ChipGroupState, ChipMetrics};
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, about::About, icon, menu, nav_bar};
use std::collections::HashMap;

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const APP_ICON: &[u8] = include_bytes!("../resources/icons/hicolor/scalable/apps/icon.svg");

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Contains items assigned to the nav bar panel.
    nav: nav_bar::Model,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Cosmic config context for saving
    config_context: Option<cosmic_config::Config>,

    // === App-specific state ===
    /// The showcased chip group
    pub chips: ChipGroupState<Shade>,
    /// Metrics used to measure and draw the chips
    pub metrics: ChipMetrics,
    /// Active notifications to display
    pub notifications: Vec<Notification>,
    /// Counter for generating unique notification IDs
    pub notification_id_counter: u32,
}

/// Notification level/type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A notification message to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u32,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation & UI
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),

    // Chip group
    Chips(ChipGroupMessage),
    Shuffle,
    AddChip,
    RemoveChip,
    CopyChecked,
    Copied(Result<(), String>),

    // Settings
    SetMaxRows(Option<u32>),
    SetSpacing(u16),
    SetInitiallyCollapsed(bool),
    SetSingleSelection(bool),
    SetShowControlIcons(bool),
    SetCountedControlLabels(bool),

    // Notifications
    AddNotification(NotificationLevel, String, String),
    DismissNotification(u32),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "dev.hojjatabdollahi.Chipfold";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create a nav bar with two pages: Showcase and Settings
        let mut nav = nav_bar::Model::default();

        nav.insert()
            .text(fl!("showcase"))
            .data::<Page>(Page::Showcase)
            .icon(icon::from_name("view-grid-symbolic"))
            .activate();

        nav.insert()
            .text(fl!("settings"))
            .data::<Page>(Page::Settings)
            .icon(icon::from_name("preferences-system-symbolic"));

        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let config_context = cosmic_config::Config::new(Self::APP_ID, Config::VERSION).ok();
        let config = config_context
            .as_ref()
            .map(|context| match Config::get_entry(context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    for error in errors {
                        tracing::warn!(%error, "invalid config entry, using default");
                    }
                    config
                }
            })
            .unwrap_or_default();

        let mut chips = ChipGroupState::default();
        config.apply_to(&mut chips);
        chips.set_chips(shades::shuffled(shades::INITIAL_COUNT));

        // Construct the app model with the runtime's core.
        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            nav,
            key_binds: HashMap::new(),
            config,
            config_context,
            chips,
            metrics: ChipMetrics::default(),
            notifications: Vec::new(),
            notification_id_counter: 0,
        };

        // Create a startup command that sets the window title.
        let command = app.update_title();

        (app, command)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![menu::Item::Button(fl!("about"), None, MenuAction::About)],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Enables the COSMIC application to create a nav bar with this model.
    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(&self.nav)
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let space_m = cosmic::theme::spacing().space_m;

        let page_content: Element<_> =
            match self.nav.active_data::<Page>().unwrap_or(&Page::Showcase) {
                Page::Showcase => pages::showcase::view(self, space_s, space_m),
                Page::Settings => pages::settings::view(self, space_s, space_m),
            };

        let mut content_column = widget::column::with_capacity(2).spacing(space_s);

        if !self.notifications.is_empty() {
            let notifications_row = widget::row::with_children(
                self.notifications
                    .iter()
                    .map(pages::widgets::notification_toast),
            )
            .spacing(space_s);
            content_column = content_column.push(notifications_row);
        }

        content_column = content_column.push(page_content);

        widget::container(content_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(space_m)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for application configuration changes.
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                // Our own writes come back through the watcher; only external
                // edits need to reach the chip group.
                if config != self.config {
                    tracing::debug!(?config, "config changed on disk");
                    self.config = config;
                    self.apply_config();
                }
            }

            Message::LaunchUrl(url) => match open::that_detached(&url) {
                Ok(()) => {}
                Err(err) => {
                    tracing::warn!(%url, %err, "failed to open url");
                }
            },

            // Chip group
            Message::Chips(message) => {
                self.chips.update(message);
            }

            Message::Shuffle => {
                let mut chips = self.chips.chips().to_vec();
                shades::shuffle(&mut chips);
                self.chips.set_chips(chips);
            }

            Message::AddChip => {
                let mut chips = self.chips.chips().to_vec();
                if let Some(shade) = shades::next_unused(&chips) {
                    chips.push(shades::chip(shade));
                    self.chips.set_chips(chips);
                }
            }

            Message::RemoveChip => {
                let mut chips = self.chips.chips().to_vec();
                if chips.pop().is_some() {
                    self.chips.set_chips(chips);
                }
            }

            Message::CopyChecked => {
                if let Some(chip) = self.chips.checked_chip() {
                    let text = format!("{} {}", chip.data.name, chip.data.hex);
                    return cosmic::task::future(async move {
                        let result = arboard::Clipboard::new()
                            .and_then(|mut clipboard| clipboard.set_text(text))
                            .map_err(|err| err.to_string());
                        cosmic::Action::App(Message::Copied(result))
                    });
                }
            }

            Message::Copied(result) => {
                return match result {
                    Ok(()) => self.update(Message::AddNotification(
                        NotificationLevel::Success,
                        fl!("copied"),
                        String::new(),
                    )),
                    Err(err) => {
                        tracing::warn!(%err, "clipboard write failed");
                        self.update(Message::AddNotification(
                            NotificationLevel::Error,
                            fl!("copy-failed"),
                            err,
                        ))
                    }
                };
            }

            // Settings
            Message::SetMaxRows(max_rows) => {
                self.config.max_rows = max_rows;
                return self.save_config();
            }

            Message::SetSpacing(spacing) => {
                self.config.spacing = spacing;
                return self.save_config();
            }

            Message::SetInitiallyCollapsed(collapsed) => {
                self.config.initially_collapsed = collapsed;
                return self.save_config();
            }

            Message::SetSingleSelection(single) => {
                self.config.single_selection = single;
                return self.save_config();
            }

            Message::SetShowControlIcons(show) => {
                self.config.show_control_icons = show;
                return self.save_config();
            }

            Message::SetCountedControlLabels(counted) => {
                self.config.counted_control_labels = counted;
                return self.save_config();
            }

            // Notifications
            Message::AddNotification(level, title, message) => {
                self.notification_id_counter += 1;
                self.notifications.push(Notification {
                    id: self.notification_id_counter,
                    level,
                    title,
                    message,
                });
            }

            Message::DismissNotification(id) => {
                self.notifications.retain(|n| n.id != id);
            }
        }
        Task::none()
    }

    /// Called when a nav item is selected.
    fn on_nav_select(&mut self, id: nav_bar::Id) -> Task<cosmic::Action<Self::Message>> {
        self.nav.activate(id);
        self.update_title()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let mut window_title = fl!("app-title");

        if let Some(page) = self.nav.text(self.nav.active()) {
            window_title.push_str(" — ");
            window_title.push_str(page);
        }

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Rebuilds the chip group configuration from the app config.
    fn apply_config(&mut self) {
        self.config.apply_to(&mut self.chips);
    }

    /// Applies the config to the chip group and writes it to disk.
    fn save_config(&mut self) -> Task<cosmic::Action<Message>> {
        self.apply_config();

        let Some(ref context) = self.config_context else {
            return Task::none();
        };

        match self.config.write_entry(context) {
            Ok(()) => {
                tracing::info!(config = ?self.config, "settings saved");
                Task::none()
            }
            Err(err) => {
                tracing::error!(%err, "failed to save settings");
                self.update(Message::AddNotification(
                    NotificationLevel::Error,
                    fl!("settings-save-failed"),
                    err.to_string(),
                ))
            }
        }
    }
}

/// The page to display in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Showcase,
    Settings,
}

/// The context page to display in the context drawer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    About,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
        }
    }
}
