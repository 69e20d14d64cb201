pub mod error;
pub mod menu;
pub mod message;
pub mod state;
pub mod view;

pub use message::Message;

use iced::Task;

use worknet_ui::widget::Element;

use crate::services::portal::{api, backend::BackendClient};
use menu::Menu;
use state::{FeedPanel, JobsPanel, NetworkPanel, NotificationsPanel, SettingsPanel, State};

struct Panels {
    feed: FeedPanel,
    jobs: JobsPanel,
    network: NetworkPanel,
    notifications: NotificationsPanel,
    settings: SettingsPanel,
}

impl Panels {
    fn new(profile: api::Profile) -> Self {
        Self {
            feed: FeedPanel::new(),
            jobs: JobsPanel::new(profile.job_role),
            network: NetworkPanel::new(profile.id),
            notifications: NotificationsPanel::new(),
            settings: SettingsPanel::new(profile),
        }
    }

    fn current(&self, menu: Menu) -> &dyn State {
        match menu {
            Menu::Feed => &self.feed,
            Menu::Jobs => &self.jobs,
            Menu::Network => &self.network,
            Menu::Notifications => &self.notifications,
            Menu::Settings => &self.settings,
        }
    }

    fn current_mut(&mut self, menu: Menu) -> &mut dyn State {
        match menu {
            Menu::Feed => &mut self.feed,
            Menu::Jobs => &mut self.jobs,
            Menu::Network => &mut self.network,
            Menu::Notifications => &mut self.notifications,
            Menu::Settings => &mut self.settings,
        }
    }
}

/// The authenticated area: a menu of panels over the backend client.
pub struct App {
    backend: BackendClient,
    menu: Menu,
    panels: Panels,
    unread: u32,
}

impl App {
    pub fn new(backend: BackendClient, profile: api::Profile) -> (Self, Task<Message>) {
        let mut app = Self {
            backend,
            menu: Menu::Feed,
            panels: Panels::new(profile),
            unread: 0,
        };
        let startup = Task::batch(vec![
            app.panels.feed.reload(&app.backend),
            app.fetch_unread(),
        ]);
        (app, startup)
    }

    fn fetch_unread(&self) -> Task<Message> {
        let backend = self.backend.clone();
        Task::perform(
            async move { backend.unread_count().await },
            Message::UnreadCount,
        )
    }

    /// Periodic refresh of the unread notifications badge.
    pub fn on_tick(&mut self) -> Task<Message> {
        self.fetch_unread()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Menu(menu)) => {
                self.menu = menu;
                self.panels.current_mut(menu).reload(&self.backend)
            }
            Message::View(view::Message::Reload) => {
                self.panels.current_mut(self.menu).reload(&self.backend)
            }
            Message::View(view::Message::Logout) => {
                Task::perform(async {}, |_| Message::Logout)
            }
            // Handled by the upper level.
            Message::Logout => Task::none(),
            Message::Tick => self.fetch_unread(),
            Message::UnreadCount(res) => {
                match res {
                    Ok(count) => self.unread = count,
                    Err(e) => tracing::warn!("Failed to fetch the unread count: {}", e),
                }
                if self.backend.is_unauthenticated() {
                    return Task::perform(async {}, |_| Message::Logout);
                }
                Task::none()
            }
            message => {
                let refresh_badge = matches!(
                    message,
                    Message::NotificationRead(..) | Message::AllNotificationsRead(..)
                );
                let task = self.panels.current_mut(self.menu).update(&self.backend, message);
                // A 401 latched by any call means the session is dead.
                if self.backend.is_unauthenticated() {
                    tracing::warn!("Session rejected by the backend, forcing logout");
                    return Task::perform(async {}, |_| Message::Logout);
                }
                if refresh_badge {
                    return Task::batch(vec![task, self.fetch_unread()]);
                }
                task
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        view::dashboard(
            &self.menu,
            self.backend.user_email(),
            self.unread,
            self.panels.current(self.menu).view(),
        )
        .map(Message::View)
    }
}
