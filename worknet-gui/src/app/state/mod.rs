mod feed;
mod jobs;
mod network;
mod notifications;
mod settings;

use iced::Task;

use worknet_ui::widget::Element;

use super::{message::Message, view};
use crate::services::portal::backend::BackendClient;

pub use feed::FeedPanel;
pub use jobs::{JobsPanel, NewJobForm, JOB_TYPES};
pub use network::NetworkPanel;
pub use notifications::NotificationsPanel;
pub use settings::SettingsPanel;

pub trait State {
    fn view<'a>(&'a self) -> Element<'a, view::Message>;
    fn update(&mut self, _backend: &BackendClient, _message: Message) -> Task<Message> {
        Task::none()
    }
    /// Refresh the panel content from the backend, called every time the
    /// panel becomes the active one.
    fn reload(&mut self, _backend: &BackendClient) -> Task<Message> {
        Task::none()
    }
}
