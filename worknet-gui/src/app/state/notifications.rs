use iced::Task;

use worknet_ui::widget::Element;

use super::State;
use crate::app::{
    error::Error,
    message::Message,
    view::{self, message::NotificationsMessage},
};
use crate::services::portal::{api, backend::BackendClient};

pub struct NotificationsPanel {
    notifications: Vec<api::Notification>,
    warning: Option<Error>,
}

impl NotificationsPanel {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            warning: None,
        }
    }
}

impl State for NotificationsPanel {
    fn view<'a>(&'a self) -> Element<'a, view::Message> {
        view::notifications::notifications_view(&self.notifications, self.warning.as_ref())
    }

    fn update(&mut self, backend: &BackendClient, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Notifications(msg)) => match msg {
                NotificationsMessage::MarkRead(notification_id) => {
                    let backend = backend.clone();
                    return Task::perform(
                        async move {
                            (
                                notification_id,
                                backend.mark_notification_read(notification_id).await,
                            )
                        },
                        |(id, res)| Message::NotificationRead(id, res),
                    );
                }
                NotificationsMessage::MarkAllRead => {
                    let backend = backend.clone();
                    return Task::perform(
                        async move { backend.mark_all_notifications_read().await },
                        Message::AllNotificationsRead,
                    );
                }
            },
            Message::Notifications(res) => match res {
                Ok(notifications) => self.notifications = notifications,
                Err(e) => self.warning = Some(e.into()),
            },
            Message::NotificationRead(notification_id, res) => match res {
                Ok(()) => {
                    if let Some(notification) = self
                        .notifications
                        .iter_mut()
                        .find(|n| n.id == notification_id)
                    {
                        notification.is_read = true;
                    }
                }
                Err(e) => self.warning = Some(e.into()),
            },
            Message::AllNotificationsRead(res) => match res {
                Ok(()) => {
                    for notification in &mut self.notifications {
                        notification.is_read = true;
                    }
                }
                Err(e) => self.warning = Some(e.into()),
            },
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self, backend: &BackendClient) -> Task<Message> {
        self.warning = None;
        let backend = backend.clone();
        Task::perform(
            async move { backend.list_notifications().await },
            Message::Notifications,
        )
    }
}
