use iced::{Alignment, Length};

use worknet_ui::{
    component::{button, text::*},
    theme,
    widget::*,
};

use super::{
    message::{Message, NotificationsMessage},
    warn,
};
use crate::app::error::Error;
use crate::services::portal::api;

pub fn notifications_view<'a>(
    notifications: &'a [api::Notification],
    warning: Option<&'a Error>,
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(10);
    if notifications.is_empty() {
        list = list.push(text("No notifications.").style(theme::text::secondary));
    }
    for notification in notifications {
        let card = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                Column::new()
                    .spacing(5)
                    .push(if notification.is_read {
                        p2_regular(&notification.message).style(theme::text::secondary)
                    } else {
                        p2_medium(&notification.message)
                    })
                    .push(
                        caption(notification.created_at.format("%b %d, %Y %H:%M"))
                            .style(theme::text::secondary),
                    )
                    .width(Length::Fill),
            )
            .push_maybe(if notification.is_read {
                None
            } else {
                Some(
                    button::secondary(None, "Mark read").on_press(Message::Notifications(
                        NotificationsMessage::MarkRead(notification.id),
                    )),
                )
            });
        list = list.push(
            Container::new(card)
                .padding(15)
                .style(if notification.is_read {
                    theme::card::border
                } else {
                    theme::card::simple
                }),
        );
    }

    Column::new()
        .spacing(20)
        .push(warn(warning))
        .push(
            Row::new()
                .align_y(Alignment::Center)
                .push(h3("Notifications").width(Length::Fill))
                .push(
                    button::secondary(None, "Mark all read")
                        .on_press(Message::Notifications(NotificationsMessage::MarkAllRead)),
                ),
        )
        .push(list)
        .into()
}
