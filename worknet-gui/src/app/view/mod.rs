pub mod feed;
pub mod jobs;
pub mod message;
pub mod network;
pub mod notifications;
pub mod settings;

pub use message::Message;

use iced::{Alignment, Length};

use worknet_ui::{
    component::{button, notification, text::*},
    theme,
    widget::*,
};

use super::{error::Error, menu::Menu};

fn menu_button<'a>(current: &Menu, target: Menu, label: &'static str) -> Element<'a, Message> {
    if *current == target {
        button::menu_active(None, label)
            .on_press(Message::Reload)
            .width(Length::Fill)
            .into()
    } else {
        button::menu(None, label)
            .on_press(Message::Menu(target))
            .width(Length::Fill)
            .into()
    }
}

pub fn sidebar<'a>(menu: &Menu, email: &'a str, unread: u32) -> Container<'a, Message> {
    let notifications_label: Element<'a, Message> = if unread > 0 {
        Row::new()
            .spacing(5)
            .push(menu_button(menu, Menu::Notifications, "Notifications"))
            .push(p2_medium(unread).style(theme::text::warning))
            .align_y(Alignment::Center)
            .into()
    } else {
        menu_button(menu, Menu::Notifications, "Notifications")
    };

    Container::new(
        Column::new()
            .push(
                Container::new(h3("Worknet"))
                    .padding(10)
                    .align_x(Alignment::Center)
                    .width(Length::Fill),
            )
            .push(
                Column::new()
                    .spacing(5)
                    .push(menu_button(menu, Menu::Feed, "Feed"))
                    .push(menu_button(menu, Menu::Jobs, "Jobs"))
                    .push(menu_button(menu, Menu::Network, "Network"))
                    .push(notifications_label)
                    .height(Length::Fill),
            )
            .push(
                Column::new()
                    .spacing(5)
                    .push(caption(email).style(theme::text::secondary))
                    .push(menu_button(menu, Menu::Settings, "Settings"))
                    .push(
                        button::menu(None, "Log out")
                            .on_press(Message::Logout)
                            .width(Length::Fill),
                    ),
            ),
    )
    .padding(10)
    .style(theme::container::foreground)
}

/// Error banner shown on top of a panel content.
pub fn warn<'a>(error: Option<&Error>) -> Element<'a, Message> {
    if let Some(error) = error {
        Column::new()
            .push(notification::warning(
                "Request failed".to_string(),
                error.to_string(),
            ))
            .padding(5)
            .into()
    } else {
        Column::new().into()
    }
}

pub fn dashboard<'a, T: Into<Element<'a, Message>>>(
    menu: &Menu,
    email: &'a str,
    unread: u32,
    content: T,
) -> Element<'a, Message> {
    Row::new()
        .push(
            sidebar(menu, email, unread)
                .width(Length::FillPortion(2))
                .height(Length::Fill),
        )
        .push(
            Container::new(
                Scrollable::new(
                    Container::new(content.into())
                        .max_width(900)
                        .padding(30)
                        .width(Length::Fill),
                )
                .width(Length::Fill),
            )
            .center_x(Length::Fill)
            .style(theme::container::background)
            .height(Length::Fill)
            .width(Length::FillPortion(11)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
