use std::collections::HashSet;

use iced::{Alignment, Length};

use worknet_ui::{
    component::{button, text::*},
    theme,
    widget::*,
};

use super::{
    message::{Message, NetworkMessage},
    warn,
};
use crate::app::error::Error;
use crate::services::portal::api;

pub fn network_view<'a>(
    users: &'a [api::UserEntry],
    counts: api::FollowCounts,
    followed: &'a HashSet<i64>,
    my_id: i64,
    warning: Option<&'a Error>,
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(10);
    if users.is_empty() {
        list = list.push(text("Nobody to show yet.").style(theme::text::secondary));
    }
    for user in users.iter().filter(|u| u.id != my_id) {
        let following = followed.contains(&user.id);
        list = list.push(
            Container::new(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(
                        Column::new()
                            .spacing(5)
                            .push(p1_bold(&user.full_name))
                            .push(
                                caption(format!(
                                    "{} · {} followers · {} posts",
                                    user.job_role, user.followers_count, user.posts_count
                                ))
                                .style(theme::text::secondary),
                            )
                            .width(Length::Fill),
                    )
                    .push(
                        if following {
                            button::secondary(None, "Following")
                        } else {
                            button::primary(None, "Follow")
                        }
                        .width(Length::Fixed(150.0))
                        .on_press(Message::Network(NetworkMessage::ToggleFollow(user.id))),
                    ),
            )
            .padding(15)
            .style(theme::card::border),
        );
    }

    Column::new()
        .spacing(20)
        .push(warn(warning))
        .push(h3("Network"))
        .push(
            text(format!(
                "{} followers · {} following",
                counts.followers, counts.following
            ))
            .style(theme::text::secondary),
        )
        .push(list)
        .into()
}
