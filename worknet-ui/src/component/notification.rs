use crate::{component::text, theme, widget::*};
use iced::Length;

pub fn warning<'a, T: 'a + Clone>(message: String, error: String) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(5)
            .push(text::p1_bold(message))
            .push(text::p2_regular(error)),
    )
    .padding(15)
    .style(theme::notification::error)
    .width(Length::Fill)
}

pub fn success<'a, T: 'a + Clone>(message: String) -> Container<'a, T> {
    Container::new(text::p1_bold(message))
        .padding(15)
        .style(theme::notification::pending)
        .width(Length::Fill)
}
