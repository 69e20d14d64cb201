pub mod button;
pub mod form;
pub mod notification;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Column::new())
        .style(theme::container::foreground)
        .height(Length::Fixed(1.0))
        .width(Length::Fill)
}
