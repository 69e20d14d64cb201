use iced::{
    font::{Stretch, Weight},
    Font,
};

pub const BOLD: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: Weight::Bold,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};

pub const MEDIUM: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: Weight::Medium,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};

pub const REGULAR: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: Weight::Normal,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};
