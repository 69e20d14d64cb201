use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::Button;
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn destructive(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.destructive, status)
}

pub fn transparent(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.transparent, status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.link, status)
}

pub fn menu(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.menu, status)
}

pub fn menu_pressed(theme: &Theme, _status: Status) -> Style {
    button(&theme.colors.buttons.menu, Status::Pressed)
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active),
        Status::Hovered => style(&p.hovered),
        Status::Pressed => {
            if let Some(pressed) = &p.pressed {
                style(pressed)
            } else {
                style(&p.active)
            }
        }
        Status::Disabled => {
            if let Some(disabled) = &p.disabled {
                style(disabled)
            } else {
                let mut sty = style(&p.active);
                sty.text_color = Color {
                    a: 0.2,
                    ..sty.text_color
                };
                sty
            }
        }
    }
}

fn style(p: &super::palette::ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: if let Some(color) = p.border {
            Border {
                radius: 25.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: 25.0.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}
