use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub transparent: Button,
    pub primary: Button,
    pub secondary: Button,
    pub destructive: Button,
    pub link: Button,
    pub menu: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub border: ContainerPalette,
    pub invalid: ContainerPalette,
    pub warning: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub pending: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub background: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
                foreground: color::GREY_6,
                scrollable: color::GREY_7,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_3,
                warning: color::ORANGE,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_BLUE,
                        text: color::WHITE,
                        border: color::BLUE.into(),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: color::GREY_7.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: color::GREY_2.into(),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREY_3,
                        border: color::GREY_7.into(),
                    }),
                },
                destructive: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::RED,
                        border: color::RED.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::RED,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLUE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                menu: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::GREY_6,
                    text: None,
                    border: None,
                },
                border: ContainerPalette {
                    background: color::LIGHT_BLACK,
                    text: None,
                    border: color::GREY_7.into(),
                },
                invalid: ContainerPalette {
                    background: color::LIGHT_BLACK,
                    text: color::RED.into(),
                    border: color::RED.into(),
                },
                warning: ContainerPalette {
                    background: color::ORANGE,
                    text: color::LIGHT_BLACK.into(),
                    border: None,
                },
                error: ContainerPalette {
                    background: color::LIGHT_BLACK,
                    text: color::RED.into(),
                    border: color::RED.into(),
                },
            },
            notifications: Notifications {
                pending: ContainerPalette {
                    background: color::GREEN,
                    text: color::LIGHT_BLACK.into(),
                    border: None,
                },
                error: ContainerPalette {
                    background: color::ORANGE,
                    text: color::LIGHT_BLACK.into(),
                    border: None,
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::GREY_7.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::GREY_7.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::RED.into(),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::BLUE,
                text: color::WHITE,
                background: color::GREY_6,
                border: color::GREY_7.into(),
            },
        }
    }
}
