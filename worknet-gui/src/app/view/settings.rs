use iced::Length;

use worknet_ui::{
    component::{button, form, text::*},
    theme,
    widget::*,
};

use super::{
    message::{Message, SettingsMessage},
    warn,
};
use crate::app::error::Error;
use crate::services::portal::api;

#[allow(clippy::too_many_arguments)]
pub fn settings_view<'a>(
    profile: &'a api::Profile,
    old_password: &'a form::Value<String>,
    new_password: &'a form::Value<String>,
    confirm: &'a form::Value<String>,
    show_password: bool,
    success: Option<&'static str>,
    processing: bool,
    warning: Option<&'a Error>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(20)
        .push(warn(warning))
        .push(h3("Settings"))
        .push(
            Container::new(
                Column::new()
                    .spacing(10)
                    .push(h4_bold(&profile.full_name))
                    .push(text(&profile.email).style(theme::text::secondary))
                    .push(caption(profile.job_role).style(theme::text::secondary))
                    .push_maybe(profile.location.as_ref().map(|l| p2_regular(l)))
                    .push_maybe(profile.bio.as_ref().map(|b| p2_regular(b))),
            )
            .padding(15)
            .style(theme::card::simple),
        )
        .push(
            Container::new(
                Column::new()
                    .spacing(10)
                    .push(h4_bold("Change password"))
                    .push_maybe(success.map(|s| text(s).style(theme::text::success)))
                    .push(
                        form::Form::new("Current password", old_password, |s| {
                            Message::Settings(SettingsMessage::OldPasswordEdited(s))
                        })
                        .secure(!show_password)
                        .warning("Current password is required")
                        .size(P1_SIZE)
                        .padding(10),
                    )
                    .push(
                        form::Form::new("New password", new_password, |s| {
                            Message::Settings(SettingsMessage::NewPasswordEdited(s))
                        })
                        .secure(!show_password)
                        .warning("Password must be at least 6 characters")
                        .size(P1_SIZE)
                        .padding(10),
                    )
                    .push(
                        form::Form::new("Confirm new password", confirm, |s| {
                            Message::Settings(SettingsMessage::ConfirmEdited(s))
                        })
                        .secure(!show_password)
                        .warning("Passwords do not match")
                        .size(P1_SIZE)
                        .padding(10),
                    )
                    .push(CheckBox::new("Show password", show_password).on_toggle(|checked| {
                        Message::Settings(SettingsMessage::ShowPassword(checked))
                    }))
                    .push(
                        button::primary(None, if processing { "Changing..." } else { "Change" })
                            .width(Length::Fixed(200.0))
                            .on_press_maybe(if processing {
                                None
                            } else {
                                Some(Message::Settings(SettingsMessage::Submit))
                            }),
                    ),
            )
            .padding(15)
            .style(theme::card::border),
        )
        .into()
}
