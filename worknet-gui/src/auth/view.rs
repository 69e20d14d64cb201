use iced::{Alignment, Length};

use worknet_ui::{
    component::{button, form, notification, text::*},
    theme,
    widget::*,
};

use crate::services::portal::api::JobRole;

use super::{
    AuthFlow, FlowMode, ForgotForm, LoginForm, Message, OtpForm, OtpSource, ResetForm, SignUpForm,
    ViewMessage,
};

pub fn auth_view(flow: &AuthFlow) -> Element<Message> {
    let processing = flow.processing();
    let content = Into::<Element<ViewMessage>>::into(
        Container::new(
            Column::new()
                .align_x(Alignment::Center)
                .spacing(20)
                .width(Length::Fill)
                .push(h2("Worknet"))
                .push(
                    Column::new()
                        .max_width(500)
                        .spacing(20)
                        .push_maybe(tabs(flow.mode()))
                        .push(titles(flow.mode()))
                        .push(match flow.mode() {
                            FlowMode::Login(form) => login(form, processing, flow.notice()),
                            FlowMode::SignUp(form) => signup(form, processing),
                            FlowMode::ForgotPassword(form) => forgot(form, processing),
                            FlowMode::OtpEntry(form) => otp(form, processing),
                            FlowMode::ResetPassword(form) => reset(form, processing),
                        }),
                ),
        )
        .padding(50)
        .center_x(Length::Fill)
        .center_y(Length::Fill),
    )
    .map(Message::View);

    let mut col = Column::new();
    if let Some(error) = flow.error() {
        col = col.push(
            notification::warning("Authentication failed".to_string(), error.to_string())
                .width(Length::Fill),
        );
    }
    col.push(content).into()
}

fn tabs(mode: &FlowMode) -> Option<Element<'static, ViewMessage>> {
    let login_active = matches!(mode, FlowMode::Login(_));
    match mode {
        FlowMode::Login(_) | FlowMode::SignUp(_) => Some(
            Row::new()
                .spacing(10)
                .push(
                    if login_active {
                        button::primary(None, "Login")
                    } else {
                        button::secondary(None, "Login")
                    }
                    .width(Length::Fill)
                    .on_press(ViewMessage::SwitchToLogin),
                )
                .push(
                    if login_active {
                        button::secondary(None, "Sign Up")
                    } else {
                        button::primary(None, "Sign Up")
                    }
                    .width(Length::Fill)
                    .on_press(ViewMessage::SwitchToSignUp),
                )
                .into(),
        ),
        _ => None,
    }
}

fn titles(mode: &FlowMode) -> Column<'static, ViewMessage> {
    let (title, subtitle) = match mode {
        FlowMode::Login(_) => (
            "Welcome back",
            "Log in to your account to connect with professionals and explore opportunities.",
        ),
        FlowMode::SignUp(_) => (
            "Create an account",
            "Build your profile, connect with peers, and discover jobs.",
        ),
        FlowMode::ForgotPassword(_) => (
            "Forgot your password?",
            "Enter your email address and we'll send you an OTP to reset your password.",
        ),
        FlowMode::OtpEntry(_) => ("Enter OTP", "Enter the 6-digit OTP sent to your email address."),
        FlowMode::ResetPassword(_) => (
            "Set a new password",
            "Enter your new password and confirm it to complete the reset process.",
        ),
    };
    Column::new()
        .spacing(10)
        .push(h3(title))
        .push(p2_regular(subtitle).style(theme::text::secondary))
}

fn login<'a>(
    form_values: &'a LoginForm,
    processing: bool,
    notice: Option<&'static str>,
) -> Element<'a, ViewMessage> {
    Column::new()
        .spacing(20)
        .push_maybe(notice.map(|n| text(n).style(theme::text::success)))
        .push(
            form::Form::new_trimmed("Email", &form_values.email, ViewMessage::EmailEdited)
                .warning("Enter a valid email")
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            form::Form::new("Password", &form_values.password, ViewMessage::PasswordEdited)
                .secure(!form_values.show_password)
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            CheckBox::new("Show password", form_values.show_password)
                .on_toggle(ViewMessage::ShowPassword),
        )
        .push(
            button::primary(None, if processing { "Logging in..." } else { "Login" })
                .width(Length::Fill)
                .on_press_maybe(if processing {
                    None
                } else {
                    Some(ViewMessage::Submit)
                }),
        )
        .push(button::link(None, "Forgot your password?").on_press(ViewMessage::ForgotPassword))
        .into()
}

fn signup(form_values: &SignUpForm, processing: bool) -> Element<'_, ViewMessage> {
    Column::new()
        .spacing(20)
        .push(
            Row::new()
                .spacing(10)
                .push(
                    form::Form::new(
                        "First name",
                        &form_values.first_name,
                        ViewMessage::FirstNameEdited,
                    )
                    .warning("First name is required")
                    .size(P1_SIZE)
                    .padding(10),
                )
                .push(
                    form::Form::new(
                        "Last name",
                        &form_values.last_name,
                        ViewMessage::LastNameEdited,
                    )
                    .size(P1_SIZE)
                    .padding(10),
                ),
        )
        .push(
            form::Form::new_trimmed("Email", &form_values.email, ViewMessage::EmailEdited)
                .warning("Enter a valid email")
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            form::Form::new("Password", &form_values.password, ViewMessage::PasswordEdited)
                .secure(!form_values.show_password)
                .warning("Password must be at least 6 characters")
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            form::Form::new(
                "Confirm password",
                &form_values.confirm,
                ViewMessage::ConfirmEdited,
            )
            .secure(!form_values.show_password)
            .warning("Passwords do not match")
            .size(P1_SIZE)
            .padding(10),
        )
        .push(
            CheckBox::new("Show password", form_values.show_password)
                .on_toggle(ViewMessage::ShowPassword),
        )
        .push(
            Column::new()
                .spacing(5)
                .push(
                    PickList::new(
                        JobRole::ALL,
                        form_values.job_role,
                        ViewMessage::JobRoleSelected,
                    )
                    .placeholder("Select your role")
                    .width(Length::Fill)
                    .padding(10),
                )
                .push_maybe(if form_values.job_role_valid {
                    None
                } else {
                    Some(caption("Job role is required").style(theme::text::error))
                }),
        )
        .push(
            Column::new()
                .spacing(5)
                .push(
                    CheckBox::new("I agree to the terms of service", form_values.agree)
                        .on_toggle(ViewMessage::AgreementToggled),
                )
                .push_maybe(if form_values.agree_valid {
                    None
                } else {
                    Some(caption("You must agree to the terms").style(theme::text::error))
                }),
        )
        .push(
            button::primary(
                None,
                if processing {
                    "Creating account..."
                } else {
                    "Sign Up"
                },
            )
            .width(Length::Fill)
            .on_press_maybe(if processing {
                None
            } else {
                Some(ViewMessage::Submit)
            }),
        )
        .into()
}

fn forgot(form_values: &ForgotForm, processing: bool) -> Element<'_, ViewMessage> {
    Column::new()
        .spacing(20)
        .push(
            form::Form::new_trimmed("Email", &form_values.email, ViewMessage::EmailEdited)
                .warning("Enter a valid email")
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            button::primary(None, if processing { "Sending OTP..." } else { "Send OTP" })
                .width(Length::Fill)
                .on_press_maybe(if processing {
                    None
                } else {
                    Some(ViewMessage::Submit)
                }),
        )
        .push(button::link(None, "Back to login").on_press(ViewMessage::Back))
        .into()
}

fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn otp(form_values: &OtpForm, processing: bool) -> Element<'_, ViewMessage> {
    let mut slots = Row::new().spacing(10).align_y(Alignment::Center);
    for (i, slot) in form_values.slots.iter().enumerate() {
        slots = slots.push(
            form::Form::new_digit("", slot, move |s| ViewMessage::OtpSlotEdited(i, s))
                .size(H4_SIZE)
                .padding(10),
        );
    }

    let countdown = if form_values.expired {
        text("OTP expired, request a new one").style(theme::text::warning)
    } else if form_values.seconds_left <= 60 {
        text(format_time(form_values.seconds_left)).style(theme::text::warning)
    } else {
        text(format_time(form_values.seconds_left))
    };

    Column::new()
        .spacing(20)
        .align_x(Alignment::Center)
        .push(text("A code was sent to your email:"))
        .push(p1_bold(&form_values.email))
        .push(slots)
        .push(countdown)
        .push(
            button::primary(None, if processing { "Validating..." } else { "Validate OTP" })
                .width(Length::Fill)
                .on_press_maybe(if processing || form_values.expired {
                    None
                } else {
                    Some(ViewMessage::Submit)
                }),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(
                    button::secondary(
                        None,
                        match form_values.source {
                            OtpSource::Signup => "Back to registration",
                            OtpSource::Forgot => "Back to forgot password",
                        },
                    )
                    .on_press(ViewMessage::Back),
                )
                .push(
                    // Enabled only once the previous code is stale.
                    button::secondary(None, "Resend OTP").on_press_maybe(
                        if form_values.expired && !processing {
                            Some(ViewMessage::ResendOtp)
                        } else {
                            None
                        },
                    ),
                ),
        )
        .into()
}

fn reset(form_values: &ResetForm, processing: bool) -> Element<'_, ViewMessage> {
    Column::new()
        .spacing(20)
        .push(
            form::Form::new(
                "New password",
                &form_values.new_password,
                ViewMessage::PasswordEdited,
            )
            .secure(!form_values.show_password)
            .warning("Password must be at least 6 characters")
            .size(P1_SIZE)
            .padding(10),
        )
        .push(
            form::Form::new(
                "Confirm new password",
                &form_values.confirm,
                ViewMessage::ConfirmEdited,
            )
            .secure(!form_values.show_password)
            .warning("Passwords do not match")
            .size(P1_SIZE)
            .padding(10),
        )
        .push(
            CheckBox::new("Show password", form_values.show_password)
                .on_toggle(ViewMessage::ShowPassword),
        )
        .push(
            button::primary(
                None,
                if processing {
                    "Updating password..."
                } else {
                    "Update password"
                },
            )
            .width(Length::Fill)
            .on_press_maybe(if processing {
                None
            } else {
                Some(ViewMessage::Submit)
            }),
        )
        .push(button::link(None, "Back to login").on_press(ViewMessage::Back))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_formatting() {
        assert_eq!(format_time(300), "5:00");
        assert_eq!(format_time(61), "1:01");
        assert_eq!(format_time(9), "0:09");
    }
}
