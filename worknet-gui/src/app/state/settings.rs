use iced::Task;

use worknet_ui::component::form;
use worknet_ui::widget::Element;

use super::State;
use crate::app::{
    error::Error,
    message::Message,
    view::{self, message::SettingsMessage},
};
use crate::auth::MIN_PASSWORD_LEN;
use crate::services::portal::{api, backend::BackendClient};

/// Profile summary, password change and logout.
pub struct SettingsPanel {
    profile: api::Profile,
    old_password: form::Value<String>,
    new_password: form::Value<String>,
    confirm: form::Value<String>,
    show_password: bool,
    success: Option<&'static str>,
    processing: bool,
    warning: Option<Error>,
}

impl SettingsPanel {
    pub fn new(profile: api::Profile) -> Self {
        Self {
            profile,
            old_password: form::Value::default(),
            new_password: form::Value::default(),
            confirm: form::Value::default(),
            show_password: false,
            success: None,
            processing: false,
            warning: None,
        }
    }

    fn validate(&mut self) -> bool {
        self.old_password.valid = !self.old_password.value.is_empty();
        self.new_password.valid = self.new_password.value.len() >= MIN_PASSWORD_LEN;
        self.confirm.valid = self.confirm.value == self.new_password.value;
        self.old_password.valid && self.new_password.valid && self.confirm.valid
    }
}

impl State for SettingsPanel {
    fn view<'a>(&'a self) -> Element<'a, view::Message> {
        view::settings::settings_view(
            &self.profile,
            &self.old_password,
            &self.new_password,
            &self.confirm,
            self.show_password,
            self.success,
            self.processing,
            self.warning.as_ref(),
        )
    }

    fn update(&mut self, backend: &BackendClient, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Settings(msg)) => match msg {
                SettingsMessage::OldPasswordEdited(value) => {
                    self.old_password.value = value;
                    self.old_password.valid = true;
                    self.success = None;
                }
                SettingsMessage::NewPasswordEdited(value) => {
                    self.new_password.value = value;
                    self.new_password.valid = true;
                    self.success = None;
                }
                SettingsMessage::ConfirmEdited(value) => {
                    self.confirm.value = value;
                    self.confirm.valid = true;
                    self.success = None;
                }
                SettingsMessage::ShowPassword(show) => {
                    self.show_password = show;
                }
                SettingsMessage::Submit => {
                    if self.processing || !self.validate() {
                        return Task::none();
                    }
                    self.processing = true;
                    self.warning = None;
                    self.success = None;
                    let backend = backend.clone();
                    let old_password = self.old_password.value.clone();
                    let new_password = self.new_password.value.clone();
                    return Task::perform(
                        async move { backend.change_password(&old_password, &new_password).await },
                        Message::PasswordChanged,
                    );
                }
            },
            Message::PasswordChanged(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.old_password = form::Value::default();
                        self.new_password = form::Value::default();
                        self.confirm = form::Value::default();
                        self.show_password = false;
                        self.success = Some("Password changed successfully.");
                    }
                    Err(e) => self.warning = Some(e.into()),
                }
            }
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self, _backend: &BackendClient) -> Task<Message> {
        self.warning = None;
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> SettingsPanel {
        SettingsPanel::new(api::Profile {
            id: 1,
            email: "ann@x.com".to_string(),
            full_name: "Ann Doe".to_string(),
            job_role: api::JobRole::Employee,
            profile_image: None,
            phone: None,
            location: None,
            bio: None,
            skills: None,
            experience_years: None,
        })
    }

    #[test]
    fn change_password_validation() {
        let mut panel = panel();
        panel.new_password.value = "short".to_string();
        panel.confirm.value = "short".to_string();
        assert!(!panel.validate());
        assert!(!panel.old_password.valid);
        assert!(!panel.new_password.valid);

        panel.old_password.value = "previous".to_string();
        panel.new_password.value = "longenough".to_string();
        panel.confirm.value = "longenough!".to_string();
        assert!(!panel.validate());
        assert!(!panel.confirm.valid);

        panel.confirm.value = "longenough".to_string();
        assert!(panel.validate());
    }
}
