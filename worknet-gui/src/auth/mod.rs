pub mod view;

use std::time::Duration;

use iced::{Subscription, Task};

use worknet_ui::component::form;

use crate::services::portal::{
    api::{self, JobRole},
    api_base_url,
    auth::{AuthClient, AuthError, NewAccount},
    backend::{ApiError, BackendClient},
    session::{Session, SessionStore},
};

/// Lifetime of an emailed OTP, in seconds.
pub const OTP_TTL_SECS: u32 = 300;

pub const OTP_DIGITS: usize = 6;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
pub enum Error {
    Auth(AuthError),
    Api(ApiError),
    Unexpected(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            // Without a status code the server was never reached.
            Self::Auth(AuthError {
                http_status: None, ..
            })
            | Self::Api(ApiError {
                http_status: None, ..
            }) => write!(f, "Cannot connect to the server"),
            Self::Auth(AuthError { error, .. }) => write!(f, "{}", error),
            Self::Api(ApiError { error, .. }) => write!(f, "{}", error),
            Self::Unexpected(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

impl From<AuthError> for Error {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<ApiError> for Error {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

/// Open the authenticated backend with a session. A rejected or otherwise
/// unusable session is cleared from the store right away: an invalid token is
/// the same as not being logged in.
pub async fn connect(
    store: SessionStore,
    session: Session,
) -> Result<(BackendClient, api::Profile), Error> {
    match BackendClient::connect(api_base_url(), session).await {
        Ok(res) => Ok(res),
        Err(e) => {
            if let Err(e) = store.clear().await {
                tracing::warn!("Failed to clear the session store: {}", e);
            }
            Err(e.into())
        }
    }
}

pub fn valid_email(value: &str) -> bool {
    email_address::EmailAddress::parse_with_options(
        value,
        email_address::Options::default().with_required_tld(),
    )
    .is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpSource {
    Signup,
    Forgot,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: form::Value<String>,
    pub password: form::Value<String>,
    pub show_password: bool,
}

impl LoginForm {
    // The password length rule does not apply on login, the backend is the
    // judge of the credentials.
    fn validate(&mut self) -> bool {
        self.email.valid = valid_email(&self.email.value);
        self.email.valid
    }
}

#[derive(Debug, Default)]
pub struct SignUpForm {
    pub first_name: form::Value<String>,
    pub last_name: form::Value<String>,
    pub email: form::Value<String>,
    pub password: form::Value<String>,
    pub confirm: form::Value<String>,
    pub job_role: Option<JobRole>,
    pub job_role_valid: bool,
    pub agree: bool,
    pub agree_valid: bool,
    pub show_password: bool,
}

impl SignUpForm {
    fn new() -> Self {
        Self {
            job_role_valid: true,
            agree_valid: true,
            ..Self::default()
        }
    }

    fn validate(&mut self) -> bool {
        self.first_name.valid = !self.first_name.value.trim().is_empty();
        self.email.valid = valid_email(&self.email.value);
        self.password.valid = self.password.value.len() >= MIN_PASSWORD_LEN;
        self.confirm.valid = self.confirm.value == self.password.value;
        self.job_role_valid = self.job_role.is_some();
        self.agree_valid = self.agree;
        self.first_name.valid
            && self.email.valid
            && self.password.valid
            && self.confirm.valid
            && self.job_role_valid
            && self.agree_valid
    }
}

#[derive(Debug, Default)]
pub struct ForgotForm {
    pub email: form::Value<String>,
}

impl ForgotForm {
    fn validate(&mut self) -> bool {
        self.email.valid = valid_email(&self.email.value);
        self.email.valid
    }
}

#[derive(Debug)]
pub struct OtpForm {
    pub source: OtpSource,
    pub email: String,
    pub slots: [form::Value<String>; OTP_DIGITS],
    pub seconds_left: u32,
    pub expired: bool,
}

impl OtpForm {
    fn new(source: OtpSource, email: String) -> Self {
        Self {
            source,
            email,
            slots: Default::default(),
            seconds_left: OTP_TTL_SECS,
            expired: false,
        }
    }

    fn reset_code(&mut self) {
        self.slots = Default::default();
        self.seconds_left = OTP_TTL_SECS;
        self.expired = false;
    }

    /// The full code, if all six slots hold a digit.
    pub fn code(&self) -> Option<String> {
        if self
            .slots
            .iter()
            .all(|s| s.value.len() == 1 && s.value.chars().all(|c| c.is_ascii_digit()))
        {
            Some(self.slots.iter().map(|s| s.value.as_str()).collect())
        } else {
            None
        }
    }

    fn validate(&mut self) -> bool {
        for slot in &mut self.slots {
            slot.valid = slot.value.len() == 1 && slot.value.chars().all(|c| c.is_ascii_digit());
        }
        self.slots.iter().all(|s| s.valid)
    }
}

#[derive(Debug)]
pub struct ResetForm {
    pub reset_token: String,
    pub new_password: form::Value<String>,
    pub confirm: form::Value<String>,
    pub show_password: bool,
}

impl ResetForm {
    fn new(reset_token: String) -> Self {
        Self {
            reset_token,
            new_password: form::Value::default(),
            confirm: form::Value::default(),
            show_password: false,
        }
    }

    fn validate(&mut self) -> bool {
        self.new_password.valid = self.new_password.value.len() >= MIN_PASSWORD_LEN;
        self.confirm.valid = self.confirm.value == self.new_password.value;
        self.new_password.valid && self.confirm.valid
    }
}

/// The five mutually exclusive screens of the onboarding flow. Entering a
/// mode always constructs a fresh form, so validation state and password
/// visibility never leak across transitions.
pub enum FlowMode {
    Login(LoginForm),
    SignUp(SignUpForm),
    ForgotPassword(ForgotForm),
    OtpEntry(OtpForm),
    ResetPassword(ResetForm),
}

#[derive(Debug, Clone)]
pub enum OtpOutcome {
    AccountActivated,
    ResetGranted(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Tick,
    Registered(Result<(), Error>),
    OtpRequested(Result<(), Error>),
    OtpResent(Result<(), Error>),
    OtpVerified(Result<OtpOutcome, Error>),
    PasswordReset(Result<(), Error>),
    // Redirect to the authenticated area. The Ok case is handled by the
    // upper level wrapping the flow.
    Run(Result<(BackendClient, api::Profile), Error>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    SwitchToLogin,
    SwitchToSignUp,
    ForgotPassword,
    Back,
    FirstNameEdited(String),
    LastNameEdited(String),
    EmailEdited(String),
    PasswordEdited(String),
    ConfirmEdited(String),
    JobRoleSelected(JobRole),
    AgreementToggled(bool),
    ShowPassword(bool),
    OtpSlotEdited(usize, String),
    ResendOtp,
    Submit,
}

/// Drives account creation, login and password recovery against the backend
/// auth API. Terminal outcome is a [`Message::Run`] carrying the connected
/// backend client for the caller to act upon.
pub struct AuthFlow {
    store: SessionStore,
    mode: FlowMode,
    processing: bool,
    error: Option<Error>,
    notice: Option<&'static str>,
}

impl AuthFlow {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            mode: FlowMode::SignUp(SignUpForm::new()),
            processing: false,
            error: None,
            notice: None,
        }
    }

    pub fn mode(&self) -> &FlowMode {
        &self.mode
    }

    pub fn processing(&self) -> bool {
        self.processing
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    fn enter(&mut self, mode: FlowMode) {
        self.mode = mode;
        self.processing = false;
        self.error = None;
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Submissions are one at a time: the submit control is disabled
        // while a call is in flight, and a duplicate event is dropped here.
        if self.processing && matches!(message, Message::View(ViewMessage::Submit)) {
            return Task::none();
        }
        match &mut self.mode {
            FlowMode::SignUp(form) => match message {
                Message::View(ViewMessage::SwitchToLogin) => {
                    self.enter(FlowMode::Login(LoginForm::default()));
                }
                Message::View(ViewMessage::FirstNameEdited(value)) => {
                    form.first_name.value = value;
                    form.first_name.valid = true;
                }
                Message::View(ViewMessage::LastNameEdited(value)) => {
                    form.last_name.value = value;
                    form.last_name.valid = true;
                }
                Message::View(ViewMessage::EmailEdited(value)) => {
                    form.email.valid = value.is_empty() || valid_email(&value);
                    form.email.value = value;
                }
                Message::View(ViewMessage::PasswordEdited(value)) => {
                    form.password.value = value;
                    form.password.valid = true;
                }
                Message::View(ViewMessage::ConfirmEdited(value)) => {
                    form.confirm.value = value;
                    form.confirm.valid = true;
                }
                Message::View(ViewMessage::JobRoleSelected(role)) => {
                    form.job_role = Some(role);
                    form.job_role_valid = true;
                }
                Message::View(ViewMessage::AgreementToggled(checked)) => {
                    form.agree = checked;
                    form.agree_valid = true;
                }
                Message::View(ViewMessage::ShowPassword(show)) => {
                    form.show_password = show;
                }
                Message::View(ViewMessage::Submit) => {
                    if form.validate() {
                        let first_name = form.first_name.value.clone();
                        let last_name = form.last_name.value.clone();
                        let email = form.email.value.clone();
                        let password = form.password.value.clone();
                        let confirm = form.confirm.value.clone();
                        let job_role = form.job_role.expect("validated");
                        self.processing = true;
                        self.error = None;
                        self.notice = None;
                        return Task::perform(
                            async move {
                                let client = AuthClient::new(api_base_url());
                                client
                                    .register(&NewAccount {
                                        first_name: &first_name,
                                        last_name: &last_name,
                                        email: &email,
                                        password: &password,
                                        confirm_password: &confirm,
                                        job_role: job_role.as_str(),
                                    })
                                    .await?;
                                Ok(())
                            },
                            Message::Registered,
                        );
                    }
                }
                Message::Registered(res) => {
                    self.processing = false;
                    match res {
                        Ok(()) => {
                            let email = form.email.value.clone();
                            self.enter(FlowMode::OtpEntry(OtpForm::new(OtpSource::Signup, email)));
                        }
                        Err(e) => {
                            tracing::warn!("{}", e);
                            self.error = Some(e);
                        }
                    }
                }
                _ => {}
            },
            FlowMode::Login(form) => match message {
                Message::View(ViewMessage::SwitchToSignUp) => {
                    self.enter(FlowMode::SignUp(SignUpForm::new()));
                }
                Message::View(ViewMessage::ForgotPassword) => {
                    self.enter(FlowMode::ForgotPassword(ForgotForm::default()));
                }
                Message::View(ViewMessage::EmailEdited(value)) => {
                    form.email.valid = value.is_empty() || valid_email(&value);
                    form.email.value = value;
                }
                Message::View(ViewMessage::PasswordEdited(value)) => {
                    form.password.value = value;
                    form.password.valid = true;
                }
                Message::View(ViewMessage::ShowPassword(show)) => {
                    form.show_password = show;
                }
                Message::View(ViewMessage::Submit) => {
                    if form.validate() {
                        let email = form.email.value.clone();
                        let password = form.password.value.clone();
                        let store = self.store.clone();
                        self.processing = true;
                        self.error = None;
                        self.notice = None;
                        return Task::perform(
                            async move {
                                let client = AuthClient::new(api_base_url());
                                let tokens = client.login(&email, &password).await?;
                                let session = Session {
                                    email,
                                    access_token: tokens.access,
                                    refresh_token: tokens.refresh,
                                };
                                if let Err(e) = store.save(&session).await {
                                    tracing::warn!("Failed to persist the session: {}", e);
                                }
                                connect(store, session).await
                            },
                            Message::Run,
                        );
                    }
                }
                Message::Run(Err(e)) => {
                    self.processing = false;
                    tracing::warn!("{}", e);
                    self.error = Some(e);
                }
                _ => {}
            },
            FlowMode::ForgotPassword(form) => match message {
                Message::View(ViewMessage::Back) => {
                    self.enter(FlowMode::Login(LoginForm::default()));
                }
                Message::View(ViewMessage::EmailEdited(value)) => {
                    form.email.valid = value.is_empty() || valid_email(&value);
                    form.email.value = value;
                }
                Message::View(ViewMessage::Submit) => {
                    if form.validate() {
                        let email = form.email.value.clone();
                        self.processing = true;
                        self.error = None;
                        return Task::perform(
                            async move {
                                let client = AuthClient::new(api_base_url());
                                client.forgot_password_request(&email).await?;
                                Ok(())
                            },
                            Message::OtpRequested,
                        );
                    }
                }
                Message::OtpRequested(res) => {
                    self.processing = false;
                    match res {
                        Ok(()) => {
                            let email = form.email.value.clone();
                            self.enter(FlowMode::OtpEntry(OtpForm::new(OtpSource::Forgot, email)));
                        }
                        Err(e) => {
                            tracing::warn!("{}", e);
                            self.error = Some(e);
                        }
                    }
                }
                _ => {}
            },
            FlowMode::OtpEntry(form) => match message {
                Message::View(ViewMessage::Back) => match form.source {
                    OtpSource::Signup => self.enter(FlowMode::SignUp(SignUpForm::new())),
                    OtpSource::Forgot => {
                        self.enter(FlowMode::ForgotPassword(ForgotForm::default()))
                    }
                },
                Message::View(ViewMessage::OtpSlotEdited(index, value)) => {
                    if let Some(slot) = form.slots.get_mut(index) {
                        if value.is_empty()
                            || (value.len() == 1 && value.chars().all(|c| c.is_ascii_digit()))
                        {
                            slot.value = value;
                            slot.valid = true;
                        }
                    }
                }
                Message::Tick => {
                    if !form.expired {
                        form.seconds_left = form.seconds_left.saturating_sub(1);
                        if form.seconds_left == 0 {
                            form.expired = true;
                        }
                    }
                }
                Message::View(ViewMessage::ResendOtp) => {
                    // Only reachable once the previous code is stale.
                    if form.expired && !self.processing {
                        let email = form.email.clone();
                        self.processing = true;
                        self.error = None;
                        return Task::perform(
                            async move {
                                let client = AuthClient::new(api_base_url());
                                client.resend_otp(&email).await?;
                                Ok(())
                            },
                            Message::OtpResent,
                        );
                    }
                }
                Message::OtpResent(res) => {
                    self.processing = false;
                    match res {
                        Ok(()) => {
                            form.reset_code();
                        }
                        Err(e) => {
                            tracing::warn!("{}", e);
                            self.error = Some(e);
                        }
                    }
                }
                Message::View(ViewMessage::Submit) => {
                    if !form.expired && form.validate() {
                        let code = form.code().expect("validated");
                        let email = form.email.clone();
                        let source = form.source;
                        self.processing = true;
                        self.error = None;
                        return Task::perform(
                            async move {
                                let client = AuthClient::new(api_base_url());
                                match source {
                                    OtpSource::Signup => {
                                        client.verify_registration(&email, &code).await?;
                                        Ok(OtpOutcome::AccountActivated)
                                    }
                                    OtpSource::Forgot => {
                                        let token =
                                            client.forgot_password_verify(&email, &code).await?;
                                        Ok(OtpOutcome::ResetGranted(token))
                                    }
                                }
                            },
                            Message::OtpVerified,
                        );
                    }
                }
                Message::OtpVerified(res) => {
                    self.processing = false;
                    match res {
                        Ok(OtpOutcome::AccountActivated) => {
                            self.enter(FlowMode::Login(LoginForm::default()));
                            self.notice = Some("Your account is verified, you can now log in.");
                        }
                        Ok(OtpOutcome::ResetGranted(token)) => {
                            self.enter(FlowMode::ResetPassword(ResetForm::new(token)));
                        }
                        Err(e) => {
                            tracing::warn!("{}", e);
                            self.error = Some(e);
                        }
                    }
                }
                _ => {}
            },
            FlowMode::ResetPassword(form) => match message {
                Message::View(ViewMessage::Back) => {
                    // Abandoning the flow discards the reset token.
                    self.enter(FlowMode::Login(LoginForm::default()));
                }
                Message::View(ViewMessage::PasswordEdited(value)) => {
                    form.new_password.value = value;
                    form.new_password.valid = true;
                }
                Message::View(ViewMessage::ConfirmEdited(value)) => {
                    form.confirm.value = value;
                    form.confirm.valid = true;
                }
                Message::View(ViewMessage::ShowPassword(show)) => {
                    form.show_password = show;
                }
                Message::View(ViewMessage::Submit) => {
                    if form.validate() {
                        let reset_token = form.reset_token.clone();
                        let new_password = form.new_password.value.clone();
                        self.processing = true;
                        self.error = None;
                        return Task::perform(
                            async move {
                                let client = AuthClient::new(api_base_url());
                                client
                                    .forgot_password_reset(&reset_token, &new_password)
                                    .await?;
                                Ok(())
                            },
                            Message::PasswordReset,
                        );
                    }
                }
                Message::PasswordReset(res) => {
                    self.processing = false;
                    match res {
                        Ok(()) => {
                            self.enter(FlowMode::Login(LoginForm::default()));
                            self.notice = Some("Password updated, you can now log in.");
                        }
                        Err(e) => {
                            tracing::warn!("{}", e);
                            self.error = Some(e);
                        }
                    }
                }
                _ => {}
            },
        }

        Task::none()
    }

    /// The countdown only runs while the OTP screen is live and the code has
    /// not expired yet; leaving the screen tears the timer down.
    pub fn subscription(&self) -> Subscription<Message> {
        match &self.mode {
            FlowMode::OtpEntry(form) if !form.expired => {
                iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
            }
            _ => Subscription::none(),
        }
    }

    pub fn view(&self) -> worknet_ui::widget::Element<Message> {
        view::auth_view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dir::WorknetDirectory;

    fn new_flow() -> AuthFlow {
        // The store is never touched by these tests, the network tasks that
        // would write to it are dropped unexecuted.
        AuthFlow::new(SessionStore::new(&WorknetDirectory::new(
            std::env::temp_dir().join("worknet-tests"),
        )))
    }

    fn edit(flow: &mut AuthFlow, msg: ViewMessage) {
        let _ = flow.update(Message::View(msg));
    }

    fn fill_signup(flow: &mut AuthFlow) {
        edit(flow, ViewMessage::FirstNameEdited("Ann".into()));
        edit(flow, ViewMessage::EmailEdited("ann@x.com".into()));
        edit(flow, ViewMessage::PasswordEdited("secret1".into()));
        edit(flow, ViewMessage::ConfirmEdited("secret1".into()));
        edit(flow, ViewMessage::JobRoleSelected(JobRole::Employee));
        edit(flow, ViewMessage::AgreementToggled(true));
    }

    fn enter_otp(flow: &mut AuthFlow) {
        fill_signup(flow);
        edit(flow, ViewMessage::Submit);
        let _ = flow.update(Message::Registered(Ok(())));
    }

    fn enter_forgot_otp(flow: &mut AuthFlow) {
        edit(flow, ViewMessage::SwitchToLogin);
        edit(flow, ViewMessage::ForgotPassword);
        edit(flow, ViewMessage::EmailEdited("ann@x.com".into()));
        edit(flow, ViewMessage::Submit);
        let _ = flow.update(Message::OtpRequested(Ok(())));
    }

    fn type_code(flow: &mut AuthFlow, code: &str) {
        for (i, c) in code.chars().enumerate() {
            edit(flow, ViewMessage::OtpSlotEdited(i, c.to_string()));
        }
    }

    #[test]
    fn initial_mode_is_signup() {
        let flow = new_flow();
        assert!(matches!(flow.mode(), FlowMode::SignUp(_)));
        assert!(!flow.processing());
        assert!(flow.error().is_none());
    }

    #[test]
    fn email_validation_vectors() {
        assert!(valid_email("a@b.co"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("ab.co"));
        assert!(!valid_email(""));
    }

    #[test]
    fn signup_confirm_mismatch_blocks_submission() {
        let mut flow = new_flow();
        fill_signup(&mut flow);
        edit(&mut flow, ViewMessage::PasswordEdited("abc12".into()));
        edit(&mut flow, ViewMessage::ConfirmEdited("abc13".into()));
        edit(&mut flow, ViewMessage::Submit);
        assert!(!flow.processing());
        if let FlowMode::SignUp(form) = flow.mode() {
            assert!(!form.confirm.valid);
            // abc12 is also below the minimum length.
            assert!(!form.password.valid);
        } else {
            panic!("flow left the signup mode");
        }
    }

    #[test]
    fn signup_with_valid_fields_proceeds() {
        let mut flow = new_flow();
        fill_signup(&mut flow);
        edit(&mut flow, ViewMessage::Submit);
        assert!(flow.processing());
        if let FlowMode::SignUp(form) = flow.mode() {
            assert!(form.confirm.valid && form.email.valid && form.agree_valid);
        } else {
            panic!("flow left the signup mode");
        }
    }

    #[test]
    fn signup_end_to_end_reaches_otp_entry() {
        let mut flow = new_flow();
        enter_otp(&mut flow);
        assert!(!flow.processing());
        match flow.mode() {
            FlowMode::OtpEntry(form) => {
                assert_eq!(form.source, OtpSource::Signup);
                assert_eq!(form.email, "ann@x.com");
                assert_eq!(form.seconds_left, OTP_TTL_SECS);
                assert!(!form.expired);
            }
            _ => panic!("expected the OTP screen"),
        }
    }

    #[test]
    fn otp_countdown_expires_after_300_ticks() {
        let mut flow = new_flow();
        enter_otp(&mut flow);
        for _ in 0..OTP_TTL_SECS {
            let _ = flow.update(Message::Tick);
        }
        match flow.mode() {
            FlowMode::OtpEntry(form) => {
                assert!(form.expired);
                assert_eq!(form.seconds_left, 0);
            }
            _ => panic!("expected the OTP screen"),
        }
        // Submission of a complete code is blocked once expired.
        type_code(&mut flow, "123456");
        edit(&mut flow, ViewMessage::Submit);
        assert!(!flow.processing());
    }

    #[test]
    fn otp_resend_resets_timer_and_code() {
        let mut flow = new_flow();
        enter_otp(&mut flow);
        type_code(&mut flow, "123456");
        // Resend is a no-op while the code is still fresh.
        edit(&mut flow, ViewMessage::ResendOtp);
        assert!(!flow.processing());
        for _ in 0..OTP_TTL_SECS {
            let _ = flow.update(Message::Tick);
        }
        edit(&mut flow, ViewMessage::ResendOtp);
        assert!(flow.processing());
        let _ = flow.update(Message::OtpResent(Ok(())));
        match flow.mode() {
            FlowMode::OtpEntry(form) => {
                assert!(!form.expired);
                assert_eq!(form.seconds_left, OTP_TTL_SECS);
                assert!(form.slots.iter().all(|s| s.value.is_empty()));
                assert!(form.code().is_none());
            }
            _ => panic!("expected the OTP screen"),
        }
    }

    #[test]
    fn signup_otp_success_routes_to_login() {
        let mut flow = new_flow();
        enter_otp(&mut flow);
        type_code(&mut flow, "123456");
        edit(&mut flow, ViewMessage::Submit);
        assert!(flow.processing());
        let _ = flow.update(Message::OtpVerified(Ok(OtpOutcome::AccountActivated)));
        assert!(matches!(flow.mode(), FlowMode::Login(_)));
        assert!(flow.notice().is_some());
    }

    #[test]
    fn forgot_otp_success_routes_to_reset_with_token() {
        let mut flow = new_flow();
        enter_forgot_otp(&mut flow);
        match flow.mode() {
            FlowMode::OtpEntry(form) => assert_eq!(form.source, OtpSource::Forgot),
            _ => panic!("expected the OTP screen"),
        }
        type_code(&mut flow, "654321");
        edit(&mut flow, ViewMessage::Submit);
        let _ = flow.update(Message::OtpVerified(Ok(OtpOutcome::ResetGranted(
            "tok-123".into(),
        ))));
        match flow.mode() {
            FlowMode::ResetPassword(form) => assert_eq!(form.reset_token, "tok-123"),
            _ => panic!("expected the reset screen"),
        }
    }

    #[test]
    fn otp_failure_stays_on_otp_screen() {
        let mut flow = new_flow();
        enter_otp(&mut flow);
        type_code(&mut flow, "123456");
        edit(&mut flow, ViewMessage::Submit);
        let _ = flow.update(Message::OtpVerified(Err(Error::Auth(AuthError {
            http_status: Some(400),
            error: "Invalid OTP".into(),
        }))));
        assert!(matches!(flow.mode(), FlowMode::OtpEntry(_)));
        assert!(flow.error().is_some());
    }

    #[test]
    fn transitions_reset_errors_and_forms() {
        let mut flow = new_flow();
        enter_otp(&mut flow);
        let _ = flow.update(Message::OtpVerified(Err(Error::Auth(AuthError {
            http_status: Some(400),
            error: "Invalid OTP".into(),
        }))));
        assert!(flow.error().is_some());
        edit(&mut flow, ViewMessage::Back);
        assert!(flow.error().is_none());
        match flow.mode() {
            FlowMode::SignUp(form) => {
                assert!(form.first_name.value.is_empty());
                assert!(form.confirm.valid);
                assert!(!form.show_password);
            }
            _ => panic!("back from a signup OTP must land on signup"),
        }
    }

    #[test]
    fn otp_back_follows_source() {
        let mut flow = new_flow();
        enter_forgot_otp(&mut flow);
        edit(&mut flow, ViewMessage::Back);
        assert!(matches!(flow.mode(), FlowMode::ForgotPassword(_)));
    }

    #[test]
    fn reset_password_success_discards_token_and_lands_on_login() {
        let mut flow = new_flow();
        enter_forgot_otp(&mut flow);
        type_code(&mut flow, "654321");
        edit(&mut flow, ViewMessage::Submit);
        let _ = flow.update(Message::OtpVerified(Ok(OtpOutcome::ResetGranted(
            "tok".into(),
        ))));
        edit(&mut flow, ViewMessage::PasswordEdited("secret2".into()));
        edit(&mut flow, ViewMessage::ConfirmEdited("secret2".into()));
        edit(&mut flow, ViewMessage::Submit);
        assert!(flow.processing());
        let _ = flow.update(Message::PasswordReset(Ok(())));
        assert!(matches!(flow.mode(), FlowMode::Login(_)));
        assert!(flow.notice().is_some());
    }

    #[test]
    fn login_submits_and_surfaces_rejection() {
        let mut flow = new_flow();
        edit(&mut flow, ViewMessage::SwitchToLogin);
        edit(&mut flow, ViewMessage::EmailEdited("ann@x.com".into()));
        edit(&mut flow, ViewMessage::PasswordEdited("whatever".into()));
        edit(&mut flow, ViewMessage::Submit);
        assert!(flow.processing());
        // Message::Run(Ok(..)) is intercepted by the upper level; the flow
        // only ever sees the rejections.
        let _ = flow.update(Message::Run(Err(Error::Auth(AuthError {
            http_status: Some(400),
            error: "Invalid credentials".into(),
        }))));
        assert!(!flow.processing());
        assert!(flow.error().is_some());
        assert!(matches!(flow.mode(), FlowMode::Login(_)));
    }

    #[test]
    fn login_requires_a_valid_email() {
        let mut flow = new_flow();
        edit(&mut flow, ViewMessage::SwitchToLogin);
        edit(&mut flow, ViewMessage::EmailEdited("a@b".into()));
        edit(&mut flow, ViewMessage::PasswordEdited("whatever".into()));
        edit(&mut flow, ViewMessage::Submit);
        assert!(!flow.processing());
        if let FlowMode::Login(form) = flow.mode() {
            assert!(!form.email.valid);
        } else {
            panic!("flow left the login mode");
        }
    }

    #[test]
    fn stale_completion_after_transition_is_dropped() {
        let mut flow = new_flow();
        fill_signup(&mut flow);
        edit(&mut flow, ViewMessage::Submit);
        // User backs out to login before the answer arrives.
        let _ = flow.update(Message::Registered(Err(Error::Auth(AuthError {
            http_status: Some(500),
            error: "boom".into(),
        }))));
        edit(&mut flow, ViewMessage::SwitchToLogin);
        let _ = flow.update(Message::Registered(Ok(())));
        assert!(matches!(flow.mode(), FlowMode::Login(_)));
    }
}
