use crate::app::menu::Menu;
use crate::services::portal::api;

#[derive(Debug, Clone)]
pub enum Message {
    Menu(Menu),
    Reload,
    Feed(FeedMessage),
    Jobs(JobsMessage),
    Network(NetworkMessage),
    Notifications(NotificationsMessage),
    Settings(SettingsMessage),
    Logout,
}

#[derive(Debug, Clone)]
pub enum FeedMessage {
    DraftEdited(String),
    Publish,
    ToggleMyPosts(bool),
    ToggleLike(i64),
    ToggleComments(i64),
    CommentDraftEdited(String),
    SubmitComment(i64),
    DeleteComment(i64),
    DeletePost(i64),
}

#[derive(Debug, Clone)]
pub enum JobsMessage {
    SelectTab(JobsTab),
    Select(i64),
    CloseDetail,
    CoverEdited(String),
    Apply(i64),
    ShowApplications(i64),
    CloseApplications,
    SetStatus(i64, api::ApplicationStatus),
    ToggleCreate,
    TitleEdited(String),
    DescriptionEdited(String),
    RequirementsEdited(String),
    LocationEdited(String),
    SalaryEdited(String),
    JobTypeSelected(&'static str),
    SubmitJob,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobsTab {
    Browse,
    MyApplications,
    MyJobs,
}

#[derive(Debug, Clone)]
pub enum NetworkMessage {
    ToggleFollow(i64),
}

#[derive(Debug, Clone)]
pub enum NotificationsMessage {
    MarkRead(i64),
    MarkAllRead,
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    OldPasswordEdited(String),
    NewPasswordEdited(String),
    ConfirmEdited(String),
    ShowPassword(bool),
    Submit,
}
