use super::view;
use crate::services::portal::{api, backend::ApiError};

#[derive(Debug, Clone)]
pub enum Message {
    View(view::Message),
    Tick,
    Posts(Result<Vec<api::Post>, ApiError>),
    PostCreated(Result<(), ApiError>),
    PostDeleted(Result<(), ApiError>),
    LikeToggled(i64, Result<(), ApiError>),
    Comments(i64, Result<Vec<api::Comment>, ApiError>),
    CommentAdded(i64, Result<(), ApiError>),
    CommentDeleted(i64, Result<(), ApiError>),
    Jobs(Result<Vec<api::JobListing>, ApiError>),
    JobSelected(Result<api::JobDetail, ApiError>),
    Applied(Result<(), ApiError>),
    MyApplications(Result<Vec<api::MyApplication>, ApiError>),
    MyJobs(Result<Vec<api::JobListing>, ApiError>),
    JobApplications(i64, Result<Vec<api::ReceivedApplication>, ApiError>),
    ApplicationStatusUpdated(Result<(), ApiError>),
    JobCreated(Result<(), ApiError>),
    Users(Result<Vec<api::UserEntry>, ApiError>),
    FollowToggled {
        user_id: i64,
        followed: bool,
        res: Result<(), ApiError>,
    },
    FollowCounts(Result<api::FollowCounts, ApiError>),
    Notifications(Result<Vec<api::Notification>, ApiError>),
    UnreadCount(Result<u32, ApiError>),
    NotificationRead(i64, Result<(), ApiError>),
    AllNotificationsRead(Result<(), ApiError>),
    PasswordChanged(Result<(), ApiError>),
    // Handled by the upper level wrapping the app.
    Logout,
}
