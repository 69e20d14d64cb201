use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use reqwest::{IntoUrl, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use super::{api, session::Session};

#[derive(Debug, Clone)]
pub struct ApiError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl ApiError {
    /// The backend rejected our credentials; the session must be considered
    /// dead.
    pub fn is_unauthenticated(&self) -> bool {
        self.http_status == Some(401)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(status) = self.http_status {
            write!(f, "{}: {}", status, self.error)
        } else {
            write!(f, "{}", self.error)
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        ApiError {
            http_status: None,
            error: value.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

async fn error_from_response(response: Response) -> ApiError {
    let status: u16 = response.status().into();
    let error = match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed
                .detail
                .or(parsed.message)
                .or(parsed.error)
                .unwrap_or(body),
            Err(_) => body,
        },
        Err(e) => e.to_string(),
    };
    ApiError {
        http_status: Some(status),
        error,
    }
}

fn request<U: IntoUrl>(
    http: &reqwest::Client,
    method: Method,
    url: U,
    access_token: &str,
) -> RequestBuilder {
    let req = http
        .request(method, url)
        .header("Authorization", format!("Bearer {}", access_token))
        .header("Content-Type", "application/json")
        .header("User-Agent", format!("worknet-gui/{}", crate::VERSION));
    tracing::debug!("Sending http request: {:?}", req);
    req
}

#[derive(Debug, Serialize)]
struct TextPayload<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct DescriptionPayload<'a> {
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct CoverPayload<'a> {
    cover_text: &'a str,
}

#[derive(Debug, Serialize)]
struct StatusPayload {
    status: api::ApplicationStatus,
}

#[derive(Debug, Serialize)]
struct ChangePassword<'a, 'b> {
    old_password: &'a str,
    new_password: &'b str,
    confirm_password: &'b str,
}

/// Client for the authenticated endpoints of the backend. Every request
/// carries the session access token as a bearer credential; a 401 answer
/// latches the client as unauthenticated and the session is treated as dead
/// by the upper layers.
#[derive(Debug, Clone)]
pub struct BackendClient {
    session: Session,
    url: String,
    http: reqwest::Client,
    unauthenticated: Arc<AtomicBool>,
}

impl BackendClient {
    /// Checks the credentials against the backend by fetching the user
    /// profile, which every fresh session needs anyway.
    pub async fn connect(url: String, session: Session) -> Result<(Self, api::Profile), ApiError> {
        let client = Self {
            session,
            url,
            http: reqwest::Client::new(),
            unauthenticated: Arc::new(AtomicBool::new(false)),
        };
        let profile = client.get_user_profile().await?;
        Ok((client, profile))
    }

    pub fn user_email(&self) -> &str {
        &self.session.email
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.unauthenticated.load(Ordering::Relaxed)
    }

    async fn request<F, D>(&self, method: Method, uri: &str, with_payload: F) -> Result<D, ApiError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
        D: serde::de::DeserializeOwned,
    {
        let res = with_payload(request(
            &self.http,
            method,
            format!("{}{}", self.url, uri),
            &self.session.access_token,
        ))
        .send()
        .await?;

        let status = res.status();
        if status.is_success() {
            Ok(res.json().await?)
        } else {
            if status.as_u16() == 401 {
                self.unauthenticated.store(true, Ordering::Relaxed);
            }
            Err(error_from_response(res).await)
        }
    }

    async fn exec_request<F>(&self, method: Method, uri: &str, with_payload: F) -> Result<(), ApiError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let res = with_payload(request(
            &self.http,
            method,
            format!("{}{}", self.url, uri),
            &self.session.access_token,
        ))
        .send()
        .await?;

        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            if status.as_u16() == 401 {
                self.unauthenticated.store(true, Ordering::Relaxed);
            }
            Err(error_from_response(res).await)
        }
    }

    pub async fn get_user_profile(&self) -> Result<api::Profile, ApiError> {
        self.request(Method::GET, "/home/profile/", |r| r).await
    }

    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.exec_request(Method::POST, "/auth/change-password/", |r| {
            r.json(&ChangePassword {
                old_password,
                new_password,
                confirm_password: new_password,
            })
        })
        .await
    }

    pub async fn list_posts(&self, my_posts: bool) -> Result<Vec<api::Post>, ApiError> {
        let uri = if my_posts {
            "/posts/?my_posts=true"
        } else {
            "/posts/"
        };
        let listed: api::Listed<api::Post> = self.request(Method::GET, uri, |r| r).await?;
        Ok(listed.results)
    }

    pub async fn create_post(&self, description: &str) -> Result<(), ApiError> {
        self.exec_request(Method::POST, "/posts/", |r| {
            r.json(&DescriptionPayload { description })
        })
        .await
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<(), ApiError> {
        self.exec_request(Method::DELETE, &format!("/posts/{}/", post_id), |r| r)
            .await
    }

    pub async fn like_post(&self, post_id: i64) -> Result<(), ApiError> {
        self.exec_request(Method::POST, &format!("/posts/{}/like/", post_id), |r| r)
            .await
    }

    pub async fn unlike_post(&self, post_id: i64) -> Result<(), ApiError> {
        self.exec_request(Method::POST, &format!("/posts/{}/unlike/", post_id), |r| r)
            .await
    }

    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<api::Comment>, ApiError> {
        self.request(Method::GET, &format!("/posts/{}/comments/", post_id), |r| r)
            .await
    }

    pub async fn add_comment(&self, post_id: i64, text: &str) -> Result<(), ApiError> {
        self.exec_request(Method::POST, &format!("/posts/{}/comments/", post_id), |r| {
            r.json(&TextPayload { text })
        })
        .await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        self.exec_request(Method::DELETE, &format!("/comments/{}/", comment_id), |r| r)
            .await
    }

    pub async fn list_jobs(&self) -> Result<Vec<api::JobListing>, ApiError> {
        let listed: api::Listed<api::JobListing> =
            self.request(Method::GET, "/jobs/", |r| r).await?;
        Ok(listed.results)
    }

    pub async fn job_detail(&self, job_id: i64) -> Result<api::JobDetail, ApiError> {
        self.request(Method::GET, &format!("/jobs/{}/", job_id), |r| r)
            .await
    }

    pub async fn apply_job(&self, job_id: i64, cover_text: &str) -> Result<(), ApiError> {
        self.exec_request(Method::POST, &format!("/jobs/{}/apply/", job_id), |r| {
            r.json(&CoverPayload { cover_text })
        })
        .await
    }

    pub async fn my_applications(&self) -> Result<Vec<api::MyApplication>, ApiError> {
        self.request(Method::GET, "/jobs/my-applications/", |r| r)
            .await
    }

    pub async fn create_job(&self, job: &api::NewJob<'_>) -> Result<(), ApiError> {
        self.exec_request(Method::POST, "/jobs/create/", |r| r.json(job))
            .await
    }

    pub async fn my_jobs(&self) -> Result<Vec<api::JobListing>, ApiError> {
        let listed: api::Listed<api::JobListing> =
            self.request(Method::GET, "/jobs/my-jobs/", |r| r).await?;
        Ok(listed.results)
    }

    pub async fn job_applications(
        &self,
        job_id: i64,
    ) -> Result<Vec<api::ReceivedApplication>, ApiError> {
        self.request(Method::GET, &format!("/jobs/{}/applications/", job_id), |r| r)
            .await
    }

    pub async fn update_application_status(
        &self,
        application_id: i64,
        status: api::ApplicationStatus,
    ) -> Result<(), ApiError> {
        self.exec_request(
            Method::PATCH,
            &format!("/jobs/applications/{}/", application_id),
            |r| r.json(&StatusPayload { status }),
        )
        .await
    }

    pub async fn list_users(&self) -> Result<Vec<api::UserEntry>, ApiError> {
        self.request(Method::GET, "/home/users/", |r| r).await
    }

    pub async fn follow_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.exec_request(
            Method::POST,
            &format!("/home/users/{}/follow/", user_id),
            |r| r,
        )
        .await
    }

    pub async fn unfollow_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.exec_request(
            Method::POST,
            &format!("/home/users/{}/unfollow/", user_id),
            |r| r,
        )
        .await
    }

    pub async fn follow_counts(&self, user_id: i64) -> Result<api::FollowCounts, ApiError> {
        self.request(
            Method::GET,
            &format!("/home/users/{}/follow_counts/", user_id),
            |r| r,
        )
        .await
    }

    pub async fn list_notifications(&self) -> Result<Vec<api::Notification>, ApiError> {
        self.request(Method::GET, "/notifications/", |r| r).await
    }

    pub async fn unread_count(&self) -> Result<u32, ApiError> {
        let res: api::UnreadCount = self
            .request(Method::GET, "/notifications/unread-count/", |r| r)
            .await?;
        Ok(res.unread_count)
    }

    pub async fn mark_notification_read(&self, notification_id: i64) -> Result<(), ApiError> {
        self.exec_request(
            Method::PATCH,
            &format!("/notifications/{}/read/", notification_id),
            |r| r,
        )
        .await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.exec_request(Method::POST, "/notifications/mark-all-read/", |r| r)
            .await
    }
}
