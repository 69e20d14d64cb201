use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// List endpoints of the backend wrap their items with a count.
#[derive(Debug, Clone, Deserialize)]
pub struct Listed<T> {
    pub total_count: u64,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub job_role: JobRole,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobRole {
    Employee,
    Employer,
    Company,
}

impl JobRole {
    pub const ALL: [JobRole; 3] = [JobRole::Employee, JobRole::Employer, JobRole::Company];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::Employee => "employee",
            JobRole::Employer => "employer",
            JobRole::Company => "company",
        }
    }
}

impl std::fmt::Display for JobRole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            JobRole::Employee => write!(f, "Employee"),
            JobRole::Employer => write!(f, "Employer"),
            JobRole::Company => write!(f, "Company"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub job_role: Option<JobRole>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Author {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostImage {
    pub id: i64,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author: Author,
    pub description: String,
    #[serde(default)]
    pub images: Vec<PostImage>,
    pub likes_count: u32,
    pub comments_count: u32,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_owner: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub user: Author,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_owner: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobListing {
    pub id: i64,
    pub title: String,
    pub publisher_name: String,
    #[serde(default)]
    pub publisher_job_role: Option<JobRole>,
    #[serde(default)]
    pub job_type: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Number of applications received.
    #[serde(default)]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_role: JobRole,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    // The backend serializer carries this historical misspelling.
    #[serde(rename = "requirments", default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    pub publisher: PublicUser,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct NewJob<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(rename = "requirments")]
    pub requirements: &'a str,
    pub location: &'a str,
    pub salary: &'a str,
    pub job_type: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Submitted,
    Reviewing,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ApplicationStatus::Submitted => write!(f, "Submitted"),
            ApplicationStatus::Reviewing => write!(f, "Reviewing"),
            ApplicationStatus::Shortlisted => write!(f, "Shortlisted"),
            ApplicationStatus::Rejected => write!(f, "Rejected"),
            ApplicationStatus::Hired => write!(f, "Hired"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Applicant {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// An application as seen by the job publisher.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceivedApplication {
    pub id: i64,
    pub applicant: Applicant,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub cover_text: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobSummary {
    pub id: i64,
    pub title: String,
    pub publisher_name: String,
}

/// An application as seen by the applicant.
#[derive(Debug, Clone, Deserialize)]
pub struct MyApplication {
    pub id: i64,
    pub job: JobSummary,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserEntry {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub job_role: JobRole,
    pub followers_count: u32,
    pub following_count: u32,
    pub posts_count: u32,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FollowCounts {
    pub followers: u32,
    pub following: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub notification_type: String,
    pub message: String,
    #[serde(default)]
    pub object_id: Option<i64>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_parsing() {
        let post: Post = serde_json::from_value(json!({
            "id": 12,
            "author": {"id": 3, "first_name": "Ann", "last_name": "Doe", "job_role": "employee", "avatar_url": null},
            "description": "Open to work!",
            "images": [{"id": 1, "url": "/media/posts/1.png"}],
            "likes_count": 4,
            "comments_count": 2,
            "liked": true,
            "created_at": "2025-05-02T10:30:00Z",
            "updated_at": "2025-05-02T10:30:00Z",
            "is_owner": false
        }))
        .unwrap();
        assert_eq!(post.author.name(), "Ann Doe");
        assert_eq!(post.images.len(), 1);
        assert!(post.liked);
    }

    #[test]
    fn listed_envelope_parsing() {
        let listed: Listed<JobListing> = serde_json::from_value(json!({
            "total_count": 1,
            "results": [{
                "id": 7,
                "title": "Backend engineer",
                "publisher_name": "Acme Corp",
                "publisher_job_role": "company",
                "job_type": "fulltime",
                "created_at": "2025-04-01T09:00:00+00:00",
                "count": 3
            }]
        }))
        .unwrap();
        assert_eq!(listed.total_count, 1);
        assert_eq!(listed.results[0].count, Some(3));
    }

    #[test]
    fn job_detail_requirements_spelling() {
        let job: JobDetail = serde_json::from_value(json!({
            "id": 7,
            "title": "Backend engineer",
            "description": "Ship things",
            "requirments": "Rust",
            "location": "Remote",
            "salary": "100k",
            "job_type": "fulltime",
            "publisher": {"id": 1, "first_name": "A", "last_name": "B", "email": "a@b.co", "job_role": "company"},
            "created_at": "2025-04-01T09:00:00Z",
            "is_active": true
        }))
        .unwrap();
        assert_eq!(job.requirements.as_deref(), Some("Rust"));
    }

    #[test]
    fn application_status_round_trip() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Shortlisted).unwrap(),
            "\"shortlisted\""
        );
        let status: ApplicationStatus = serde_json::from_str("\"hired\"").unwrap();
        assert_eq!(status, ApplicationStatus::Hired);
    }

    #[test]
    fn job_role_serialization() {
        assert_eq!(serde_json::to_string(&JobRole::Company).unwrap(), "\"company\"");
        assert_eq!(JobRole::Employer.as_str(), "employer");
    }

    #[test]
    fn notification_parsing() {
        let notification: Notification = serde_json::from_value(json!({
            "id": 5,
            "sender_name": "Ann Doe",
            "notification_type": "follow",
            "message": "Ann Doe started following you",
            "object_id": null,
            "is_read": false,
            "created_at": "2025-06-11T16:20:00Z"
        }))
        .unwrap();
        assert!(!notification.is_read);
        assert_eq!(notification.notification_type, "follow");
    }
}
