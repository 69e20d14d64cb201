use iced::Task;

use worknet_ui::component::form;
use worknet_ui::widget::Element;

use super::State;
use crate::app::{
    error::Error,
    message::Message,
    view::{
        self,
        message::{JobsMessage, JobsTab},
    },
};
use crate::services::portal::{api, backend::BackendClient};

pub const JOB_TYPES: [&str; 3] = ["fulltime", "parttime", "intern"];

#[derive(Default)]
pub struct NewJobForm {
    pub title: form::Value<String>,
    pub description: form::Value<String>,
    pub requirements: form::Value<String>,
    pub location: form::Value<String>,
    pub salary: form::Value<String>,
    pub job_type: Option<&'static str>,
    pub job_type_valid: bool,
}

impl NewJobForm {
    fn new() -> Self {
        Self {
            job_type_valid: true,
            ..Self::default()
        }
    }

    fn validate(&mut self) -> bool {
        self.title.valid = !self.title.value.trim().is_empty();
        self.description.valid = !self.description.value.trim().is_empty();
        self.job_type_valid = self.job_type.is_some();
        self.title.valid && self.description.valid && self.job_type_valid
    }
}

/// Job hunting for employees, job management for publishers.
pub struct JobsPanel {
    role: api::JobRole,
    tab: JobsTab,
    jobs: Vec<api::JobListing>,
    selected: Option<api::JobDetail>,
    cover: form::Value<String>,
    applied_notice: Option<&'static str>,
    my_applications: Vec<api::MyApplication>,
    my_jobs: Vec<api::JobListing>,
    /// Applications received for one of our own jobs.
    received: Option<(i64, Vec<api::ReceivedApplication>)>,
    creating: bool,
    new_job: NewJobForm,
    processing: bool,
    warning: Option<Error>,
}

impl JobsPanel {
    pub fn new(role: api::JobRole) -> Self {
        Self {
            role,
            tab: JobsTab::Browse,
            jobs: Vec::new(),
            selected: None,
            cover: form::Value::default(),
            applied_notice: None,
            my_applications: Vec::new(),
            my_jobs: Vec::new(),
            received: None,
            creating: false,
            new_job: NewJobForm::new(),
            processing: false,
            warning: None,
        }
    }

    /// Whether the logged-in user can publish jobs.
    fn is_publisher(&self) -> bool {
        matches!(self.role, api::JobRole::Employer | api::JobRole::Company)
    }

    fn fetch_tab(&self, backend: &BackendClient) -> Task<Message> {
        let backend = backend.clone();
        match self.tab {
            JobsTab::Browse => {
                Task::perform(async move { backend.list_jobs().await }, Message::Jobs)
            }
            JobsTab::MyApplications => Task::perform(
                async move { backend.my_applications().await },
                Message::MyApplications,
            ),
            JobsTab::MyJobs => {
                Task::perform(async move { backend.my_jobs().await }, Message::MyJobs)
            }
        }
    }
}

impl State for JobsPanel {
    fn view<'a>(&'a self) -> Element<'a, view::Message> {
        view::jobs::jobs_view(view::jobs::JobsContext {
            is_publisher: self.is_publisher(),
            tab: self.tab,
            jobs: &self.jobs,
            selected: self.selected.as_ref(),
            cover: &self.cover,
            applied_notice: self.applied_notice,
            my_applications: &self.my_applications,
            my_jobs: &self.my_jobs,
            received: self.received.as_ref(),
            creating: self.creating,
            new_job: &self.new_job,
            processing: self.processing,
            warning: self.warning.as_ref(),
        })
    }

    fn update(&mut self, backend: &BackendClient, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Jobs(msg)) => match msg {
                JobsMessage::SelectTab(tab) => {
                    self.tab = tab;
                    self.selected = None;
                    self.received = None;
                    self.warning = None;
                    self.applied_notice = None;
                    return self.fetch_tab(backend);
                }
                JobsMessage::Select(job_id) => {
                    let backend = backend.clone();
                    self.cover = form::Value::default();
                    self.applied_notice = None;
                    return Task::perform(
                        async move { backend.job_detail(job_id).await },
                        Message::JobSelected,
                    );
                }
                JobsMessage::CloseDetail => {
                    self.selected = None;
                }
                JobsMessage::CoverEdited(value) => {
                    self.cover.value = value;
                    self.cover.valid = true;
                }
                JobsMessage::Apply(job_id) => {
                    if self.processing {
                        return Task::none();
                    }
                    self.processing = true;
                    self.warning = None;
                    let backend = backend.clone();
                    let cover = self.cover.value.clone();
                    return Task::perform(
                        async move { backend.apply_job(job_id, &cover).await },
                        Message::Applied,
                    );
                }
                JobsMessage::ShowApplications(job_id) => {
                    let backend = backend.clone();
                    return Task::perform(
                        async move { (job_id, backend.job_applications(job_id).await) },
                        |(id, res)| Message::JobApplications(id, res),
                    );
                }
                JobsMessage::CloseApplications => {
                    self.received = None;
                }
                JobsMessage::SetStatus(application_id, status) => {
                    // Optimistic, reloaded on rejection.
                    if let Some((_, applications)) = &mut self.received {
                        if let Some(application) =
                            applications.iter_mut().find(|a| a.id == application_id)
                        {
                            application.status = status;
                        }
                    }
                    let backend = backend.clone();
                    return Task::perform(
                        async move {
                            backend
                                .update_application_status(application_id, status)
                                .await
                        },
                        Message::ApplicationStatusUpdated,
                    );
                }
                JobsMessage::ToggleCreate => {
                    self.creating = !self.creating;
                    self.new_job = NewJobForm::new();
                }
                JobsMessage::TitleEdited(value) => {
                    self.new_job.title.value = value;
                    self.new_job.title.valid = true;
                }
                JobsMessage::DescriptionEdited(value) => {
                    self.new_job.description.value = value;
                    self.new_job.description.valid = true;
                }
                JobsMessage::RequirementsEdited(value) => {
                    self.new_job.requirements.value = value;
                }
                JobsMessage::LocationEdited(value) => {
                    self.new_job.location.value = value;
                }
                JobsMessage::SalaryEdited(value) => {
                    self.new_job.salary.value = value;
                }
                JobsMessage::JobTypeSelected(job_type) => {
                    self.new_job.job_type = Some(job_type);
                    self.new_job.job_type_valid = true;
                }
                JobsMessage::SubmitJob => {
                    if self.processing || !self.new_job.validate() {
                        return Task::none();
                    }
                    self.processing = true;
                    self.warning = None;
                    let backend = backend.clone();
                    let title = self.new_job.title.value.clone();
                    let description = self.new_job.description.value.clone();
                    let requirements = self.new_job.requirements.value.clone();
                    let location = self.new_job.location.value.clone();
                    let salary = self.new_job.salary.value.clone();
                    let job_type = self.new_job.job_type.expect("validated");
                    return Task::perform(
                        async move {
                            backend
                                .create_job(&api::NewJob {
                                    title: &title,
                                    description: &description,
                                    requirements: &requirements,
                                    location: &location,
                                    salary: &salary,
                                    job_type,
                                })
                                .await
                        },
                        Message::JobCreated,
                    );
                }
            },
            Message::Jobs(res) => match res {
                Ok(jobs) => self.jobs = jobs,
                Err(e) => self.warning = Some(e.into()),
            },
            Message::JobSelected(res) => match res {
                Ok(job) => self.selected = Some(job),
                Err(e) => self.warning = Some(e.into()),
            },
            Message::Applied(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.cover = form::Value::default();
                        self.applied_notice = Some("Application submitted.");
                    }
                    Err(e) => self.warning = Some(e.into()),
                }
            }
            Message::MyApplications(res) => match res {
                Ok(applications) => self.my_applications = applications,
                Err(e) => self.warning = Some(e.into()),
            },
            Message::MyJobs(res) => match res {
                Ok(jobs) => self.my_jobs = jobs,
                Err(e) => self.warning = Some(e.into()),
            },
            Message::JobApplications(job_id, res) => match res {
                Ok(applications) => self.received = Some((job_id, applications)),
                Err(e) => self.warning = Some(e.into()),
            },
            Message::ApplicationStatusUpdated(res) => {
                if let Err(e) = res {
                    self.warning = Some(e.into());
                    if let Some(job_id) = self.received.as_ref().map(|(id, _)| *id) {
                        let backend = backend.clone();
                        return Task::perform(
                            async move { (job_id, backend.job_applications(job_id).await) },
                            |(id, res)| Message::JobApplications(id, res),
                        );
                    }
                }
            }
            Message::JobCreated(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.creating = false;
                        self.new_job = NewJobForm::new();
                        return self.fetch_tab(backend);
                    }
                    Err(e) => self.warning = Some(e.into()),
                }
            }
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self, backend: &BackendClient) -> Task<Message> {
        self.warning = None;
        self.fetch_tab(backend)
    }
}
