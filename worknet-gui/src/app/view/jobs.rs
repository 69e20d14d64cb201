use iced::{Alignment, Length};

use worknet_ui::{
    component::{button, form, text::*},
    theme,
    widget::*,
};

use super::{
    message::{JobsMessage, JobsTab, Message},
    warn,
};
use crate::app::{error::Error, state::NewJobForm, state::JOB_TYPES};
use crate::services::portal::api;

pub struct JobsContext<'a> {
    pub is_publisher: bool,
    pub tab: JobsTab,
    pub jobs: &'a [api::JobListing],
    pub selected: Option<&'a api::JobDetail>,
    pub cover: &'a form::Value<String>,
    pub applied_notice: Option<&'static str>,
    pub my_applications: &'a [api::MyApplication],
    pub my_jobs: &'a [api::JobListing],
    pub received: Option<&'a (i64, Vec<api::ReceivedApplication>)>,
    pub creating: bool,
    pub new_job: &'a NewJobForm,
    pub processing: bool,
    pub warning: Option<&'a Error>,
}

pub fn jobs_view(ctx: JobsContext<'_>) -> Element<'_, Message> {
    let mut tabs = Row::new().spacing(10).push(tab_button(
        ctx.tab,
        JobsTab::Browse,
        "Browse",
    ));
    if ctx.is_publisher {
        tabs = tabs.push(tab_button(ctx.tab, JobsTab::MyJobs, "My jobs"));
    } else {
        tabs = tabs.push(tab_button(
            ctx.tab,
            JobsTab::MyApplications,
            "My applications",
        ));
    }

    let content: Element<Message> = match ctx.tab {
        JobsTab::Browse => browse(&ctx),
        JobsTab::MyApplications => my_applications(ctx.my_applications),
        JobsTab::MyJobs => my_jobs(&ctx),
    };

    Column::new()
        .spacing(20)
        .push(warn(ctx.warning))
        .push(h3("Jobs"))
        .push(tabs)
        .push(content)
        .into()
}

fn tab_button<'a>(current: JobsTab, target: JobsTab, label: &'static str) -> Element<'a, Message> {
    if current == target {
        button::primary(None, label)
            .on_press(Message::Jobs(JobsMessage::SelectTab(target)))
            .into()
    } else {
        button::secondary(None, label)
            .on_press(Message::Jobs(JobsMessage::SelectTab(target)))
            .into()
    }
}

fn browse<'a>(ctx: &JobsContext<'a>) -> Element<'a, Message> {
    if let Some(job) = ctx.selected {
        return job_detail(job, ctx.cover, ctx.applied_notice, ctx.processing);
    }
    let mut list = Column::new().spacing(10);
    if ctx.jobs.is_empty() {
        list = list.push(text("No open positions right now.").style(theme::text::secondary));
    }
    for job in ctx.jobs {
        list = list.push(
            Button::new(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(
                        Column::new()
                            .spacing(5)
                            .push(p1_bold(&job.title))
                            .push(
                                caption(format!("by {}", job.publisher_name))
                                    .style(theme::text::secondary),
                            )
                            .width(Length::Fill),
                    )
                    .push_maybe(job.job_type.as_ref().map(caption))
                    .push(caption(job.created_at.format("%b %d, %Y")).style(theme::text::secondary)),
            )
            .style(theme::button::secondary)
            .width(Length::Fill)
            .on_press(Message::Jobs(JobsMessage::Select(job.id))),
        );
    }
    list.into()
}

fn job_detail<'a>(
    job: &'a api::JobDetail,
    cover: &'a form::Value<String>,
    applied_notice: Option<&'static str>,
    processing: bool,
) -> Element<'a, Message> {
    let mut card = Column::new()
        .spacing(10)
        .push(
            Row::new()
                .push(h4_bold(&job.title).width(Length::Fill))
                .push(button::link(None, "Back").on_press(Message::Jobs(JobsMessage::CloseDetail))),
        )
        .push(
            caption(format!(
                "{} · {}",
                job.publisher.email,
                job.job_type.as_deref().unwrap_or("unspecified")
            ))
            .style(theme::text::secondary),
        )
        .push_maybe(job.location.as_ref().map(|l| text(format!("Location: {}", l))))
        .push_maybe(job.salary.as_ref().map(|s| text(format!("Salary: {}", s))))
        .push(text(&job.description))
        .push_maybe(
            job.requirements
                .as_ref()
                .map(|r| text(format!("Requirements: {}", r))),
        );

    card = if let Some(notice) = applied_notice {
        card.push(text(notice).style(theme::text::success))
    } else {
        card.push(
            Column::new()
                .spacing(10)
                .push(
                    form::Form::new("Cover letter (optional)", cover, |s| {
                        Message::Jobs(JobsMessage::CoverEdited(s))
                    })
                    .size(P1_SIZE)
                    .padding(10),
                )
                .push(
                    button::primary(None, if processing { "Applying..." } else { "Apply" })
                        .width(Length::Fixed(200.0))
                        .on_press_maybe(if processing {
                            None
                        } else {
                            Some(Message::Jobs(JobsMessage::Apply(job.id)))
                        }),
                ),
        )
    };

    Container::new(card)
        .padding(15)
        .style(theme::card::border)
        .into()
}

fn my_applications(applications: &[api::MyApplication]) -> Element<'_, Message> {
    let mut list = Column::new().spacing(10);
    if applications.is_empty() {
        list = list.push(text("You have not applied to any job yet.").style(theme::text::secondary));
    }
    for application in applications {
        list = list.push(
            Container::new(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(
                        Column::new()
                            .spacing(5)
                            .push(p1_bold(&application.job.title))
                            .push(
                                caption(format!("by {}", application.job.publisher_name))
                                    .style(theme::text::secondary),
                            )
                            .width(Length::Fill),
                    )
                    .push(status_text(application.status))
                    .push(
                        caption(application.applied_at.format("%b %d, %Y"))
                            .style(theme::text::secondary),
                    ),
            )
            .padding(15)
            .style(theme::card::border),
        );
    }
    list.into()
}

fn status_text<'a>(status: api::ApplicationStatus) -> iced::widget::Text<'a, theme::Theme> {
    let style = match status {
        api::ApplicationStatus::Hired | api::ApplicationStatus::Shortlisted => theme::text::success,
        api::ApplicationStatus::Rejected => theme::text::error,
        _ => theme::text::secondary,
    };
    p2_medium(status).style(style)
}

fn my_jobs<'a>(ctx: &JobsContext<'a>) -> Element<'a, Message> {
    if let Some((_, applications)) = ctx.received {
        return received_applications(applications);
    }

    let mut col = Column::new().spacing(10).push(
        button::secondary(None, if ctx.creating { "Cancel" } else { "Post a job" })
            .width(Length::Fixed(200.0))
            .on_press(Message::Jobs(JobsMessage::ToggleCreate)),
    );
    if ctx.creating {
        col = col.push(new_job_form(ctx.new_job, ctx.processing));
    }
    if ctx.my_jobs.is_empty() && !ctx.creating {
        col = col.push(text("You have not published any job yet.").style(theme::text::secondary));
    }
    for job in ctx.my_jobs {
        col = col.push(
            Container::new(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(p1_bold(&job.title).width(Length::Fill))
                    .push_maybe(
                        job.count
                            .map(|count| caption(format!("{} applications", count))),
                    )
                    .push(
                        button::secondary(None, "Applications")
                            .on_press(Message::Jobs(JobsMessage::ShowApplications(job.id))),
                    ),
            )
            .padding(15)
            .style(theme::card::border),
        );
    }
    col.into()
}

fn new_job_form<'a>(job: &'a NewJobForm, processing: bool) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(10)
            .push(
                form::Form::new("Title", &job.title, |s| {
                    Message::Jobs(JobsMessage::TitleEdited(s))
                })
                .warning("A title is required")
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                form::Form::new("Description", &job.description, |s| {
                    Message::Jobs(JobsMessage::DescriptionEdited(s))
                })
                .warning("A description is required")
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                form::Form::new("Requirements", &job.requirements, |s| {
                    Message::Jobs(JobsMessage::RequirementsEdited(s))
                })
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .push(
                        form::Form::new("Location", &job.location, |s| {
                            Message::Jobs(JobsMessage::LocationEdited(s))
                        })
                        .size(P1_SIZE)
                        .padding(10),
                    )
                    .push(
                        form::Form::new("Salary", &job.salary, |s| {
                            Message::Jobs(JobsMessage::SalaryEdited(s))
                        })
                        .size(P1_SIZE)
                        .padding(10),
                    ),
            )
            .push(
                Column::new()
                    .spacing(5)
                    .push(
                        PickList::new(JOB_TYPES, job.job_type, |t| {
                            Message::Jobs(JobsMessage::JobTypeSelected(t))
                        })
                        .placeholder("Job type")
                        .padding(10),
                    )
                    .push_maybe(if job.job_type_valid {
                        None
                    } else {
                        Some(caption("A job type is required").style(theme::text::error))
                    }),
            )
            .push(
                button::primary(None, if processing { "Publishing..." } else { "Publish" })
                    .width(Length::Fixed(200.0))
                    .on_press_maybe(if processing {
                        None
                    } else {
                        Some(Message::Jobs(JobsMessage::SubmitJob))
                    }),
            ),
    )
    .padding(15)
    .style(theme::card::simple)
    .into()
}

fn received_applications(applications: &[api::ReceivedApplication]) -> Element<'_, Message> {
    let mut col = Column::new().spacing(10).push(
        Row::new().push(h4_bold("Applications").width(Length::Fill)).push(
            button::link(None, "Back").on_press(Message::Jobs(JobsMessage::CloseApplications)),
        ),
    );
    if applications.is_empty() {
        col = col.push(text("No applications yet.").style(theme::text::secondary));
    }
    for application in applications {
        let applicant = format!(
            "{} {}",
            application.applicant.first_name, application.applicant.last_name
        );
        col = col.push(
            Container::new(
                Column::new()
                    .spacing(10)
                    .push(
                        Row::new()
                            .spacing(10)
                            .align_y(Alignment::Center)
                            .push(p1_bold(applicant).width(Length::Fill))
                            .push(status_text(application.status))
                            .push(
                                caption(application.applied_at.format("%b %d, %Y"))
                                    .style(theme::text::secondary),
                            ),
                    )
                    .push_maybe(application.cover_text.as_ref().map(p2_regular))
                    .push(
                        Row::new()
                            .spacing(10)
                            .push(
                                button::secondary(None, "Shortlist").on_press(Message::Jobs(
                                    JobsMessage::SetStatus(
                                        application.id,
                                        api::ApplicationStatus::Shortlisted,
                                    ),
                                )),
                            )
                            .push(
                                button::secondary(None, "Hire").on_press(Message::Jobs(
                                    JobsMessage::SetStatus(
                                        application.id,
                                        api::ApplicationStatus::Hired,
                                    ),
                                )),
                            )
                            .push(
                                button::destructive(None, "Reject").on_press(Message::Jobs(
                                    JobsMessage::SetStatus(
                                        application.id,
                                        api::ApplicationStatus::Rejected,
                                    ),
                                )),
                            ),
                    ),
            )
            .padding(15)
            .style(theme::card::border),
        );
    }
    col.into()
}
