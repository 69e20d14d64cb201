use iced::{Alignment, Length};

use worknet_ui::{
    component::{button, form, text::*},
    theme,
    widget::*,
};

use super::{
    message::{FeedMessage, Message},
    warn,
};
use crate::app::error::Error;
use crate::services::portal::api;

#[allow(clippy::too_many_arguments)]
pub fn feed_view<'a>(
    posts: &'a [api::Post],
    my_posts_only: bool,
    draft: &'a form::Value<String>,
    expanded: Option<i64>,
    comments: &'a [api::Comment],
    comment_draft: &'a form::Value<String>,
    processing: bool,
    warning: Option<&'a Error>,
) -> Element<'a, Message> {
    let mut feed = Column::new()
        .spacing(20)
        .push(warn(warning))
        .push(h3("Feed"))
        .push(compose(draft, processing))
        .push(
            CheckBox::new("Only my posts", my_posts_only)
                .on_toggle(|checked| Message::Feed(FeedMessage::ToggleMyPosts(checked))),
        );

    if posts.is_empty() {
        feed = feed.push(text("Nothing here yet.").style(theme::text::secondary));
    }
    for post in posts {
        feed = feed.push(post_card(
            post,
            expanded == Some(post.id),
            comments,
            comment_draft,
            processing,
        ));
    }
    feed.into()
}

fn compose<'a>(draft: &'a form::Value<String>, processing: bool) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(10)
            .push(
                form::Form::new("Share something with your network", draft, |s| {
                    Message::Feed(FeedMessage::DraftEdited(s))
                })
                .warning("A post needs some text")
                .size(P1_SIZE)
                .padding(10),
            )
            .push(
                Row::new().push(Column::new().width(Length::Fill)).push(
                    button::primary(None, if processing { "Posting..." } else { "Post" })
                        .width(Length::Fixed(150.0))
                        .on_press_maybe(if processing {
                            None
                        } else {
                            Some(Message::Feed(FeedMessage::Publish))
                        }),
                ),
            ),
    )
    .padding(15)
    .style(theme::card::simple)
    .into()
}

fn post_card<'a>(
    post: &'a api::Post,
    expanded: bool,
    comments: &'a [api::Comment],
    comment_draft: &'a form::Value<String>,
    processing: bool,
) -> Element<'a, Message> {
    let mut card = Column::new()
        .spacing(10)
        .push(
            Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(p1_bold(post.author.name()))
                .push_maybe(
                    post.author
                        .job_role
                        .map(|role| caption(role).style(theme::text::secondary)),
                )
                .push(Column::new().width(Length::Fill))
                .push(
                    caption(post.created_at.format("%b %d, %Y %H:%M"))
                        .style(theme::text::secondary),
                ),
        )
        .push(text(&post.description));

    for image in &post.images {
        if let Some(url) = &image.url {
            card = card.push(caption(url).style(theme::text::secondary));
        }
    }

    let like_label = if post.liked { "Liked" } else { "Like" };
    let mut actions = Row::new()
        .spacing(15)
        .align_y(Alignment::Center)
        .push(
            Button::new(text(format!("{} · {}", like_label, post.likes_count)).small())
                .style(if post.liked {
                    theme::button::primary
                } else {
                    theme::button::secondary
                })
                .on_press(Message::Feed(FeedMessage::ToggleLike(post.id))),
        )
        .push(
            Button::new(text(format!("Comments · {}", post.comments_count)).small())
                .style(theme::button::secondary)
                .on_press(Message::Feed(FeedMessage::ToggleComments(post.id))),
        );
    if post.is_owner {
        actions = actions.push(
            button::destructive(None, "Delete")
                .on_press(Message::Feed(FeedMessage::DeletePost(post.id))),
        );
    }
    card = card.push(actions);

    if expanded {
        card = card.push(thread(post.id, comments, comment_draft, processing));
    }

    Container::new(card)
        .padding(15)
        .style(theme::card::border)
        .into()
}

fn thread<'a>(
    post_id: i64,
    comments: &'a [api::Comment],
    comment_draft: &'a form::Value<String>,
    processing: bool,
) -> Element<'a, Message> {
    let mut thread = Column::new().spacing(10);
    if comments.is_empty() {
        thread = thread.push(caption("No comments yet.").style(theme::text::secondary));
    }
    for comment in comments {
        thread = thread.push(
            Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(p2_medium(comment.user.name()))
                .push(p2_regular(&comment.text).width(Length::Fill))
                .push_maybe(if comment.is_owner {
                    Some(
                        Button::new(caption("Delete").style(theme::text::error))
                            .style(theme::button::transparent)
                            .on_press(Message::Feed(FeedMessage::DeleteComment(comment.id))),
                    )
                } else {
                    None
                }),
        );
    }
    thread
        .push(
            Row::new()
                .spacing(10)
                .push(
                    form::Form::new("Write a comment", comment_draft, |s| {
                        Message::Feed(FeedMessage::CommentDraftEdited(s))
                    })
                    .warning("A comment needs some text")
                    .size(P2_SIZE)
                    .padding(10),
                )
                .push(
                    button::secondary(None, "Send")
                        .width(Length::Fixed(100.0))
                        .on_press_maybe(if processing {
                            None
                        } else {
                            Some(Message::Feed(FeedMessage::SubmitComment(post_id)))
                        }),
                ),
        )
        .into()
}
