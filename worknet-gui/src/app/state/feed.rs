use iced::Task;

use worknet_ui::component::form;
use worknet_ui::widget::Element;

use super::State;
use crate::app::{
    error::Error,
    message::Message,
    view::{self, message::FeedMessage},
};
use crate::services::portal::{api, backend::BackendClient};

/// The social feed: posts of the followed graph, likes and comments.
pub struct FeedPanel {
    posts: Vec<api::Post>,
    my_posts_only: bool,
    draft: form::Value<String>,
    /// Post whose comment thread is unfolded.
    expanded: Option<i64>,
    comments: Vec<api::Comment>,
    comment_draft: form::Value<String>,
    processing: bool,
    warning: Option<Error>,
}

impl FeedPanel {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            my_posts_only: false,
            draft: form::Value::default(),
            expanded: None,
            comments: Vec::new(),
            comment_draft: form::Value::default(),
            processing: false,
            warning: None,
        }
    }

    fn fetch_posts(&self, backend: &BackendClient) -> Task<Message> {
        let backend = backend.clone();
        let my_posts = self.my_posts_only;
        Task::perform(
            async move { backend.list_posts(my_posts).await },
            Message::Posts,
        )
    }

    fn fetch_comments(&self, backend: &BackendClient, post_id: i64) -> Task<Message> {
        let backend = backend.clone();
        Task::perform(
            async move { (post_id, backend.list_comments(post_id).await) },
            |(id, res)| Message::Comments(id, res),
        )
    }
}

impl State for FeedPanel {
    fn view<'a>(&'a self) -> Element<'a, view::Message> {
        view::feed::feed_view(
            &self.posts,
            self.my_posts_only,
            &self.draft,
            self.expanded,
            &self.comments,
            &self.comment_draft,
            self.processing,
            self.warning.as_ref(),
        )
    }

    fn update(&mut self, backend: &BackendClient, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Feed(msg)) => match msg {
                FeedMessage::DraftEdited(value) => {
                    self.draft.value = value;
                    self.draft.valid = true;
                }
                FeedMessage::ToggleMyPosts(my_posts) => {
                    self.my_posts_only = my_posts;
                    self.expanded = None;
                    return self.fetch_posts(backend);
                }
                FeedMessage::Publish => {
                    if self.draft.value.trim().is_empty() {
                        self.draft.valid = false;
                        return Task::none();
                    }
                    if self.processing {
                        return Task::none();
                    }
                    self.processing = true;
                    self.warning = None;
                    let backend = backend.clone();
                    let description = self.draft.value.clone();
                    return Task::perform(
                        async move { backend.create_post(&description).await },
                        Message::PostCreated,
                    );
                }
                FeedMessage::ToggleLike(post_id) => {
                    // Applied optimistically; a rejection reloads the feed so
                    // the counts re-converge with the backend.
                    if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
                        let backend = backend.clone();
                        let was_liked = post.liked;
                        post.liked = !was_liked;
                        if was_liked {
                            post.likes_count = post.likes_count.saturating_sub(1);
                        } else {
                            post.likes_count += 1;
                        }
                        return Task::perform(
                            async move {
                                let res = if was_liked {
                                    backend.unlike_post(post_id).await
                                } else {
                                    backend.like_post(post_id).await
                                };
                                (post_id, res)
                            },
                            |(id, res)| Message::LikeToggled(id, res),
                        );
                    }
                }
                FeedMessage::ToggleComments(post_id) => {
                    if self.expanded == Some(post_id) {
                        self.expanded = None;
                        self.comments.clear();
                    } else {
                        self.expanded = Some(post_id);
                        self.comments.clear();
                        self.comment_draft = form::Value::default();
                        return self.fetch_comments(backend, post_id);
                    }
                }
                FeedMessage::CommentDraftEdited(value) => {
                    self.comment_draft.value = value;
                    self.comment_draft.valid = true;
                }
                FeedMessage::SubmitComment(post_id) => {
                    if self.comment_draft.value.trim().is_empty() {
                        self.comment_draft.valid = false;
                        return Task::none();
                    }
                    let backend = backend.clone();
                    let text = self.comment_draft.value.clone();
                    self.processing = true;
                    self.warning = None;
                    return Task::perform(
                        async move { (post_id, backend.add_comment(post_id, &text).await) },
                        |(id, res)| Message::CommentAdded(id, res),
                    );
                }
                FeedMessage::DeleteComment(comment_id) => {
                    let backend = backend.clone();
                    let post_id = self.expanded;
                    self.warning = None;
                    return Task::perform(
                        async move {
                            let res = backend.delete_comment(comment_id).await;
                            (post_id, res)
                        },
                        |(post_id, res)| Message::CommentDeleted(post_id.unwrap_or(0), res),
                    );
                }
                FeedMessage::DeletePost(post_id) => {
                    let backend = backend.clone();
                    self.warning = None;
                    return Task::perform(
                        async move { backend.delete_post(post_id).await },
                        Message::PostDeleted,
                    );
                }
            },
            Message::Posts(res) => match res {
                Ok(posts) => {
                    self.posts = posts;
                    self.warning = None;
                }
                Err(e) => self.warning = Some(e.into()),
            },
            Message::PostCreated(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.draft = form::Value::default();
                        return self.fetch_posts(backend);
                    }
                    Err(e) => self.warning = Some(e.into()),
                }
            }
            Message::PostDeleted(res) => match res {
                Ok(()) => return self.fetch_posts(backend),
                Err(e) => self.warning = Some(e.into()),
            },
            Message::LikeToggled(_, res) => {
                if let Err(e) = res {
                    self.warning = Some(e.into());
                    return self.fetch_posts(backend);
                }
            }
            Message::Comments(post_id, res) => {
                if self.expanded == Some(post_id) {
                    match res {
                        Ok(comments) => self.comments = comments,
                        Err(e) => self.warning = Some(e.into()),
                    }
                }
            }
            Message::CommentAdded(post_id, res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.comment_draft = form::Value::default();
                        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
                            post.comments_count += 1;
                        }
                        if self.expanded == Some(post_id) {
                            return self.fetch_comments(backend, post_id);
                        }
                    }
                    Err(e) => self.warning = Some(e.into()),
                }
            }
            Message::CommentDeleted(post_id, res) => match res {
                Ok(()) => {
                    if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
                        post.comments_count = post.comments_count.saturating_sub(1);
                    }
                    if self.expanded == Some(post_id) {
                        return self.fetch_comments(backend, post_id);
                    }
                }
                Err(e) => self.warning = Some(e.into()),
            },
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self, backend: &BackendClient) -> Task<Message> {
        self.warning = None;
        self.fetch_posts(backend)
    }
}
