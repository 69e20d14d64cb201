use std::collections::HashSet;

use iced::Task;

use worknet_ui::widget::Element;

use super::State;
use crate::app::{
    error::Error,
    message::Message,
    view::{self, message::NetworkMessage},
};
use crate::services::portal::{api, backend::BackendClient};

/// The follow graph: browse members, follow and unfollow them.
pub struct NetworkPanel {
    user_id: i64,
    users: Vec<api::UserEntry>,
    counts: api::FollowCounts,
    /// Users followed from this session; the backend does not expose a
    /// per-entry flag on the members list.
    followed: HashSet<i64>,
    warning: Option<Error>,
}

impl NetworkPanel {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            users: Vec::new(),
            counts: api::FollowCounts::default(),
            followed: HashSet::new(),
            warning: None,
        }
    }

    fn fetch(&self, backend: &BackendClient) -> Task<Message> {
        let users = {
            let backend = backend.clone();
            Task::perform(async move { backend.list_users().await }, Message::Users)
        };
        let counts = {
            let backend = backend.clone();
            let user_id = self.user_id;
            Task::perform(
                async move { backend.follow_counts(user_id).await },
                Message::FollowCounts,
            )
        };
        Task::batch(vec![users, counts])
    }
}

impl State for NetworkPanel {
    fn view<'a>(&'a self) -> Element<'a, view::Message> {
        view::network::network_view(
            &self.users,
            self.counts,
            &self.followed,
            self.user_id,
            self.warning.as_ref(),
        )
    }

    fn update(&mut self, backend: &BackendClient, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Network(NetworkMessage::ToggleFollow(user_id))) => {
                // Optimistic toggle; a rejection reloads the panel.
                let follow = !self.followed.contains(&user_id);
                if follow {
                    self.followed.insert(user_id);
                } else {
                    self.followed.remove(&user_id);
                }
                if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
                    if follow {
                        user.followers_count += 1;
                    } else {
                        user.followers_count = user.followers_count.saturating_sub(1);
                    }
                }
                self.warning = None;
                let backend = backend.clone();
                return Task::perform(
                    async move {
                        let res = if follow {
                            backend.follow_user(user_id).await
                        } else {
                            backend.unfollow_user(user_id).await
                        };
                        (user_id, follow, res)
                    },
                    |(user_id, followed, res)| Message::FollowToggled {
                        user_id,
                        followed,
                        res,
                    },
                );
            }
            Message::FollowToggled { user_id, followed, res } => {
                if let Err(e) = res {
                    // Roll the local guess back before reloading.
                    if followed {
                        self.followed.remove(&user_id);
                    } else {
                        self.followed.insert(user_id);
                    }
                    self.warning = Some(e.into());
                    return self.fetch(backend);
                }
            }
            Message::Users(res) => match res {
                Ok(users) => self.users = users,
                Err(e) => self.warning = Some(e.into()),
            },
            Message::FollowCounts(res) => match res {
                Ok(counts) => self.counts = counts,
                Err(e) => self.warning = Some(e.into()),
            },
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self, backend: &BackendClient) -> Task<Message> {
        self.warning = None;
        self.fetch(backend)
    }
}
