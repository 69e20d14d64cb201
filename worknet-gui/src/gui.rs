use std::time::Duration;

use iced::{Subscription, Task};
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;

use worknet_ui::{
    component::text::*,
    widget::{Column, Container, Element},
};

use crate::{
    app::{self, App},
    auth::{self, AuthFlow},
    dir::WorknetDirectory,
    logger::setup_logger,
    services::portal::{api, backend::BackendClient, session::SessionStore},
    VERSION,
};

pub struct Config {
    pub directory: WorknetDirectory,
}

impl Config {
    pub fn new(directory: WorknetDirectory) -> Self {
        Self { directory }
    }
}

pub enum State {
    /// Checking a persisted session against the backend at startup.
    Restoring,
    Auth(Box<AuthFlow>),
    Home(Box<App>),
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    Tick,
    Auth(Box<auth::Message>),
    Run(Box<app::Message>),
    Restored(Box<Result<(BackendClient, api::Profile), auth::Error>>),
    LoggedOut,
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

pub struct GUI {
    state: State,
    store: SessionStore,
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Worknet v{}", VERSION)
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        let log_level = log_level.unwrap_or(LevelFilter::INFO);
        if let Err(e) = config.directory.init() {
            error!("Failed to create the data directory: {}", e);
        }
        if let Err(e) = setup_logger(log_level, config.directory.clone()) {
            warn!("Error while setting up the logger: {}", e);
        }

        let store = SessionStore::new(&config.directory);
        let mut cmds = vec![Task::perform(ctrl_c(), |_| Message::CtrlC)];

        // A persisted session lands directly in the authenticated area if
        // the backend still accepts it; otherwise the user starts over from
        // the entry screen.
        let state = match store.load() {
            Ok(Some(session)) => {
                let store = store.clone();
                cmds.push(Task::perform(
                    async move { auth::connect(store, session).await },
                    |res| Message::Restored(Box::new(res)),
                ));
                State::Restoring
            }
            Ok(None) => State::Auth(Box::new(AuthFlow::new(store.clone()))),
            Err(e) => {
                warn!("Failed to read the session store: {}", e);
                State::Auth(Box::new(AuthFlow::new(store.clone())))
            }
        };

        (Self { state, store }, Task::batch(cmds))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (&mut self.state, message) {
            (_, Message::CtrlC) => iced::window::get_latest().and_then(iced::window::close),
            (State::Restoring, Message::Restored(res)) => match *res {
                Ok((backend, profile)) => {
                    let (app, task) = App::new(backend, profile);
                    self.state = State::Home(Box::new(app));
                    task.map(|msg| Message::Run(Box::new(msg)))
                }
                Err(e) => {
                    warn!("Persisted session was not usable: {}", e);
                    self.state = State::Auth(Box::new(AuthFlow::new(self.store.clone())));
                    Task::none()
                }
            },
            (State::Auth(flow), Message::Auth(msg)) => match *msg {
                auth::Message::Run(Ok((backend, profile))) => {
                    let (app, task) = App::new(backend, profile);
                    self.state = State::Home(Box::new(app));
                    task.map(|msg| Message::Run(Box::new(msg)))
                }
                msg => flow.update(msg).map(|msg| Message::Auth(Box::new(msg))),
            },
            (State::Home(app), Message::Run(msg)) => match *msg {
                app::Message::Logout => {
                    let store = self.store.clone();
                    Task::perform(
                        async move {
                            if let Err(e) = store.clear().await {
                                warn!("Failed to clear the session store: {}", e);
                            }
                        },
                        |_| Message::LoggedOut,
                    )
                }
                msg => app.update(msg).map(|msg| Message::Run(Box::new(msg))),
            },
            (State::Home(app), Message::Tick) => app
                .on_tick()
                .map(|msg| Message::Run(Box::new(msg))),
            (_, Message::LoggedOut) => {
                self.state = State::Auth(Box::new(AuthFlow::new(self.store.clone())));
                Task::none()
            }
            _ => Task::none(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.state {
            State::Auth(flow) => flow
                .subscription()
                .map(|msg| Message::Auth(Box::new(msg))),
            State::Home(_) => {
                iced::time::every(Duration::from_secs(60)).map(|_| Message::Tick)
            }
            State::Restoring => Subscription::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match &self.state {
            State::Restoring => Container::new(
                Column::new().push(text("Loading...")),
            )
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into(),
            State::Auth(flow) => flow.view().map(|msg| Message::Auth(Box::new(msg))),
            State::Home(app) => app.view().map(|msg| Message::Run(Box::new(msg))),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}
