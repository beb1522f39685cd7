use super::answers::AnswerError;
use super::session::{Applied, Effect, Issued, SearchSession, SessionView, TypeFilter};
use crate::client::{ClientError, SearchBackend};

use quest_search::search::types::SearchResponseBody;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    pub page_size: u64,
    pub debounce: Duration,
    pub request_timeout: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            debounce: Duration::from_millis(300),
            request_timeout: Duration::from_secs(8),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("search controller has stopped")]
    Closed,

    #[error(transparent)]
    Answer(#[from] AnswerError),
}

enum Command {
    SetQuery(String),
    SetPage(u64),
    NextPage,
    PrevPage,
    SetFilter(TypeFilter),
    Select {
        question_id: String,
        option: usize,
        reply: oneshot::Sender<Result<(), AnswerError>>,
    },
    Check {
        question_id: String,
        reply: oneshot::Sender<Result<Option<bool>, AnswerError>>,
    },
}

type Outcome = (u64, Result<SearchResponseBody, ClientError>);

/// Handle to a running search session.
///
/// The session itself lives in a background task; this handle sends it edits
/// and exposes its latest [`SessionView`].
pub struct SearchController {
    commands: mpsc::Sender<Command>,
    view: watch::Receiver<SessionView>,
    task: JoinHandle<()>,
}

impl SearchController {
    pub fn spawn(backend: Arc<dyn SearchBackend>, settings: ControllerSettings) -> Self {
        let session = SearchSession::new(settings.page_size);
        let (view_tx, view) = watch::channel(session.view());
        let (commands, commands_rx) = mpsc::channel(64);

        let actor = Actor {
            session,
            backend,
            settings,
            view_tx,
        };
        let task = tokio::spawn(actor.run(commands_rx));

        Self {
            commands,
            view,
            task,
        }
    }

    pub fn view(&self) -> SessionView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view.clone()
    }

    pub async fn set_query(&self, query: impl Into<String>) -> Result<(), ControllerError> {
        self.send(Command::SetQuery(query.into())).await
    }

    pub async fn set_page(&self, page: u64) -> Result<(), ControllerError> {
        self.send(Command::SetPage(page)).await
    }

    pub async fn next_page(&self) -> Result<(), ControllerError> {
        self.send(Command::NextPage).await
    }

    pub async fn prev_page(&self) -> Result<(), ControllerError> {
        self.send(Command::PrevPage).await
    }

    pub async fn set_filter(&self, filter: TypeFilter) -> Result<(), ControllerError> {
        self.send(Command::SetFilter(filter)).await
    }

    pub async fn select_option(
        &self,
        question_id: impl Into<String>,
        option: usize,
    ) -> Result<(), ControllerError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Select {
            question_id: question_id.into(),
            option,
            reply,
        })
        .await?;
        rx.await
            .map_err(|_| ControllerError::Closed)?
            .map_err(ControllerError::from)
    }

    pub async fn check_answer(
        &self,
        question_id: impl Into<String>,
    ) -> Result<Option<bool>, ControllerError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Check {
            question_id: question_id.into(),
            reply,
        })
        .await?;
        rx.await
            .map_err(|_| ControllerError::Closed)?
            .map_err(ControllerError::from)
    }

    /// Stops the session task and any request it has in flight.
    pub async fn shutdown(self) {
        drop(self.commands);
        if let Err(e) = self.task.await {
            tracing::warn!("Search controller task ended abnormally: {}", e);
        }
    }

    async fn send(&self, command: Command) -> Result<(), ControllerError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| ControllerError::Closed)
    }
}

struct Actor {
    session: SearchSession,
    backend: Arc<dyn SearchBackend>,
    settings: ControllerSettings,
    view_tx: watch::Sender<SessionView>,
}

impl Actor {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        let (outcome_tx, mut outcomes) = mpsc::unbounded_channel::<Outcome>();
        let mut deadline: Option<Instant> = None;
        let mut in_flight: Option<JoinHandle<()>> = None;

        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    match self.handle(command) {
                        Effect::Debounce => {
                            deadline = Some(Instant::now() + self.settings.debounce);
                            if let Some(task) = in_flight.take() {
                                task.abort();
                            }
                        }
                        Effect::Cancel => {
                            deadline = None;
                            if let Some(task) = in_flight.take() {
                                task.abort();
                            }
                        }
                        Effect::None => {}
                    }
                }
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    deadline = None;
                    if let Some(issued) = self.session.fire() {
                        if let Some(task) = in_flight.take() {
                            task.abort();
                        }
                        in_flight = Some(self.dispatch(issued, outcome_tx.clone()));
                    }
                }
                Some((seq, outcome)) = outcomes.recv() => {
                    if let Err(e) = &outcome {
                        tracing::warn!("Search request {} failed: {}", seq, e);
                    }
                    if self.session.apply(seq, outcome) == Applied::Stale {
                        tracing::debug!("Discarding stale response {} (latest is {})", seq, self.session.latest_seq());
                    } else {
                        in_flight = None;
                    }
                }
            }

            self.view_tx.send_replace(self.session.view());
        }

        if let Some(task) = in_flight.take() {
            task.abort();
        }
    }

    fn handle(&mut self, command: Command) -> Effect {
        match command {
            Command::SetQuery(query) => self.session.set_query(&query),
            Command::SetPage(page) => self.session.set_page(page),
            Command::NextPage => self.session.next_page(),
            Command::PrevPage => self.session.prev_page(),
            Command::SetFilter(filter) => self.session.set_filter(filter),
            Command::Select {
                question_id,
                option,
                reply,
            } => {
                let _ = reply.send(self.session.select_option(&question_id, option));
                Effect::None
            }
            Command::Check { question_id, reply } => {
                let _ = reply.send(self.session.check_answer(&question_id));
                Effect::None
            }
        }
    }

    fn dispatch(&self, issued: Issued, outcomes: mpsc::UnboundedSender<Outcome>) -> JoinHandle<()> {
        let backend = Arc::clone(&self.backend);
        let timeout = self.settings.request_timeout;

        tracing::debug!(
            "Search request {} query={:?} page={}",
            issued.seq,
            issued.body.query,
            issued.body.page
        );

        tokio::spawn(async move {
            let outcome = match tokio::time::timeout(timeout, backend.search(issued.body)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(ClientError::TimedOut(timeout)),
            };
            let _ = outcomes.send((issued.seq, outcome));
        })
    }
}
