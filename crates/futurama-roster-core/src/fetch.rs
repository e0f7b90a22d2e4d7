//! Fetch lifecycle for the characters screen
//!
//! A [`FetchController`] is owned by the screen that shows the list. Each
//! activation runs one request on a spawned task. The task reports back over
//! a channel, tagged with the activation's generation, and the controller
//! applies the result to its [`ScreenState`] exactly once.
//!
//! Results from a superseded activation are dropped. When the controller
//! itself is dropped the in-flight task is aborted, and a result that still
//! races in finds a closed channel and goes nowhere.

use crate::errors::describe_error;
use crate::messages::{Locale, Messages};
use crate::screen_state::ScreenState;
use async_trait::async_trait;
use futurama_rs::{Character, CharactersQuery, FuturamaClient, FuturamaError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Anything that can produce one page of characters
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn list_characters(
        &self,
        query: &CharactersQuery,
    ) -> Result<Vec<Character>, FuturamaError>;
}

#[async_trait]
impl CharacterSource for FuturamaClient {
    async fn list_characters(
        &self,
        query: &CharactersQuery,
    ) -> Result<Vec<Character>, FuturamaError> {
        self.characters(query).await
    }
}

/// Outcome of one attempt, as delivered by the fetch task
type Delivery = (u64, Result<Vec<Character>, FuturamaError>);

/// Owns the screen state and drives its fetch attempts
pub struct FetchController {
    state: ScreenState,
    messages: &'static Messages,
    query: CharactersQuery,
    /// Generation of the current attempt (0 = never activated)
    generation: u64,
    tx: mpsc::UnboundedSender<Delivery>,
    rx: mpsc::UnboundedReceiver<Delivery>,
    task: Option<JoinHandle<()>>,
}

impl Default for FetchController {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl FetchController {
    /// Create a controller in the initial loading state
    pub fn new(locale: Locale) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: ScreenState::new(),
            messages: locale.messages(),
            query: CharactersQuery::default(),
            generation: 0,
            tx,
            rx,
            task: None,
        }
    }

    /// Read-only view for the renderer
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    pub fn query(&self) -> &CharactersQuery {
        &self.query
    }

    /// Generation of the most recent activation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the current attempt has not settled yet
    pub fn is_pending(&self) -> bool {
        self.generation > 0 && self.state.is_loading()
    }

    /// Start a new attempt in the background
    ///
    /// Must be called from within a tokio runtime. The result is applied by
    /// a later [`poll`](Self::poll) or [`wait`](Self::wait).
    pub fn activate(&mut self, source: Arc<dyn CharacterSource>) {
        let generation = self.begin_attempt();
        let query = self.query;
        let tx = self.tx.clone();

        tracing::info!("Fetching characters (attempt {})", generation);
        self.task = Some(tokio::spawn(async move {
            let result = source.list_characters(&query).await;
            if tx.send((generation, result)).is_err() {
                tracing::debug!("Screen gone before attempt {} settled", generation);
            }
        }));
    }

    /// Run one attempt inline and settle it
    pub async fn fetch(&mut self, source: &dyn CharacterSource) -> &ScreenState {
        let generation = self.begin_attempt();
        tracing::info!("Fetching characters (attempt {})", generation);
        let result = source.list_characters(&self.query).await;
        self.settle(generation, result);
        &self.state
    }

    /// Apply any delivered results without blocking
    ///
    /// A task that finished without delivering (it panicked) settles the
    /// attempt as failed. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        // Checked before draining so a result sent just before exit is not missed
        let finished = self.task.as_ref().is_some_and(|t| t.is_finished());
        let mut changed = false;
        while let Ok((generation, result)) = self.rx.try_recv() {
            changed |= self.settle(generation, result);
        }
        if finished && self.is_pending() {
            self.task = None;
            changed |= self.settle_lost();
        }
        changed
    }

    /// Wait until the current attempt settles
    ///
    /// Returns false if there is nothing to wait for.
    pub async fn wait(&mut self) -> bool {
        if !self.is_pending() {
            return self.generation > 0;
        }
        // The task sends before it completes, so its result is queued once joined
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            tracing::error!("Fetch task for attempt {} failed: {}", self.generation, e);
        }
        self.poll();
        if self.is_pending() {
            self.settle_lost();
        }
        true
    }

    /// Apply the result of attempt `generation`
    ///
    /// Stale generations and already-settled attempts are ignored. Returns
    /// true if the state changed.
    pub fn settle(
        &mut self,
        generation: u64,
        result: Result<Vec<Character>, FuturamaError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Ignoring result of attempt {} (current is {})",
                generation,
                self.generation
            );
            return false;
        }
        if !self.state.is_loading() {
            tracing::debug!("Attempt {} already settled", generation);
            return false;
        }

        match result {
            Ok(characters) => {
                tracing::info!("Loaded {} characters", characters.len());
                self.state.settle_success(characters);
            }
            Err(e) => {
                tracing::error!("Failed to load characters: {}", describe_error(&e));
                self.state.settle_failure(self.messages.load_failed);
            }
        }
        true
    }

    /// Settle the current attempt as failed when its task is gone
    fn settle_lost(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        tracing::error!("Attempt {} ended without a result", self.generation);
        self.state.settle_failure(self.messages.load_failed);
        true
    }

    fn begin_attempt(&mut self) -> u64 {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation += 1;
        self.state.start_loading();
        self.generation
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
