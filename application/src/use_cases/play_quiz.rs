//! Play Quiz use case
//!
//! Owns the pools and the session score of one player and runs the question
//! cycle: refill or reinitialize when needed, pick a category, draw, build
//! the choices and hand everything to the presenter.

use super::load_pools::{LoadPoolsError, LoadPoolsUseCase};
use crate::config::QuizConfig;
use crate::ports::load_progress::{LoadProgressNotifier, NoLoadProgress};
use crate::ports::presenter::QuizPresenter;
use quiz_domain::{
    AnswerOutcome, CharacterName, DomainError, Mode, PoolSet, QuestionItem, QuestionKind,
    SessionState, generate_choices, pick_kind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Message shown when the startup load fails
pub const STARTUP_FAILURE_MESSAGE: &str = "Data could not be loaded. Please restart the quiz.";

/// Message shown when no category can supply a question
pub const NO_QUESTIONS_MESSAGE: &str = "No questions are available right now.";

/// Errors that end or reject a quiz step
#[derive(Error, Debug)]
pub enum PlayQuizError {
    /// A full load failed. The session cannot continue.
    #[error("Startup failed: {0}")]
    StartupFailed(#[from] LoadPoolsError),

    #[error("Choice {index} does not exist (pick 1-{available})")]
    InvalidChoice { index: usize, available: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl PlayQuizError {
    /// Check if the session has to stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, PlayQuizError::StartupFailed(_))
    }
}

/// A question as handed to the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    pub item: QuestionItem,
    pub choices: Vec<CharacterName>,
}

/// Result of one `load_next_question` cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A question is on screen and awaits an answer
    Presented(PresentedQuestion),
    /// No question could be drawn; the score is kept and the player has
    /// to act (switch mode or try again)
    Halted { reason: String },
}

impl CycleOutcome {
    pub fn question(&self) -> Option<&PresentedQuestion> {
        match self {
            CycleOutcome::Presented(question) => Some(question),
            CycleOutcome::Halted { .. } => None,
        }
    }
}

/// Use case for a single player's quiz session
pub struct PlayQuizUseCase {
    loader: LoadPoolsUseCase,
    presenter: Arc<dyn QuizPresenter>,
    progress: Arc<dyn LoadProgressNotifier>,
    config: QuizConfig,
    mode: Mode,
    pools: PoolSet,
    session: SessionState,
    current: Option<PresentedQuestion>,
    rng: StdRng,
}

impl PlayQuizUseCase {
    pub fn new(
        loader: LoadPoolsUseCase,
        presenter: Arc<dyn QuizPresenter>,
        config: QuizConfig,
    ) -> Self {
        Self {
            loader,
            presenter,
            progress: Arc::new(NoLoadProgress),
            mode: config.mode,
            config,
            pools: PoolSet::new(),
            session: SessionState::new(),
            current: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Report source retrievals to the given notifier
    pub fn with_progress(mut self, progress: Arc<dyn LoadProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Use a deterministic random sequence
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start with pre-filled pools instead of fetching them
    pub fn with_pools(mut self, pools: PoolSet) -> Self {
        self.pools = pools;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pools(&self) -> &PoolSet {
        &self.pools
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The question currently awaiting an answer
    pub fn current_question(&self) -> Option<&PresentedQuestion> {
        self.current.as_ref()
    }

    /// Load all pools and present the first question
    pub async fn start(&mut self) -> Result<CycleOutcome, PlayQuizError> {
        self.initialize().await?;
        self.load_next_question().await
    }

    /// Replace every pool with a fresh full load.
    ///
    /// On failure the presenter shows the blocking error and the pools are
    /// left untouched.
    pub async fn initialize(&mut self) -> Result<(), PlayQuizError> {
        self.presenter.show_status("Loading data...");

        match self
            .loader
            .load_all_with_progress(self.progress.as_ref())
            .await
        {
            Ok(pools) => {
                self.pools = pools;
                Ok(())
            }
            Err(e) => {
                warn!("Data load failed: {}", e);
                self.presenter.show_error(STARTUP_FAILURE_MESSAGE);
                Err(PlayQuizError::StartupFailed(e))
            }
        }
    }

    /// Switch mode and immediately move on to the next question
    pub async fn set_mode(&mut self, mode: Mode) -> Result<CycleOutcome, PlayQuizError> {
        info!("Mode changed: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.load_next_question().await
    }

    /// Run one question cycle.
    ///
    /// A fixed mode whose pool is empty gets a single-category refill first;
    /// if that fails the cycle halts. When every pool is empty the full load
    /// runs again, and its failure is fatal.
    pub async fn load_next_question(&mut self) -> Result<CycleOutcome, PlayQuizError> {
        self.presenter.clear_banner();
        self.presenter
            .show_score(self.session.current_score(), self.session.best_score());
        self.current = None;
        self.session.skip_question();

        if let Some(kind) = self.mode.kind()
            && self.pools.is_empty(kind)
            && let Err(reason) = self.refill(kind).await
        {
            return Ok(self.halt(reason));
        }

        for _ in 0..self.config.max_selection_attempts {
            if self.pools.all_empty() {
                info!("All pools depleted, reloading everything");
                self.initialize().await?;
                if self.pools.all_empty() {
                    return Ok(self.halt(NO_QUESTIONS_MESSAGE.to_string()));
                }
            }

            let Some(kind) = pick_kind(self.mode, &self.pools, &self.config.weights, &mut self.rng)
            else {
                return Ok(self.halt("No category can supply a question.".to_string()));
            };

            let Some(item) = self.pools.draw(kind, &mut self.rng) else {
                debug!("{} pool empty at draw time, selecting again", kind);
                continue;
            };

            return self.present(item);
        }

        let reason = match self.mode.kind() {
            Some(kind) => DomainError::PoolExhausted(kind).to_string(),
            None => NO_QUESTIONS_MESSAGE.to_string(),
        };
        Ok(self.halt(reason))
    }

    /// Evaluate the player's selection by its text
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerOutcome, PlayQuizError> {
        let outcome = self.session.evaluate(selected)?;
        self.current = None;

        debug!(
            "Answer '{}' was {:?} (score {}/{})",
            selected, outcome.verdict, outcome.current_score, outcome.best_score
        );

        self.presenter.show_feedback(&outcome);
        if outcome.is_correct() {
            self.presenter.show_banner(&outcome.answer);
        }
        self.presenter
            .show_score(outcome.current_score, outcome.best_score);

        Ok(outcome)
    }

    /// Evaluate the player's selection by its 1-based position
    pub fn submit_choice(&mut self, index: usize) -> Result<AnswerOutcome, PlayQuizError> {
        let question = self
            .current
            .as_ref()
            .ok_or(DomainError::NoPendingQuestion)?;

        let available = question.choices.len();
        let selected = index
            .checked_sub(1)
            .and_then(|i| question.choices.get(i))
            .ok_or(PlayQuizError::InvalidChoice { index, available })?
            .as_str()
            .to_string();

        self.submit_answer(&selected)
    }

    async fn refill(&mut self, kind: QuestionKind) -> Result<(), String> {
        self.presenter
            .show_status(&format!("Fetching new {}...", kind.plural()));

        match self.loader.refill(kind, self.progress.as_ref()).await {
            Ok(items) => {
                info!("{} pool refilled with {} items", kind, items.len());
                self.pools.replace(kind, items);
                Ok(())
            }
            Err(e) => {
                warn!("Refill of {} pool failed: {}", kind, e);
                Err(format!(
                    "New {} could not be loaded. Switch modes to keep playing.",
                    kind.plural()
                ))
            }
        }
    }

    fn present(&mut self, item: QuestionItem) -> Result<CycleOutcome, PlayQuizError> {
        let choices = match generate_choices(item.answer(), &self.config.roster, &mut self.rng) {
            Ok(choices) => choices,
            Err(e) => {
                self.pools.put_back(item);
                return Err(e.into());
            }
        };
        self.session.begin_question(item.answer().clone());

        debug!(
            "Presenting {} question ({} left in pool)",
            item.kind(),
            self.pools.len(item.kind())
        );
        self.presenter.show_question(&item, &choices);

        let question = PresentedQuestion { item, choices };
        self.current = Some(question.clone());
        Ok(CycleOutcome::Presented(question))
    }

    fn halt(&mut self, reason: String) -> CycleOutcome {
        self.presenter.show_status(&reason);
        CycleOutcome::Halted { reason }
    }
}
