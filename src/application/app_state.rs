//! Shared wiring of ports, recorder and handlers.

use std::sync::Arc;
use tokio::runtime::Handle;

use super::completion::{completion_channel, CompletionListener, CompletionNotifier, CompletionRecorder};
use super::handlers::{LoadHistoryHandler, ProjectStandingHandler};
use super::test_run::{TestRun, TestRunSettings};
use crate::adapters::{FileAttemptStore, InMemoryAttemptStore, TokioClock};
use crate::config::{AppConfig, ValidationError};
use crate::ports::{AttemptStore, Clock, FeatCatalog, LeaderboardSource};

/// Dependencies shared by every test run and handler.
///
/// Cheap to clone. Holds the single completion notifier, so the recorder
/// is the only component able to publish completions. Runs it creates are
/// bound to the Tokio runtime current at construction.
#[derive(Clone)]
pub struct LadderAppState {
    pub clock: Arc<dyn Clock>,
    pub attempt_store: Arc<dyn AttemptStore>,
    pub leaderboard: Arc<dyn LeaderboardSource>,
    pub catalog: Arc<dyn FeatCatalog>,
    pub settings: TestRunSettings,
    notifier: CompletionNotifier,
    runtime: Option<Handle>,
}

impl LadderAppState {
    pub fn new(
        clock: Arc<dyn Clock>,
        attempt_store: Arc<dyn AttemptStore>,
        leaderboard: Arc<dyn LeaderboardSource>,
        catalog: Arc<dyn FeatCatalog>,
        settings: TestRunSettings,
    ) -> (Self, CompletionListener) {
        let (notifier, listener) = completion_channel();
        let state = Self {
            clock,
            attempt_store,
            leaderboard,
            catalog,
            settings,
            notifier,
            runtime: Handle::try_current().ok(),
        };
        (state, listener)
    }

    /// Validates `config` and builds state from it, choosing the attempt
    /// store by whether `storage.data_dir` is set.
    pub fn from_config(
        config: &AppConfig,
        leaderboard: Arc<dyn LeaderboardSource>,
        catalog: Arc<dyn FeatCatalog>,
    ) -> Result<(Self, CompletionListener), ValidationError> {
        config.validate()?;

        let attempt_store: Arc<dyn AttemptStore> = match &config.storage.data_dir {
            Some(dir) => {
                tracing::info!(data_dir = %dir.display(), "Using file attempt store");
                Arc::new(FileAttemptStore::new(dir))
            }
            None => {
                tracing::info!("Using in-memory attempt store");
                Arc::new(InMemoryAttemptStore::new())
            }
        };

        Ok(Self::new(
            Arc::new(TokioClock::new()),
            attempt_store,
            leaderboard,
            catalog,
            config.test_run.settings(),
        ))
    }

    pub fn recorder(&self) -> CompletionRecorder {
        CompletionRecorder::new(self.attempt_store.clone(), self.clock.clone(), self.notifier.clone())
    }

    /// A fresh run wired to record its completion.
    pub fn test_run(&self) -> TestRun {
        let recorder = Some(self.recorder());
        match &self.runtime {
            Some(runtime) => TestRun::with_runtime(runtime.clone(), self.clock.clone(), recorder, self.settings),
            None => TestRun::new(self.clock.clone(), recorder, self.settings),
        }
    }

    /// An additional listener for completion notices.
    pub fn completion_listener(&self) -> CompletionListener {
        self.notifier.subscribe()
    }

    /// Handler for the standing of a finished attempt.
    ///
    /// A run records its new best in the background, so callers capture
    /// the prior best before the run starts and evaluate with
    /// [`ProjectStandingHandler::handle_with_prior`].
    pub fn project_standing_handler(&self) -> ProjectStandingHandler {
        ProjectStandingHandler::new(self.attempt_store.clone(), self.leaderboard.clone())
    }

    pub fn load_history_handler(&self) -> LoadHistoryHandler {
        LoadHistoryHandler::new(self.attempt_store.clone(), self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryFeatCatalog, InMemoryLeaderboardSource};
    use crate::application::ProjectStandingQuery;
    use crate::config::{StorageConfig, TestRunConfig};
    use crate::domain::feat::Feat;
    use crate::domain::foundation::{FeatId, Timestamp};
    use crate::domain::records::{LeaderboardSnapshot, PersonalRecord, Placement};
    use std::time::Duration;
    use tempfile::TempDir;

    fn pushups() -> FeatId {
        FeatId::new("feat_pushups").unwrap()
    }

    #[tokio::test]
    async fn from_default_config_uses_memory_store() {
        let (state, listener) = LadderAppState::from_config(
            &AppConfig::default(),
            Arc::new(InMemoryLeaderboardSource::new()),
            Arc::new(InMemoryFeatCatalog::default()),
        )
        .unwrap();

        assert!(state.attempt_store.list_completions().await.unwrap().is_empty());
        assert!(listener.latest().is_none());
        assert_eq!(state.settings, TestRunSettings::default());
    }

    #[tokio::test]
    async fn file_config_persists_to_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            storage: StorageConfig {
                data_dir: Some(temp_dir.path().to_path_buf()),
            },
            ..Default::default()
        };
        let (state, mut listener) = LadderAppState::from_config(
            &config,
            Arc::new(InMemoryLeaderboardSource::new()),
            Arc::new(InMemoryFeatCatalog::default()),
        )
        .unwrap();

        let feat_id = crate::domain::foundation::FeatId::new("feat_plank").unwrap();
        state
            .recorder()
            .record(feat_id.clone(), 3, std::time::Duration::from_secs(180))
            .await;

        assert_eq!(listener.changed().await.unwrap().feat_id, feat_id);
        assert!(temp_dir.path().join("completions.json").exists());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AppConfig {
            test_run: TestRunConfig {
                tick_interval_ms: 0,
                ..Default::default()
            },
            ..Default::default()
        };

        let result = LadderAppState::from_config(
            &config,
            Arc::new(InMemoryLeaderboardSource::new()),
            Arc::new(InMemoryFeatCatalog::default()),
        );

        assert!(matches!(result, Err(ValidationError::ZeroTickInterval)));
    }

    #[tokio::test(start_paused = true)]
    async fn standing_of_a_recorded_run_uses_best_captured_before_start() {
        let store = InMemoryAttemptStore::new();
        store
            .seed_best(PersonalRecord::new(pushups(), 20, Duration::from_secs(60), Timestamp::from_unix_secs(0)))
            .await;
        let board = LeaderboardSnapshot::new(
            pushups(),
            vec![Placement::new(1, "ana", 40), Placement::new(2, "bo", 22), Placement::new(3, "cy", 10)],
        );
        let (state, mut listener) = LadderAppState::new(
            Arc::new(TokioClock::new()),
            Arc::new(store.clone()),
            Arc::new(InMemoryLeaderboardSource::with_leaderboard(board)),
            Arc::new(InMemoryFeatCatalog::default()),
            TestRunSettings::default(),
        );

        let prior = state.attempt_store.get_best_score(&pushups()).await.unwrap();
        let run = state.test_run();
        run.configure(Feat::new(pushups(), "1 MIN PUSH-UPS", "Push-ups"));
        run.start_test();
        for _ in 0..25 {
            run.increment_rep();
        }
        run.complete_test();
        listener.changed().await.unwrap();

        let handler = state.project_standing_handler();
        let query = ProjectStandingQuery {
            feat_id: pushups(),
            rep_count: 25,
        };
        let outcome = handler.handle_with_prior(query.clone(), prior.as_ref()).await;
        assert!(outcome.is_new_personal_record);
        assert_eq!(outcome.rank, Some(2));
        assert!(!outcome.outside_listed);

        // The store already holds this attempt as the best.
        let after = handler.handle(query).await.unwrap();
        assert!(!after.is_new_personal_record);
        assert_eq!(after.rank, Some(2));
    }
}
