use std::sync::Arc;

use chrono::Duration;
use services::{AppServices, Clock, TrainingConfig};
use storage::repository::{
    AppSettingsRepository, InMemoryRepository, Storage, StorageError, TrainingSessionRepository,
    TrainingSessionRow,
};
use trainer_core::model::{
    AppSettings, Difficulty, ThemeMode, TimeLimit, TrainingSessionId, TrainingSessionRecord,
    TrainingStats,
};
use trainer_core::time::fixed_now;

use crate::vm::TrainingScreenVm;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

async fn seed_example_sessions(storage: &Storage) {
    let sessions = [
        (Difficulty::Easy, 10, 8),
        (Difficulty::Medium, 15, 12),
        (Difficulty::Hard, 20, 18),
        (Difficulty::Custom, 12, 10),
    ];
    for (i, (difficulty, total, correct)) in sessions.into_iter().enumerate() {
        let record = TrainingSessionRecord::new(
            difficulty,
            total,
            correct,
            TimeLimit::default(),
            fixed_now() + Duration::minutes(i64::try_from(i).unwrap()),
        )
        .unwrap();
        storage.sessions.append_session(&record).await.unwrap();
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_overall_stats() {
    let mut harness = setup_view_harness(ViewKind::Home);
    seed_example_sessions(&harness.storage).await;

    harness.settle().await;
    let html = harness.render();
    for expected in [
        "Total Sessions: 4",
        "Total Questions: 57",
        "Correct Answers: 48",
        "Accuracy: 84.2%",
        "Start New Training",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("Custom"), "missing newest session in {html}");
    assert!(!html.contains("No training sessions yet."), "unexpected empty text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Accuracy: 0.0%"), "missing zero accuracy in {html}");
    assert!(html.contains("No training sessions yet."), "missing empty text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_session_cards() {
    let mut harness = setup_view_harness(ViewKind::History);
    seed_example_sessions(&harness.storage).await;

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Score: 8/10"), "missing score in {html}");
    assert!(html.contains("Accuracy: 80.0%"), "missing accuracy in {html}");
    assert!(html.contains("10 seconds"), "missing time limit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn new_training_view_smoke_lists_choices() {
    let mut harness = setup_view_harness(ViewKind::NewTraining);
    harness.settle().await;
    let html = harness.render();
    for expected in ["Easy", "Medium", "Hard", "Custom", "Unlimited", "60 seconds", "Start"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    // Custom bounds are hidden until Custom is selected.
    assert!(!html.contains("custom-min"), "unexpected custom inputs in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn training_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Training { secs: 10 });
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("3 x 3 = ?"), "missing question in {html}");
    assert!(html.contains("Time: 10"), "missing timer in {html}");
    assert!(html.contains("Score: 0/0"), "missing score in {html}");
    assert!(html.contains("End Training"), "missing end button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn training_view_smoke_shows_infinite_timer() {
    let mut harness = setup_view_harness(ViewKind::Training { secs: 0 });
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Time: \u{221e}"), "missing unlimited timer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_smoke_renders_saved_values() {
    let storage = Storage::in_memory();
    storage
        .settings
        .save_settings(&AppSettings::new(true, ThemeMode::Dark))
        .await
        .unwrap();

    let mut harness = setup_view_harness_with_storage(ViewKind::Settings, storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Theme: dark"), "missing theme in {html}");
    assert!(html.contains("Voice"), "missing voice toggle in {html}");
}

struct FailingSessionRepo;

#[async_trait::async_trait]
impl TrainingSessionRepository for FailingSessionRepo {
    async fn append_session(
        &self,
        _record: &TrainingSessionRecord,
    ) -> Result<TrainingSessionId, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_session(
        &self,
        _id: TrainingSessionId,
    ) -> Result<TrainingSessionRecord, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_recent_sessions(
        &self,
        _limit: u32,
    ) -> Result<Vec<TrainingSessionRow>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn aggregate_stats(&self) -> Result<TrainingStats, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_with_retry() {
    let settings: Arc<dyn AppSettingsRepository> = Arc::new(InMemoryRepository::new());
    let storage = Storage {
        sessions: Arc::new(FailingSessionRepo),
        settings,
    };

    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Could not reach the training database."),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_end_leaves_run_waiting_for_save() {
    let settings: Arc<dyn AppSettingsRepository> = Arc::new(InMemoryRepository::new());
    let storage = Storage {
        sessions: Arc::new(FailingSessionRepo),
        settings,
    };
    let services = AppServices::from_storage(&storage, Clock::fixed(fixed_now()));
    let training = services.training();

    let config = TrainingConfig::custom("3", "3", TimeLimit::Unlimited);
    let mut run = training.start(config).await.unwrap();
    assert!(training.submit(&mut run, "9").unwrap().is_correct());
    assert!(training.end(&mut run).await.is_err());

    let vm = TrainingScreenVm::from_run(&run);
    assert!(vm.ended);
    assert!(vm.save_pending);
    assert!(!vm.awaiting_answer());
    assert_eq!(vm.score, "Score: 1/1");
}
