use chrono::Duration;
use storage::repository::{
    AppSettingsRepository, Storage, StorageError, TrainingSessionRepository,
};
use storage::sqlite::SqliteRepository;
use trainer_core::model::{
    AppSettings, Difficulty, ThemeMode, TimeLimit, TrainingSessionId, TrainingSessionRecord,
};
use trainer_core::time::fixed_now;

fn record(
    difficulty: Difficulty,
    total: u32,
    correct: u32,
    limit: TimeLimit,
    minutes: i64,
) -> TrainingSessionRecord {
    TrainingSessionRecord::new(
        difficulty,
        total,
        correct,
        limit,
        fixed_now() + Duration::minutes(minutes),
    )
    .unwrap()
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_session_fields() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let stored = record(Difficulty::Custom, 12, 10, TimeLimit::Unlimited, 0);
    let id = repo.append_session(&stored).await.unwrap();

    let fetched = repo.get_session(id).await.unwrap();
    assert_eq!(fetched, stored);
    assert!(fetched.time_limit().is_unlimited());

    let missing = repo.get_session(TrainingSessionId::new(id.value() + 100)).await;
    assert!(matches!(missing, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn sqlite_aggregates_and_lists_recent_sessions() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_stats?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let empty = repo.aggregate_stats().await.unwrap();
    assert_eq!(empty.sessions, 0);
    assert_eq!(empty.total_questions, 0);
    assert_eq!(empty.accuracy(), 0.0);

    let limit = TimeLimit::default();
    repo.append_session(&record(Difficulty::Easy, 10, 8, limit, 0))
        .await
        .unwrap();
    repo.append_session(&record(Difficulty::Medium, 15, 12, limit, 1))
        .await
        .unwrap();
    repo.append_session(&record(Difficulty::Hard, 20, 18, limit, 2))
        .await
        .unwrap();
    let newest = repo
        .append_session(&record(Difficulty::Custom, 12, 10, limit, 3))
        .await
        .unwrap();

    let stats = repo.aggregate_stats().await.unwrap();
    assert_eq!(stats.sessions, 4);
    assert_eq!(stats.total_questions, 57);
    assert_eq!(stats.correct_answers, 48);
    assert_eq!(format!("{:.1}", stats.accuracy()), "84.2");

    let recent = repo.list_recent_sessions(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, newest);
    assert_eq!(recent[0].record.difficulty(), Difficulty::Custom);
    assert_eq!(recent[1].record.difficulty(), Difficulty::Hard);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let versions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(versions, 1);
}

#[tokio::test]
async fn schema_rejects_more_correct_than_total() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_check?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let res = sqlx::query(
        "INSERT INTO training_sessions (difficulty, total_questions, correct_answers, time_per_question, date)
         VALUES ('Easy', 1, 2, 10, '2023-11-14T22:13:20Z')",
    )
    .execute(repo.pool())
    .await;
    assert!(res.is_err());
}

#[tokio::test]
async fn settings_default_to_none_then_upsert() {
    let storage = Storage::sqlite("sqlite:file:memdb_settings?mode=memory&cache=shared")
        .await
        .expect("storage");

    assert_eq!(storage.settings.get_settings().await.unwrap(), None);

    let dark = AppSettings::new(true, ThemeMode::Dark);
    storage.settings.save_settings(&dark).await.unwrap();
    assert_eq!(storage.settings.get_settings().await.unwrap(), Some(dark));

    let light = dark.with_theme(ThemeMode::Light).with_voice_enabled(false);
    storage.settings.save_settings(&light).await.unwrap();
    assert_eq!(storage.settings.get_settings().await.unwrap(), Some(light));
}
