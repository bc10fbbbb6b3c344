//! PostgreSQL record store tests.
//!
//! Need a reachable `DATABASE_URL`; run with `cargo test -- --ignored`.

use keyed_shortener::domain::entities::NewUrlRecord;
use keyed_shortener::domain::repositories::UrlRepository;
use keyed_shortener::error::AppError;
use keyed_shortener::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_record(key: &str) -> NewUrlRecord {
    NewUrlRecord {
        target_url: "https://example.com".to_string(),
        key: key.to_string(),
        secret_key: format!("{key}_ABCDEFGH"),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let created = repo.create(new_record("pgkey")).await.unwrap();
    assert_eq!(created.clicks, 0);
    assert!(created.is_active);

    let by_key = repo.find_by_key("pgkey").await.unwrap().unwrap();
    assert_eq!(by_key, created);

    let by_secret = repo
        .find_by_secret_key("pgkey_ABCDEFGH")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_secret.id, created.id);

    assert!(repo.find_by_key("other").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_key_is_conflict(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.create(new_record("dup")).await.unwrap();

    let result = repo.create(new_record("dup")).await;

    assert!(matches!(result, Err(AppError::StorageConflict { .. })));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_concurrent_clicks_are_not_lost(pool: PgPool) {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let record = repo.create(new_record("busy")).await.unwrap();

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.record_click(record.id).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let record = repo.find_by_key("busy").await.unwrap().unwrap();
    assert_eq!(record.clicks, 20);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_deactivate(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let record = repo.create(new_record("gone")).await.unwrap();

    let deactivated = repo
        .deactivate_by_secret_key("gone_ABCDEFGH")
        .await
        .unwrap()
        .unwrap();
    assert!(!deactivated.is_active);

    assert!(repo.find_by_key("gone").await.unwrap().is_none());
    assert!(repo.find_by_secret_key("gone_ABCDEFGH").await.unwrap().is_none());
    assert!(repo.record_click(record.id).await.unwrap().is_none());
    assert!(repo.key_exists("gone").await.unwrap());
    assert!(
        repo.deactivate_by_secret_key("gone_ABCDEFGH")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_stats_and_health(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let first = repo.create(new_record("one")).await.unwrap();
    repo.create(new_record("two")).await.unwrap();
    repo.record_click(first.id).await.unwrap();
    repo.record_click(first.id).await.unwrap();
    repo.deactivate_by_secret_key("two_ABCDEFGH").await.unwrap();

    let stats = repo.stats().await.unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.clicks, 2);

    assert!(repo.health_check().await);
}
