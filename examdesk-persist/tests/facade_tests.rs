//! Tests for the durable-to-mirror fallback facade.

mod common;

use common::{todo_schema, todo_seeds, RecordingStore};
use examdesk_model::EntityKind;
use examdesk_persist::{EntityFacade, SeedDescriptor};
use examdesk_types::EntityId;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

async fn healthy_facade() -> (Arc<RecordingStore>, EntityFacade) {
    let store = RecordingStore::new();
    let facade = EntityFacade::bootstrap(
        EntityKind::Todo,
        store.clone(),
        &todo_schema(),
        todo_seeds(),
    )
    .await
    .unwrap();
    (store, facade)
}

// ── Healthy path ────────────────────────────────────────────────────────

#[tokio::test]
async fn bootstrap_seeds_store_and_serves_from_it() {
    let (store, facade) = healthy_facade().await;

    assert!(facade.health().is_available());
    assert_eq!(store.rows().len(), 3);
    assert_eq!(facade.count().await, 3);

    let titles: Vec<_> = facade
        .find_all()
        .await
        .iter()
        .map(|e| e.get_str("/title").unwrap().to_owned())
        .collect();
    assert_eq!(
        titles,
        ["Pack the lab kit", "Book the study room", "Print the handout"]
    );
}

#[tokio::test]
async fn bootstrap_twice_seeds_once() {
    let store = RecordingStore::new();
    for _ in 0..2 {
        EntityFacade::bootstrap(
            EntityKind::Todo,
            store.clone(),
            &todo_schema(),
            todo_seeds(),
        )
        .await
        .unwrap();
    }
    assert_eq!(store.rows().len(), 3);
}

#[tokio::test]
async fn invalid_seed_row_fails_bootstrap() {
    let result = EntityFacade::bootstrap(
        EntityKind::Todo,
        RecordingStore::new(),
        &todo_schema(),
        SeedDescriptor::new(vec![json!({"completed": true})]),
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn create_then_read_back() {
    let (_store, facade) = healthy_facade().await;

    let created = facade
        .create(json!({"title": "Collect handouts", "completed": false}))
        .await;
    assert_eq!(created.get_str("/title"), Some("Collect handouts"));
    assert!(created.created_at > 0);

    let found = facade.find_by_id(&created.id).await.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(facade.count().await, 4);
}

#[tokio::test]
async fn update_and_remove_roundtrip() {
    let (_store, facade) = healthy_facade().await;
    let rows = facade.find_all().await;
    let first = &rows[0];

    let updated = facade
        .update(&first.id, json!({"completed": true}))
        .await
        .unwrap();
    assert_eq!(updated.get_bool("/completed"), Some(true));
    assert_eq!(updated.get_str("/title"), first.get_str("/title"));

    assert!(facade.remove(&first.id).await);
    assert!(facade.find_by_id(&first.id).await.is_none());
    assert_eq!(facade.count().await, 2);
}

#[tokio::test]
async fn absent_ids_are_normal_outcomes() {
    let (_store, facade) = healthy_facade().await;
    let ghost = EntityId::new();

    assert!(facade.find_by_id(&ghost).await.is_none());
    assert!(facade.update(&ghost, json!({"completed": true})).await.is_none());
    assert!(!facade.remove(&ghost).await);
}

#[tokio::test]
async fn find_by_filter_applies_predicate() {
    let (_store, facade) = healthy_facade().await;

    let done = facade
        .find_by_filter(|e| e.get_bool("/completed") == Some(true))
        .await;
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].get_str("/title"), Some("Book the study room"));
}

// ── Degraded path ───────────────────────────────────────────────────────

#[tokio::test]
async fn unreachable_store_still_serves_seed_data() {
    let store = RecordingStore::tripped();
    let facade = EntityFacade::bootstrap(
        EntityKind::Todo,
        store.clone(),
        &todo_schema(),
        todo_seeds(),
    )
    .await
    .unwrap();

    assert!(!facade.health().is_available());

    let rows = facade.find_all().await;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get_str("/title"), Some("Pack the lab kit"));

    // Only the seed-time count probe ever reached the store.
    let after_bootstrap = store.calls();
    facade.count().await;
    facade.find_all().await;
    facade.create(json!({"title": "Offline note"})).await;
    assert_eq!(store.calls(), after_bootstrap);
}

#[tokio::test]
async fn first_failure_latches_to_the_mirror() {
    let (store, facade) = healthy_facade().await;
    facade.create(json!({"title": "Durable only", "completed": false})).await;
    assert_eq!(facade.count().await, 4);

    store.trip();

    // The failing call falls back to the mirror, which still holds the
    // seed rows; the durable-only record is gone from view.
    let rows = facade.find_all().await;
    assert_eq!(rows.len(), 3);
    assert!(!facade.health().is_available());

    // The store is never polled again.
    let frozen = store.calls();
    facade.count().await;
    facade.find_all().await;
    facade.find_by_id(&rows[0].id).await;
    assert_eq!(store.calls(), frozen);
}

#[tokio::test]
async fn degraded_writes_live_in_the_mirror() {
    let store = RecordingStore::tripped();
    let facade = EntityFacade::bootstrap(
        EntityKind::Todo,
        store.clone(),
        &todo_schema(),
        todo_seeds(),
    )
    .await
    .unwrap();

    let created = facade
        .create(json!({"title": "Mirror note", "completed": false}))
        .await;
    assert_eq!(facade.count().await, 4);
    assert_eq!(
        facade.find_by_id(&created.id).await.unwrap().get_str("/title"),
        Some("Mirror note")
    );

    let updated = facade
        .update(&created.id, json!({"completed": true}))
        .await
        .unwrap();
    assert_eq!(updated.get_bool("/completed"), Some(true));
    assert!(updated.updated_at > updated.created_at);

    assert!(facade.remove(&created.id).await);
    assert_eq!(facade.count().await, 3);
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn degraded_absent_ids_are_normal_outcomes() {
    let facade = EntityFacade::bootstrap(
        EntityKind::Todo,
        RecordingStore::tripped(),
        &todo_schema(),
        todo_seeds(),
    )
    .await
    .unwrap();
    let ghost = EntityId::new();

    assert!(facade.find_by_id(&ghost).await.is_none());
    assert!(facade.update(&ghost, json!({"x": 1})).await.is_none());
    assert!(!facade.remove(&ghost).await);
}

#[tokio::test]
async fn degraded_filter_scans_the_mirror() {
    let facade = EntityFacade::bootstrap(
        EntityKind::Todo,
        RecordingStore::tripped(),
        &todo_schema(),
        todo_seeds(),
    )
    .await
    .unwrap();

    let open = facade
        .find_by_filter(|e| e.get_bool("/completed") == Some(false))
        .await;
    assert_eq!(open.len(), 2);
}
