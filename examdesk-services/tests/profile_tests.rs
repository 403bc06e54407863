//! Profile service tests.

mod common;

use common::{sqlite_store, FailingStore};
use examdesk_services::{ProfileService, UserStatistics};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn seeded_profile_is_present() {
    let service = ProfileService::new(sqlite_store()).await.unwrap();

    let profile = service.get().await.unwrap();
    assert_eq!(profile.get_str("/name"), Some("Alex Chen"));
    assert_eq!(profile.get_str("/major"), Some("Computer Science"));
    assert_eq!(profile.get_str("/achievements/0"), Some("Dean's list, spring term"));
    assert!(profile.get_str("/avatar").is_none());
}

#[tokio::test]
async fn update_merges_into_the_single_record() {
    let service = ProfileService::new(sqlite_store()).await.unwrap();

    let updated = service
        .update(json!({"major": "Applied Mathematics", "grade": "Senior"}))
        .await
        .unwrap();
    assert_eq!(updated.get_str("/major"), Some("Applied Mathematics"));
    assert_eq!(updated.get_str("/grade"), Some("Senior"));
    assert_eq!(updated.get_str("/name"), Some("Alex Chen"));

    // Still exactly one record.
    let reread = service.get().await.unwrap();
    assert_eq!(reread.get_str("/major"), Some("Applied Mathematics"));
}

#[tokio::test]
async fn update_avatar_sets_the_reference() {
    let service = ProfileService::new(sqlite_store()).await.unwrap();
    let updated = service.update_avatar("avatars/alex.png").await.unwrap();
    assert_eq!(updated.get_str("/avatar"), Some("avatars/alex.png"));
}

#[test]
fn statistics_serialize_in_camel_case() {
    let stats = UserStatistics::current();
    assert_eq!(stats.completed_exams, 12);
    assert_eq!(stats.ranking, "Top 10%");

    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(
        value,
        json!({
            "completedExams": 12,
            "averageScore": 85,
            "studyHours": 120,
            "ranking": "Top 10%",
        })
    );
}

#[tokio::test]
async fn degraded_profile_still_reads_and_writes() {
    let service = ProfileService::new(FailingStore::new()).await.unwrap();
    assert!(!service.health().is_available());

    let profile = service.get().await.unwrap();
    assert_eq!(profile.get_str("/name"), Some("Alex Chen"));

    let updated = service.update(json!({"bio": "Offline edit"})).await.unwrap();
    assert_eq!(updated.get_str("/bio"), Some("Offline edit"));
}
