mod common;

use chrono::{Duration, TimeZone, Utc};
use clickshort::domain::entities::NewClick;
use clickshort::domain::repositories::ClickRepository;
use clickshort::infrastructure::persistence::SqliteClickRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_insert_and_list_in_order() {
    let pool = common::setup_pool().await;
    common::create_test_mapping(&pool, "clk001", "https://example.com", None).await;
    let repo = SqliteClickRepository::new(Arc::new(pool));

    let first = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let second = first + Duration::hours(30);

    for at in [first, second] {
        repo.insert_click(NewClick {
            code: "clk001".to_string(),
            source_address: "10.0.0.1:5000".to_string(),
            client_agent: "curl/8.0".to_string(),
            occurred_at: at,
        })
        .await
        .unwrap();
    }

    let clicks = repo.list_clicks_by_code("clk001").await.unwrap();
    assert_eq!(clicks, vec![first, second]);
}

#[tokio::test]
async fn test_list_unknown_code_is_empty() {
    let pool = common::setup_pool().await;
    let repo = SqliteClickRepository::new(Arc::new(pool));

    let clicks = repo.list_clicks_by_code("missing").await.unwrap();
    assert!(clicks.is_empty());
}

#[tokio::test]
async fn test_click_requires_existing_mapping() {
    let pool = common::setup_pool().await;
    let repo = SqliteClickRepository::new(Arc::new(pool));

    let result = repo
        .insert_click(NewClick::now("orphan", String::new(), String::new()))
        .await;

    assert!(result.is_err());
}
