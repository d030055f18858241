mod common;

use axum_test::TestServer;
use chrono::{Duration, Local, TimeZone};
use clickshort::routes::build_router;
use serde_json::Value;

#[tokio::test]
async fn test_analytics_groups_by_local_day() {
    let pool = common::setup_pool().await;
    common::create_test_mapping(&pool, "stats1", "https://example.com/stats", None).await;

    let day_one = Local
        .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .unwrap()
        .to_utc();
    let day_two = day_one + Duration::days(1);

    for minutes in [0, 5, 10] {
        common::create_test_click(&pool, "stats1", day_one + Duration::minutes(minutes)).await;
    }
    common::create_test_click(&pool, "stats1", day_two).await;

    let state = common::create_test_state(pool);
    let server = TestServer::new(build_router(state).layer(common::MockConnectInfoLayer)).unwrap();

    let response = server.get("/analytics/stats1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total_click_counts"], 4);

    let days = body["day"].as_object().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days["01 Mar 2024"]["click_counts"], 3);
    assert_eq!(days["01 Mar 2024"]["timestamps"].as_array().unwrap().len(), 3);
    assert_eq!(days["02 Mar 2024"]["click_counts"], 1);
}

#[tokio::test]
async fn test_analytics_unknown_code_is_empty() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(build_router(state).layer(common::MockConnectInfoLayer)).unwrap();

    let response = server.get("/analytics/nothing").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total_click_counts"], 0);
    assert!(body["day"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_analytics_follows_redirects() {
    let pool = common::setup_pool().await;
    common::create_test_mapping(&pool, "flow01", "https://example.com/flow", None).await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(build_router(state).layer(common::MockConnectInfoLayer)).unwrap();

    server.get("/flow01").await;
    server.get("/flow01").await;

    let body: Value = server.get("/analytics/flow01").await.json();
    assert_eq!(body["total_click_counts"], 2);
}
