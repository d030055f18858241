#![allow(dead_code)]

use axum::extract::ConnectInfo;
use chrono::{DateTime, Utc};
use clickshort::domain::entities::{NewClick, NewMapping};
use clickshort::domain::repositories::{ClickRepository, MappingRepository};
use clickshort::infrastructure::persistence::{
    self, SqliteClickRepository, SqliteMappingRepository,
};
use clickshort::state::AppState;
use clickshort::utils::code_generator::CodeGenerator;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const BASE_URL: &str = "http://sho.rt";

pub async fn setup_pool() -> SqlitePool {
    let pool = persistence::connect_in_memory().await.unwrap();
    persistence::migrate(&pool).await.unwrap();
    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let generator = CodeGenerator::seeded("abcdefghijklmnopqrstuvwxyz", 6, 42).unwrap();
    create_test_state_with(pool, generator)
}

pub fn create_test_state_with(pool: SqlitePool, generator: CodeGenerator) -> AppState {
    AppState::new(Arc::new(pool), Arc::new(generator), BASE_URL.to_string())
}

pub async fn create_test_mapping(
    pool: &SqlitePool,
    code: &str,
    target: &str,
    expires_at: Option<DateTime<Utc>>,
) {
    SqliteMappingRepository::new(Arc::new(pool.clone()))
        .insert(NewMapping {
            code: code.to_string(),
            target: target.to_string(),
            alias: None,
            expires_at,
        })
        .await
        .unwrap();
}

pub async fn create_test_click(pool: &SqlitePool, code: &str, occurred_at: DateTime<Utc>) {
    SqliteClickRepository::new(Arc::new(pool.clone()))
        .insert_click(NewClick {
            code: code.to_string(),
            source_address: "127.0.0.1:12345".to_string(),
            client_agent: "test-agent".to_string(),
            occurred_at,
        })
        .await
        .unwrap();
}

pub async fn count_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Injects a fixed peer address, standing in for `into_make_service_with_connect_info`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
