// src/server.rs
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::config::consts::{API_PATH, HEALTH_PATH};
use crate::config::Options;
use crate::record::{today_label, MeditationRecord};
use crate::service::DailyText;

// Degraded payloads should not stick in downstream caches.
const NO_STORE: &str = "no-store";

#[derive(Clone)]
pub struct AppState {
    pub daily: Arc<DailyText>,
    pub cache_control: String,
}

impl AppState {
    pub fn new(daily: Arc<DailyText>, opts: &Options) -> Self {
        Self { daily, cache_control: opts.cache_control() }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(API_PATH, get(get_jft))
        .route(HEALTH_PATH, get(health_check))
        .with_state(state)
}

pub async fn serve(opts: &Options, daily: Arc<DailyText>) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(&opts.bind).await?;
    logf!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(AppState::new(daily, opts))).await?;
    Ok(())
}

async fn get_jft(State(state): State<AppState>) -> impl IntoResponse {
    let daily = Arc::clone(&state.daily);
    let record = match tokio::task::spawn_blocking(move || daily.get_today()).await {
        Ok(record) => record,
        Err(e) => {
            loge!("JFT: extraction task failed: {}", e);
            MeditationRecord::fallback(today_label())
        }
    };

    let cache_control = if record.success { state.cache_control.clone() } else { s!(NO_STORE) };
    ([(header::CACHE_CONTROL, cache_control)], Json(record))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
