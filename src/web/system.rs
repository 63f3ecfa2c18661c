use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::AppState;

pub const BANNER: &str = "Item API is running!";
pub const HEALTHY: &str = "Healthy";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub framework: String,
    pub environment: String,
    pub process_id: u32,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub item_count: usize,
}

pub async fn root() -> &'static str {
    BANNER
}

/// Liveness check. Only proves the process can answer HTTP.
pub async fn health() -> &'static str {
    HEALTHY
}

pub async fn info(State(state): State<AppState>) -> Json<SystemInfo> {
    Json(SystemInfo {
        hostname: hostname(),
        os: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
        framework: "axum/tokio (Rust)".to_string(),
        environment: state.environment.to_string(),
        process_id: std::process::id(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        item_count: state.repo.len(),
    })
}

fn hostname() -> String {
    machine_name()
        .or_else(|| {
            ["HOSTNAME", "COMPUTERNAME"]
                .iter()
                .find_map(|key| std::env::var(key).ok().filter(|value| !value.is_empty()))
        })
        .unwrap_or_else(|| "unknown".to_string())
}

fn machine_name() -> Option<String> {
    let name = gethostname::gethostname().to_string_lossy().into_owned();
    (!name.is_empty()).then_some(name)
}
