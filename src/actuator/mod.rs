//! Health and info endpoints.
//!
//! Both paths are exempt from authentication (see
//! [`PUBLIC_PATHS`](crate::security::auth::PUBLIC_PATHS)).

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Info {
    pub app: AppInfo,
}

pub async fn get_health() -> Json<Health> {
    Json(Health { status: "UP" })
}

pub async fn get_info() -> Json<Info> {
    Json(Info {
        app: AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        },
    })
}

pub fn actuator_router() -> Router {
    Router::new()
        .route("/actuator/health", get(get_health))
        .route("/actuator/info", get(get_info))
}
