//! Instance metadata endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::config::Configuration;

/// Handler to expose non-sensitive instance configuration.
pub async fn handler(
    State(config): State<Arc<Configuration>>,
) -> Json<Configuration> {
    Json(config.as_ref().clone())
}
