use axum::Json;
use serde_json::{json, Value};

use crate::dsl::model::CURRENT_DSL_VERSION;

/// GET /health
/// Returns a simple status object with service and DSL schema versions.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-dsl-api",
        "dslVersion": CURRENT_DSL_VERSION
    }))
}
