pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::compiler::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // DSL editing (no storage)
        .route("/api/v1/dsl/validate", post(handlers::handle_validate))
        .route("/api/v1/dsl/preview", post(handlers::handle_preview))
        .route(
            "/api/v1/dsl/sections/move",
            post(handlers::handle_move_section),
        )
        // Compiled ASTs
        .route("/api/v1/resumes/:id/ast", get(handlers::handle_render))
        .route(
            "/api/v1/public/:slug/ast",
            get(handlers::handle_render_public),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::compiler::ResumeCompiler;
    use crate::config::Config;
    use crate::dsl::fixtures;
    use crate::dsl::migration::MigrationEngine;
    use crate::dsl::migrators::default_migrators;
    use crate::models::resume::ResumeContent;
    use crate::storage::memory::InMemoryResumeStore;

    fn app(store: Arc<InMemoryResumeStore>) -> Router {
        let mut migrations = MigrationEngine::new();
        migrations.register_migrators(default_migrators()).unwrap();
        let state = AppState {
            config: Config {
                database_url: "postgres://localhost/test".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                db_max_connections: 1,
                persist_migrated_dsl: false,
            },
            compiler: Arc::new(ResumeCompiler::new(Arc::new(migrations), store, false)),
        };
        build_router(state)
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(Default::default()), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["dslVersion"], "1.0.0");
    }

    #[tokio::test]
    async fn test_validate_reports_issues_with_200() {
        let mut raw = fixtures::raw_two_column();
        raw["layout"]["margins"] = json!("huge");
        let (status, body) = send(
            app(Default::default()),
            Method::POST,
            "/api/v1/dsl/validate",
            Some(raw),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
        assert_eq!(body["errors"][0]["path"], "/layout/margins");
    }

    #[tokio::test]
    async fn test_preview_returns_ast() {
        let (status, body) = send(
            app(Default::default()),
            Method::POST,
            "/api/v1/dsl/preview?target=pdf",
            Some(fixtures::raw_two_column()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["target"], "pdf");
        assert_eq!(body["page"]["widthMm"], 210.0);
        assert_eq!(body["page"]["columns"][0]["widthPercentage"], 70);
        assert_eq!(body["sections"][0]["type"], "skills");
        assert_eq!(body["sections"][0]["title"], "Skills");
    }

    #[tokio::test]
    async fn test_preview_rejects_invalid_dsl() {
        let (status, body) = send(
            app(Default::default()),
            Method::POST,
            "/api/v1/dsl/preview",
            Some(json!({"version": "2.0.0"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_DSL");
        assert!(body["error"]["details"].as_array().unwrap().len() > 1);
    }

    #[tokio::test]
    async fn test_move_section() {
        let mut raw = fixtures::raw_two_column();
        raw["sections"] = json!([
            {"id": "summary", "visible": true, "order": 0, "column": "main"},
            {"id": "experience", "visible": true, "order": 5, "column": "main"},
            {"id": "skills", "visible": true, "order": 9, "column": "sidebar"}
        ]);
        let (status, body) = send(
            app(Default::default()),
            Method::POST,
            "/api/v1/dsl/sections/move",
            Some(json!({"dsl": raw.clone(), "from": 2, "to": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let order: Vec<(&str, i64)> = body["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| (s["id"].as_str().unwrap(), s["order"].as_i64().unwrap()))
            .collect();
        assert_eq!(order, vec![("skills", 0), ("summary", 1), ("experience", 2)]);

        let (status, body) = send(
            app(Default::default()),
            Method::POST,
            "/api/v1/dsl/sections/move",
            Some(json!({"dsl": raw, "from": 3, "to": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_render_owned_resume() {
        let store = Arc::new(InMemoryResumeStore::default());
        let owner = Uuid::new_v4();
        let id = store.insert(owner, None, false, fixtures::raw_two_column(), ResumeContent::default());

        let (status, body) = send(
            app(store.clone()),
            Method::GET,
            &format!("/api/v1/resumes/{id}/ast?user_id={owner}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["target"], "html");

        let (status, body) = send(
            app(store.clone()),
            Method::GET,
            &format!("/api/v1/resumes/{id}/ast?user_id={}", Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");

        let (status, _) = send(
            app(store),
            Method::GET,
            &format!("/api/v1/resumes/{}/ast?user_id={owner}", Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_render_public_resume() {
        let store = Arc::new(InMemoryResumeStore::default());
        store.insert(Uuid::new_v4(), Some("ada"), true, fixtures::raw_two_column(), ResumeContent::default());
        store.insert(Uuid::new_v4(), Some("bob"), false, fixtures::raw_two_column(), ResumeContent::default());

        let (status, _) = send(app(store.clone()), Method::GET, "/api/v1/public/ada/ast", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(app(store), Method::GET, "/api/v1/public/bob/ast", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
