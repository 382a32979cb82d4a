use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::compiler::ast::{RenderTarget, ResumeAst};
use crate::dsl::model::ResumeDsl;
use crate::dsl::reorder::move_section;
use crate::dsl::validation::{validate_or_throw, ValidationResult};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TargetQuery {
    #[serde(default)]
    pub target: RenderTarget,
}

#[derive(Deserialize)]
pub struct RenderQuery {
    pub user_id: Uuid,
    #[serde(default)]
    pub target: RenderTarget,
}

#[derive(Deserialize)]
pub struct MoveSectionRequest {
    pub dsl: Value,
    pub from: usize,
    pub to: usize,
}

/// POST /api/v1/dsl/validate
///
/// Always 200: the result carries `valid` and the issue list.
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Json<ValidationResult> {
    Json(state.compiler.validate(&raw))
}

/// POST /api/v1/dsl/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<TargetQuery>,
    Json(raw): Json<Value>,
) -> Result<Json<ResumeAst>, AppError> {
    let ast = state.compiler.preview(&raw, params.target)?;
    Ok(Json(ast))
}

/// POST /api/v1/dsl/sections/move
///
/// Moves the section at display position `from` to `to` and renumbers orders densely.
pub async fn handle_move_section(
    Json(req): Json<MoveSectionRequest>,
) -> Result<Json<ResumeDsl>, AppError> {
    let dsl = validate_or_throw(&req.dsl)?;
    let moved = move_section(&dsl, req.from, req.to).ok_or_else(|| {
        AppError::Validation(format!(
            "Cannot move section {} to {}: resume has {} section(s)",
            req.from,
            req.to,
            dsl.sections.len()
        ))
    })?;
    Ok(Json(moved))
}

/// GET /api/v1/resumes/:id/ast
pub async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<RenderQuery>,
) -> Result<Json<ResumeAst>, AppError> {
    let ast = state
        .compiler
        .render(id, params.user_id, params.target)
        .await?;
    Ok(Json(ast))
}

/// GET /api/v1/public/:slug/ast
pub async fn handle_render_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<TargetQuery>,
) -> Result<Json<ResumeAst>, AppError> {
    let ast = state.compiler.render_public(&slug, params.target).await?;
    Ok(Json(ast))
}
