//! AST Assembler — orchestrates the compile pipeline.
//!
//! Flow: validate → migrate (if stale) → resolve tokens → build page layout →
//!       compile + style visible sections in order → ResumeAst.
//!
//! Every stage after validation is a pure function. `render` and `render_public`
//! are the only operations that reach the storage collaborator.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::compiler::ast::{AstMeta, AstSection, RenderTarget, ResumeAst};
use crate::dsl::migration::MigrationEngine;
use crate::dsl::model::{ResumeDsl, SectionKind, CURRENT_DSL_VERSION};
use crate::dsl::reorder::sort_for_display;
use crate::dsl::validation::{validate, validate_or_throw, ValidationResult};
use crate::errors::AppError;
use crate::layout::{build_page_layout, build_section_styles, map_column_to_id};
use crate::models::resume::ResumeContent;
use crate::sections::compilers::compile_section;
use crate::storage::{ResumeStore, StoredResume};
use crate::tokens::resolve;

/// Request-scoped entry point to the compiler. Cheap to share behind an `Arc`.
pub struct ResumeCompiler {
    migrations: Arc<MigrationEngine>,
    store: Arc<dyn ResumeStore>,
    /// Write an on-the-fly upgraded DSL back to storage before returning the AST.
    persist_migrated_dsl: bool,
}

impl ResumeCompiler {
    pub fn new(
        migrations: Arc<MigrationEngine>,
        store: Arc<dyn ResumeStore>,
        persist_migrated_dsl: bool,
    ) -> Self {
        Self {
            migrations,
            store,
            persist_migrated_dsl,
        }
    }

    pub fn validate(&self, raw: &Value) -> ValidationResult {
        validate(raw)
    }

    /// Compiles an unsaved document. Sections compile to their empty shapes.
    pub fn preview(&self, raw: &Value, target: RenderTarget) -> Result<ResumeAst, AppError> {
        let dsl = validate_or_throw(raw)?;
        let dsl = self.upgrade(dsl)?;
        let ast = compile_ast(&dsl, &ResumeContent::default(), target);
        debug!("Preview compiled {} section(s)", ast.sections.len());
        Ok(ast)
    }

    /// Compiles a stored resume on behalf of its owner.
    pub async fn render(
        &self,
        resume_id: Uuid,
        user_id: Uuid,
        target: RenderTarget,
    ) -> Result<ResumeAst, AppError> {
        let stored = self.store.fetch_owned(resume_id, user_id).await?;
        info!("Rendering resume {resume_id} for user {user_id} ({target:?})");
        self.compile_stored(stored, target).await
    }

    /// Compiles a public resume by slug. Private resumes are reported as not found.
    pub async fn render_public(&self, slug: &str, target: RenderTarget) -> Result<ResumeAst, AppError> {
        let stored = self.store.fetch_public(slug).await?;
        if !stored.resume.is_public {
            return Err(AppError::NotFound(format!("Public resume '{slug}' not found")));
        }
        info!("Rendering public resume '{slug}' ({target:?})");
        self.compile_stored(stored, target).await
    }

    async fn compile_stored(
        &self,
        stored: StoredResume,
        target: RenderTarget,
    ) -> Result<ResumeAst, AppError> {
        let resume_id = stored.resume.id;
        let dsl = validate_or_throw(&stored.resume.dsl)?;
        let stored_version = dsl.version.clone();
        let dsl = self.upgrade(dsl)?;

        if dsl.version != stored_version && self.persist_migrated_dsl {
            self.store.save_dsl(resume_id, &dsl).await?;
        }

        let ast = compile_ast(&dsl, &stored.content, target);
        info!(
            "Compiled resume {resume_id}: {} section(s), {} item(s), {} column(s)",
            ast.sections.len(),
            ast.sections.iter().map(|s| s.content.item_count()).sum::<usize>(),
            ast.page.columns.len()
        );
        Ok(ast)
    }

    fn upgrade(&self, dsl: ResumeDsl) -> Result<ResumeDsl, AppError> {
        if dsl.version == CURRENT_DSL_VERSION {
            return Ok(dsl);
        }
        let path = self
            .migrations
            .migration_path(&dsl.version, CURRENT_DSL_VERSION)?;
        let migrated = self.migrations.migrate(dsl, CURRENT_DSL_VERSION)?;
        info!("Migrated DSL along {}", path.join(" -> "));
        Ok(migrated)
    }
}

/// Pure compile of a validated, current-version document.
pub fn compile_ast(dsl: &ResumeDsl, content: &ResumeContent, target: RenderTarget) -> ResumeAst {
    let tokens = resolve(&dsl.tokens);
    let page = build_page_layout(dsl, &tokens);
    let style = build_section_styles(&tokens);

    let sections = sort_for_display(&dsl.sections)
        .into_iter()
        .filter(|section| section.visible)
        .map(|section| {
            let kind = SectionKind::from_id(&section.id);
            let content = compile_section(kind, content, dsl.overrides_for(&section.id));
            AstSection {
                title: kind.title().unwrap_or(&section.id).to_string(),
                column: map_column_to_id(section.column),
                order: section.order,
                style: style.clone(),
                content,
                id: section.id,
            }
        })
        .collect();

    ResumeAst {
        meta: AstMeta {
            dsl_version: dsl.version.clone(),
            target,
        },
        page,
        sections,
    }
}
