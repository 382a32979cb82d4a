use std::sync::Arc;

use crate::compiler::ResumeCompiler;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Compiler pipeline. Holds the migration registry and the storage collaborator.
    pub compiler: Arc<ResumeCompiler>,
}
