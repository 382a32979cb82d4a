//! Resume compiler: DSL document + stored content → render-ready AST.

pub mod assembler;
pub mod ast;
pub mod handlers;

pub use assembler::ResumeCompiler;
