// Section compilation: canonical item shapes, override layering, per-kind compilers.

pub mod compilers;
pub mod items;
pub mod overrides;
