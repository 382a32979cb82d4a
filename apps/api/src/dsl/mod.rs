// Resume DSL: typed document model, validation gate, schema migration.

pub mod migration;
pub mod migrators;
pub mod model;
pub mod reorder;
pub mod validation;

#[cfg(test)]
pub mod fixtures;
