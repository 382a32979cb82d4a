//! Migration Engine — upgrades DSL documents across schema versions.
//!
//! The registry is a directed map `from_version → Migrator`. Traversal is an
//! iterative walk with a visited set, so a registry that loops back on itself
//! is reported as `CircularMigration` instead of spinning forever.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::{debug, warn};

use crate::dsl::model::ResumeDsl;

/// A single-step transform. Must return a document whose `version` is the
/// migrator's declared `to_version`.
pub type MigrateFn = fn(ResumeDsl) -> ResumeDsl;

#[derive(Debug, Clone)]
pub struct Migrator {
    pub from_version: String,
    pub to_version: String,
    pub migrate: MigrateFn,
}

impl Migrator {
    pub fn new(from_version: &str, to_version: &str, migrate: MigrateFn) -> Self {
        Self {
            from_version: from_version.to_string(),
            to_version: to_version.to_string(),
            migrate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MigrationError {
    #[error("No migration path from version {version} towards {target}")]
    NoMigrationPath { version: String, target: String },

    #[error("Circular migration detected at version {version}")]
    CircularMigration { version: String },

    #[error("Migrator {from} -> {expected} produced a document at version {actual}")]
    ContractViolation {
        from: String,
        expected: String,
        actual: String,
    },

    #[error("A migrator from version {from_version} is already registered")]
    DuplicateMigrator { from_version: String },
}

#[derive(Debug, Default)]
pub struct MigrationEngine {
    migrators: HashMap<String, Migrator>,
}

impl MigrationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers migrators keyed by `from_version`.
    ///
    /// A `from_version` that is already registered, or repeated within `migrators`,
    /// is a wiring error; nothing from the batch is registered in that case.
    pub fn register_migrators(
        &mut self,
        migrators: impl IntoIterator<Item = Migrator>,
    ) -> Result<(), MigrationError> {
        let batch: Vec<Migrator> = migrators.into_iter().collect();
        let mut incoming = HashSet::new();
        for m in &batch {
            if self.migrators.contains_key(&m.from_version)
                || !incoming.insert(m.from_version.as_str())
            {
                return Err(MigrationError::DuplicateMigrator {
                    from_version: m.from_version.clone(),
                });
            }
        }
        for m in batch {
            debug!("Registered migrator {} -> {}", m.from_version, m.to_version);
            self.migrators.insert(m.from_version.clone(), m);
        }
        Ok(())
    }

    /// Upgrades `dsl` to `target_version`, applying one migrator per step.
    ///
    /// Returns the input unchanged when it is already at the target.
    pub fn migrate(&self, dsl: ResumeDsl, target_version: &str) -> Result<ResumeDsl, MigrationError> {
        let mut current = dsl;
        let mut visited = HashSet::new();

        while current.version != target_version {
            let migrator = self
                .next_step(&current.version, target_version, &mut visited)
                .map_err(|e| {
                    warn!("Migration of DSL to {target_version} failed: {e}");
                    e
                })?;

            let migrated = (migrator.migrate)(current);
            if migrated.version != migrator.to_version {
                let err = MigrationError::ContractViolation {
                    from: migrator.from_version.clone(),
                    expected: migrator.to_version.clone(),
                    actual: migrated.version,
                };
                warn!("{err}");
                return Err(err);
            }
            debug!(
                "Migrated DSL {} -> {}",
                migrator.from_version, migrator.to_version
            );
            current = migrated;
        }

        Ok(current)
    }

    /// True when a chain of registered migrators leads from `from` to `to`.
    #[allow(dead_code)]
    pub fn can_migrate(&self, from: &str, to: &str) -> bool {
        self.migration_path(from, to).is_ok()
    }

    /// Versions visited when walking from `from` to `to`, both endpoints included.
    pub fn migration_path(&self, from: &str, to: &str) -> Result<Vec<String>, MigrationError> {
        let mut path = vec![from.to_string()];
        let mut visited = HashSet::new();
        let mut current = from.to_string();

        while current != to {
            let migrator = self.next_step(&current, to, &mut visited)?;
            current = migrator.to_version.clone();
            path.push(current.clone());
        }

        Ok(path)
    }

    /// Shared traversal step: find the migrator for `current` and mark it visited.
    fn next_step(
        &self,
        current: &str,
        target: &str,
        visited: &mut HashSet<String>,
    ) -> Result<&Migrator, MigrationError> {
        let migrator = self
            .migrators
            .get(current)
            .ok_or_else(|| MigrationError::NoMigrationPath {
                version: current.to_string(),
                target: target.to_string(),
            })?;
        if !visited.insert(current.to_string()) {
            return Err(MigrationError::CircularMigration {
                version: current.to_string(),
            });
        }
        Ok(migrator)
    }
}
