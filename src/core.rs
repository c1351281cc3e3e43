//! Core Daolite functionality
//!
//! The `Daolite` coordinator owns the connection provider and the
//! logical-delete policy and hands out one repository per entity type.

use std::sync::Arc;

use config::{AppConfig, LogicalDeleteConfig};
use dao_core::{ConnectionProvider, Entity, FileProvider, Repository};

use crate::errors::DaoliteError;

/// Main coordinator binding a connection provider to repositories
pub struct Daolite {
    provider: Arc<dyn ConnectionProvider>,
    logical_delete: LogicalDeleteConfig,
}

impl Daolite {
    /// Create a Daolite backed by a file-opening provider built from config
    pub fn new(config: &AppConfig) -> Self {
        Self {
            provider: Arc::new(FileProvider::from_config(&config.database)),
            logical_delete: config.logical_delete.clone(),
        }
    }

    /// Create a Daolite over a caller-supplied provider
    pub fn with_provider(
        provider: Arc<dyn ConnectionProvider>,
        logical_delete: LogicalDeleteConfig,
    ) -> Self {
        Self {
            provider,
            logical_delete,
        }
    }

    /// Construct a repository for an entity type.
    ///
    /// Metadata is derived eagerly here; a structurally invalid entity or
    /// logical-delete configuration fails now, not at first query.
    pub fn repository<T: Entity>(&self) -> Result<Repository<T>, DaoliteError> {
        Ok(Repository::new(
            Arc::clone(&self.provider),
            &self.logical_delete,
        )?)
    }

    /// The provider repositories created by this coordinator will use
    pub fn provider(&self) -> Arc<dyn ConnectionProvider> {
        Arc::clone(&self.provider)
    }
}
