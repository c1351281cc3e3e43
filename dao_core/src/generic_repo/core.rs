use crate::errors::DaoError;
use crate::metadata::EntityMetadata;
use crate::provider::ConnectionProvider;
use crate::traits::Entity;
use config::LogicalDeleteConfig;
use std::marker::PhantomData;
use std::sync::Arc;

/// Generic repository binding one `EntityMetadata` to one entity type.
///
/// Immutable after construction and cheap to clone; safe to share across
/// threads as long as the provider is.
#[derive(Clone)]
pub struct Repository<T: Entity> {
    pub(crate) provider: Arc<dyn ConnectionProvider>,
    pub(crate) metadata: Arc<EntityMetadata>,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T: Entity> std::fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("table", &self.metadata.table_name())
            .field("logical_delete", &self.metadata.logical_delete_enabled())
            .finish()
    }
}

impl<T: Entity> Repository<T> {
    /// Derive the entity's metadata eagerly and bind it to the provider.
    ///
    /// Fails fast on structural problems (see `EntityMetadata::new`) instead
    /// of surfacing them at first query.
    pub fn new(
        provider: Arc<dyn ConnectionProvider>,
        logical_delete: &LogicalDeleteConfig,
    ) -> Result<Self, DaoError> {
        let metadata = EntityMetadata::for_entity::<T>(logical_delete)?;
        Ok(Self {
            provider,
            metadata: Arc::new(metadata),
            _phantom: PhantomData,
        })
    }

    pub fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }
}
