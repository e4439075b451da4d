//! Generic repository trait for store access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// Each entity gets a strongly typed repository by fixing `Entity` and
/// `Id`. Writes are unconditional: `create` and `update` both store the
/// whole entity, replacing any existing one with the same key.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Store a new entity, overwriting any entity with the same key.
    async fn create(&self, entity: &Entity) -> AppResult<()>;

    /// Find an entity by its primary key. Returns `None` when absent.
    async fn get_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Store an entity, creating it when it does not exist yet.
    async fn update(&self, entity: &Entity) -> AppResult<()>;

    /// Delete an entity by its primary key. Deleting a missing key succeeds.
    async fn delete(&self, id: &Id) -> AppResult<()>;

    /// Return every stored entity, in no particular order.
    async fn list(&self) -> AppResult<Vec<Entity>>;
}
