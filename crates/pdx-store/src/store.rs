use super::*;
use pdx_core::ID;
use pdx_entities::*;
use std::sync::Arc;

/// Store defines every read and write against the entity graph.
///
/// Writes are insert-only: no operation updates or deletes a row.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Creates any missing tables and indices.
    async fn migrate(&self) -> Result<(), StoreError>;
    /// Returns the type with this exact name, creating it on a miss.
    async fn get_or_create_type(&self, name: &str) -> Result<Type, StoreError>;
    /// Returns the ability with this exact name, creating it on a miss.
    async fn get_or_create_ability(&self, name: &str) -> Result<Ability, StoreError>;
    /// Inserts a Pokémon with its links and stats as a single unit.
    /// Fails with [`StoreError::Integrity`] if the name is taken.
    async fn create_pokemon(&self, data: &PokemonCreate) -> Result<Pokemon, StoreError>;
    async fn pokemon_by_id(&self, id: ID<Pokemon>) -> Result<Option<Pokemon>, StoreError>;
    async fn pokemon_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError>;
    /// Page of Pokémon ordered by id, optionally restricted to one type name.
    async fn pokemon(
        &self,
        skip: i64,
        limit: i64,
        kind: Option<&str>,
    ) -> Result<Vec<Pokemon>, StoreError>;
    /// All types ordered by id.
    async fn types(&self) -> Result<Vec<Type>, StoreError>;
    async fn census(&self) -> Result<Census, StoreError>;
}

#[async_trait::async_trait]
impl<S> Store for Arc<S>
where
    S: Store + ?Sized,
{
    async fn migrate(&self) -> Result<(), StoreError> {
        self.as_ref().migrate().await
    }
    async fn get_or_create_type(&self, name: &str) -> Result<Type, StoreError> {
        self.as_ref().get_or_create_type(name).await
    }
    async fn get_or_create_ability(&self, name: &str) -> Result<Ability, StoreError> {
        self.as_ref().get_or_create_ability(name).await
    }
    async fn create_pokemon(&self, data: &PokemonCreate) -> Result<Pokemon, StoreError> {
        self.as_ref().create_pokemon(data).await
    }
    async fn pokemon_by_id(&self, id: ID<Pokemon>) -> Result<Option<Pokemon>, StoreError> {
        self.as_ref().pokemon_by_id(id).await
    }
    async fn pokemon_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError> {
        self.as_ref().pokemon_by_name(name).await
    }
    async fn pokemon(
        &self,
        skip: i64,
        limit: i64,
        kind: Option<&str>,
    ) -> Result<Vec<Pokemon>, StoreError> {
        self.as_ref().pokemon(skip, limit, kind).await
    }
    async fn types(&self) -> Result<Vec<Type>, StoreError> {
        self.as_ref().types().await
    }
    async fn census(&self) -> Result<Census, StoreError> {
        self.as_ref().census().await
    }
}
