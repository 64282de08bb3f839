use pdx_core::Unique;
use pdx_entities::*;
use pdx_store::*;

/// Upsert loader: get-or-create for shared entities, insert-if-absent for
/// Pokémon keyed by name. Nothing is ever updated.
pub struct Loader<S>(S);

impl<S> From<S> for Loader<S>
where
    S: Store,
{
    fn from(store: S) -> Self {
        Self(store)
    }
}

impl<S> Loader<S>
where
    S: Store,
{
    pub fn store(&self) -> &S {
        &self.0
    }
    pub async fn get_or_create_type(&self, name: &str) -> Result<Type, StoreError> {
        self.0.get_or_create_type(name).await
    }
    pub async fn get_or_create_ability(&self, name: &str) -> Result<Ability, StoreError> {
        self.0.get_or_create_ability(name).await
    }
    /// Returns the stored Pokémon of this name unchanged if there is one;
    /// otherwise creates it with its links and stats as one unit.
    pub async fn load_pokemon(&self, data: &PokemonCreate) -> Result<Pokemon, StoreError> {
        if let Some(existing) = self.0.pokemon_by_name(&data.name).await? {
            log::info!("pokemon {} already exists, skipping", data.name);
            return Ok(existing);
        }
        let pokemon = self.0.create_pokemon(data).await?;
        log::info!("loaded pokemon {} as #{}", pokemon.name(), pokemon.id());
        Ok(pokemon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> PokemonCreate {
        PokemonCreate {
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            base_experience: 112,
            sprite_url: "url1".to_string(),
            official_artwork_url: "url2".to_string(),
            types: vec!["electric".to_string()],
            abilities: vec!["static".to_string(), "lightning-rod".to_string()],
            stats: vec![StatCreate {
                name: "speed".to_string(),
                base_stat: 90,
                effort: 2,
            }],
        }
    }

    #[tokio::test]
    async fn loading_twice_is_idempotent() {
        let loader = Loader::from(Memory::new());
        let first = loader.load_pokemon(&pikachu()).await.unwrap();
        let second = loader.load_pokemon(&pikachu()).await.unwrap();
        assert_eq!(first, second);
        let census = loader.store().census().await.unwrap();
        assert_eq!(census.pokemon, 1);
        assert_eq!(census.types, 1);
        assert_eq!(census.abilities, 2);
        assert_eq!(census.stats, 1);
    }
    #[tokio::test]
    async fn existing_pokemon_is_not_relinked() {
        let loader = Loader::from(Memory::new());
        let first = loader.load_pokemon(&pikachu()).await.unwrap();
        let changed = PokemonCreate {
            height: 99,
            types: vec!["fairy".to_string()],
            ..pikachu()
        };
        let second = loader.load_pokemon(&changed).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(second.height(), 4);
        assert_eq!(loader.store().census().await.unwrap().types, 1);
    }
    #[tokio::test]
    async fn loaded_fields_match_lookup_by_name() {
        let loader = Loader::from(Memory::new());
        let data = pikachu();
        loader.load_pokemon(&data).await.unwrap();
        let found = loader.store().pokemon_by_name("pikachu").await.unwrap().unwrap();
        assert_eq!(found.name(), data.name);
        assert_eq!(found.height(), data.height);
        assert_eq!(found.weight(), data.weight);
        assert_eq!(found.base_experience(), data.base_experience);
        assert_eq!(found.sprite_url(), data.sprite_url);
        assert_eq!(found.official_artwork_url(), data.official_artwork_url);
        let types = found.types().iter().map(|t| t.name()).collect::<Vec<_>>();
        let abilities = found.abilities().iter().map(|a| a.name()).collect::<Vec<_>>();
        assert_eq!(types, data.types);
        assert_eq!(abilities, data.abilities);
        let stats = found
            .stats()
            .iter()
            .map(|s| (s.name(), s.base_stat(), s.effort()))
            .collect::<Vec<_>>();
        assert_eq!(stats, vec![("speed", 90, 2)]);
    }
    #[tokio::test]
    async fn shared_entities_keep_identity() {
        let loader = Loader::from(Memory::new());
        let a = loader.get_or_create_type("electric").await.unwrap();
        let b = loader.get_or_create_type("electric").await.unwrap();
        assert_eq!(a.id(), b.id());
        let x = loader.get_or_create_ability("static").await.unwrap();
        let y = loader.get_or_create_ability("static").await.unwrap();
        assert_eq!(x.id(), y.id());
        let pokemon = loader.load_pokemon(&pikachu()).await.unwrap();
        assert_eq!(pokemon.types()[0].id(), a.id());
        assert_eq!(pokemon.abilities()[0].id(), x.id());
    }
}
