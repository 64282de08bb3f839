use super::*;
use pdx_core::ID;
use pdx_core::Unique;
use pdx_entities::*;
use tokio::sync::Mutex;

/// In-process store mirroring the PostgreSQL store's semantics.
///
/// Identities are assigned sequentially from 1 per table, names are unique
/// per table, and a Pokémon with its links and stats is inserted under a
/// single lock acquisition so readers never observe half of it.
#[derive(Debug, Default)]
pub struct Memory(Mutex<Tables>);

#[derive(Debug, Default)]
struct Tables {
    pokemon: Vec<Pokemon>,
    types: Vec<Type>,
    abilities: Vec<Ability>,
    stats: Vec<Stat>,
    pokemon_types: Vec<(ID<Pokemon>, ID<Type>)>,
    pokemon_abilities: Vec<(ID<Pokemon>, ID<Ability>)>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tables {
    fn next<T>(len: usize) -> ID<T> {
        ID::from(len as i32 + 1)
    }
    fn get_or_create_type(&mut self, name: &str) -> Type {
        match self.types.iter().find(|t| t.name() == name) {
            Some(found) => found.clone(),
            None => {
                let created = Type::new(Self::next(self.types.len()), name.to_string());
                self.types.push(created.clone());
                created
            }
        }
    }
    fn get_or_create_ability(&mut self, name: &str) -> Ability {
        match self.abilities.iter().find(|a| a.name() == name) {
            Some(found) => found.clone(),
            None => {
                let created = Ability::new(Self::next(self.abilities.len()), name.to_string());
                self.abilities.push(created.clone());
                created
            }
        }
    }
    fn create_pokemon(&mut self, data: &PokemonCreate) -> Result<Pokemon, StoreError> {
        if self.pokemon.iter().any(|p| p.name() == data.name) {
            return Err(StoreError::Integrity(format!(
                "pokemon {} already exists",
                data.name
            )));
        }
        let id = Self::next(self.pokemon.len());
        let mut types = Vec::<Type>::new();
        for name in data.types.iter() {
            let kind = self.get_or_create_type(name);
            if !types.contains(&kind) {
                self.pokemon_types.push((id, kind.id()));
                types.push(kind);
            }
        }
        let mut abilities = Vec::<Ability>::new();
        for name in data.abilities.iter() {
            let ability = self.get_or_create_ability(name);
            if !abilities.contains(&ability) {
                self.pokemon_abilities.push((id, ability.id()));
                abilities.push(ability);
            }
        }
        let mut stats = Vec::<Stat>::new();
        for stat in data.stats.iter().cloned() {
            let stat = Stat::new(Self::next(self.stats.len()), id, stat);
            self.stats.push(stat.clone());
            stats.push(stat);
        }
        let pokemon = Pokemon::new(id, data)
            .with_types(types)
            .with_abilities(abilities)
            .with_stats(stats);
        self.pokemon.push(pokemon.clone());
        Ok(pokemon)
    }
}

#[async_trait::async_trait]
impl Store for Memory {
    async fn migrate(&self) -> Result<(), StoreError> {
        Ok(())
    }
    async fn get_or_create_type(&self, name: &str) -> Result<Type, StoreError> {
        Ok(self.0.lock().await.get_or_create_type(name))
    }
    async fn get_or_create_ability(&self, name: &str) -> Result<Ability, StoreError> {
        Ok(self.0.lock().await.get_or_create_ability(name))
    }
    async fn create_pokemon(&self, data: &PokemonCreate) -> Result<Pokemon, StoreError> {
        self.0.lock().await.create_pokemon(data)
    }
    async fn pokemon_by_id(&self, id: ID<Pokemon>) -> Result<Option<Pokemon>, StoreError> {
        let tables = self.0.lock().await;
        Ok(tables.pokemon.iter().find(|p| p.id() == id).cloned())
    }
    async fn pokemon_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError> {
        let tables = self.0.lock().await;
        Ok(tables.pokemon.iter().find(|p| p.name() == name).cloned())
    }
    async fn pokemon(
        &self,
        skip: i64,
        limit: i64,
        kind: Option<&str>,
    ) -> Result<Vec<Pokemon>, StoreError> {
        let tables = self.0.lock().await;
        Ok(tables
            .pokemon
            .iter()
            .filter(|p| kind.map_or(true, |kind| p.is(kind)))
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
    async fn types(&self) -> Result<Vec<Type>, StoreError> {
        Ok(self.0.lock().await.types.clone())
    }
    async fn census(&self) -> Result<Census, StoreError> {
        let tables = self.0.lock().await;
        Ok(Census {
            pokemon: tables.pokemon.len(),
            types: tables.types.len(),
            abilities: tables.abilities.len(),
            stats: tables.stats.len(),
        })
    }
}
