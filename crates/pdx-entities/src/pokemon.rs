use super::*;
use pdx_core::ID;
use pdx_core::Unique;

/// A stored Pokémon together with the shared entities it links to
/// and the stats it owns.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Pokemon {
    id: ID<Self>,
    name: String,
    height: i32,
    weight: i32,
    base_experience: i32,
    sprite_url: String,
    official_artwork_url: String,
    types: Vec<Type>,
    abilities: Vec<Ability>,
    stats: Vec<Stat>,
}

impl Pokemon {
    /// Row fields only; relations start empty.
    pub fn new(id: ID<Self>, data: &PokemonCreate) -> Self {
        Self {
            id,
            name: data.name.clone(),
            height: data.height,
            weight: data.weight,
            base_experience: data.base_experience,
            sprite_url: data.sprite_url.clone(),
            official_artwork_url: data.official_artwork_url.clone(),
            types: Vec::new(),
            abilities: Vec::new(),
            stats: Vec::new(),
        }
    }
    pub fn with_types(self, types: Vec<Type>) -> Self {
        Self { types, ..self }
    }
    pub fn with_abilities(self, abilities: Vec<Ability>) -> Self {
        Self { abilities, ..self }
    }
    pub fn with_stats(self, stats: Vec<Stat>) -> Self {
        Self { stats, ..self }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn height(&self) -> i32 {
        self.height
    }
    pub fn weight(&self) -> i32 {
        self.weight
    }
    pub fn base_experience(&self) -> i32 {
        self.base_experience
    }
    pub fn sprite_url(&self) -> &str {
        &self.sprite_url
    }
    pub fn official_artwork_url(&self) -> &str {
        &self.official_artwork_url
    }
    pub fn types(&self) -> &[Type] {
        &self.types
    }
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }
    /// Whether this Pokémon carries a type with exactly this name.
    pub fn is(&self, kind: &str) -> bool {
        self.types.iter().any(|t| t.name() == kind)
    }
}

impl Unique for Pokemon {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use pdx_pg::*;

    impl Schema for Pokemon {
        fn name() -> &'static str {
            POKEMON
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                POKEMON,
                " (
                    id                    SERIAL PRIMARY KEY,
                    name                  TEXT UNIQUE NOT NULL,
                    height                INTEGER NOT NULL,
                    weight                INTEGER NOT NULL,
                    base_experience       INTEGER NOT NULL DEFAULT 0,
                    sprite_url            TEXT NOT NULL DEFAULT '',
                    official_artwork_url  TEXT NOT NULL DEFAULT ''
                );"
            )
        }
    }
}
