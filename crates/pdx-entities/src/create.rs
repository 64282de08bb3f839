use serde::Deserialize;
use serde::Serialize;

/// One base stat line of a Pokémon about to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCreate {
    pub name: String,
    pub base_stat: i32,
    pub effort: i32,
}

/// Normalized request to create one Pokémon and link its shared entities.
///
/// Type, ability and stat lists keep the order of the upstream record.
/// Sprite URLs are empty strings when the upstream record has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCreate {
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub base_experience: i32,
    pub sprite_url: String,
    pub official_artwork_url: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<StatCreate>,
}
