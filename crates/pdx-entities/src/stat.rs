use super::*;
use pdx_core::ID;
use pdx_core::Unique;

/// Base stat owned by exactly one Pokémon.
///
/// The owner is not serialized: stats are only ever presented nested
/// under the Pokémon that owns them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Stat {
    id: ID<Self>,
    name: String,
    base_stat: i32,
    effort: i32,
    #[serde(skip)]
    pokemon: ID<Pokemon>,
}

impl Stat {
    pub fn new(id: ID<Self>, pokemon: ID<Pokemon>, stat: StatCreate) -> Self {
        Self {
            id,
            name: stat.name,
            base_stat: stat.base_stat,
            effort: stat.effort,
            pokemon,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn base_stat(&self) -> i32 {
        self.base_stat
    }
    pub fn effort(&self) -> i32 {
        self.effort
    }
    pub fn pokemon(&self) -> ID<Pokemon> {
        self.pokemon
    }
}

impl Unique for Stat {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use pdx_pg::*;

    impl Schema for Stat {
        fn name() -> &'static str {
            STATS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                STATS,
                " (
                    id          SERIAL PRIMARY KEY,
                    name        TEXT NOT NULL,
                    base_stat   INTEGER NOT NULL,
                    effort      INTEGER NOT NULL,
                    pokemon_id  INTEGER NOT NULL REFERENCES ",
                POKEMON,
                "(id) ON DELETE CASCADE
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_stats_pokemon ON ",
                STATS,
                " (pokemon_id);
                 CREATE INDEX IF NOT EXISTS idx_stats_name ON ",
                STATS,
                " (name);"
            )
        }
    }
}
