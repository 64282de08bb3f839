use pdx_core::ID;
use pdx_core::Unique;

/// Ability shared by every Pokémon that can have it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Ability {
    id: ID<Self>,
    name: String,
}

impl Ability {
    pub fn new(id: ID<Self>, name: String) -> Self {
        Self { id, name }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Unique for Ability {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use pdx_pg::*;

    impl Schema for Ability {
        fn name() -> &'static str {
            ABILITIES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                ABILITIES,
                " (
                    id          SERIAL PRIMARY KEY,
                    name        TEXT UNIQUE NOT NULL
                );"
            )
        }
    }
}
