use pdx_core::ID;
use pdx_core::Unique;

/// Elemental type shared by every Pokémon that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Type {
    id: ID<Self>,
    name: String,
}

impl Type {
    pub fn new(id: ID<Self>, name: String) -> Self {
        Self { id, name }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Unique for Type {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use pdx_pg::*;

    impl Schema for Type {
        fn name() -> &'static str {
            TYPES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                TYPES,
                " (
                    id          SERIAL PRIMARY KEY,
                    name        TEXT UNIQUE NOT NULL
                );"
            )
        }
    }
}
