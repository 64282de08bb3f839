//! Many-to-many join tables between Pokémon and their shared entities.
//!
//! Each link records the position of the shared entity in the upstream
//! record so that reads return types and abilities in source order.

/// Link row between a Pokémon and one of its types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PokemonType;

/// Link row between a Pokémon and one of its abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PokemonAbility;

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use pdx_pg::*;

    impl Schema for PokemonType {
        fn name() -> &'static str {
            POKEMON_TYPES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                POKEMON_TYPES,
                " (
                    pokemon_id  INTEGER NOT NULL REFERENCES ",
                POKEMON,
                "(id) ON DELETE CASCADE,
                    type_id     INTEGER NOT NULL REFERENCES ",
                TYPES,
                "(id),
                    slot        INTEGER NOT NULL,
                    PRIMARY KEY (pokemon_id, type_id)
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_pokemon_types_type ON ",
                POKEMON_TYPES,
                " (type_id);"
            )
        }
    }

    impl Schema for PokemonAbility {
        fn name() -> &'static str {
            POKEMON_ABILITIES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                POKEMON_ABILITIES,
                " (
                    pokemon_id  INTEGER NOT NULL REFERENCES ",
                POKEMON,
                "(id) ON DELETE CASCADE,
                    ability_id  INTEGER NOT NULL REFERENCES ",
                ABILITIES,
                "(id),
                    slot        INTEGER NOT NULL,
                    PRIMARY KEY (pokemon_id, ability_id)
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_pokemon_abilities_ability ON ",
                POKEMON_ABILITIES,
                " (ability_id);"
            )
        }
    }
}
