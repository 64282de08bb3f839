use super::*;
use pdx_core::ID;
use pdx_core::Unique;
use pdx_entities::*;
use pdx_pg::*;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tokio_postgres::Client;
use tokio_postgres::GenericClient;

/// PostgreSQL-backed store.
///
/// The client sits behind a lock so that a Pokémon's transaction has the
/// connection to itself; statements from other callers wait for it.
pub struct Postgres(Mutex<Client>);

impl From<Client> for Postgres {
    fn from(client: Client) -> Self {
        Self(Mutex::new(client))
    }
}

impl Postgres {
    /// Connects using the configured URL.
    pub async fn connect(url: Option<&str>) -> Result<Self, StoreError> {
        let url = url.ok_or(StoreError::Unconfigured)?;
        Ok(Self::from(db(url).await?))
    }
}

// Local conversion functions for database rows.
// Column order follows the SELECT lists below.

const POKEMON_COLUMNS: &str =
    "id, name, height, weight, base_experience, sprite_url, official_artwork_url";

fn pokemon_from_row(row: &tokio_postgres::Row) -> Pokemon {
    Pokemon::new(
        ID::from(row.get::<_, i32>(0)),
        &PokemonCreate {
            name: row.get::<_, String>(1),
            height: row.get::<_, i32>(2),
            weight: row.get::<_, i32>(3),
            base_experience: row.get::<_, i32>(4),
            sprite_url: row.get::<_, String>(5),
            official_artwork_url: row.get::<_, String>(6),
            types: Vec::new(),
            abilities: Vec::new(),
            stats: Vec::new(),
        },
    )
}

fn type_from_row(row: &tokio_postgres::Row) -> (ID<Pokemon>, Type) {
    (
        ID::from(row.get::<_, i32>(0)),
        Type::new(ID::from(row.get::<_, i32>(1)), row.get::<_, String>(2)),
    )
}

fn ability_from_row(row: &tokio_postgres::Row) -> (ID<Pokemon>, Ability) {
    (
        ID::from(row.get::<_, i32>(0)),
        Ability::new(ID::from(row.get::<_, i32>(1)), row.get::<_, String>(2)),
    )
}

fn stat_from_row(row: &tokio_postgres::Row) -> Stat {
    Stat::new(
        ID::from(row.get::<_, i32>(1)),
        ID::from(row.get::<_, i32>(0)),
        StatCreate {
            name: row.get::<_, String>(2),
            base_stat: row.get::<_, i32>(3),
            effort: row.get::<_, i32>(4),
        },
    )
}

/// Select-then-insert on a unique name column. The insert tolerates a
/// concurrent writer winning the race; the second select sees its row.
async fn upsert<C>(client: &C, select: &str, insert: &str, name: &str) -> Result<i32, PgErr>
where
    C: GenericClient + Sync,
{
    if let Some(row) = client.query_opt(select, &[&name]).await? {
        return Ok(row.get::<_, i32>(0));
    }
    client.execute(insert, &[&name]).await?;
    client
        .query_one(select, &[&name])
        .await
        .map(|row| row.get::<_, i32>(0))
}

async fn get_or_create_type<C>(client: &C, name: &str) -> Result<Type, PgErr>
where
    C: GenericClient + Sync,
{
    const SELECT: &str = const_format::concatcp!("SELECT id FROM ", TYPES, " WHERE name = $1");
    const INSERT: &str = const_format::concatcp!(
        "INSERT INTO ",
        TYPES,
        " (name) VALUES ($1) ON CONFLICT (name) DO NOTHING"
    );
    let id = upsert(client, SELECT, INSERT, name).await?;
    Ok(Type::new(ID::from(id), name.to_string()))
}

async fn get_or_create_ability<C>(client: &C, name: &str) -> Result<Ability, PgErr>
where
    C: GenericClient + Sync,
{
    const SELECT: &str =
        const_format::concatcp!("SELECT id FROM ", ABILITIES, " WHERE name = $1");
    const INSERT: &str = const_format::concatcp!(
        "INSERT INTO ",
        ABILITIES,
        " (name) VALUES ($1) ON CONFLICT (name) DO NOTHING"
    );
    let id = upsert(client, SELECT, INSERT, name).await?;
    Ok(Ability::new(ID::from(id), name.to_string()))
}

/// Attaches types, abilities and stats to bare Pokémon rows.
async fn hydrate(client: &Client, rows: Vec<Pokemon>) -> Result<Vec<Pokemon>, PgErr> {
    if rows.is_empty() {
        return Ok(rows);
    }
    let ids = rows.iter().map(|p| p.id().inner()).collect::<Vec<i32>>();
    let mut types = HashMap::<ID<Pokemon>, Vec<Type>>::new();
    let mut abilities = HashMap::<ID<Pokemon>, Vec<Ability>>::new();
    let mut stats = HashMap::<ID<Pokemon>, Vec<Stat>>::new();
    for row in client
        .query(
            const_format::concatcp!(
                "SELECT l.pokemon_id, t.id, t.name FROM ",
                POKEMON_TYPES,
                " l JOIN ",
                TYPES,
                " t ON t.id = l.type_id WHERE l.pokemon_id = ANY($1) ORDER BY l.pokemon_id, l.slot"
            ),
            &[&ids],
        )
        .await?
    {
        let (owner, kind) = type_from_row(&row);
        types.entry(owner).or_default().push(kind);
    }
    for row in client
        .query(
            const_format::concatcp!(
                "SELECT l.pokemon_id, a.id, a.name FROM ",
                POKEMON_ABILITIES,
                " l JOIN ",
                ABILITIES,
                " a ON a.id = l.ability_id WHERE l.pokemon_id = ANY($1) ORDER BY l.pokemon_id, l.slot"
            ),
            &[&ids],
        )
        .await?
    {
        let (owner, ability) = ability_from_row(&row);
        abilities.entry(owner).or_default().push(ability);
    }
    for row in client
        .query(
            const_format::concatcp!(
                "SELECT pokemon_id, id, name, base_stat, effort FROM ",
                STATS,
                " WHERE pokemon_id = ANY($1) ORDER BY pokemon_id, id"
            ),
            &[&ids],
        )
        .await?
    {
        let stat = stat_from_row(&row);
        stats.entry(stat.pokemon()).or_default().push(stat);
    }
    Ok(rows
        .into_iter()
        .map(|p| {
            let id = p.id();
            p.with_types(types.remove(&id).unwrap_or_default())
                .with_abilities(abilities.remove(&id).unwrap_or_default())
                .with_stats(stats.remove(&id).unwrap_or_default())
        })
        .collect())
}

#[async_trait::async_trait]
impl Store for Postgres {
    async fn migrate(&self) -> Result<(), StoreError> {
        log::info!("creating tables");
        let client = self.0.lock().await;
        create::<Pokemon>(&client).await?;
        create::<Type>(&client).await?;
        create::<Ability>(&client).await?;
        create::<Stat>(&client).await?;
        create::<PokemonType>(&client).await?;
        create::<PokemonAbility>(&client).await?;
        Ok(())
    }

    async fn get_or_create_type(&self, name: &str) -> Result<Type, StoreError> {
        let client = self.0.lock().await;
        Ok(get_or_create_type(&*client, name).await?)
    }

    async fn get_or_create_ability(&self, name: &str) -> Result<Ability, StoreError> {
        let client = self.0.lock().await;
        Ok(get_or_create_ability(&*client, name).await?)
    }

    async fn create_pokemon(&self, data: &PokemonCreate) -> Result<Pokemon, StoreError> {
        let mut client = self.0.lock().await;
        let tx = client.transaction().await?;
        let id = tx
            .query_one(
                const_format::concatcp!(
                    "INSERT INTO ",
                    POKEMON,
                    " (name, height, weight, base_experience, sprite_url, official_artwork_url)
                     VALUES ($1, $2, $3, $4, $5, $6) RETURNING id"
                ),
                &[
                    &data.name,
                    &data.height,
                    &data.weight,
                    &data.base_experience,
                    &data.sprite_url,
                    &data.official_artwork_url,
                ],
            )
            .await
            .map_err(StoreError::classify)?
            .get::<_, i32>(0);
        let id = ID::<Pokemon>::from(id);
        let mut types = Vec::<Type>::new();
        for (slot, name) in data.types.iter().enumerate() {
            let kind = get_or_create_type(&tx, name).await?;
            if !types.contains(&kind) {
                tx.execute(
                    const_format::concatcp!(
                        "INSERT INTO ",
                        POKEMON_TYPES,
                        " (pokemon_id, type_id, slot) VALUES ($1, $2, $3) ON CONFLICT DO NOTHING"
                    ),
                    &[&id.inner(), &kind.id().inner(), &(slot as i32)],
                )
                .await?;
                types.push(kind);
            }
        }
        let mut abilities = Vec::<Ability>::new();
        for (slot, name) in data.abilities.iter().enumerate() {
            let ability = get_or_create_ability(&tx, name).await?;
            if !abilities.contains(&ability) {
                tx.execute(
                    const_format::concatcp!(
                        "INSERT INTO ",
                        POKEMON_ABILITIES,
                        " (pokemon_id, ability_id, slot) VALUES ($1, $2, $3) ON CONFLICT DO NOTHING"
                    ),
                    &[&id.inner(), &ability.id().inner(), &(slot as i32)],
                )
                .await?;
                abilities.push(ability);
            }
        }
        let mut stats = Vec::<Stat>::new();
        for stat in data.stats.iter().cloned() {
            let row = tx
                .query_one(
                    const_format::concatcp!(
                        "INSERT INTO ",
                        STATS,
                        " (name, base_stat, effort, pokemon_id) VALUES ($1, $2, $3, $4) RETURNING id"
                    ),
                    &[&stat.name, &stat.base_stat, &stat.effort, &id.inner()],
                )
                .await?;
            stats.push(Stat::new(ID::from(row.get::<_, i32>(0)), id, stat));
        }
        tx.commit().await?;
        Ok(Pokemon::new(id, data)
            .with_types(types)
            .with_abilities(abilities)
            .with_stats(stats))
    }

    async fn pokemon_by_id(&self, id: ID<Pokemon>) -> Result<Option<Pokemon>, StoreError> {
        let client = self.0.lock().await;
        let rows = client
            .query(
                const_format::concatcp!(
                    "SELECT ",
                    POKEMON_COLUMNS,
                    " FROM ",
                    POKEMON,
                    " WHERE id = $1"
                ),
                &[&id.inner()],
            )
            .await?
            .iter()
            .map(pokemon_from_row)
            .collect::<Vec<_>>();
        Ok(hydrate(&client, rows).await?.pop())
    }

    async fn pokemon_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError> {
        let client = self.0.lock().await;
        let rows = client
            .query(
                const_format::concatcp!(
                    "SELECT ",
                    POKEMON_COLUMNS,
                    " FROM ",
                    POKEMON,
                    " WHERE name = $1"
                ),
                &[&name],
            )
            .await?
            .iter()
            .map(pokemon_from_row)
            .collect::<Vec<_>>();
        Ok(hydrate(&client, rows).await?.pop())
    }

    async fn pokemon(
        &self,
        skip: i64,
        limit: i64,
        kind: Option<&str>,
    ) -> Result<Vec<Pokemon>, StoreError> {
        let client = self.0.lock().await;
        let rows = client
            .query(
                const_format::concatcp!(
                    "SELECT ",
                    POKEMON_COLUMNS,
                    " FROM ",
                    POKEMON,
                    " p WHERE $1::TEXT IS NULL OR EXISTS (
                        SELECT 1 FROM ",
                    POKEMON_TYPES,
                    " l JOIN ",
                    TYPES,
                    " t ON t.id = l.type_id
                        WHERE l.pokemon_id = p.id AND t.name = $1
                     )
                     ORDER BY p.id OFFSET $2 LIMIT $3"
                ),
                &[&kind, &skip.max(0), &limit.max(0)],
            )
            .await?
            .iter()
            .map(pokemon_from_row)
            .collect::<Vec<_>>();
        Ok(hydrate(&client, rows).await?)
    }

    async fn types(&self) -> Result<Vec<Type>, StoreError> {
        let client = self.0.lock().await;
        Ok(client
            .query(
                const_format::concatcp!("SELECT id, name FROM ", TYPES, " ORDER BY id"),
                &[],
            )
            .await?
            .iter()
            .map(|row| Type::new(ID::from(row.get::<_, i32>(0)), row.get::<_, String>(1)))
            .collect())
    }

    async fn census(&self) -> Result<Census, StoreError> {
        let client = self.0.lock().await;
        let row = client
            .query_one(
                const_format::concatcp!(
                    "SELECT (SELECT COUNT(*) FROM ",
                    POKEMON,
                    "), (SELECT COUNT(*) FROM ",
                    TYPES,
                    "), (SELECT COUNT(*) FROM ",
                    ABILITIES,
                    "), (SELECT COUNT(*) FROM ",
                    STATS,
                    ")"
                ),
                &[],
            )
            .await?;
        Ok(Census {
            pokemon: row.get::<_, i64>(0) as usize,
            types: row.get::<_, i64>(1) as usize,
            abilities: row.get::<_, i64>(2) as usize,
            stats: row.get::<_, i64>(3) as usize,
        })
    }
}
