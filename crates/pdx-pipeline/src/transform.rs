use super::*;
use pdx_entities::*;
use serde::Deserialize;

// Upstream record shape. Only name, height and weight are required;
// everything else degrades to a default when absent or null.

#[derive(Debug, Deserialize)]
struct RawPokemon {
    name: String,
    height: i32,
    weight: i32,
    base_experience: Option<i32>,
    sprites: Option<RawSprites>,
    types: Option<Vec<RawType>>,
    abilities: Option<Vec<RawAbility>>,
    stats: Option<Vec<RawStat>>,
}

#[derive(Debug, Deserialize)]
struct RawSprites {
    front_default: Option<String>,
    other: Option<RawOther>,
}

#[derive(Debug, Deserialize)]
struct RawOther {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Deserialize)]
struct RawArtwork {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawType {
    #[serde(rename = "type")]
    kind: Named,
}

#[derive(Debug, Deserialize)]
struct RawAbility {
    ability: Named,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    stat: Named,
    base_stat: i32,
    effort: i32,
}

impl From<RawPokemon> for PokemonCreate {
    fn from(raw: RawPokemon) -> Self {
        let sprites = raw.sprites;
        let sprite_url = sprites
            .as_ref()
            .and_then(|s| s.front_default.clone())
            .unwrap_or_default();
        let official_artwork_url = sprites
            .and_then(|s| s.other)
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default)
            .unwrap_or_default();
        Self {
            name: raw.name,
            height: raw.height,
            weight: raw.weight,
            base_experience: raw.base_experience.unwrap_or(0),
            sprite_url,
            official_artwork_url,
            types: raw
                .types
                .unwrap_or_default()
                .into_iter()
                .map(|t| t.kind.name)
                .collect(),
            abilities: raw
                .abilities
                .unwrap_or_default()
                .into_iter()
                .map(|a| a.ability.name)
                .collect(),
            stats: raw
                .stats
                .unwrap_or_default()
                .into_iter()
                .map(|s| StatCreate {
                    name: s.stat.name,
                    base_stat: s.base_stat,
                    effort: s.effort,
                })
                .collect(),
        }
    }
}

/// Normalizes one raw upstream record into a creation request.
///
/// Missing sprites, types, abilities or stats are not an error; a missing
/// or mistyped `name`, `height` or `weight`, or a malformed list entry, is.
pub fn transform(raw: &serde_json::Value) -> Result<PokemonCreate, Failure> {
    RawPokemon::deserialize(raw)
        .map(PokemonCreate::from)
        .map_err(|e| Failure::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pikachu() -> serde_json::Value {
        json!({
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "sprites": {
                "front_default": "url1",
                "other": { "official-artwork": { "front_default": "url2" } }
            },
            "types": [{ "type": { "name": "electric" } }],
            "abilities": [{ "ability": { "name": "static" } }],
            "stats": [{ "stat": { "name": "speed" }, "base_stat": 90, "effort": 2 }]
        })
    }

    #[test]
    fn pikachu_transforms_to_creation_request() {
        let data = transform(&pikachu()).unwrap();
        assert_eq!(
            data,
            PokemonCreate {
                name: "pikachu".to_string(),
                height: 4,
                weight: 60,
                base_experience: 112,
                sprite_url: "url1".to_string(),
                official_artwork_url: "url2".to_string(),
                types: vec!["electric".to_string()],
                abilities: vec!["static".to_string()],
                stats: vec![StatCreate {
                    name: "speed".to_string(),
                    base_stat: 90,
                    effort: 2,
                }],
            }
        );
    }
    #[test]
    fn source_order_is_preserved() {
        let raw = json!({
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "t/12" } },
                { "slot": 2, "type": { "name": "poison", "url": "t/4" } }
            ],
            "abilities": [
                { "ability": { "name": "overgrow" }, "is_hidden": false },
                { "ability": { "name": "chlorophyll" }, "is_hidden": true }
            ],
            "stats": [
                { "stat": { "name": "hp" }, "base_stat": 45, "effort": 0 },
                { "stat": { "name": "attack" }, "base_stat": 49, "effort": 0 },
                { "stat": { "name": "defense" }, "base_stat": 49, "effort": 0 }
            ]
        });
        let data = transform(&raw).unwrap();
        assert_eq!(data.types, vec!["grass", "poison"]);
        assert_eq!(data.abilities, vec!["overgrow", "chlorophyll"]);
        let stats = data.stats.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(stats, vec!["hp", "attack", "defense"]);
    }
    #[test]
    fn missing_optional_fields_degrade_to_defaults() {
        let raw = json!({ "name": "missingno", "height": 1, "weight": 1 });
        let data = transform(&raw).unwrap();
        assert_eq!(data.base_experience, 0);
        assert_eq!(data.sprite_url, "");
        assert_eq!(data.official_artwork_url, "");
        assert!(data.types.is_empty());
        assert!(data.abilities.is_empty());
        assert!(data.stats.is_empty());
    }
    #[test]
    fn partial_sprite_paths_degrade_to_empty_strings() {
        for sprites in [
            json!(null),
            json!({}),
            json!({ "front_default": null }),
            json!({ "front_default": "url1", "other": null }),
            json!({ "front_default": "url1", "other": {} }),
            json!({ "front_default": "url1", "other": { "official-artwork": {} } }),
            json!({ "front_default": "url1", "other": { "official-artwork": { "front_default": null } } }),
        ] {
            let raw = json!({ "name": "ditto", "height": 3, "weight": 40, "sprites": sprites });
            let data = transform(&raw).unwrap();
            assert_eq!(data.official_artwork_url, "");
            assert!(data.sprite_url == "" || data.sprite_url == "url1");
        }
    }
    #[test]
    fn null_base_experience_defaults_to_zero() {
        let raw = json!({ "name": "ditto", "height": 3, "weight": 40, "base_experience": null });
        assert_eq!(transform(&raw).unwrap().base_experience, 0);
    }
    #[test]
    fn missing_required_fields_fail_validation() {
        for field in ["name", "height", "weight"] {
            let mut raw = pikachu();
            raw.as_object_mut().unwrap().remove(field);
            let result = transform(&raw);
            assert!(matches!(result, Err(Failure::Validation(_))), "{}", field);
        }
    }
    #[test]
    fn malformed_entries_fail_validation() {
        let mut raw = pikachu();
        raw["stats"] = json!([{ "stat": { "name": "speed" }, "effort": 2 }]);
        assert!(matches!(transform(&raw), Err(Failure::Validation(_))));
        let mut raw = pikachu();
        raw["height"] = json!("tall");
        assert!(matches!(transform(&raw), Err(Failure::Validation(_))));
        assert!(matches!(transform(&json!([])), Err(Failure::Validation(_))));
    }
}
