use serde::{Deserialize, Serialize};

/// A creature as returned by the lookup API, flattened to the fields we show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
    pub sprite_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

impl CreatureRecord {
    /// "stat: value" pairs in API order
    pub fn stat_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.stats.iter().map(|s| format!("{}: {}", s.name, s.value))
    }
}

// Wire shapes of `GET /pokemon/{id}`. Everything we don't read is ignored.

#[derive(Debug, Deserialize)]
pub(crate) struct RawCreature {
    name: String,
    #[serde(default)]
    types: Vec<RawTypeSlot>,
    #[serde(default)]
    abilities: Vec<RawAbilitySlot>,
    #[serde(default)]
    stats: Vec<RawStat>,
    #[serde(default)]
    sprites: RawSprites,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawTypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct RawAbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    stat: NamedResource,
    base_stat: u32,
}

#[derive(Debug, Default, Deserialize)]
struct RawSprites {
    front_default: Option<String>,
}

impl From<RawCreature> for CreatureRecord {
    fn from(raw: RawCreature) -> Self {
        Self {
            name: raw.name,
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: raw.abilities.into_iter().map(|a| a.ability.name).collect(),
            stats: raw
                .stats
                .into_iter()
                .map(|s| Stat { name: s.stat.name, value: s.base_stat })
                .collect(),
            sprite_url: raw.sprites.front_default,
        }
    }
}

// Wire shape of `GET /type/{name}`

#[derive(Debug, Deserialize)]
pub(crate) struct RawTypeListing {
    pokemon: Vec<RawTypeMember>,
}

#[derive(Debug, Deserialize)]
struct RawTypeMember {
    pokemon: NamedResource,
}

impl RawTypeListing {
    pub(crate) fn into_names(self) -> Vec<String> {
        self.pokemon.into_iter().map(|m| m.pokemon.name).collect()
    }
}
