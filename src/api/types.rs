//! Wire models for PokéAPI documents
//!
//! Only the fields the core actually consumes are modeled; PokéAPI documents
//! carry far more and serde ignores the rest. Optional/defaulted fields
//! reflect observed nulls in real catalog data, not speculation.

use serde::Deserialize;

/// The `{name, url}` pair PokéAPI uses for every cross-reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare `{url}` reference (e.g. a species' evolution chain link).
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

/// A full creature record from `/pokemon/{id-or-name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub order: Option<i32>,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatLine>,
    pub sprites: Sprites,
    #[serde(default)]
    pub moves: Vec<MoveLearnset>,
    pub species: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatLine {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

impl Sprites {
    /// Display artwork: high-resolution official artwork when present,
    /// else the default sprite, else empty.
    pub fn artwork(&self) -> String {
        self.other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.clone())
            .or_else(|| self.front_default.clone())
            .unwrap_or_default()
    }
}

/// One move a creature can learn, with per-version-group learn data.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveLearnset {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    pub version_group_details: Vec<VersionGroupDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionGroupDetail {
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

/// A species record from `/pokemon-species/{id-or-name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub evolution_chain: Option<ResourceLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: NamedResource,
}

/// An evolution chain document: a single nested tree rooted at the base form.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

/// One node of the evolution tree. Branching lines (e.g. Eevee) have
/// multiple entries in `evolves_to`; observed depth never exceeds 3.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
    #[serde(default)]
    pub is_baby: bool,
}

/// How an evolution is triggered. Only the first detail record per node is
/// consumed downstream; alternative paths beyond index 0 are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub min_happiness: Option<u32>,
    #[serde(default)]
    pub min_beauty: Option<u32>,
    #[serde(default)]
    pub time_of_day: Option<String>,
    #[serde(default)]
    pub item: Option<NamedResource>,
    #[serde(default)]
    pub trade_species: Option<NamedResource>,
    #[serde(default)]
    pub trigger: Option<NamedResource>,
}

/// Response of `/type/{name}`: the roster of creatures with that type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRoster {
    #[serde(default)]
    pub pokemon: Vec<TypeRosterSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeRosterSlot {
    pub pokemon: NamedResource,
}
