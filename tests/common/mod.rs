//! Shared fixtures: wire-model builders and a scripted catalog fake.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use pokedex::api::types::{
    ArtworkSprites, ChainLink, EvolutionChain, EvolutionDetail, FlavorTextEntry, MoveLearnset,
    NamedResource, OtherSprites, Pokemon, Species, Sprites, TypeSlot, VersionGroupDetail,
};
use pokedex::error::{PokedexError, Result};
use pokedex::PokemonSource;

pub fn named(name: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: String::new(),
    }
}

pub fn species_ref(name: &str, id: u32) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon-species/{id}/"),
    }
}

pub fn make_pokemon(id: u32, name: &str, types: &[&str]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        height: 7,
        weight: 69,
        base_experience: Some(64),
        order: Some(id as i32),
        types: types
            .iter()
            .enumerate()
            .map(|(i, t)| TypeSlot {
                slot: i as u8 + 1,
                kind: named(t),
            })
            .collect(),
        abilities: Vec::new(),
        stats: Vec::new(),
        sprites: Sprites {
            front_default: Some(format!("https://sprites.test/{name}.png")),
            front_shiny: None,
            back_default: None,
            back_shiny: None,
            other: Some(OtherSprites {
                official_artwork: Some(ArtworkSprites {
                    front_default: Some(format!("https://artwork.test/{name}.png")),
                }),
            }),
        },
        moves: Vec::new(),
        species: species_ref(name, id),
    }
}

pub fn make_species(entries: &[(&str, &str, &str)]) -> Species {
    Species {
        flavor_text_entries: entries
            .iter()
            .map(|(text, lang, version)| FlavorTextEntry {
                flavor_text: text.to_string(),
                language: named(lang),
                version: named(version),
            })
            .collect(),
        evolution_chain: None,
    }
}

pub fn learnset(move_name: &str, details: &[(u32, &str, &str)]) -> MoveLearnset {
    MoveLearnset {
        move_ref: named(move_name),
        version_group_details: details
            .iter()
            .map(|(level, method, version)| VersionGroupDetail {
                level_learned_at: *level,
                move_learn_method: named(method),
                version_group: named(version),
            })
            .collect(),
    }
}

pub fn level_detail(level: u32) -> EvolutionDetail {
    EvolutionDetail {
        min_level: Some(level),
        trigger: Some(named("level-up")),
        ..Default::default()
    }
}

pub fn item_detail(item: &str) -> EvolutionDetail {
    EvolutionDetail {
        trigger: Some(named("use-item")),
        item: Some(named(item)),
        ..Default::default()
    }
}

pub fn trade_detail() -> EvolutionDetail {
    EvolutionDetail {
        trigger: Some(named("trade")),
        ..Default::default()
    }
}

pub fn link(
    name: &str,
    id: u32,
    details: Vec<EvolutionDetail>,
    children: Vec<ChainLink>,
) -> ChainLink {
    ChainLink {
        species: species_ref(name, id),
        evolution_details: details,
        evolves_to: children,
        is_baby: false,
    }
}

pub fn chain(root: ChainLink) -> EvolutionChain {
    EvolutionChain { chain: root }
}

/// Scripted stand-in for the catalog: serves creatures keyed by the
/// identifier they are fetched with, fails on demand, and records every
/// fetch in order.
pub struct FakeCatalog {
    records: HashMap<String, Pokemon>,
    failures: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            failures: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve this creature for both its numeric ID and its name.
    pub fn with_pokemon(mut self, pokemon: Pokemon) -> Self {
        self.records
            .insert(pokemon.id.to_string(), pokemon.clone());
        self.records.insert(pokemon.name.clone(), pokemon);
        self
    }

    /// Serve this creature under an explicit identifier only.
    pub fn with_pokemon_at(mut self, ident: &str, pokemon: Pokemon) -> Self {
        self.records.insert(ident.to_string(), pokemon);
        self
    }

    /// Make fetches for this identifier fail with `NotFound`.
    pub fn with_failure(mut self, ident: &str) -> Self {
        self.failures.insert(ident.to_string());
        self
    }

    /// Every identifier fetched, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PokemonSource for FakeCatalog {
    async fn fetch_pokemon(&self, name_or_id: &str) -> Result<Pokemon> {
        self.calls.lock().unwrap().push(name_or_id.to_string());
        if self.failures.contains(name_or_id) {
            return Err(PokedexError::NotFound(name_or_id.to_string()));
        }
        self.records
            .get(name_or_id)
            .cloned()
            .ok_or_else(|| PokedexError::NotFound(name_or_id.to_string()))
    }
}
