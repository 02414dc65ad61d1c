//! Species text helpers
//!
//! Shapes the description text the display and audio collaborators consume:
//! English flavor-text selection per game version, control-character
//! cleanup, and the spoken-entry sentence. Playback itself lives outside
//! this crate; callers hand [`speech_text`] output to whatever speaks it.

use crate::api::types::{Pokemon, Species};

/// Flavor-text versions offered as selectable options.
const MAX_FLAVOR_VERSIONS: usize = 5;

/// First English flavor text in the species record, cleaned for display.
pub fn english_flavor_text(species: &Species) -> Option<String> {
    species
        .flavor_text_entries
        .iter()
        .find(|entry| entry.language.name == "en")
        .map(|entry| clean_flavor_text(&entry.flavor_text))
}

/// English flavor text for a specific game version, cleaned for display.
pub fn flavor_text_for_version(species: &Species, version: &str) -> Option<String> {
    species
        .flavor_text_entries
        .iter()
        .find(|entry| entry.language.name == "en" && entry.version.name == version)
        .map(|entry| clean_flavor_text(&entry.flavor_text))
}

/// Distinct game versions with an English entry, in record order, capped at
/// five for the version selector.
pub fn flavor_text_versions(species: &Species) -> Vec<String> {
    let mut versions = Vec::new();
    for entry in &species.flavor_text_entries {
        if entry.language.name != "en" {
            continue;
        }
        if !versions.contains(&entry.version.name) {
            versions.push(entry.version.name.clone());
        }
        if versions.len() == MAX_FLAVOR_VERSIONS {
            break;
        }
    }
    versions
}

/// Catalog names are lowercase-hyphenated; show "mr-mime" as "Mr mime".
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
    .replace('-', " ")
}

/// The sentence the audio collaborator speaks: name, types, then the
/// Pokédex entry. `None` when the species has no English flavor text.
pub fn speech_text(pokemon: &Pokemon, species: &Species) -> Option<String> {
    let flavor = english_flavor_text(species)?;
    let types = pokemon
        .types
        .iter()
        .map(|t| t.kind.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ");
    Some(format!(
        "{}, the {} type Pokémon. {}",
        display_name(&pokemon.name),
        types,
        flavor
    ))
}

// Raw flavor text embeds newlines, form feeds and carriage returns from the
// original game ROMs.
fn clean_flavor_text(text: &str) -> String {
    text.replace(['\n', '\u{c}', '\r'], " ")
}
