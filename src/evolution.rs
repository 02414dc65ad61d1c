//! Evolution chain resolver
//!
//! Turns the nested evolution tree PokéAPI returns as one document into a
//! flat, ordered list of enriched stages: a pre-order walk with one creature
//! fetch per node. Fetches run strictly sequentially so the output order is
//! deterministic, and a node whose fetch fails is pruned together with its
//! subtree rather than failing the whole resolution.
//!
//! Branch structure is intentionally discarded in the flat output — a
//! branching line (Eevee) renders as one vertical list. Likewise only the
//! first evolution-detail record per node is consulted; alternative paths to
//! the same child are not modeled.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use tracing::warn;

use crate::api::types::{ChainLink, EvolutionChain, EvolutionDetail};
use crate::api::{Pokemon, PokemonSource};
use crate::error::Result;

/// Guard against malformed third-party data; real chains never exceed
/// depth 3.
const MAX_CHAIN_DEPTH: usize = 16;

/// What it takes to evolve into this stage. Absent on the base form, and on
/// nodes whose document carried no detail records at all (a data-quality
/// quirk preserved as-is).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Level(u32),
    Happiness(u32),
    Trade,
    /// Item-triggered; the item name is taken from the detail record when the
    /// document carries one.
    UseItem { item: Option<String> },
    LevelUp,
    Other { trigger: String },
}

impl Requirement {
    /// Short human-readable label, matching what the display layer shows
    /// between stages.
    pub fn label(&self) -> String {
        match self {
            Requirement::Level(level) => format!("Lv. {level}"),
            Requirement::Happiness(value) => format!("Happiness {value}"),
            Requirement::Trade => "Trade".to_string(),
            Requirement::UseItem { item: Some(item) } => {
                crate::species::display_name(item)
            }
            Requirement::UseItem { item: None } => "Item".to_string(),
            Requirement::LevelUp => "Level Up".to_string(),
            Requirement::Other { trigger } => trigger.clone(),
        }
    }
}

/// One flattened, enriched stage of an evolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    pub species_name: String,
    /// From the fetched creature record, not the species URL — this is the
    /// ID navigation re-fetches by.
    pub creature_id: u32,
    pub artwork_url: String,
    pub requirement: Option<Requirement>,
}

/// Flatten an evolution chain into pre-order stages, fetching the creature
/// record for each node through `source`.
///
/// Never fails as a whole: nodes that cannot be fetched are logged and
/// skipped along with their descendants, so the worst case is an empty list.
pub async fn resolve(chain: &EvolutionChain, source: &dyn PokemonSource) -> Vec<EvolutionStage> {
    let mut stages = Vec::new();
    let mut seen = HashSet::new();
    walk(&chain.chain, source, &mut stages, &mut seen, 0).await;
    stages
}

fn walk<'a>(
    node: &'a ChainLink,
    source: &'a dyn PokemonSource,
    stages: &'a mut Vec<EvolutionStage>,
    seen: &'a mut HashSet<String>,
    depth: usize,
) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
    Box::pin(async move {
        if depth > MAX_CHAIN_DEPTH {
            warn!(
                species = %node.species.name,
                "evolution chain deeper than {MAX_CHAIN_DEPTH}, truncating"
            );
            return;
        }
        if !seen.insert(node.species.url.clone()) {
            warn!(
                species = %node.species.name,
                "cycle in evolution chain, truncating"
            );
            return;
        }

        // The species URL's trailing path segment is the species ID; fall
        // back to the name if the URL is not in the expected shape.
        let ident = species_id_from_url(&node.species.url)
            .map(|id| id.to_string())
            .unwrap_or_else(|| node.species.name.clone());

        let pokemon = match source.fetch_pokemon(&ident).await {
            Ok(pokemon) => pokemon,
            Err(e) => {
                // Prune this node and everything below it; siblings still
                // resolve and a partial chain is an acceptable result.
                warn!(species = %node.species.name, error = %e, "skipping unresolvable stage");
                return;
            }
        };

        stages.push(EvolutionStage {
            species_name: node.species.name.clone(),
            creature_id: pokemon.id,
            artwork_url: pokemon.sprites.artwork(),
            requirement: node.evolution_details.first().map(requirement_from_detail),
        });

        for child in &node.evolves_to {
            walk(child, source, &mut *stages, &mut *seen, depth + 1).await;
        }
    })
}

fn requirement_from_detail(detail: &EvolutionDetail) -> Requirement {
    if let Some(level) = detail.min_level {
        return Requirement::Level(level);
    }
    if let Some(value) = detail.min_happiness {
        return Requirement::Happiness(value);
    }
    let trigger = detail
        .trigger
        .as_ref()
        .map(|t| t.name.as_str())
        .unwrap_or_default();
    match trigger {
        "trade" => Requirement::Trade,
        "use-item" => Requirement::UseItem {
            item: detail.item.as_ref().map(|i| i.name.clone()),
        },
        "level-up" => Requirement::LevelUp,
        other => Requirement::Other {
            trigger: other.to_string(),
        },
    }
}

/// Extract the numeric ID from a catalog resource URL, e.g.
/// `https://pokeapi.co/api/v2/pokemon-species/133/` → `133`.
pub fn species_id_from_url(url: &str) -> Option<u32> {
    url.rsplit('/').find(|s| !s.is_empty())?.parse().ok()
}

/// Re-fetch the creature behind a rendered stage when the user selects it.
/// A plain pass-through fetch by ID, not a cache lookup.
pub async fn select_stage(stage: &EvolutionStage, source: &dyn PokemonSource) -> Result<Pokemon> {
    source.fetch_pokemon(&stage.creature_id.to_string()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_id_from_canonical_url() {
        assert_eq!(
            species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/133/"),
            Some(133)
        );
    }

    #[test]
    fn species_id_without_trailing_slash() {
        assert_eq!(
            species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/25"),
            Some(25)
        );
    }

    #[test]
    fn species_id_from_garbage_is_none() {
        assert_eq!(species_id_from_url("not-a-url"), None);
        assert_eq!(species_id_from_url(""), None);
    }

    #[test]
    fn requirement_prefers_level_over_trigger() {
        let detail = EvolutionDetail {
            min_level: Some(16),
            trigger: Some(crate::api::types::NamedResource {
                name: "level-up".into(),
                url: String::new(),
            }),
            ..Default::default()
        };
        assert_eq!(requirement_from_detail(&detail), Requirement::Level(16));
    }

    #[test]
    fn requirement_happiness_before_trigger() {
        let detail = EvolutionDetail {
            min_happiness: Some(220),
            trigger: Some(crate::api::types::NamedResource {
                name: "level-up".into(),
                url: String::new(),
            }),
            ..Default::default()
        };
        assert_eq!(
            requirement_from_detail(&detail),
            Requirement::Happiness(220)
        );
    }

    #[test]
    fn requirement_unknown_trigger_is_preserved() {
        let detail = EvolutionDetail {
            trigger: Some(crate::api::types::NamedResource {
                name: "shed".into(),
                url: String::new(),
            }),
            ..Default::default()
        };
        assert_eq!(
            requirement_from_detail(&detail),
            Requirement::Other {
                trigger: "shed".into()
            }
        );
    }

    #[test]
    fn requirement_labels() {
        assert_eq!(Requirement::Level(36).label(), "Lv. 36");
        assert_eq!(Requirement::Trade.label(), "Trade");
        assert_eq!(Requirement::UseItem { item: None }.label(), "Item");
        assert_eq!(
            Requirement::UseItem {
                item: Some("water-stone".into())
            }
            .label(),
            "Water stone"
        );
        assert_eq!(Requirement::LevelUp.label(), "Level Up");
    }
}
