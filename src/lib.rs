//! Pokédex core library
//!
//! The data-shaping half of a Pokédex: a thin async client over the PokéAPI
//! catalog, an evolution chain resolver that flattens the nested evolution
//! tree into an ordered list of enriched stages, and a move catalog
//! aggregator that collapses per-version learn records into one canonical
//! entry per move. Rendering and audio playback are external collaborators;
//! this crate only produces the view models they consume.

pub mod api;
pub mod error;
pub mod evolution;
pub mod moves;
pub mod species;

pub use api::{next_id, previous_id, PokeClient, Pokemon, PokemonSource, MAX_POKEMON_ID};
pub use error::{PokedexError, Result};
pub use evolution::{resolve, select_stage, EvolutionStage, Requirement};
pub use moves::{aggregate, learn_methods, MoveEntry};
