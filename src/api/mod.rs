//! Catalog client for the PokéAPI REST service
//!
//! A thin accessor: URL construction, wraparound ID arithmetic, and JSON
//! decoding. No caching and no retries — repeated calls for the same
//! identifier re-fetch, and every failure is surfaced to the caller as-is.

pub mod types;

use async_trait::async_trait;
use rand::Rng;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::error::{PokedexError, Result};
pub use types::{EvolutionChain, Pokemon, Species, TypeRoster};

/// Highest assigned creature ID at the catalog snapshot this build targets.
pub const MAX_POKEMON_ID: u32 = 1010;

/// Base endpoint for the public catalog.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The injectable fetch capability the evolution resolver depends on.
///
/// Implemented by [`PokeClient`] for production and by scripted fakes in
/// tests, so resolution logic is exercised without a network.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch_pokemon(&self, name_or_id: &str) -> Result<Pokemon>;
}

/// HTTP accessor over the PokéAPI catalog.
pub struct PokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different base endpoint (test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch and decode any catalog URL. URLs embedded in fetched documents
    /// are followed verbatim through here, never reconstructed.
    pub async fn fetch_by_url<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(PokedexError::NotFound(url.to_string()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch a creature record by name or numeric ID.
    pub async fn fetch_pokemon(&self, name_or_id: &str) -> Result<Pokemon> {
        let ident = name_or_id.trim().to_lowercase();
        self.fetch_by_url(&format!("{}/pokemon/{ident}", self.base_url))
            .await
    }

    /// Fetch a species record by name or numeric ID.
    pub async fn fetch_species(&self, name_or_id: &str) -> Result<Species> {
        let ident = name_or_id.trim().to_lowercase();
        self.fetch_by_url(&format!("{}/pokemon-species/{ident}", self.base_url))
            .await
    }

    /// Fetch an evolution chain document from the URL a species record
    /// embeds.
    pub async fn fetch_evolution_chain(&self, url: &str) -> Result<EvolutionChain> {
        self.fetch_by_url(url).await
    }

    /// Fetch the roster of creatures carrying the given type.
    pub async fn fetch_type_roster(&self, type_name: &str) -> Result<TypeRoster> {
        let ident = type_name.trim().to_lowercase();
        self.fetch_by_url(&format!("{}/type/{ident}", self.base_url))
            .await
    }

    /// Fetch a uniformly random creature in `[1, MAX_POKEMON_ID]`.
    ///
    /// An unassigned ID in that range surfaces as `NotFound`; the caller
    /// decides whether to redraw.
    pub async fn fetch_random(&self) -> Result<Pokemon> {
        let id = rand::rng().random_range(1..=MAX_POKEMON_ID);
        self.fetch_pokemon(&id.to_string()).await
    }
}

#[async_trait]
impl PokemonSource for PokeClient {
    async fn fetch_pokemon(&self, name_or_id: &str) -> Result<Pokemon> {
        PokeClient::fetch_pokemon(self, name_or_id).await
    }
}

/// ID after `id`, wrapping from `MAX_POKEMON_ID` back to 1.
pub fn next_id(id: u32) -> u32 {
    if id >= MAX_POKEMON_ID {
        1
    } else {
        id + 1
    }
}

/// ID before `id`, wrapping from 1 back to `MAX_POKEMON_ID`.
pub fn previous_id(id: u32) -> u32 {
    if id <= 1 {
        MAX_POKEMON_ID
    } else {
        id - 1
    }
}
