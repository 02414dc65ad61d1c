//! Pokédex - terminal front end for the lookup core
//!
//! Thin presentation over the library: each subcommand maps onto one core
//! operation (fetch, resolve, aggregate) and prints the shaped result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing_subscriber::EnvFilter;

use pokedex::api::types::Species;
use pokedex::species;
use pokedex::{aggregate, learn_methods, next_id, previous_id, resolve, PokeClient, Pokemon};

#[derive(Parser, Debug)]
#[clap(name = "pokedex", about = "Pokémon lookup over the PokéAPI catalog", version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a creature by name or numeric ID
    Show {
        /// Name (e.g. "pikachu") or ID (e.g. 25)
        query: String,
    },
    /// Look up a uniformly random creature
    Random,
    /// Look up the creature after the given ID (wraps around)
    Next { id: u32 },
    /// Look up the creature before the given ID (wraps around)
    Prev { id: u32 },
    /// Resolve and print the full evolution chain
    Evolution { query: String },
    /// Print the aggregated move catalog
    Moves {
        query: String,
        /// Keep only moves learned by this method (e.g. level-up, machine)
        #[clap(long)]
        method: Option<String>,
        /// Show at most this many rows
        #[clap(long)]
        limit: Option<usize>,
    },
    /// List creatures carrying the given type
    Type { name: String },
    /// Print the spoken Pokédex entry (name, types, description)
    Say { query: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let client = PokeClient::new()?;

    match cli.command {
        Command::Show { query } => show_command(&client, &query).await,
        Command::Random => {
            let pokemon = client.fetch_random().await.context("random draw failed")?;
            print_card(&client, &pokemon).await
        }
        Command::Next { id } => show_command(&client, &next_id(id).to_string()).await,
        Command::Prev { id } => show_command(&client, &previous_id(id).to_string()).await,
        Command::Evolution { query } => evolution_command(&client, &query).await,
        Command::Moves {
            query,
            method,
            limit,
        } => moves_command(&client, &query, method.as_deref(), limit).await,
        Command::Type { name } => type_command(&client, &name).await,
        Command::Say { query } => say_command(&client, &query).await,
    }
}

async fn show_command(client: &PokeClient, query: &str) -> Result<()> {
    let pokemon = client
        .fetch_pokemon(query)
        .await
        .with_context(|| format!("could not look up '{query}'"))?;
    print_card(client, &pokemon).await
}

async fn print_card(client: &PokeClient, pokemon: &Pokemon) -> Result<()> {
    let types = pokemon
        .types
        .iter()
        .map(|t| t.kind.name.as_str())
        .collect::<Vec<_>>()
        .join(" / ");

    println!(
        "#{:03} {}  [{}]",
        pokemon.id,
        species::display_name(&pokemon.name),
        types
    );
    println!(
        "height {:.1} m, weight {:.1} kg",
        pokemon.height as f64 / 10.0,
        pokemon.weight as f64 / 10.0
    );
    for line in &pokemon.stats {
        println!("  {:>15}: {}", line.stat.name, line.base_stat);
    }

    // Species text is best-effort; the card is still useful without it.
    match client.fetch_by_url::<Species>(&pokemon.species.url).await {
        Ok(species_doc) => {
            if let Some(text) = species::english_flavor_text(&species_doc) {
                println!("\n{text}");
            }
        }
        Err(e) => tracing::warn!("no species record: {e}"),
    }

    Ok(())
}

async fn evolution_command(client: &PokeClient, query: &str) -> Result<()> {
    let pokemon = client
        .fetch_pokemon(query)
        .await
        .with_context(|| format!("could not look up '{query}'"))?;
    let species_doc: Species = client.fetch_by_url(&pokemon.species.url).await?;
    let Some(chain_ref) = species_doc.evolution_chain else {
        println!("{} has no evolution chain.", species::display_name(&pokemon.name));
        return Ok(());
    };

    let chain = client.fetch_evolution_chain(&chain_ref.url).await?;
    let stages = resolve(&chain, client).await;

    if stages.len() <= 1 {
        println!("{} does not evolve.", species::display_name(&pokemon.name));
        return Ok(());
    }

    for stage in &stages {
        if let Some(requirement) = &stage.requirement {
            println!("    -- {} -->", requirement.label());
        }
        let marker = if stage.creature_id == pokemon.id {
            "  (current)"
        } else {
            ""
        };
        println!(
            "#{:03} {}{marker}",
            stage.creature_id,
            species::display_name(&stage.species_name)
        );
    }

    Ok(())
}

#[derive(Tabled)]
struct MoveRow {
    #[tabled(rename = "Move")]
    name: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Method")]
    method: String,
}

async fn moves_command(
    client: &PokeClient,
    query: &str,
    method: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let pokemon = client
        .fetch_pokemon(query)
        .await
        .with_context(|| format!("could not look up '{query}'"))?;

    let entries = aggregate(&pokemon.moves, method);
    if entries.is_empty() {
        println!("No moves match.");
        return Ok(());
    }

    let shown = limit.unwrap_or(entries.len()).min(entries.len());
    let rows: Vec<MoveRow> = entries[..shown]
        .iter()
        .map(|entry| MoveRow {
            name: species::display_name(&entry.name),
            level: if entry.level > 0 {
                entry.level.to_string()
            } else {
                "-".to_string()
            },
            method: entry.method.clone(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();
    println!("{table}");

    if shown < entries.len() {
        println!("... and {} more", entries.len() - shown);
    }
    println!("methods: {}", learn_methods(&pokemon.moves).join(", "));

    Ok(())
}

async fn type_command(client: &PokeClient, name: &str) -> Result<()> {
    let roster = client
        .fetch_type_roster(name)
        .await
        .with_context(|| format!("could not look up type '{name}'"))?;

    if roster.pokemon.is_empty() {
        println!("No creatures with type '{name}'.");
        return Ok(());
    }
    for slot in &roster.pokemon {
        println!("{}", species::display_name(&slot.pokemon.name));
    }
    Ok(())
}

async fn say_command(client: &PokeClient, query: &str) -> Result<()> {
    let pokemon = client
        .fetch_pokemon(query)
        .await
        .with_context(|| format!("could not look up '{query}'"))?;
    let species_doc: Species = client.fetch_by_url(&pokemon.species.url).await?;

    match species::speech_text(&pokemon, &species_doc) {
        Some(text) => println!("{text}"),
        None => println!("No description available."),
    }
    Ok(())
}
