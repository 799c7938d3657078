//! Mood CLI - Mood code generation and history
//!
//! Interactive menu by default; subcommands for one-shot use.

mod config;
mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Select;
use moodcode::{JsonHistoryStore, MoodCatalog, MoodEngine};
use tracing_subscriber::EnvFilter;

use config::Config;

type Engine = MoodEngine<JsonHistoryStore>;

#[derive(Parser)]
#[command(name = "mood")]
#[command(about = "Mood code generator - a colorized code for how you feel", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mood code (random mood if none given)
    Generate {
        /// Mood name (e.g. "happy"); unknown names fall back to random
        mood: Option<String>,
    },

    /// Show recent mood history
    History {
        /// Max records to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the available moods
    Moods,

    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let store = JsonHistoryStore::new(config.history_path());
    let mut engine = MoodEngine::new(MoodCatalog::builtin(), store);

    match cli.command {
        Some(Commands::Generate { mood }) => cmd_generate(&mut engine, mood.as_deref()),
        Some(Commands::History { limit }) => {
            cmd_history(&engine, limit.unwrap_or(config.history_limit))
        }
        Some(Commands::Moods) => cmd_moods(&engine),
        Some(Commands::Config) => cmd_config(&config),
        None => run_menu(&mut engine, &config),
    }
}

// ============================================
// Command Implementations
// ============================================

fn cmd_generate(engine: &mut Engine, mood: Option<&str>) -> Result<()> {
    let generation = engine.generate(mood).context("Failed to generate mood code")?;

    display::render_record(&generation.record);

    if let Some(e) = generation.save_error {
        eprintln!(
            "{} History not saved ({}). This record may not survive a restart.",
            "⚠".yellow(),
            e
        );
    }

    Ok(())
}

fn cmd_history(engine: &Engine, limit: usize) -> Result<()> {
    display::render_history(engine.history(limit));
    Ok(())
}

fn cmd_moods(engine: &Engine) -> Result<()> {
    println!("{}", "Available moods:".bold());
    for (i, name) in engine.mood_names().enumerate() {
        println!("  {}. {}", i + 1, name.cyan());
    }
    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  History file: {:?}", config.history_path());
    println!("  History limit: {}", config.history_limit);
    Ok(())
}

// ============================================
// Interactive Menu
// ============================================

fn run_menu(engine: &mut Engine, config: &Config) -> Result<()> {
    println!("{}", "🌼 MOOD CODE GENERATOR 🌼".bold());
    println!("Generate a unique code representing your current emotional state!");

    loop {
        let choice = Select::new()
            .with_prompt("\nWhat would you like to do?")
            .items(&[
                "Generate a random mood code",
                "Select a specific mood",
                "View mood history",
                "Exit",
            ])
            .default(0)
            .interact()
            .context("Failed to read menu choice")?;

        match choice {
            0 => cmd_generate(engine, None)?,
            1 => {
                let names: Vec<String> = engine.mood_names().map(|n| n.to_string()).collect();
                let picked = Select::new()
                    .with_prompt("Select a mood")
                    .items(&names)
                    .default(0)
                    .interact()
                    .context("Failed to read mood choice")?;
                cmd_generate(engine, names.get(picked).map(|s| s.as_str()))?;
            }
            2 => cmd_history(engine, config.history_limit)?,
            _ => {
                println!("\nThank you for using the Mood Code Generator!");
                println!("Remember: All feelings are valid. Take care! 🌈\n");
                return Ok(());
            }
        }
    }
}
