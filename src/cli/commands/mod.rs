//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `enrich`: MusicBrainz/Cover Art Archive lookups and ranked-song display
//! - `social`: login, comparisons, recommendations, posts and friends

mod enrich;
mod social;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::api::ApiClient;
use crate::config::{self, Config, ConfigError};
use crate::enrichment::{EnrichmentConfig, SongMetadata};

pub use enrich::{cmd_enrich, cmd_lookup, cmd_rankings};
pub use social::{cmd_compare, cmd_friends, cmd_login, cmd_posts, cmd_recommend};

/// Tuneboard CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Ranking backend base URL (overrides the config file)
    #[arg(long, global = true, env = "TUNEBOARD_API_BASE")]
    pub api_base: Option<String>,

    /// MusicBrainz request rate (overrides the config file)
    #[arg(long, global = true, env = "TUNEBOARD_RPS")]
    pub rps: Option<f64>,

    /// Write the effective settings back to the config file
    #[arg(long, global = true)]
    pub save_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up display metadata for one song
    Lookup {
        /// MusicBrainz recording ID or free-text search
        song: String,
    },
    /// Look up display metadata for many songs
    Enrich {
        /// Songs to look up
        songs: Vec<String>,
        /// Read additional songs from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Show a user's song ranking
    Rankings {
        /// User ID
        #[arg(short, long)]
        user: String,
        /// Decorate each song with title, artist and artwork
        #[arg(long)]
        enrich: bool,
    },
    /// Record that one song beats another
    Compare {
        /// User ID
        #[arg(short, long)]
        user: String,
        /// First song
        song_a: String,
        /// Second song
        song_b: String,
        /// The preferred song (must be one of the two)
        #[arg(short, long)]
        preferred: String,
    },
    /// Generate song recommendations
    Recommend {
        /// User ID
        #[arg(short, long)]
        user: String,
        /// Number of songs to recommend
        #[arg(short, long, default_value = "5")]
        count: u32,
        /// Show previously recommended songs instead
        #[arg(long)]
        past: bool,
    },
    /// List or publish posts
    Posts {
        /// Author user ID
        #[arg(short, long)]
        author: String,
        /// Publish this content before listing
        #[arg(long)]
        create: Option<String>,
    },
    /// Show friends and pending requests
    Friends {
        /// User ID
        #[arg(short, long)]
        user: String,
    },
    /// Log in and print the user ID
    Login {
        /// Username
        username: String,
        /// Password (or set TUNEBOARD_PASSWORD env var)
        #[arg(long, env = "TUNEBOARD_PASSWORD", hide_env_values = true)]
        password: String,
        /// Create the account first
        #[arg(long)]
        register: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let settings = resolve_settings(cli);
    if cli.save_config {
        save_settings(cli.config.as_deref(), &settings)?;
    }
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Lookup { song } => cmd_lookup(&rt, &settings, song),
        Commands::Enrich { songs, file } => cmd_enrich(&rt, &settings, songs, file.as_deref()),
        Commands::Rankings { user, enrich } => cmd_rankings(&rt, &settings, user, *enrich),
        Commands::Compare {
            user,
            song_a,
            song_b,
            preferred,
        } => cmd_compare(&rt, &settings, user, song_a, song_b, preferred),
        Commands::Recommend { user, count, past } => {
            cmd_recommend(&rt, &settings, user, *count, *past)
        }
        Commands::Posts { author, create } => {
            cmd_posts(&rt, &settings, author, create.as_deref())
        }
        Commands::Friends { user } => cmd_friends(&rt, &settings, user),
        Commands::Login {
            username,
            password,
            register,
        } => cmd_login(&rt, &settings, username, password, *register),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Config file values with command-line overrides applied
pub(crate) fn resolve_settings(cli: &Cli) -> Config {
    let mut settings = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    apply_overrides(&mut settings, cli.api_base.as_deref(), cli.rps);
    settings
}

fn apply_overrides(settings: &mut Config, api_base: Option<&str>, rps: Option<f64>) {
    if let Some(base) = api_base {
        settings.backend.base_url = base.to_string();
    }
    if let Some(rps) = rps {
        settings.enrichment.requests_per_second = rps;
    }
}

/// Persist settings to `path`, or to the default config file
fn save_settings(path: Option<&Path>, settings: &Config) -> Result<(), ConfigError> {
    match path {
        Some(path) => config::save_to(settings, path),
        None => config::save(settings),
    }
}

/// Backend client for the configured base URL
pub(crate) fn api_client(settings: &Config) -> anyhow::Result<ApiClient> {
    Ok(ApiClient::new(settings.backend.base_url.clone())?)
}

pub(crate) fn enrichment_config(settings: &Config) -> EnrichmentConfig {
    EnrichmentConfig {
        requests_per_second: settings.enrichment.requests_per_second,
    }
}

/// One-line rendering of a metadata result
pub(crate) fn format_metadata(metadata: Option<&SongMetadata>) -> String {
    let Some(metadata) = metadata else {
        return "(no metadata)".to_string();
    };

    let title = if metadata.title.is_empty() {
        "Unknown title"
    } else {
        &metadata.title
    };
    let mut line = if metadata.artist.is_empty() {
        title.to_string()
    } else {
        format!("{} - {}", metadata.artist, title)
    };
    if let Some(url) = &metadata.artwork_url {
        line.push_str(&format!(" [{}]", url));
    }
    line
}
