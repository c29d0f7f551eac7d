//! Song metadata lookup commands.

use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::enrichment::{EnrichmentService, MetadataCache};
use crate::error::ResultExt;
use crate::stores::RankingStore;

use super::{api_client, enrichment_config, format_metadata};

/// Look up display metadata for a single song
pub fn cmd_lookup(rt: &Runtime, settings: &Config, song: &str) -> anyhow::Result<()> {
    let service = EnrichmentService::new(&enrichment_config(settings))?;

    rt.block_on(async {
        let metadata = service.lookup_one(song).await;
        match &metadata {
            Some(found) => {
                println!("✓ {}", format_metadata(Some(found)));
            }
            None => {
                println!("✗ No metadata found for {:?}", song);
            }
        }
    });
    Ok(())
}

/// Look up display metadata for a batch of songs
pub fn cmd_enrich(
    rt: &Runtime,
    settings: &Config,
    songs: &[String],
    file: Option<&Path>,
) -> anyhow::Result<()> {
    let mut keys = songs.to_vec();
    if let Some(path) = file {
        let contents = std::fs::read_to_string(path)?;
        keys.extend(parse_song_list(&contents));
    }

    if keys.is_empty() {
        println!("No songs given.");
        return Ok(());
    }

    let service = EnrichmentService::new(&enrichment_config(settings))?;
    println!("Looking up {} songs...", keys.len());
    println!();

    rt.block_on(async {
        let results = service.lookup_many(&keys).await;

        let mut found = 0;
        for key in &keys {
            let metadata = results.get(key).and_then(Option::as_ref);
            if metadata.is_some() {
                found += 1;
            }
            println!("  {:<40} {}", key, format_metadata(metadata));
        }

        println!();
        println!("Summary: {} found, {} missing", found, keys.len() - found);
    });
    Ok(())
}

/// Show a user's ranking, optionally decorated with metadata
pub fn cmd_rankings(rt: &Runtime, settings: &Config, user: &str, enrich: bool) -> anyhow::Result<()> {
    let mut store = RankingStore::new(api_client(settings)?);

    rt.block_on(async {
        let rankings = store
            .fetch_rankings(user)
            .await
            .with_context(format!("loading rankings for {}", user))?
            .to_vec();
        if rankings.is_empty() {
            println!("No ranked songs yet.");
            return Ok(());
        }

        let cache = if enrich {
            let service = EnrichmentService::new(&enrichment_config(settings))?;
            Some(MetadataCache::new(Arc::new(service)))
        } else {
            None
        };

        for (i, song) in rankings.iter().enumerate() {
            match &cache {
                Some(cache) => {
                    let metadata = cache.get(&song.song_id).await;
                    println!(
                        "{:>3}. {:>7.1}  {}",
                        i + 1,
                        song.score,
                        format_metadata(metadata.as_ref())
                    );
                }
                None => println!("{:>3}. {:>7.1}  {}", i + 1, song.score, song.song_id),
            }
        }
        Ok::<_, anyhow::Error>(())
    })
}

/// Non-empty trimmed lines, skipping `#` comments
fn parse_song_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
