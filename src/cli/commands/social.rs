//! Ranking backend commands: login, comparisons, recommendations, posts
//! and friends.

use tokio::runtime::Runtime;

use crate::api::Reaction;
use crate::config::Config;
use crate::error::ResultExt;
use crate::stores::{PostsStore, RankingStore, RecommendationsStore, SessionStore};

use super::api_client;

/// Log in (optionally registering first) and print the user ID
pub fn cmd_login(
    rt: &Runtime,
    settings: &Config,
    username: &str,
    password: &str,
    register: bool,
) -> anyhow::Result<()> {
    let mut session = SessionStore::new(api_client(settings)?);

    rt.block_on(async {
        let user = if register {
            session.register(username, password).await?
        } else {
            session.login(username, password).await?
        };
        println!("✓ Logged in as {} (user ID {})", username, user);
        Ok::<_, anyhow::Error>(())
    })
}

/// Record a pairwise comparison and show the updated ranking
pub fn cmd_compare(
    rt: &Runtime,
    settings: &Config,
    user: &str,
    song_a: &str,
    song_b: &str,
    preferred: &str,
) -> anyhow::Result<()> {
    if preferred != song_a && preferred != song_b {
        anyhow::bail!("Preferred song must be {:?} or {:?}", song_a, song_b);
    }

    let mut store = RankingStore::new(api_client(settings)?);

    rt.block_on(async {
        let rankings = store.add_comparison(user, song_a, song_b, preferred).await?;
        println!("✓ Comparison recorded. Ranking now has {} songs:", rankings.len());
        for (i, song) in rankings.iter().enumerate() {
            println!("{:>3}. {:>7.1}  {}", i + 1, song.score, song.song_id);
        }
        Ok::<_, anyhow::Error>(())
    })
}

/// Generate new recommendations, or list past ones
pub fn cmd_recommend(
    rt: &Runtime,
    settings: &Config,
    user: &str,
    count: u32,
    past: bool,
) -> anyhow::Result<()> {
    let client = api_client(settings)?;

    rt.block_on(async {
        let songs = if past {
            client.recommender().get_past_recommendations(user).await?
        } else {
            let mut store = RecommendationsStore::new(client.clone());
            let generated = store.generate(user, count).await?;
            generated.to_vec()
        };

        if songs.is_empty() {
            println!("No recommendations.");
        }
        for song in &songs {
            println!("  {}", song);
        }
        Ok::<_, anyhow::Error>(())
    })
}

/// List an author's posts, publishing a new one first if asked
pub fn cmd_posts(
    rt: &Runtime,
    settings: &Config,
    author: &str,
    create: Option<&str>,
) -> anyhow::Result<()> {
    let client = api_client(settings)?;
    let mut store = PostsStore::new(client.clone());

    rt.block_on(async {
        if let Some(content) = create {
            match store.create_post(author, content).await? {
                Some(id) => println!("✓ Posted ({})", id),
                None => println!("✓ Posted"),
            }
        }

        let posts = store
            .fetch_posts_by_author(author)
            .await
            .with_context(format!("loading posts by {}", author))?;
        if posts.is_empty() {
            println!("No posts.");
        }
        for post in posts {
            let reactions = client
                .reactions()
                .get_reactions_for_post(&post.id)
                .await
                .with_context(format!("loading reactions for post {}", post.id))?;
            println!("[{}] {}", post.timestamp, post.content);
            if !reactions.is_empty() {
                println!("    {}", summarize_reactions(&reactions));
            }
        }
        Ok::<_, anyhow::Error>(())
    })
}

/// Show a user's friends and pending requests
pub fn cmd_friends(rt: &Runtime, settings: &Config, user: &str) -> anyhow::Result<()> {
    let client = api_client(settings)?;

    rt.block_on(async {
        let friends = client.friends();
        let accepted = friends
            .get_friends(user)
            .await
            .with_context("loading friends")?;
        let sent = friends.get_sent_requests(user).await?;
        let received = friends.get_received_requests(user).await?;

        print_list("Friends", &accepted);
        print_list("Sent requests", &sent);
        print_list("Received requests", &received);
        Ok::<_, anyhow::Error>(())
    })
}

fn print_list(heading: &str, items: &[String]) {
    println!("{} ({}):", heading, items.len());
    for item in items {
        println!("  {}", item);
    }
}

/// "like x2, fire x1" in first-seen order
fn summarize_reactions(reactions: &[Reaction]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for reaction in reactions {
        match counts
            .iter_mut()
            .find(|(kind, _)| *kind == reaction.reaction_type)
        {
            Some((_, n)) => *n += 1,
            None => counts.push((reaction.reaction_type.as_str(), 1)),
        }
    }
    counts
        .iter()
        .map(|(kind, n)| format!("{} x{}", kind, n))
        .collect::<Vec<_>>()
        .join(", ")
}
