//! Ranking backend API wrappers.
//!
//! The backend exposes one "concept" per feature (authentication, posts,
//! reactions, friends, ranking, recommendations). Each concept gets a small
//! borrowed facade on [`ApiClient`]:
//!
//! ```ignore
//! let client = ApiClient::new("http://localhost:8000/api")?;
//! let user = client.auth().authenticate("alice", "hunter2").await?;
//! let ranked = client.ranking().get_rankings(&user).await?;
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod friends;
pub mod posts;
pub mod ranking;
pub mod reactions;
pub mod recommender;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use posts::Post;
pub use ranking::RankedSong;
pub use reactions::Reaction;
