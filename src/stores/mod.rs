//! Client-side state holders.
//!
//! Each store owns a clone of the [`ApiClient`](crate::api::ApiClient), keeps
//! the latest data it fetched, and remembers the last failure as a display
//! string in `error` so a front end can show it without re-deriving it.

mod posts;
mod ranking;
mod recommendations;
mod session;

pub use posts::PostsStore;
pub use ranking::RankingStore;
pub use recommendations::RecommendationsStore;
pub use session::SessionStore;
