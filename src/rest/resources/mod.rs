//! TMDB v3 resource implementations.
//!
//! One type per resource group. Each owns its identifiers (movie id, session
//! id, ...) and a bag of the most recent response's attributes.
//!
//! # Using Resources
//!
//! ```rust,ignore
//! use tmdb_api::rest::resources::{Movies, Search, SearchMovieParams};
//! use tmdb_api::rest::TmdbResource;
//!
//! let mut search = Search::new();
//! search.movie(&client, "Fight Club", None).await?;
//!
//! let mut movie = Movies::new(550);
//! movie.details(&client, None).await?;
//! assert_eq!(movie.attr("title"), Some(&serde_json::json!("Fight Club")));
//! ```
//!
//! # Available Resources
//!
//! | Type | Base path | Identified by |
//! |---|---|---|
//! | [`Account`] | `account` | session id, account id |
//! | [`Authentication`] | `authentication` | nothing |
//! | [`GuestSessions`] | `guest_session` | guest session id |
//! | [`Lists`] | `list` | list id, session id |
//! | [`Discover`] | `discover` | nothing |
//! | [`Genres`] | `genre` | optional genre id |
//! | [`Movies`] | `movie` | movie id |
//! | [`Collections`] | `collection` | collection id |
//! | [`Companies`] | `company` | company id |
//! | [`Keywords`] | `keyword` | keyword id |
//! | [`Reviews`] | `review` | review id |
//! | [`Search`] | `search` | nothing |
//!
//! Typed views of common payloads are in [`common`].

mod account;
mod authentication;
mod collections;
mod companies;
mod discover;
mod genres;
mod guest_sessions;
mod keywords;
mod lists;
mod movies;
mod reviews;
mod search;

pub mod common;

pub use account::{Account, AccountListParams, MediaType};
pub use authentication::{Authentication, SessionNewParams};
pub use collections::Collections;
pub use companies::Companies;
pub use discover::{Discover, DiscoverMovieParams, DiscoverTvParams};
pub use genres::{GenreMoviesParams, Genres};
pub use guest_sessions::{GuestRatedParams, GuestSessions};
pub use keywords::{KeywordMoviesParams, Keywords};
pub use lists::Lists;
pub use movies::{
    AlternativeTitlesParams, MovieChangesParams, MovieDetailsParams, MovieImagesParams,
    MovieListingParams, Movies, RatingSession,
};
pub use reviews::Reviews;
pub use search::{
    Search, SearchMovieParams, SearchMultiParams, SearchPageParams, SearchTvParams,
};

// Verify resource types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Account>();
    assert_send_sync::<Lists>();
    assert_send_sync::<Movies>();
    assert_send_sync::<Discover>();
    assert_send_sync::<Search>();
};
