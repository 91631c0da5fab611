//! Mini Pokedex - look up Pokémon, share them to a chat room, keep a search history
//!
//! The crate is split into three collaborators, each behind a trait, and a thin
//! orchestrator that sequences them:
//!
//! - [`lookup`] - creature data from the PokeAPI REST service
//! - [`history`] - append-only search history with a recent-distinct read
//! - [`notify`] - Adaptive Card notifications to a Webex room
//! - [`pokedex`] - the search flow: lookup, notify, record, display
//!
//! # Example
//!
//! ```no_run
//! use mini_pokedex::config::Config;
//! use mini_pokedex::history::SqliteHistoryStore;
//! use mini_pokedex::lookup::PokeApiClient;
//! use mini_pokedex::notify::WebexNotifier;
//! use mini_pokedex::pokedex::Pokedex;
//!
//! let config = Config::from_env()?;
//! let mut pokedex = Pokedex::new(
//!     PokeApiClient::new(&config.api)?,
//!     SqliteHistoryStore::open(&config.storage.path)?,
//!     WebexNotifier::new(&config.chat)?,
//! );
//! pokedex.search("pikachu", &mut std::io::stdout())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod lookup;
pub mod models;
pub mod notify;
pub mod pokedex;
pub mod utils;

// Re-export commonly used types
pub use error::{LookupError, NotificationError, StorageError};
pub use models::{CreatureRecord, SearchEntry, Stat};
pub use pokedex::{Pokedex, SearchOutcome, SearchPhase};
