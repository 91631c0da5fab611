//! Creature-data lookups.
//!
//! [`CreatureLookup`] is the seam the orchestrator depends on; [`PokeApiClient`]
//! is the HTTP implementation.

pub mod client;

pub use client::PokeApiClient;

use crate::error::LookupError;
use crate::models::CreatureRecord;

pub trait CreatureLookup {
    /// Fetch one creature by name or numeric id
    fn fetch_by_name_or_id(&self, query: &str) -> Result<CreatureRecord, LookupError>;

    /// Names of every creature of the given type, in API order
    fn fetch_by_type(&self, type_name: &str) -> Result<Vec<String>, LookupError>;
}
