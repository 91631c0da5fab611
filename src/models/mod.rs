//! Data models shared by the collaborators.
//!
//! - [`CreatureRecord`] - creature data returned by the lookup API
//! - [`SearchEntry`] - one row of search history
//!
//! The raw API wire shapes live next to [`CreatureRecord`] and are converted
//! with `From` so the rest of the crate never sees nested API JSON.

pub mod creature;
pub mod search;

pub(crate) use creature::{RawCreature, RawTypeListing};
pub use creature::{CreatureRecord, Stat};
pub use search::SearchEntry;
