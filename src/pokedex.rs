//! Search orchestration.
//!
//! [`Pokedex`] owns the three collaborators for the lifetime of the process and
//! runs each user command to completion. A search moves through
//! `Idle -> Fetching -> Notifying -> Recording -> Displaying -> Idle`:
//!
//! - a lookup failure is reported and ends the search, nothing is notified or recorded
//! - a notification failure is logged and ignored
//! - a recording failure is reported, the notification already sent stays sent
//!
//! All user-facing text goes to the writer passed to each command.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::StorageError;
use crate::history::{HistoryStore, RECENT_LIMIT};
use crate::lookup::CreatureLookup;
use crate::models::CreatureRecord;
use crate::notify::Notifier;
use crate::utils::{format_timestamp, sanitize_line, title_case};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Fetching,
    Notifying,
    Recording,
    Displaying,
}

/// What happened during one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    LookupFailed,
    Completed { notified: bool, recorded: bool },
}

pub struct Pokedex<L, H, N> {
    lookup: L,
    history: H,
    notifier: N,
    phase: SearchPhase,
    notifications: bool,
}

impl<L, H, N> Pokedex<L, H, N>
where
    L: CreatureLookup,
    H: HistoryStore,
    N: Notifier,
{
    pub fn new(lookup: L, history: H, notifier: N) -> Self {
        Self { lookup, history, notifier, phase: SearchPhase::Idle, notifications: true }
    }

    /// One-time startup work: provision the chat room.
    /// Returns whether notifications are available. When they are not,
    /// later searches skip the notify step.
    pub fn startup<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        match self.notifier.initialize() {
            Ok(()) => {
                self.notifications = true;
                Ok(true)
            }
            Err(e) => {
                self.notifications = false;
                warn!(error = %e, "chat room setup failed");
                writeln!(out, "Chat notifications unavailable: {e}")?;
                Ok(false)
            }
        }
    }

    pub fn search<W: Write>(&mut self, query: &str, out: &mut W) -> io::Result<SearchOutcome> {
        self.enter(SearchPhase::Fetching);
        let record = match self.lookup.fetch_by_name_or_id(query) {
            Ok(record) => record,
            Err(e) => {
                self.enter(SearchPhase::Idle);
                writeln!(out, "Search error: {e}")?;
                return Ok(SearchOutcome::LookupFailed);
            }
        };

        self.enter(SearchPhase::Notifying);
        let notified = if !self.notifications {
            debug!(name = %record.name, "notifications unavailable, skipping");
            false
        } else {
            match self.notifier.announce(&record) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, name = %record.name, "notification failed");
                    false
                }
            }
        };

        self.enter(SearchPhase::Recording);
        let recorded = match self.record(query, &record) {
            Ok(()) => true,
            Err(e) => {
                if let Err(write_err) = writeln!(out, "Could not save search: {e}") {
                    self.enter(SearchPhase::Idle);
                    return Err(write_err);
                }
                false
            }
        };

        self.enter(SearchPhase::Displaying);
        let displayed = write_creature(&record, out);
        self.enter(SearchPhase::Idle);
        displayed?;

        Ok(SearchOutcome::Completed { notified, recorded })
    }

    fn record(&mut self, query: &str, record: &CreatureRecord) -> Result<(), StorageError> {
        let payload = serde_json::to_value(record)?;
        self.history.record(query, &payload)
    }

    /// Print the most recent distinct searches, newest first
    pub fn show_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let entries = match self.history.recent_distinct() {
            Ok(entries) => entries,
            Err(e) => return writeln!(out, "History error: {e}"),
        };

        writeln!(out)?;
        writeln!(out, "Last {RECENT_LIMIT} unique searches:")?;
        if entries.is_empty() {
            writeln!(out, "No searches recorded yet.")?;
        }
        for entry in &entries {
            writeln!(out, "- {} at {}", sanitize_line(&entry.query), format_timestamp(&entry.timestamp))?;
        }
        Ok(())
    }

    /// Print every creature name of a type
    pub fn list_by_type<W: Write>(&self, type_name: &str, out: &mut W) -> io::Result<()> {
        let names = match self.lookup.fetch_by_type(type_name) {
            Ok(names) => names,
            Err(e) => return writeln!(out, "Type search error: {e}"),
        };

        writeln!(out)?;
        writeln!(out, "Pokémon of type {}:", sanitize_line(type_name))?;
        for name in &names {
            writeln!(out, "- {}", sanitize_line(name))?;
        }
        Ok(())
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn enter(&mut self, phase: SearchPhase) {
        debug!(from = ?self.phase, to = ?phase, "search phase");
        self.phase = phase;
    }
}

/// Creature details in API order
pub fn write_creature<W: Write>(record: &CreatureRecord, out: &mut W) -> io::Result<()> {
    let clean = |items: &[String]| {
        items.iter().map(|s| sanitize_line(s)).collect::<Vec<_>>().join(", ")
    };

    writeln!(out)?;
    writeln!(out, "Name: {}", sanitize_line(&title_case(&record.name)))?;
    writeln!(out, "Type(s): {}", clean(&record.types))?;
    writeln!(out, "Abilities: {}", clean(&record.abilities))?;
    writeln!(out, "Base Stats:")?;
    for stat in &record.stats {
        writeln!(out, "  {}: {}", sanitize_line(&stat.name), stat.value)?;
    }
    Ok(())
}
