mod availability;
mod conflict;
mod error;
mod ledger;
mod mutations;
mod queries;
mod store;

pub use availability::{can_book, find_conflict, subtree, Subtree};
pub use error::EngineError;
pub use ledger::Ledger;
pub use store::Hierarchy;

use tracing::debug;

use crate::model::*;

/// Owns the resource tree and the booking ledger for one run.
///
/// Every mutation goes through `&mut self`, so an availability check and
/// the commit that follows it can never be interleaved with another booking.
#[derive(Debug, Default)]
pub struct Engine {
    hierarchy: Hierarchy,
    ledger: Ledger,
}

impl Engine {
    pub fn new(hierarchy: Hierarchy) -> Self {
        debug!(
            resources = hierarchy.resource_count(),
            buildings = hierarchy.building_ids().len(),
            "engine ready"
        );
        Self {
            hierarchy,
            ledger: Ledger::new(),
        }
    }

    pub fn from_spec(spec: &HierarchySpec) -> Result<Self, EngineError> {
        Ok(Self::new(Hierarchy::build(spec)?))
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run one query and produce its result token.
    pub fn execute(&mut self, query: &Query) -> Outcome {
        let id = query.resource_id.as_str();
        let date = query.date.as_str();
        match query.command {
            Command::Book => self.book(id, date),
            Command::IsBooked => Outcome::from_bool(self.is_booked(id, date)),
            Command::IsAllBooked => Outcome::from_bool(self.is_all_booked(id, date)),
            Command::IsAvailable => Outcome::from_bool(self.is_available(id, date)),
        }
    }

    /// Same as `execute` for queries that never mutate. Returns `None` for
    /// `book`.
    pub fn execute_read_only(&self, query: &Query) -> Option<Outcome> {
        let id = query.resource_id.as_str();
        let date = query.date.as_str();
        match query.command {
            Command::Book => None,
            Command::IsBooked => Some(Outcome::from_bool(self.is_booked(id, date))),
            Command::IsAllBooked => Some(Outcome::from_bool(self.is_all_booked(id, date))),
            Command::IsAvailable => Some(Outcome::from_bool(self.is_available(id, date))),
        }
    }
}
