use tracing::debug;

use crate::model::*;

use super::availability::subtree;
use super::conflict::check_no_conflict;
use super::{Engine, EngineError};

impl Engine {
    /// Record `date` on `id` and on every resource it contains, parent
    /// before children. No availability check; callers check first.
    pub(super) fn commit(&mut self, id: &str, date: &str) -> usize {
        let mut booked = 0usize;
        for rid in subtree(&self.hierarchy, id) {
            self.ledger.record_booking(rid, date);
            booked += 1;
        }
        booked
    }

    /// Book `id` and everything below it, or nothing at all.
    ///
    /// Returns the number of resources that received a direct booking.
    pub fn try_book(&mut self, id: &str, date: &str) -> Result<usize, EngineError> {
        check_no_conflict(&self.hierarchy, &self.ledger, id, date)?;
        let booked = self.commit(id, date);
        metrics::counter!(crate::observability::BOOKINGS_COMMITTED_TOTAL).increment(1);
        metrics::histogram!(crate::observability::RESOURCES_PER_BOOKING).record(booked as f64);
        debug!(resource = id, date, booked, "booking committed");
        Ok(booked)
    }

    pub fn book(&mut self, id: &str, date: &str) -> Outcome {
        match self.try_book(id, date) {
            Ok(_) => Outcome::Ok,
            Err(e) => {
                debug!(resource = id, date, "booking refused: {e}");
                Outcome::Failed
            }
        }
    }
}
