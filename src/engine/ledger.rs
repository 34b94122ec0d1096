use std::collections::HashMap;

use crate::model::*;

/// Direct bookings per resource. Append-only.
///
/// An entry only describes the resource it is keyed by; descendants keep
/// their own entries.
#[derive(Debug, Default)]
pub struct Ledger {
    bookings: HashMap<ResourceId, Vec<Date>>,
    entries: usize,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_directly_booked(&self, id: &str, date: &str) -> bool {
        self.bookings
            .get(id)
            .is_some_and(|dates| dates.iter().any(|d| d == date))
    }

    /// Append `date` to the entry for `id`. Recording the same pair twice
    /// keeps both copies.
    pub fn record_booking(&mut self, id: &str, date: &str) {
        self.bookings
            .entry(id.to_string())
            .or_default()
            .push(date.to_string());
        self.entries += 1;
    }

    /// Dates `id` was booked on directly, in booking order.
    pub fn booked_dates(&self, id: &str) -> &[Date] {
        self.bookings
            .get(id)
            .map(|dates| dates.as_slice())
            .unwrap_or_default()
    }

    /// Total recorded (resource, date) pairs.
    pub fn entry_count(&self) -> usize {
        self.entries
    }
}
