use crate::model::*;

use super::availability::can_book;
use super::Engine;

impl Engine {
    /// Direct booking on `id` only; descendants are not consulted.
    pub fn is_booked(&self, id: &str, date: &str) -> bool {
        self.ledger.is_directly_booked(id, date)
    }

    /// True when `id` or anything it contains is booked on `date`.
    pub fn is_all_booked(&self, id: &str, date: &str) -> bool {
        !self.can_book(id, date)
    }

    pub fn is_available(&self, id: &str, date: &str) -> bool {
        self.can_book(id, date)
    }

    pub fn can_book(&self, id: &str, date: &str) -> bool {
        can_book(&self.hierarchy, &self.ledger, id, date)
    }

    pub fn booked_dates(&self, id: &str) -> &[Date] {
        self.ledger.booked_dates(id)
    }
}
