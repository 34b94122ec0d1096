use crate::model::*;

use super::ledger::Ledger;
use super::store::Hierarchy;

// ── Availability Algorithm ────────────────────────────────────────

/// Pre-order walk over a resource and everything it contains.
///
/// Visits the resource itself, then each child in `children_of` order, fully
/// descending into one child before moving to the next. Uses an explicit
/// stack, so the visiting order matches the recursive definition without
/// recursing.
pub struct Subtree<'a> {
    hierarchy: &'a Hierarchy,
    stack: Vec<&'a str>,
}

impl<'a> Iterator for Subtree<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let id = self.stack.pop()?;
        self.stack.extend(
            self.hierarchy
                .children_of(id)
                .iter()
                .rev()
                .map(String::as_str),
        );
        Some(id)
    }
}

/// Walk `id` and its descendants. Unknown ids yield only themselves.
pub fn subtree<'a>(hierarchy: &'a Hierarchy, id: &'a str) -> Subtree<'a> {
    Subtree {
        hierarchy,
        stack: vec![id],
    }
}

/// First resource in the subtree of `id` that is directly booked on `date`.
///
/// The resource itself is checked before any descendant; the walk stops at
/// the first hit.
pub fn find_conflict(hierarchy: &Hierarchy, ledger: &Ledger, id: &str, date: &str) -> Option<ResourceId> {
    subtree(hierarchy, id)
        .find(|rid| ledger.is_directly_booked(rid, date))
        .map(str::to_string)
}

/// True iff neither `id` nor any resource it transitively contains is
/// directly booked on `date`.
pub fn can_book(hierarchy: &Hierarchy, ledger: &Ledger, id: &str, date: &str) -> bool {
    find_conflict(hierarchy, ledger, id, date).is_none()
}
