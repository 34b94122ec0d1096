use super::availability::find_conflict;
use super::ledger::Ledger;
use super::store::Hierarchy;
use super::EngineError;

/// `Err(Conflict(first_booked))` if anything in the subtree of `id` is
/// already booked on `date`.
pub(crate) fn check_no_conflict(
    hierarchy: &Hierarchy,
    ledger: &Ledger,
    id: &str,
    date: &str,
) -> Result<(), EngineError> {
    match find_conflict(hierarchy, ledger, id, date) {
        Some(blocker) => Err(EngineError::Conflict(blocker)),
        None => Ok(()),
    }
}
