use crate::history::History;

/// Moves scored since the deal: `History::count()` less the deal's own
/// snapshot, never below zero. Undo adds to the count rather than lowering it.
#[inline]
pub fn move_count(history: &History) -> usize {
    history.count().saturating_sub(1)
}
