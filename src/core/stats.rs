use crate::models::Logbook;
use crate::models::logbook::{COL_ACTIVITY, COL_DATE, COL_USER};

/// Aggregate counters shown at the top of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogbookStats {
    pub total: usize,
    pub users: usize,
    pub activities: usize,
    pub days: usize,
}

pub fn compute(book: &Logbook) -> LogbookStats {
    LogbookStats {
        total: book.len(),
        users: book.distinct_count(COL_USER),
        activities: book.distinct_count(COL_ACTIVITY),
        days: book.distinct_count(COL_DATE),
    }
}
