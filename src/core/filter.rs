use crate::models::logbook::{COL_ACTIVITY, COL_USER, Logbook, Record};
use chrono::NaiveDate;

/// User-selected constraints narrowing the displayed subset of the logbook.
/// Every present criterion must hold at once. A criterion over a column the
/// workbook does not have is inert, matching the source spreadsheet's
/// open-ended schema.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub user: Option<String>,
    pub activity: Option<String>,
    pub bounds: Option<(NaiveDate, NaiveDate)>,
}

impl FilterCriteria {
    pub fn apply(&self, book: &Logbook) -> Logbook {
        let user_idx = book.column_index(COL_USER);
        let activity_idx = book.column_index(COL_ACTIVITY);

        let records: Vec<Record> = book
            .records
            .iter()
            .filter(|record| {
                if let (Some(user), Some(idx)) = (&self.user, user_idx)
                    && record.values[idx].trim() != user.as_str()
                {
                    return false;
                }

                if let (Some(activity), Some(idx)) = (&self.activity, activity_idx)
                    && record.values[idx].trim() != activity.as_str()
                {
                    return false;
                }

                if let Some((lo, hi)) = self.bounds {
                    // Records without a derived date carry no position on
                    // the calendar and fall outside any explicit range.
                    match record.date() {
                        Some(d) => d >= lo && d <= hi,
                        None => false,
                    }
                } else {
                    true
                }
            })
            .cloned()
            .collect();

        book.with_records(records)
    }
}

/// Records whose derived date equals `today`, most recent first.
/// Ties keep spreadsheet file order.
pub fn today_subset(book: &Logbook, today: NaiveDate) -> Logbook {
    let mut records: Vec<Record> = book
        .records
        .iter()
        .filter(|r| r.date() == Some(today))
        .cloned()
        .collect();

    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    book.with_records(records)
}
