use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Logbook;
use crate::remote::cache::SnapshotCache;
use crate::remote::{client, workbook};

/// Load the handover logbook: serve the cached snapshot while it is fresh,
/// otherwise fetch through the contents API and refresh the slot.
///
/// There is no partial-success state. A failed fetch surfaces directly; an
/// expired snapshot is never served as a fallback.
pub fn load_logbook(cfg: &Config, cache: &SnapshotCache) -> AppResult<Logbook> {
    if let Some(bytes) = cache.load_fresh() {
        log::debug!("using cached snapshot ({} bytes)", bytes.len());
        return workbook::parse_logbook(&bytes);
    }

    let bytes = client::fetch_workbook(cfg)?;
    cache.store(&bytes)?;
    workbook::parse_logbook(&bytes)
}
