use crate::errors::AppResult;
use crate::remote::cache::SnapshotCache;
use crate::ui::messages::{info, success};

/// The manual "Recargar Datos" action: drop the snapshot slot so the next
/// view issues a fresh fetch instead of reusing an in-window snapshot.
pub fn handle(cache: &SnapshotCache) -> AppResult<()> {
    if cache.invalidate()? {
        success("Datos locales descartados. La próxima consulta recargará desde GitHub.");
    } else {
        info("No había datos en caché.");
    }
    Ok(())
}
