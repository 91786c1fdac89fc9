use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};

/// Outbound link to the data-entry application where new handovers are
/// registered. This tool never writes entries itself.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let url = cfg.form_url.trim();
    if url.is_empty() {
        return Err(AppError::MissingConfig("form_url".to_string()));
    }

    info(format!("📝 Formulario de registro: {url}"));

    if let Err(e) = open::that(url) {
        warning(format!("No se pudo abrir el navegador: {e}"));
    }

    Ok(())
}
