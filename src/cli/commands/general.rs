use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::FilterCriteria;
use crate::core::loader::load_logbook;
use crate::core::stats;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::remote::cache::SnapshotCache;
use crate::ui::{messages, panels};
use crate::utils::date::parse_range;

pub fn handle(cmd: &Commands, cfg: &Config, cache: &SnapshotCache) -> AppResult<()> {
    if let Commands::General {
        user,
        activity,
        range,
        summary,
        export,
        format,
        file,
        force,
    } = cmd
    {
        // Resolve the range before any network round-trip.
        let bounds = range.as_deref().map(parse_range).transpose()?;

        messages::info("Cargando datos desde GitHub...");
        let book = load_logbook(cfg, cache)?;

        if book.is_empty() {
            messages::warning("No hay registros disponibles aún.");
            messages::info(
                "Los registros aparecerán aquí una vez que se completen entregas de turno.",
            );
            return Ok(());
        }

        messages::header("📋 Bitácora General de Entregas");

        let totals = stats::compute(&book);
        messages::metric("Total de Entregas", totals.total);
        messages::metric("Usuarios Activos", totals.users);
        messages::metric("Actividades Registradas", totals.activities);
        messages::metric("Días con Registro", totals.days);

        let criteria = FilterCriteria {
            user: user.clone(),
            activity: activity.clone(),
            bounds,
        };
        let filtered = criteria.apply(&book);

        println!();
        messages::section(format!("📊 Registros Encontrados: {}", filtered.len()));

        if filtered.is_empty() {
            messages::info("No se encontraron registros con los filtros aplicados.");
            return Ok(());
        }

        if *summary {
            println!("\n{}", panels::summary_table(&filtered));
        } else {
            for record in &filtered.records {
                panels::print_record(&filtered, record, true);
            }
        }

        if *export {
            println!();
            ExportLogic::write(
                &filtered,
                *format,
                file.as_deref(),
                "bitacora_general",
                "Bitácora",
                *force,
            )?;
        }
    }
    Ok(())
}
