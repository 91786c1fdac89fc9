use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{FilterCriteria, today_subset};
use crate::core::loader::load_logbook;
use crate::core::stats;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::logbook::COL_ACTIVITY;
use crate::remote::cache::SnapshotCache;
use crate::ui::{messages, panels};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config, cache: &SnapshotCache) -> AppResult<()> {
    if let Commands::Today {
        user,
        summary,
        export,
        format,
        file,
        force,
    } = cmd
    {
        messages::info("Cargando datos desde GitHub...");
        let book = load_logbook(cfg, cache)?;

        if book.is_empty() {
            messages::warning("No hay registros disponibles aún.");
            messages::info(
                "Los registros aparecerán aquí una vez que se completen entregas de turno.",
            );
            return Ok(());
        }

        messages::header("📅 Bitácora de Hoy");

        // Evaluated at render time, never cached across days.
        let today = date::today();
        messages::info(format!(
            "📆 Mostrando registros del: {}",
            today.format("%d/%m/%Y")
        ));

        let today_book = today_subset(&book, today);

        let totals = stats::compute(&today_book);
        messages::metric("Entregas de Hoy", totals.total);
        messages::metric("Usuarios Hoy", totals.users);
        messages::metric("Actividades Hoy", totals.activities);

        if today_book.is_empty() {
            messages::warning("No hay registros para el día de hoy.");
            messages::info(
                "Los registros de hoy aparecerán aquí una vez que se completen entregas de turno.",
            );
            return Ok(());
        }

        let criteria = FilterCriteria {
            user: user.clone(),
            ..Default::default()
        };
        let filtered = criteria.apply(&today_book);

        if let Some(user) = user {
            messages::metric(&format!("Entregas de {user}"), filtered.len());
            messages::metric(
                "Actividades Realizadas",
                filtered.distinct_count(COL_ACTIVITY),
            );
        }

        println!();
        messages::section(format!("📊 Registros de Hoy: {}", filtered.len()));

        if filtered.is_empty() {
            if let Some(user) = user {
                messages::info(format!("No hay registros para {user} en el día de hoy."));
            }
            return Ok(());
        }

        if *summary {
            println!("\n{}", panels::summary_table(&filtered));
        } else {
            for record in &filtered.records {
                panels::print_record(&filtered, record, false);
            }
        }

        if *export {
            println!();
            ExportLogic::write(
                &filtered,
                *format,
                file.as_deref(),
                "bitacora_hoy",
                "Bitácora Hoy",
                *force,
            )?;
        }
    }
    Ok(())
}
