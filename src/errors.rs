//! Unified application error type.
//! All modules (remote, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote fetch
    // ---------------------------
    /// The workbook is missing from the repository. Not fatal for the user:
    /// it simply means nobody has completed a handover yet.
    #[error("No se encontró el archivo. Aún no hay registros.")]
    RemoteNotFound,

    #[error("Error al acceder a GitHub: {0}")]
    RemoteAccess(u16),

    #[error("Error de conexión: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Respuesta inesperada de GitHub: {0}")]
    RemoteResponse(String),

    // ---------------------------
    // Workbook parsing
    // ---------------------------
    #[error("No se pudo leer la hoja de cálculo: {0}")]
    Workbook(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Error de configuración: falta '{0}'")]
    MissingConfig(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
