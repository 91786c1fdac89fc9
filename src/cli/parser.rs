use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for bitacora
/// CLI dashboard over the shift-handover workbook hosted on GitHub
#[derive(Parser)]
#[command(
    name = "bitacora",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shift-handover logbook dashboard: browse, filter and export entries stored in a GitHub-hosted spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the snapshot cache directory
    #[arg(global = true, long = "cache-dir")]
    pub cache_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file skeleton and the cache directory
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration (token masked)")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for missing required fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Full logbook: aggregate metrics, filters and record panels
    General {
        #[arg(long, help = "Filter by user (exact match)")]
        user: Option<String>,

        #[arg(long, help = "Filter by activity (exact match)")]
        activity: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (A:B, inclusive)"
        )]
        range: Option<String>,

        #[arg(long, help = "Compact table instead of record panels")]
        summary: bool,

        #[arg(long, help = "Export the filtered records")]
        export: bool,

        #[arg(long, value_enum, default_value = "xlsx", help = "Export format")]
        format: ExportFormat,

        #[arg(
            long = "file",
            value_name = "FILE",
            help = "Export file path (default: timestamped name in the working directory)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,
    },

    /// Today's entries only, most recent first
    Today {
        #[arg(long, help = "Filter by user (exact match)")]
        user: Option<String>,

        #[arg(long, help = "Compact table instead of record panels")]
        summary: bool,

        #[arg(long, help = "Export the filtered records")]
        export: bool,

        #[arg(long, value_enum, default_value = "xlsx", help = "Export format")]
        format: ExportFormat,

        #[arg(
            long = "file",
            value_name = "FILE",
            help = "Export file path (default: timestamped name in the working directory)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,
    },

    /// Discard the cached snapshot so the next view re-fetches
    Reload,

    /// Show and open the external data-entry form
    Form,
}
