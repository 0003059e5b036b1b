use crate::export::ExportFormat;
use crate::models::period::Period;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rsessionstats
#[derive(Parser)]
#[command(
    name = "rsessionstats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log productivity sessions and chart them: buckets, comparisons, categories, streaks",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the user whose records are read and written
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a session record
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        time: String,

        /// Duration: 90, 90m, 1h30m, 1:30, 45s
        duration: String,

        #[arg(long = "label", short = 'l', help = "Category / activity name")]
        label: Option<String>,

        #[arg(long = "note", short = 'n', help = "Free-form note")]
        note: Option<String>,
    },

    /// Delete a record by id
    Del {
        /// Record id (see `list`)
        id: i64,
    },

    /// List records
    List {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD, ranges like YYYY-MM:YYYY-MM, or 'all' (default: current month)"
        )]
        period: Option<String>,
    },

    /// Chart time buckets (hours, days, weeks or months)
    Stats {
        #[arg(long, short, value_enum, help = "Reporting period (default from config)")]
        period: Option<Period>,

        #[arg(long, help = "Reference instant 'YYYY-MM-DD HH:MM' (default: now)")]
        now: Option<String>,

        #[arg(long, help = "Print JSON instead of a chart")]
        json: bool,
    },

    /// Compare the current window with the previous one
    Compare {
        #[arg(long, short, value_enum, help = "Reporting period (default from config)")]
        period: Option<Period>,

        #[arg(long, help = "Reference instant 'YYYY-MM-DD HH:MM' (default: now)")]
        now: Option<String>,

        #[arg(long, help = "Print JSON instead of a summary")]
        json: bool,
    },

    /// Time per category with share of the total
    Breakdown {
        #[arg(long, short, help = "Same syntax as `list --period` (default: all)")]
        range: Option<String>,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Current and longest daily streak
    Streak {
        #[arg(long, help = "Reference instant 'YYYY-MM-DD HH:MM' (default: now)")]
        now: Option<String>,

        #[arg(long, help = "Print JSON instead of a summary")]
        json: bool,
    },

    /// Unlocked and pending achievements
    Achievements {
        #[arg(long, help = "Reference instant 'YYYY-MM-DD HH:MM' (default: now)")]
        now: Option<String>,

        #[arg(long, help = "Print JSON instead of a list")]
        json: bool,
    },

    /// Export records (or chart buckets) to CSV / JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            conflicts_with = "buckets",
            help = "Filter records by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, value_enum, value_name = "PERIOD", help = "Export chart buckets instead of records")]
        buckets: Option<Period>,

        #[arg(long, requires = "buckets", help = "Reference instant for --buckets")]
        now: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
