use crate::utils::colors::ColorChoice;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for devaudit
#[derive(Parser)]
#[command(
    name = "devaudit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audit project folders for Git hygiene and report macOS application usage",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// When to color the output
    #[arg(global = true, long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where `apps` reads application data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AppSource {
    /// `system_profiler` inventory + `mdls` last-used lookups
    System,
    /// LaunchServices database (not available on recent macOS)
    LaunchServices,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report project folders that are not Git repositories or have uncommitted changes
    ///
    /// Scans <ROOT>/<group>/<project>: exactly two directory levels below the root.
    Repos {
        /// Root directory to scan (default: `scan_root` from the configuration, ~/code)
        #[arg(long, value_name = "DIR")]
        root: Option<String>,
    },

    /// List installed applications with their last-used date
    Apps {
        /// Application data source
        #[arg(long, value_enum, default_value_t = AppSource::System)]
        source: AppSource,

        /// LaunchServices database path (only with --source launch-services)
        #[arg(long = "db", value_name = "FILE")]
        db: Option<String>,

        /// Sort by real recency instead of the displayed text
        #[arg(
            long = "chronological",
            help = "Sort newest first, then Never Opened, Path Not Available and errors"
        )]
        chronological: bool,
    },

    /// Manage the configuration file (print, init or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with the default values")]
        init: bool,

        #[arg(
            long = "force",
            requires = "init",
            help = "Overwrite an existing configuration file (with --init)"
        )]
        force: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
