use crate::cli::parser::{AppSource, Commands};
use crate::config::Config;
use crate::core::inventory::SystemProfilerInventory;
use crate::core::metadata::MdlsLookup;
use crate::core::usage::{UsageReporter, build_table};
use crate::db::launch_services;
use crate::errors::AppResult;
use crate::models::SortOrder;
use crate::utils::expand_tilde;
use tracing::warn;

/// Handle the `apps` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Apps {
        source,
        db,
        chronological,
    } = cmd
    {
        let mut records = match source {
            AppSource::System => {
                if db.is_some() {
                    warn!("--db is ignored without --source launch-services");
                }
                let inventory = SystemProfilerInventory::default();
                let lookup = MdlsLookup::default();
                UsageReporter::new(&inventory, &lookup).collect()?
            }
            AppSource::LaunchServices => {
                let db_path = match db {
                    Some(p) => expand_tilde(p),
                    None => cfg.launch_services_db_path(),
                };
                launch_services::load_applications(&db_path)
            }
        };

        let order = if *chronological {
            SortOrder::Chronological
        } else {
            SortOrder::Lexical
        };

        let table = build_table(&mut records, order);
        print!("{}", table.render(color));
    }
    Ok(())
}
