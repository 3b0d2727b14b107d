use crate::core::inventory::InventorySource;
use crate::core::metadata::{LastUsedLookup, resolve_last_used};
use crate::errors::AppResult;
use crate::models::application::{SortOrder, sort_records};
use crate::models::{ApplicationDescriptor, ApplicationRecord, LastUsed};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use tracing::{debug, info};

pub const REPORT_TITLE: &str = "Installed Applications and Last Used Dates";
pub const NAME_HEADER: &str = "Application Name";
pub const LAST_USED_HEADER: &str = "Last Used Date";

pub struct UsageReporter<'a> {
    inventory: &'a dyn InventorySource,
    lookup: &'a dyn LastUsedLookup,
}

impl<'a> UsageReporter<'a> {
    pub fn new(inventory: &'a dyn InventorySource, lookup: &'a dyn LastUsedLookup) -> Self {
        Self { inventory, lookup }
    }

    /// One record per inventory entry. Per-application failures end up in the
    /// record itself; only a failing inventory query is an error.
    pub fn collect(&self) -> AppResult<Vec<ApplicationRecord>> {
        let descriptors = self.inventory.applications()?;
        info!("Resolving last-used dates for {} applications", descriptors.len());

        Ok(descriptors
            .into_iter()
            .map(|d| self.resolve(d))
            .collect())
    }

    fn resolve(&self, descriptor: ApplicationDescriptor) -> ApplicationRecord {
        let last_used = match &descriptor.path {
            Some(path) => resolve_last_used(self.lookup, path),
            None => LastUsed::PathNotAvailable,
        };
        debug!(app = %descriptor.name, last_used = %last_used, "resolved");

        ApplicationRecord {
            name: descriptor.name,
            last_used,
        }
    }
}

/// Sort `records` and lay them out as the two-column report table.
pub fn build_table(records: &mut [ApplicationRecord], order: SortOrder) -> Table {
    sort_records(records, order);

    let mut table = Table::new(vec![
        Column::new(NAME_HEADER, Some(Colour::Cyan)),
        Column::new(LAST_USED_HEADER, Some(Colour::Purple)),
    ])
    .with_title(REPORT_TITLE);

    for r in records.iter() {
        table.add_row(vec![r.name.clone(), r.display_last_used()]);
    }
    table
}
