//! Installed-application inventory.

use crate::core::command::run_capture;
use crate::errors::AppResult;
use crate::models::ApplicationDescriptor;
use serde::Deserialize;
use tracing::debug;

/// Data type queried from `system_profiler`.
pub const APPLICATIONS_DATA_TYPE: &str = "SPApplicationsDataType";

/// Capability to enumerate installed applications.
pub trait InventorySource {
    fn applications(&self) -> AppResult<Vec<ApplicationDescriptor>>;
}

#[derive(Deserialize)]
struct ProfilerReport {
    #[serde(rename = "SPApplicationsDataType", default)]
    items: Vec<ApplicationDescriptor>,
}

/// Parse the JSON emitted by `system_profiler SPApplicationsDataType -json`.
pub fn parse_profiler_json(json: &str) -> AppResult<Vec<ApplicationDescriptor>> {
    let report: ProfilerReport = serde_json::from_str(json)?;
    Ok(report.items)
}

/// [`InventorySource`] backed by macOS `system_profiler`.
pub struct SystemProfilerInventory {
    program: String,
}

impl SystemProfilerInventory {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Default for SystemProfilerInventory {
    fn default() -> Self {
        Self::new("system_profiler")
    }
}

impl InventorySource for SystemProfilerInventory {
    fn applications(&self) -> AppResult<Vec<ApplicationDescriptor>> {
        let json = run_capture(&self.program, &[APPLICATIONS_DATA_TYPE, "-json"], None)?;
        let apps = parse_profiler_json(&json)?;
        debug!("Inventory returned {} applications", apps.len());
        Ok(apps)
    }
}
