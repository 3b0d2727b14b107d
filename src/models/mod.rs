pub mod application;
pub mod project;

pub use application::{ApplicationDescriptor, ApplicationRecord, LastUsed, SortOrder};
pub use project::{AuditSummary, ProjectFolder, ProjectStatus};
