pub mod audit;
pub mod command;
pub mod git;
pub mod inventory;
pub mod metadata;
pub mod usage;
