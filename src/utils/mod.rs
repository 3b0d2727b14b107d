pub mod colors;
pub mod date;
pub mod logging;
pub mod path;
pub mod table;

pub use path::expand_tilde;
