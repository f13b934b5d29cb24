mod helper_constants;
pub(crate) mod helper_functions;
mod regexps_and_mappings;
pub mod database;
pub mod enums;
pub mod errors;
pub mod format;
pub mod number;
pub mod records;
pub mod region;
pub mod territory;
