mod globalphone;
mod regexp_cache;
pub(crate) mod string_util;

/// Small helpers for the `Cow` juggling done while stripping prefixes,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use globalphone::{
    database::Database,
    enums::{FormatContext, ValidFormatsMatch},
    errors::{LoadError, NotPossibleError, ParseError},
    format::Format,
    helper_functions::normalize,
    number::Number,
    records::{FormatRecord, RegionRecord, TerritoryRecord, ValidFormatGroup},
    region::Region,
    territory::{Territory, ValidNumberFormat},
};
pub use regexp_cache::{ErrorInvalidRegex, RegexCache};
