pub const PLUS_SIGN: &'static str = "+";
/// Characters that are read as a leading plus sign. Full-width variant
/// is also present.
pub const PLUS_CHARS: &'static str = "+\u{FF0B}";
/// Characters besides digits that must survive normalization, because
/// they are essential when dialling.
pub const DIALABLE_SYMBOLS: &'static str = "+*#,";

/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

/// Label given to valid number formats listed without a name.
pub const UNLABELED_FORMAT: &'static str = "__";
/// Template value meaning "this format has no template for the context".
pub const NOT_APPLICABLE_TEMPLATE: &'static str = "NA";
/// International template value meaning "same as the national template".
pub const MATCH_NATIONAL_TEMPLATE: &'static str = "match";

/// Placeholders of a national prefix formatting rule.
pub const NATIONAL_PREFIX_PLACEHOLDER: &'static str = "$NP";
pub const FIRST_GROUP_PLACEHOLDER: &'static str = "$FG";

pub const DEFAULT_TERRITORY: &'static str = "US";
