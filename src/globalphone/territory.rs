// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use log::trace;
use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::{
    enums::ValidFormatsMatch,
    errors::{LoadError, NotPossibleError},
    format::Format,
    helper_constants::UNLABELED_FORMAT,
    helper_functions::{anchor_full, normalize, strip_national_prefix},
    number::Number,
    records::{TerritoryRecord, non_empty},
    region::Region,
};

/// A `(label, pattern)` entry certifying that a number belongs to some
/// dialing class, mobile or fixed line for example.
#[derive(Debug, Clone)]
pub struct ValidNumberFormat {
    label: String,
    pattern: Arc<Regex>,
}

impl ValidNumberFormat {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn is_labeled(&self) -> bool {
        self.label != UNLABELED_FORMAT
    }
}

/// Numbering plan of a country or one of its subdivisions.
///
/// Territories are identified by name: two territories with the same name
/// are equal no matter what patterns they carry.
#[derive(Debug)]
pub struct Territory {
    name: String,
    region: Arc<Region>,
    possible_pattern: Arc<Regex>,
    national_pattern: Arc<Regex>,
    national_prefix_formatting_rule: Option<String>,
    valid_number_formats: Option<Vec<ValidNumberFormat>>,
}

impl Territory {
    pub(super) fn from_record(
        record: TerritoryRecord,
        region: Arc<Region>,
        cache: &RegexCache,
    ) -> Result<Self, LoadError> {
        let name = record.name.to_uppercase();
        if name.is_empty() {
            return Err(LoadError::MissingField {
                record: "territory".to_owned(),
                field: "name",
            });
        }
        let required = |pattern: String, field: &'static str| -> Result<Arc<Regex>, LoadError> {
            match non_empty(Some(pattern)) {
                Some(pattern) => Ok(cache.get_regex(&anchor_full(&pattern))?),
                None => Err(LoadError::MissingField {
                    record: name.clone(),
                    field,
                }),
            }
        };

        let possible_pattern = required(record.possible_number, "possibleNumber")?;
        let national_pattern = required(record.national_number, "nationalNumber")?;

        let valid_number_formats = match record.possible_formats {
            None => None,
            Some(groups) => {
                let mut formats = Vec::new();
                for group in &groups {
                    for entry in group.entries() {
                        let (label, pattern) =
                            entry.map_err(|label| LoadError::InvalidValidFormat {
                                territory: name.clone(),
                                label: label.to_owned(),
                            })?;
                        formats.push(ValidNumberFormat {
                            label: label.to_owned(),
                            pattern: cache.get_regex(&anchor_full(pattern))?,
                        });
                    }
                }
                Some(formats)
            }
        };

        Ok(Self {
            name,
            region,
            possible_pattern,
            national_pattern,
            national_prefix_formatting_rule: record.formatting_rule,
            valid_number_formats,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn country_code(&self) -> &str {
        self.region.country_code()
    }

    pub fn national_prefix(&self) -> Option<&str> {
        self.region.national_prefix()
    }

    pub fn possible_pattern(&self) -> &Regex {
        &self.possible_pattern
    }

    pub fn national_pattern(&self) -> &Regex {
        &self.national_pattern
    }

    /// The territory's own rule, or the region's one when it has none. An
    /// empty rule of the territory still counts as its own.
    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule
            .as_deref()
            .or_else(|| self.region.national_prefix_formatting_rule())
    }

    /// `None` means the data has no valid number formats for this territory,
    /// which is not the same as a list that matches nothing.
    pub fn valid_number_formats(&self) -> Option<&[ValidNumberFormat]> {
        self.valid_number_formats.as_deref()
    }

    pub fn is_possible(&self, number: &str) -> bool {
        self.possible_pattern.is_match(number)
    }

    pub fn is_national_number(&self, number: &str) -> bool {
        self.national_pattern.is_match(number)
    }

    /// Checks a national string against the valid number formats. An empty
    /// list gives no more information than a missing one, so both are
    /// reported as [`ValidFormatsMatch::Absent`].
    pub fn match_valid_formats(&self, national_string: &str) -> ValidFormatsMatch {
        match self.valid_number_formats.as_deref() {
            None | Some([]) => ValidFormatsMatch::Absent,
            Some(formats) => {
                if formats
                    .iter()
                    .any(|format| format.pattern.is_match(national_string))
                {
                    ValidFormatsMatch::Matched
                } else {
                    ValidFormatsMatch::Unmatched
                }
            }
        }
    }

    pub fn find_format(&self, national_string: &str) -> Option<&Format> {
        self.region.find_format(national_string)
    }

    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }

    /// Normalizes the raw string and removes the national prefix from it.
    /// The prefix stays when the string without it would not be a valid
    /// national number.
    pub fn strip_national_prefix(&self, raw: &str) -> String {
        let normalized = normalize(raw);
        strip_national_prefix(self, &normalized).into_owned()
    }

    /// Turns a raw string dialed inside this territory into a [`Number`].
    ///
    /// Fails when the string, once normalized and stripped of its national
    /// prefix, doesn't have a possible shape for the territory.
    pub fn parse_national_string(&self, raw: &str) -> Result<Number<'_>, NotPossibleError> {
        let national_string = self.strip_national_prefix(raw);
        if !self.is_possible(&national_string) {
            trace!("'{national_string}' is not possible for {}", self.name);
            return Err(NotPossibleError {
                territory: self.name.clone(),
            });
        }
        Ok(Number::new(self, national_string))
    }
}

impl PartialEq for Territory {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Territory {}

impl Hash for Territory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
