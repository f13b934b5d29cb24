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

use std::{fmt, sync::OnceLock};

use log::trace;

use super::{
    enums::{FormatContext, ValidFormatsMatch},
    format::Format,
    helper_constants::PLUS_SIGN,
    helper_functions::{
        remove_non_diallable_chars, rewrite_national_prefix_rule, split_first_group,
        strip_non_digits,
    },
    region::Region,
    territory::Territory,
};

/// A phone number bound to the territory it was parsed for.
///
/// The national string never carries the national prefix; it is put back
/// only in the national format. Derived values are computed on first use and
/// cached; concurrent first calls may both compute, one result is kept.
#[derive(Debug, Clone)]
pub struct Number<'a> {
    territory: &'a Territory,
    national_string: String,
    format: OnceLock<Option<&'a Format>>,
    national_format: OnceLock<String>,
    international_format: OnceLock<String>,
    international_string: OnceLock<String>,
}

impl<'a> Number<'a> {
    pub(super) fn new(territory: &'a Territory, national_string: String) -> Self {
        Self {
            territory,
            national_string,
            format: OnceLock::new(),
            national_format: OnceLock::new(),
            international_format: OnceLock::new(),
            international_string: OnceLock::new(),
        }
    }

    pub fn territory(&self) -> &'a Territory {
        self.territory
    }

    pub fn region(&self) -> &'a Region {
        self.territory.region()
    }

    pub fn national_string(&self) -> &str {
        &self.national_string
    }

    pub fn country_code(&self) -> &'a str {
        self.territory.country_code()
    }

    pub fn national_prefix(&self) -> Option<&'a str> {
        self.territory.national_prefix()
    }

    fn format(&self) -> Option<&'a Format> {
        *self.format.get_or_init(|| {
            let territory: &'a Territory = self.territory;
            territory.find_format(&self.national_string)
        })
    }

    /// Format rule override of the matched format, else the territory's.
    fn national_prefix_formatting_rule(&self) -> Option<&'a str> {
        self.format()
            .and_then(|format| format.national_prefix_formatting_rule())
            .or_else(|| self.territory.national_prefix_formatting_rule())
    }

    /// The national template applied without re-attaching the prefix.
    fn formatted_national_string(&self) -> String {
        self.format()
            .and_then(|format| format.apply(&self.national_string, FormatContext::National))
            .unwrap_or_else(|| self.national_string.clone())
    }

    fn apply_national_prefix_format(&self, formatted: String) -> String {
        let Some(rule) = self
            .national_prefix_formatting_rule()
            .filter(|rule| !rule.is_empty())
        else {
            return formatted;
        };
        let Some((first_group, rest)) = split_first_group(&formatted) else {
            return formatted;
        };
        let prefix = rewrite_national_prefix_rule(rule, self.national_prefix(), first_group);
        fast_cat::concat_str!(&prefix, " ", rest)
    }

    /// The number as dialed within its own country, national prefix
    /// included. Falls back to the bare national string when no format
    /// applies.
    pub fn national_format(&self) -> &str {
        self.national_format.get_or_init(|| {
            match self
                .format()
                .and_then(|format| format.apply(&self.national_string, FormatContext::National))
            {
                Some(formatted) => self.apply_national_prefix_format(formatted),
                None => self.national_string.clone(),
            }
        })
    }

    /// `+`, the country code, a space and the internationally formatted
    /// national string.
    pub fn international_format(&self) -> &str {
        self.international_format.get_or_init(|| {
            let formatted = self.format().and_then(|format| {
                format.apply(&self.national_string, FormatContext::International)
            });
            let national = formatted.as_deref().unwrap_or(&self.national_string);
            fast_cat::concat_str!(PLUS_SIGN, self.country_code(), " ", national)
        })
    }

    /// The international format with everything but `0-9 + # * ,` removed.
    pub fn international_string(&self) -> &str {
        self.international_string
            .get_or_init(|| remove_non_diallable_chars(self.international_format()))
    }

    pub fn is_valid(&self) -> bool {
        let territory = self.territory;
        let national_string = self.national_string.as_str();
        let structurally_ok =
            territory.is_national_number(national_string) || territory.is_possible(national_string);

        match territory.match_valid_formats(national_string) {
            ValidFormatsMatch::Matched => structurally_ok,
            ValidFormatsMatch::Unmatched => {
                trace!(
                    "'{national_string}' matches no valid format of {}",
                    territory.name()
                );
                false
            }
            ValidFormatsMatch::Absent => {
                trace!(
                    "{} has no valid formats, checking '{national_string}' by format and national pattern",
                    territory.name()
                );
                structurally_ok
                    && self.format().is_some()
                    && territory.is_national_number(national_string)
            }
        }
    }

    /// Label of the first labeled valid format matching this number, such
    /// as `"mobile"`.
    pub fn valid_format_label(&self) -> Option<&'a str> {
        self.territory
            .valid_number_formats()?
            .iter()
            .filter(|format| format.is_labeled())
            .find(|format| format.pattern().is_match(&self.national_string))
            .map(|format| format.label())
    }

    /// Area code as digits. With a national prefix formatting rule in effect
    /// this is the first group with the prefix re-attached (`"020"` for a
    /// `$NP$FG` rule, just `"20"` for an empty one), otherwise the first group
    /// of the format's pattern. Numbers without a format have no area code.
    pub fn area_code(&self) -> Option<String> {
        let format = self.format()?;
        if let Some(rule) = self.national_prefix_formatting_rule() {
            let formatted = self.formatted_national_string();
            let (first_group, _) = split_first_group(&formatted)?;
            // an empty rule puts no prefix back, the first group stands alone
            let area_code = if rule.is_empty() {
                first_group.to_owned()
            } else {
                strip_non_digits(&rewrite_national_prefix_rule(
                    rule,
                    self.national_prefix(),
                    first_group,
                ))
            };
            return (!area_code.is_empty()).then_some(area_code);
        }
        format
            .first_in_pattern(&self.national_string)
            .map(str::to_owned)
    }

    /// What follows the area code in the national format, or the whole
    /// national format when there is no area code.
    pub fn local_number(&self) -> String {
        if self.area_code().is_some() {
            let formatted = self.formatted_national_string();
            if let Some((_, rest)) = split_first_group(&formatted) {
                return rest.to_owned();
            }
        }
        self.national_format().to_owned()
    }
}

impl fmt::Display for Number<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.international_string())
    }
}
