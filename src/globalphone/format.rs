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

use std::sync::Arc;

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::{
    enums::FormatContext,
    errors::LoadError,
    helper_constants::{MATCH_NATIONAL_TEMPLATE, NOT_APPLICABLE_TEMPLATE},
    helper_functions::{anchor_full, anchor_start, rewrite_backreferences},
    records::{FormatRecord, non_empty},
};

/// A single rule for rendering a national string: a pattern with numbered
/// groups and the templates that reassemble those groups.
#[derive(Debug, Clone)]
pub struct Format {
    pattern: Arc<Regex>,
    leading_digits: Option<Arc<Regex>>,
    national_template: Option<String>,
    international_template: Option<String>,
    national_prefix_formatting_rule: Option<String>,
}

impl Format {
    pub(super) fn from_record(record: FormatRecord, cache: &RegexCache) -> Result<Self, LoadError> {
        let pattern = non_empty(Some(record.pattern)).ok_or_else(|| LoadError::MissingField {
            record: "format".to_owned(),
            field: "pattern",
        })?;

        let national_template = record
            .national_format_rule
            .filter(|template| template != NOT_APPLICABLE_TEMPLATE)
            .map(|template| rewrite_backreferences(&template));

        let international_template = match record.intl_format.as_deref() {
            None | Some(MATCH_NATIONAL_TEMPLATE) => national_template.clone(),
            Some(NOT_APPLICABLE_TEMPLATE) => None,
            Some(template) => Some(rewrite_backreferences(template)),
        };

        Ok(Self {
            pattern: cache.get_regex(&anchor_full(&pattern))?,
            leading_digits: non_empty(record.leading_digits)
                .map(|leading_digits| cache.get_regex(&anchor_start(&leading_digits)))
                .transpose()?,
            national_template,
            international_template,
            national_prefix_formatting_rule: record.national_prefix_formatting_rule,
        })
    }

    /// Whether the format can render the given national string. With
    /// `match_leading_digits` the leading digits pattern, if any, has to
    /// match as well.
    pub fn matches(&self, national_string: &str, match_leading_digits: bool) -> bool {
        if match_leading_digits {
            if let Some(leading_digits) = &self.leading_digits {
                if !leading_digits.is_match(national_string) {
                    return false;
                }
            }
        }
        self.pattern.is_match(national_string)
    }

    pub fn template(&self, context: FormatContext) -> Option<&str> {
        match context {
            FormatContext::National => self.national_template.as_deref(),
            FormatContext::International => self.international_template.as_deref(),
        }
    }

    /// Substitutes the groups of `national_string` into the template for
    /// `context`. `None` when the format has no template for it.
    pub fn apply(&self, national_string: &str, context: FormatContext) -> Option<String> {
        let template = self.template(context)?;
        Some(
            self.pattern
                .replace(national_string, template)
                .into_owned(),
        )
    }

    /// The first capture group of the pattern, the area code for formats
    /// that single one out.
    pub fn first_in_pattern<'a>(&self, national_string: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(national_string)?
            .get(1)
            .map(|group| group.as_str())
            .filter(|group| !group.is_empty())
    }

    /// Overrides the territory's rule. `Some("")` is kept as is and means
    /// no prefix is put back for numbers in this format.
    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule.as_deref()
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn leading_digits(&self) -> Option<&Regex> {
        self.leading_digits.as_deref()
    }
}
