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

use log::trace;
use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::{
    errors::LoadError,
    format::Format,
    helper_functions::{anchor_start, rewrite_backreferences},
    records::{RegionRecord, non_empty},
};

/// Country level numbering plan: calling code, dialing prefixes and the
/// formats shared by every territory under this code.
#[derive(Debug)]
pub struct Region {
    country_code: String,
    international_prefix: Option<Arc<Regex>>,
    national_prefix: Option<String>,
    national_prefix_for_parsing: Option<Arc<Regex>>,
    national_prefix_transform_rule: Option<String>,
    national_prefix_formatting_rule: Option<String>,
    formats: Vec<Format>,
}

impl Region {
    /// Builds the region part of a record. Territories are built separately
    /// by the database, since each of them points back to this region.
    pub(super) fn from_record(record: &RegionRecord, cache: &RegexCache) -> Result<Self, LoadError> {
        if record.country_code.is_empty() {
            return Err(LoadError::MissingField {
                record: "region".to_owned(),
                field: "countryCode",
            });
        }
        let compile_start = |pattern: Option<String>| {
            non_empty(pattern)
                .map(|pattern| cache.get_regex(&anchor_start(&pattern)))
                .transpose()
        };

        Ok(Self {
            country_code: record.country_code.clone(),
            international_prefix: compile_start(record.international_prefix.clone())?,
            national_prefix: non_empty(record.national_prefix.clone()),
            national_prefix_for_parsing: compile_start(record.national_prefix_for_parsing.clone())?,
            national_prefix_transform_rule: non_empty(record.national_prefix_transform_rule.clone())
                .map(|rule| rewrite_backreferences(&rule)),
            national_prefix_formatting_rule: non_empty(
                record.national_prefix_formatting_rule.clone(),
            ),
            formats: record
                .formats
                .iter()
                .cloned()
                .map(|format| Format::from_record(format, cache))
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn international_prefix(&self) -> Option<&Regex> {
        self.international_prefix.as_deref()
    }

    pub fn national_prefix(&self) -> Option<&str> {
        self.national_prefix.as_deref()
    }

    pub fn national_prefix_for_parsing(&self) -> Option<&Regex> {
        self.national_prefix_for_parsing.as_deref()
    }

    pub fn national_prefix_transform_rule(&self) -> Option<&str> {
        self.national_prefix_transform_rule.as_deref()
    }

    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule.as_deref()
    }

    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    /// Picks the format for a national string. Formats are tried in
    /// declaration order, first with their leading digits, then by pattern
    /// alone; the first match wins.
    pub fn find_format(&self, national_string: &str) -> Option<&Format> {
        let found = self
            .formats
            .iter()
            .find(|format| format.matches(national_string, true))
            .or_else(|| {
                self.formats
                    .iter()
                    .find(|format| format.matches(national_string, false))
            });
        if found.is_none() {
            trace!(
                "No format of region +{} matches '{national_string}'",
                self.country_code
            );
        }
        found
    }

    pub fn starts_with_country_code(&self, number: &str) -> bool {
        number.starts_with(self.country_code.as_str())
    }

    /// Cuts the international prefix off a normalized number, if it starts
    /// with one.
    pub fn strip_international_prefix<'a>(&self, number: &'a str) -> Option<&'a str> {
        let found = self.international_prefix.as_ref()?.find(number)?;
        Some(&number[found.end()..])
    }
}
