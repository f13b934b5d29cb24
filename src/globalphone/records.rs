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

//! Plain records of the numbering plan database, as they are stored in json.
//!
//! Every record deserializes from either shape the data has been published
//! in: a positional array, where trailing optional fields may be left out,
//! or an object keyed by the camelCase field names. Nothing here is
//! validated yet; `Database::from_records` compiles the patterns and fails
//! on the first bad one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::helper_constants::UNLABELED_FORMAT;

/// Country level numbering plan, shared by all of its territories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    pub country_code: String,
    #[serde(default)]
    pub formats: Vec<FormatRecord>,
    #[serde(default)]
    pub territories: Vec<TerritoryRecord>,
    #[serde(default)]
    pub international_prefix: Option<String>,
    #[serde(default)]
    pub national_prefix: Option<String>,
    #[serde(default)]
    pub national_prefix_for_parsing: Option<String>,
    #[serde(default)]
    pub national_prefix_transform_rule: Option<String>,
    #[serde(default)]
    pub national_prefix_formatting_rule: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritoryRecord {
    pub name: String,
    #[serde(rename = "possibleNumber")]
    pub possible_number: String,
    #[serde(rename = "nationalNumber")]
    pub national_number: String,
    #[serde(rename = "formattingRule", default)]
    pub formatting_rule: Option<String>,
    /// `None` when the territory carries no valid number formats at all.
    #[serde(rename = "possibleFormats", default)]
    pub possible_formats: Option<Vec<ValidFormatGroup>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRecord {
    pub pattern: String,
    #[serde(default)]
    pub national_format_rule: Option<String>,
    #[serde(default)]
    pub leading_digits: Option<String>,
    #[serde(default)]
    pub national_prefix_formatting_rule: Option<String>,
    /// `"match"` (or nothing) reuses the national template, `"NA"` means
    /// the format is never used for international display.
    #[serde(default)]
    pub intl_format: Option<String>,
}

/// One entry of a territory's valid number formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidFormatGroup {
    /// Bare patterns, labeled `"__"`.
    Unlabeled(Vec<String>),
    /// Patterns keyed by the class of number they certify, like `"mobile"`.
    Labeled(Map<String, Value>),
}

impl ValidFormatGroup {
    /// Flattens the group into `(label, pattern)` pairs, keeping the order
    /// of the source. A labeled value that isn't a string comes back as
    /// `Err(label)`.
    pub fn entries(&self) -> Vec<Result<(&str, &str), &str>> {
        match self {
            ValidFormatGroup::Unlabeled(patterns) => patterns
                .iter()
                .map(|pattern| Ok((UNLABELED_FORMAT, pattern.as_str())))
                .collect(),
            ValidFormatGroup::Labeled(patterns) => patterns
                .iter()
                .map(|(label, pattern)| {
                    pattern
                        .as_str()
                        .map(|pattern| (label.as_str(), pattern))
                        .ok_or(label.as_str())
                })
                .collect(),
        }
    }
}

/// Empty optional strings in the data mean the same as a missing value.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
