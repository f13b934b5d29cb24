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

use thiserror::Error;

use crate::regexp_cache::ErrorInvalidRegex;

/// The normalized, prefix-stripped string does not match the possible
/// number pattern of the territory it was parsed for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Number is not possible for territory {territory}")]
pub struct NotPossibleError {
    pub territory: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{0}")]
    NotPossible(#[from] NotPossibleError),
    #[error("Unknown territory `{0}`")]
    UnknownTerritory(String),
    /// No region is registered for any country code candidate
    /// at the start of an international string.
    #[error("Invalid country code")]
    UnknownCountryCode,
    #[error("Too short after idd")]
    TooShortAfterIdd,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read numbering plan data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse numbering plan data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidRegex(#[from] ErrorInvalidRegex),
    #[error("Region with country code {0} is defined twice")]
    DuplicateRegion(String),
    #[error("Territory {0} is defined twice")]
    DuplicateTerritory(String),
    #[error("Record {record} has an empty `{field}` field")]
    MissingField {
        record: String,
        field: &'static str,
    },
    #[error("Valid format `{label}` of territory {territory} is not a pattern string")]
    InvalidValidFormat { territory: String, label: String },
}
