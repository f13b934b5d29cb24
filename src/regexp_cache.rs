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

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex {pattern:?}: {source}")]
pub struct ErrorInvalidRegex {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Compiled patterns keyed by their (already anchored) source text.
///
/// Numbering plan data repeats the same patterns across many territories,
/// so the loader compiles through this cache and every record ends up
/// holding a shared `Arc<Regex>`.
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, ErrorInvalidRegex> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_string())
            .or_try_insert_with(|| {
                Regex::new(pattern).map(Arc::new).map_err(|source| ErrorInvalidRegex {
                    pattern: pattern.to_string(),
                    source,
                })
            })?;
        Ok(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}
