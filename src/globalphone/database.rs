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

use std::{collections::HashMap, fs::File, io::{BufReader, Read}, path::Path, sync::Arc};

use log::{debug, trace, warn};

use crate::regexp_cache::RegexCache;

use super::{
    errors::{LoadError, ParseError},
    helper_constants::{DEFAULT_TERRITORY, MAX_LENGTH_COUNTRY_CODE, PLUS_SIGN},
    helper_functions::normalize,
    number::Number,
    records::RegionRecord,
    region::Region,
    territory::Territory,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

/// The loaded numbering plan: every region with its territories.
///
/// Built once from records and never changed afterwards, so it can be
/// shared between threads freely.
pub struct Database {
    regions: Vec<Arc<Region>>,

    /// Territories in the order they were declared, region by region.
    territories: Vec<Territory>,

    /// Upper-cased territory name to its index in `territories`.
    territory_by_name: HashMap<String, usize>,

    /// Country calling code to the region index and the indexes of the
    /// region's territories, in declaration order.
    country_code_to_region_map: HashMap<String, (usize, Vec<usize>)>,

    default_territory: String,
}

impl Database {
    pub fn from_records(records: Vec<RegionRecord>) -> std::result::Result<Self, LoadError> {
        let cache = RegexCache::with_capacity(512);
        let mut instance = Self {
            regions: Vec::with_capacity(records.len()),
            territories: Vec::new(),
            territory_by_name: HashMap::new(),
            country_code_to_region_map: HashMap::with_capacity(records.len()),
            default_territory: DEFAULT_TERRITORY.to_owned(),
        };

        for mut record in records {
            let region = Arc::new(Region::from_record(&record, &cache)?);
            let country_code = region.country_code().to_owned();
            if instance.country_code_to_region_map.contains_key(&country_code) {
                return Err(LoadError::DuplicateRegion(country_code));
            }

            let mut territory_indexes = Vec::with_capacity(record.territories.len());
            for territory_record in std::mem::take(&mut record.territories) {
                let territory = Territory::from_record(territory_record, region.clone(), &cache)?;
                let name = territory.name().to_owned();
                if instance.territory_by_name.contains_key(&name) {
                    return Err(LoadError::DuplicateTerritory(name));
                }
                let index = instance.territories.len();
                instance.territories.push(territory);
                instance.territory_by_name.insert(name, index);
                territory_indexes.push(index);
            }

            let region_index = instance.regions.len();
            instance.regions.push(region);
            instance
                .country_code_to_region_map
                .insert(country_code, (region_index, territory_indexes));
        }

        debug!(
            "Loaded {} regions with {} territories, {} distinct patterns",
            instance.regions.len(),
            instance.territories.len(),
            cache.len()
        );
        Ok(instance)
    }

    pub fn from_json_str(json: &str) -> std::result::Result<Self, LoadError> {
        let records: Vec<RegionRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> std::result::Result<Self, LoadError> {
        let records: Vec<RegionRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Territory used by [`Database::parse_default`]. `"US"` unless changed.
    pub fn with_default_territory(mut self, name: &str) -> Self {
        self.default_territory = name.to_uppercase();
        self
    }

    pub fn default_territory(&self) -> &str {
        &self.default_territory
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().map(|region| region.as_ref())
    }

    pub fn territories(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Looks a territory up by name, ignoring case.
    pub fn territory(&self, name: &str) -> Option<&Territory> {
        self.territory_by_name
            .get(&name.to_uppercase())
            .map(|index| &self.territories[*index])
            .or_else(|| {
                warn!("Invalid or unknown territory provided: {}", name);
                None
            })
    }

    pub fn region(&self, country_code: &str) -> Option<&Region> {
        self.country_code_to_region_map
            .get(country_code)
            .map(|(index, _)| self.regions[*index].as_ref())
    }

    /// Territories sharing the given country code, in declaration order.
    pub fn territories_for_country_code(
        &self,
        country_code: &str,
    ) -> impl Iterator<Item = &Territory> {
        self.country_code_to_region_map
            .get(country_code)
            .into_iter()
            .flat_map(|(_, indexes)| indexes.iter().map(|index| &self.territories[*index]))
    }

    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }

    /// Parses a number dialed from within the named territory.
    ///
    /// A number starting with `+`, or with the territory's international
    /// prefix, is read as international and may belong to another
    /// territory. Anything else is parsed as a national string of the
    /// named territory.
    pub fn parse(&self, raw: &str, territory_name: &str) -> Result<Number<'_>> {
        let territory = self
            .territory(territory_name)
            .ok_or_else(|| ParseError::UnknownTerritory(territory_name.to_owned()))?;
        let number = normalize(raw);

        if let Some(international) = number.strip_prefix(PLUS_SIGN) {
            return self.parse_international_string(international);
        }
        if let Some(international) = territory.region().strip_international_prefix(&number) {
            trace!(
                "Stripped international prefix of {} from '{number}'",
                territory.name()
            );
            return self.parse_international_string(international);
        }
        Ok(territory.parse_national_string(&number)?)
    }

    pub fn parse_default(&self, raw: &str) -> Result<Number<'_>> {
        self.parse(raw, &self.default_territory)
    }

    /// Parses a number starting with its country code, `+` already removed.
    fn parse_international_string(&self, number: &str) -> Result<Number<'_>> {
        let number = number.trim_start_matches(PLUS_SIGN);
        if number.is_empty() {
            return Err(ParseError::TooShortAfterIdd);
        }

        let (country_code, (_, territory_indexes)) = (1..=MAX_LENGTH_COUNTRY_CODE)
            .filter_map(|length| number.get(..length))
            .find_map(|candidate| {
                self.country_code_to_region_map
                    .get_key_value(candidate)
            })
            .ok_or(ParseError::UnknownCountryCode)?;

        let national = &number[country_code.len()..];
        let mut last_error = None;
        for index in territory_indexes {
            match self.territories[*index].parse_national_string(national) {
                Ok(number) => return Ok(number),
                Err(err) => last_error = Some(err),
            }
        }
        Err(last_error
            .map(ParseError::from)
            .unwrap_or(ParseError::UnknownCountryCode))
    }

    /// Whether the raw string parses for the territory into a valid number.
    pub fn validate(&self, raw: &str, territory_name: &str) -> bool {
        self.parse(raw, territory_name)
            .map(|number| number.is_valid())
            .unwrap_or(false)
    }
}
