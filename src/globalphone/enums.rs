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

use strum::{AsRefStr, EnumIter};

/// The presentation a format template is selected for.
///
/// For example, the Google Mountain View office number would be:
/// - **NATIONAL**: `(650) 253-0000`
/// - **INTERNATIONAL**: `+1 650-253-0000`
#[derive(Debug, EnumIter, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum FormatContext {
    /// **National format.**
    /// Used for dialing within the number's own country. The national
    /// prefix formatting rule is applied to the first group, so the
    /// domestic trunk prefix (like '0') is re-attached here.
    National,
    /// **International format.**
    /// Prefixed with `+` and the country code; never carries the
    /// national prefix.
    International,
}

/// Outcome of checking a national string against the valid number formats
/// of a territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidFormatsMatch {
    /// At least one valid format pattern matched.
    Matched,
    /// The territory lists valid formats, none of them matched.
    Unmatched,
    /// The territory has no valid format data, so the number can't be
    /// classified any further.
    Absent,
}
