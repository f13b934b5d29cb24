// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use super::helper_constants::{DIALABLE_SYMBOLS, PLUS_CHARS, PLUS_SIGN};

pub(super) static REG_EXPS: LazyLock<GlobalPhoneRegExpsAndMappings> =
    LazyLock::new(GlobalPhoneRegExpsAndMappings::new);

pub(super) struct GlobalPhoneRegExpsAndMappings {
    /// A map that contains characters that are essential when dialling. That means
    /// any of the characters in this map must not be removed from a number when
    /// dialing, otherwise the call will not reach the intended destination.
    /// Full-width plus is folded into the ASCII one.
    pub diallable_char_mappings: HashMap<char, char>,

    /// A run of plus signs at the start of an already normalized number.
    pub leading_plus_chars_pattern: Regex,

    /// Everything outside the dialable set: ASCII digits, `+`, `#`, `*` and `,`.
    pub non_diallable_chars_pattern: Regex,

    pub non_digits_pattern: Regex,

    /// Splits a formatted national number into its leading digit group and
    /// whatever follows the separator after it.
    pub split_first_group_pattern: Regex,

    /// Numbered back-reference inside a template, like `$1`. Only a single
    /// digit is taken, `$10` is group 1 followed by a literal 0. These are
    /// rewritten to `${1}` at load time so the character right after the
    /// reference can't be swallowed into the group name.
    pub template_backreference_pattern: Regex,
}

impl GlobalPhoneRegExpsAndMappings {
    fn initialize_regexp_mappings(&mut self) {
        let mut diallable_char_map = HashMap::with_capacity(16);
        for d in '0'..='9' {
            diallable_char_map.insert(d, d);
        }
        for symbol in DIALABLE_SYMBOLS.chars() {
            diallable_char_map.insert(symbol, symbol);
        }
        for plus in PLUS_CHARS.chars() {
            diallable_char_map.insert(plus, '+');
        }
        self.diallable_char_mappings = diallable_char_map;
    }

    pub fn new() -> Self {
        let mut instance = Self {
            diallable_char_mappings: Default::default(),
            leading_plus_chars_pattern: Regex::new(&format!("^\\{}+", PLUS_SIGN)).unwrap(),
            non_diallable_chars_pattern: Regex::new(r"[^,#+*0-9]").unwrap(),
            non_digits_pattern: Regex::new(r"[^0-9]").unwrap(),
            split_first_group_pattern: Regex::new(r"^(\d+)\W*(.*)$").unwrap(),
            template_backreference_pattern: Regex::new(r"\$(\d)").unwrap(),
        };
        instance.initialize_regexp_mappings();
        instance
    }
}

#[cfg(test)]
mod tests {
    use super::REG_EXPS;

    #[test]
    fn check_regexps_are_compiling() {
        super::GlobalPhoneRegExpsAndMappings::new();
    }

    #[test]
    fn full_width_plus_is_diallable() {
        assert_eq!(REG_EXPS.diallable_char_mappings.get(&'\u{FF0B}'), Some(&'+'));
        assert_eq!(REG_EXPS.diallable_char_mappings.get(&','), Some(&','));
        assert_eq!(REG_EXPS.diallable_char_mappings.get(&'-'), None);
    }
}
