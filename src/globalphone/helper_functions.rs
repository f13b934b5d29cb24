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

use std::{borrow::Cow, collections::HashMap};

use log::trace;

use crate::{macros::owned_from_cow_or, string_util::strip_literal_prefix};

use super::{
    helper_constants::{FIRST_GROUP_PLACEHOLDER, NATIONAL_PREFIX_PLACEHOLDER, PLUS_SIGN},
    regexps_and_mappings::REG_EXPS,
    territory::Territory,
};

/// Normalizes a raw phone number string into its canonical dialable form.
///
/// Any unicode decimal digit is converted to its ASCII value, every
/// character outside of `0-9 + # * ,` is removed and a leading run of plus
/// signs collapses into a single `+`. Empty input gives an empty string.
///
/// The plus signs are collapsed after the noise is removed, so `"+ +1"`
/// gives `"+1"` and normalizing twice is the same as normalizing once.
pub fn normalize(raw: &str) -> String {
    let mut phone_number: String = dec_from_char::normalize_decimals(raw).into();
    normalize_helper(&REG_EXPS.diallable_char_mappings, &mut phone_number);

    owned_from_cow_or!(
        REG_EXPS
            .leading_plus_chars_pattern
            .replace(&phone_number, PLUS_SIGN),
        phone_number
    )
}

/// Normalizes a string of characters representing a phone number by replacing
/// all characters found in the accompanying map with the values therein and
/// stripping all other characters.
pub(super) fn normalize_helper(
    normalization_replacements: &HashMap<char, char>,
    phone_number: &mut String,
) {
    let mut normalized_number = String::with_capacity(phone_number.len());
    for phone_char in phone_number.chars() {
        if let Some(replacement) = normalization_replacements.get(&phone_char) {
            normalized_number.push(*replacement);
        }
    }

    *phone_number = normalized_number;
}

/// Removes the national prefix from an already normalized string.
///
/// A region with a national-prefix-for-parsing pattern applies its transform
/// rule once, or deletes the match when it has no rule. Only when the pattern
/// is missing or doesn't match is the literal national prefix cut off. The result is
/// kept only if it is a valid national number for the territory, else the
/// input comes back untouched.
pub(super) fn strip_national_prefix<'a>(territory: &Territory, number: &'a str) -> Cow<'a, str> {
    let region = territory.region();

    let without_prefix = match region.national_prefix_for_parsing() {
        Some(pattern) if pattern.is_match(number) => {
            let transform_rule = region.national_prefix_transform_rule().unwrap_or("");
            Some(pattern.replacen(number, 1, transform_rule))
        }
        _ => region
            .national_prefix()
            .and_then(|prefix| strip_literal_prefix(number, prefix))
            .map(Cow::Borrowed),
    };

    match without_prefix {
        Some(stripped) if territory.is_national_number(&stripped) => {
            trace!(
                "Stripped national prefix of '{number}' for {}: '{stripped}'",
                territory.name()
            );
            stripped
        }
        Some(stripped) => {
            trace!(
                "'{stripped}' is not a national number of {}, keeping '{number}'",
                territory.name()
            );
            Cow::Borrowed(number)
        }
        None => Cow::Borrowed(number),
    }
}

/// Splits a formatted number like `20 8765 4321` into `("20", "8765 4321")`.
pub(super) fn split_first_group(formatted: &str) -> Option<(&str, &str)> {
    let captures = REG_EXPS.split_first_group_pattern.captures(formatted)?;
    let first_group = captures.get(1)?.as_str();
    let rest = captures.get(2).map_or("", |rest| rest.as_str());
    Some((first_group, rest))
}

/// Fills `$NP` and `$FG` of a national prefix formatting rule.
pub(super) fn rewrite_national_prefix_rule(
    rule: &str,
    national_prefix: Option<&str>,
    first_group: &str,
) -> String {
    rule.replace(NATIONAL_PREFIX_PLACEHOLDER, national_prefix.unwrap_or(""))
        .replace(FIRST_GROUP_PLACEHOLDER, first_group)
}

pub(super) fn remove_non_diallable_chars(number: &str) -> String {
    REG_EXPS
        .non_diallable_chars_pattern
        .replace_all(number, "")
        .into_owned()
}

pub(super) fn strip_non_digits(number: &str) -> String {
    REG_EXPS.non_digits_pattern.replace_all(number, "").into_owned()
}

/// Rewrites `$1` style back-references as `${1}`.
pub(super) fn rewrite_backreferences(template: &str) -> String {
    REG_EXPS
        .template_backreference_pattern
        .replace_all(template, "$${${1}}")
        .into_owned()
}

/// Wraps a pattern so that it has to match the whole string.
pub(super) fn anchor_full(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

/// Wraps a pattern so that it has to match at the start of the string.
pub(super) fn anchor_start(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")")
}
