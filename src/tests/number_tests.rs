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

use crate::Database;

use super::get_database;

#[test]
fn us_number_in_international_form() {
    let database = get_database();
    let number = database.parse("+1 650-253-0000", "US").unwrap();

    assert_eq!(number.territory().name(), "US");
    assert_eq!(number.country_code(), "1");
    assert_eq!(number.national_string(), "6502530000");
    assert_eq!(number.national_format(), "650-253-0000");
    assert_eq!(number.international_format(), "+1 650-253-0000");
    assert_eq!(number.international_string(), "+16502530000");
    assert_eq!(number.area_code().as_deref(), Some("650"));
    assert_eq!(number.local_number(), "253-0000");
    assert_eq!(number.valid_format_label(), Some("fixedLineOrMobile"));
    assert!(number.is_valid());
    assert_eq!(number.to_string(), "+16502530000");
}

#[test]
fn us_short_number_has_no_international_template() {
    let database = get_database();
    let number = database.parse("253-0000", "US").unwrap();

    assert_eq!(number.national_string(), "2530000");
    assert_eq!(number.national_format(), "253-0000");
    // "NA" template, the bare national string is used
    assert_eq!(number.international_format(), "+1 2530000");
    // only an unlabeled format matches
    assert!(number.is_valid());
    assert_eq!(number.valid_format_label(), None);
}

#[test]
fn gb_fixed_line() {
    let database = get_database();
    let number = database.parse("020 8765 4321", "GB").unwrap();

    assert_eq!(number.national_string(), "2087654321");
    assert_eq!(number.national_format(), "020 8765 4321");
    assert_eq!(number.international_format(), "+44 20 8765 4321");
    assert_eq!(number.international_string(), "+442087654321");
    assert_eq!(number.area_code().as_deref(), Some("020"));
    assert_eq!(number.local_number(), "8765 4321");
    assert_eq!(number.valid_format_label(), Some("fixedLine"));
    assert!(number.is_valid());
}

#[test]
fn gb_mobile() {
    let database = get_database();
    let number = database.parse("07912 345678", "gb").unwrap();

    assert_eq!(number.national_string(), "7912345678");
    assert_eq!(number.national_format(), "07912 345678");
    assert_eq!(number.international_format(), "+44 7912 345678");
    assert_eq!(number.valid_format_label(), Some("mobile"));
    assert!(number.is_valid());
}

#[test]
fn format_level_prefix_rule_overrides_territory_rule() {
    let database = get_database();
    let number = database.parse("0800 123 4567", "GB").unwrap();

    assert_eq!(number.national_string(), "8001234567");
    assert_eq!(number.national_format(), "(0800) 123 4567");
    assert_eq!(number.international_format(), "+44 800 123 4567");
    assert_eq!(number.area_code().as_deref(), Some("0800"));
    assert_eq!(number.local_number(), "123 4567");
    assert_eq!(number.valid_format_label(), Some("tollFree"));
}

#[test]
fn number_outside_every_valid_format_is_invalid() {
    let database = get_database();
    let number = database.parse("050 1234 5678", "GB").unwrap();

    assert_eq!(number.national_string(), "5012345678");
    assert!(number.territory().is_national_number(number.national_string()));
    assert!(!number.is_valid());
    assert_eq!(number.valid_format_label(), None);
    // formatting does not depend on validity
    assert_eq!(number.national_format(), "050 1234 5678");
}

#[test]
fn ar_mobile_with_transform_rule() {
    let database = get_database();
    let number = database.parse("011 15 2345-6789", "AR").unwrap();

    assert_eq!(number.national_string(), "91123456789");
    assert_eq!(number.national_format(), "011 15-2345-6789");
    assert_eq!(number.international_format(), "+54 9 11 2345-6789");
    assert_eq!(number.international_string(), "+5491123456789");
    assert_eq!(number.area_code().as_deref(), Some("011"));
    assert_eq!(number.local_number(), "15-2345-6789");
    assert_eq!(number.valid_format_label(), Some("mobile"));
    assert!(number.is_valid());
}

#[test]
fn ar_fixed_line_uses_plain_prefix() {
    let database = get_database();
    let number = database.parse("011 2345-6789", "AR").unwrap();

    assert_eq!(number.national_string(), "1123456789");
    assert_eq!(number.national_format(), "011 2345-6789");
    assert_eq!(number.international_format(), "+54 11 2345-6789");
    assert!(number.is_valid());
    // matched by an unlabeled format only
    assert_eq!(number.valid_format_label(), None);
}

#[test]
fn ar_mobile_dialed_internationally() {
    let database = get_database();
    let number = database.parse("+54 9 11 2345 6789", "US").unwrap();

    assert_eq!(number.territory().name(), "AR");
    assert_eq!(number.national_string(), "91123456789");
    assert_eq!(number.national_format(), "011 15-2345-6789");
}

#[test]
fn territory_without_valid_formats_falls_back_to_national_pattern() {
    let database = get_database();
    let number = database.parse("09 123 4567", "NZ").unwrap();

    assert_eq!(number.national_string(), "91234567");
    assert_eq!(number.national_format(), "09 123 4567");
    assert_eq!(number.international_format(), "+64 9-123 4567");
    assert!(number.is_valid());
    assert_eq!(number.valid_format_label(), None);

    // the prefix stays, the result fails the national pattern
    let number = database.parse("0123 4567", "NZ").unwrap();
    assert_eq!(number.national_string(), "01234567");
    assert!(!number.is_valid());
}

#[test]
fn empty_valid_format_list_behaves_like_a_missing_one() {
    let database = get_database();
    let number = database.parse("+358 40 1234567", "US").unwrap();

    assert_eq!(number.territory().name(), "FI");
    assert_eq!(number.national_string(), "401234567");
    // region level prefix rule
    assert_eq!(number.national_format(), "040 1234567");
    assert_eq!(number.international_format(), "+358 40 1234567");
    assert!(number.is_valid());
}

#[test]
fn prefix_rule_with_decoration() {
    let database = get_database();
    let number = database.parse("+7 495 123-45-67", "US").unwrap();

    assert_eq!(number.territory().name(), "RU");
    assert_eq!(number.national_string(), "4951234567");
    assert_eq!(number.national_format(), "8 (495) 123-45-67");
    assert_eq!(number.international_format(), "+7 495 123-45-67");
    assert_eq!(number.area_code().as_deref(), Some("8495"));
    assert_eq!(number.local_number(), "123-45-67");
    assert!(number.is_valid());
}

#[test]
fn without_format_the_national_string_is_kept() {
    let database = get_database();
    let territory = database.territory("NZ").unwrap();
    // possible but too short for the single NZ format
    let number = territory.parse_national_string("2345678").unwrap();

    assert_eq!(number.national_format(), "2345678");
    assert_eq!(number.international_format(), "+64 2345678");
    assert_eq!(number.area_code(), None);
    assert_eq!(number.local_number(), "2345678");
    assert!(!number.is_valid());
}

#[test]
fn national_format_parses_back_to_the_same_number() {
    let database = get_database();
    for (raw, territory) in [
        ("020 8765 4321", "GB"),
        ("0800 123 4567", "GB"),
        ("011 15 2345-6789", "AR"),
        ("011 2345-6789", "AR"),
        ("09 123 4567", "NZ"),
        ("040 1234567", "FI"),
        ("8 495 123 45 67", "RU"),
        ("650 253 0000", "US"),
    ] {
        let number = database.parse(raw, territory).unwrap();
        let reparsed = database.parse(number.national_format(), territory).unwrap();
        assert_eq!(
            reparsed.national_string(),
            number.national_string(),
            "{raw} in {territory}"
        );

        let reparsed = database.parse(number.international_format(), territory).unwrap();
        assert_eq!(reparsed.territory(), number.territory());
        assert_eq!(reparsed.national_string(), number.national_string());
    }
}

#[test]
fn derived_values_are_stable() {
    let database = get_database();
    let number = database.parse("020 8765 4321", "GB").unwrap();

    let first = number.national_format().to_owned();
    assert_eq!(number.national_format(), first);
    let cloned = number.clone();
    assert_eq!(cloned.international_string(), number.international_string());
}

#[test]
fn numbers_are_shared_between_threads() {
    let database = get_database();
    let number = database.parse("+44 20 8765 4321", "US").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| number.national_format().to_owned()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "020 8765 4321");
        }
    });
}

#[test]
fn empty_prefix_rule_puts_no_prefix_back() {
    let database = Database::from_json_str(
        r#"[
            ["44",
             [["(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3", "2", ""],
              ["(\\d{4})(\\d{6})", "$1 $2", "7"]],
             [["GB", "\\d{7,10}", "[1-9]\\d{9}", "$NP$FG"]],
             "00", "0"],
            ["358",
             [["(\\d{2})(\\d{3,9})", "$1 $2"]],
             [["FI", "\\d{5,12}", "[1-9]\\d{4,11}", ""]],
             "00", "0", null, null, "$NP$FG"]
        ]"#,
    )
    .unwrap();

    // the format's empty rule wins over the territory's one
    let number = database.parse("020 8765 4321", "GB").unwrap();
    assert_eq!(number.national_string(), "2087654321");
    assert_eq!(number.national_format(), "20 8765 4321");
    assert_eq!(number.area_code().as_deref(), Some("20"));
    assert_eq!(number.local_number(), "8765 4321");
    assert_eq!(number.international_format(), "+44 20 8765 4321");

    // formats without an override still use the territory's rule
    let number = database.parse("07912 345678", "GB").unwrap();
    assert_eq!(number.national_format(), "07912 345678");

    // the territory's empty rule wins over the region's one
    let fi = database.territory("FI").unwrap();
    assert_eq!(fi.national_prefix_formatting_rule(), Some(""));
    let number = database.parse("040 1234567", "FI").unwrap();
    assert_eq!(number.national_format(), "40 1234567");
    assert_eq!(number.area_code().as_deref(), Some("40"));
}
