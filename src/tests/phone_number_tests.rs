// Copyright (C) 2025 The Telint Authors
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

use serde_json::json;

use crate::{
    CallingCodeTable, CountryInfo, InvalidInputError, MetadataService, PhoneNumber, PhoneType,
    i18n::RegionCode,
};

use super::init_logger;

fn service() -> MetadataService {
    init_logger();
    let table: CallingCodeTable = [
        ("US", "United States", "+1"),
        ("FR", "France", "+33"),
        ("GB", "United Kingdom", "+44"),
        ("DZ", "Algeria", "+213"),
    ]
    .into_iter()
    .map(|(region, name, code)| (RegionCode::parse(region).unwrap(), CountryInfo::new(name, code)))
    .collect();
    MetadataService::from_table(table)
}

fn parse(service: &MetadataService, number: &str, region: Option<&str>) -> PhoneNumber {
    PhoneNumber::with_service(service, number, region).unwrap()
}

#[test]
fn region_is_inferred_from_calling_code() {
    let service = service();
    let number = parse(&service, "+1 650-555-1234", None);

    assert_eq!(number.number().as_str(), "+16505551234");
    assert_eq!(number.number().digit_count(), 11);
    assert!(number.is_valid());
    assert_eq!(number.region().map(RegionCode::as_str), Some("US"));
    assert_eq!(number.country_name(), Some("United States"));
    assert_eq!(number.calling_code(), Some("+1"));
}

#[test]
fn longer_calling_codes_resolve() {
    let service = service();
    let number = parse(&service, "+213 21 00 00 00", None);
    assert_eq!(number.region().map(RegionCode::as_str), Some("DZ"));
    assert_eq!(number.country_name(), Some("Algeria"));
}

#[test]
fn explicit_region_wins() {
    let service = service();
    let number = parse(&service, "+1 650 555 1234", Some("fr"));
    assert_eq!(number.region().map(RegionCode::as_str), Some("FR"));
    assert_eq!(number.calling_code(), Some("+33"));

    let number = parse(&service, "01 42 68 53 00", Some("FR"));
    assert_eq!(number.country_name(), Some("France"));
}

#[test]
fn blank_explicit_region_counts_as_none() {
    let service = service();
    let number = parse(&service, "+44 20 7946 0958", Some("  "));
    assert_eq!(number.region().map(RegionCode::as_str), Some("GB"));
}

#[test]
fn region_outside_the_table_has_no_country() {
    let service = service();
    let number = parse(&service, "0770 123 456", Some("zz"));
    assert_eq!(number.region().map(RegionCode::as_str), Some("ZZ"));
    assert_eq!(number.country_name(), None);
    assert_eq!(number.calling_code(), None);
}

#[test]
fn national_numbers_have_no_inferred_region() {
    let service = service();
    let number = parse(&service, "(650) 555-1234", None);
    assert_eq!(number.region(), None);
    assert_eq!(number.country_name(), None);
    assert!(number.is_valid());
    assert_eq!(number.number_type(), PhoneType::Unknown);
}

#[test]
fn validity_depends_only_on_digit_count() {
    let service = service();
    for length in 0..=20 {
        let raw = format!("+{}", "9".repeat(length));
        let number = parse(&service, &raw, None);
        assert_eq!(number.is_valid(), (7..=15).contains(&length), "{raw}");
    }
    // punctuation and the plus sign do not count
    assert!(!parse(&service, "+1 (23) 45-6", None).is_valid());
    assert!(parse(&service, "+1 (23) 45-67", None).is_valid());
}

#[test]
fn line_type_from_leading_digits() {
    let service = service();
    assert_eq!(parse(&service, "+213 771 234 5678", None).number_type(), PhoneType::Mobile);
    assert_eq!(parse(&service, "+44 20 7946 0958", None).number_type(), PhoneType::Landline);
    assert_eq!(parse(&service, "+1 650 555 1234", None).number_type(), PhoneType::Unknown);
    // no region, no guess
    assert_eq!(parse(&service, "+999 7712345678", None).number_type(), PhoneType::Unknown);
    // too short to be valid
    assert_eq!(parse(&service, "+213 77", None).number_type(), PhoneType::Unknown);
}

#[test]
fn extension_is_split_off() {
    let service = service();
    let number = parse(&service, "+1 650 555 1234 x 99", None);
    assert_eq!(number.number().as_str(), "+16505551234");
    assert_eq!(number.extension().as_str(), "99");
    assert!(number.is_valid());
}

#[test]
fn report_collects_everything() {
    let service = service();
    let report = parse(&service, "+33 1 42 68 53 00", None).get_report();

    assert_eq!(report.number, "+33142685300");
    assert_eq!(report.region.as_ref().map(RegionCode::as_str), Some("FR"));
    assert!(report.is_valid);
    assert_eq!(report.number_type, PhoneType::Unknown);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "number": "+33142685300",
            "region": "FR",
            "is_valid": true,
            "type": "unknown",
            "country_name": "France",
            "calling_code": "+33",
        })
    );
}

#[test]
fn report_without_metadata() {
    init_logger();
    let service = MetadataService::default();
    let report = parse(&service, "+16505551234", None).get_report();
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "number": "+16505551234",
            "region": null,
            "is_valid": true,
            "type": "unknown",
            "country_name": null,
            "calling_code": null,
        })
    );
}

#[test]
fn empty_input_is_rejected() {
    let service = service();
    assert_eq!(
        PhoneNumber::with_service(&service, "   ", None),
        Err(InvalidInputError::Empty)
    );
    // rejected before the shared metadata is touched
    assert_eq!(PhoneNumber::new("", Some("US")), Err(InvalidInputError::Empty));
}

#[test]
fn display_shows_region() {
    let service = service();
    assert_eq!(
        parse(&service, "+1 650 555 1234", None).to_string(),
        "PhoneNumber(+16505551234, US)"
    );
    assert_eq!(parse(&service, "555 1234", None).to_string(), "PhoneNumber(5551234, unknown)");
}

#[test]
fn numbers_can_be_shared_between_threads() {
    let service = service();
    let numbers: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["+1 650 555 1234", "+33 1 42 68 53 00", "+44 20 7946 0958"]
            .into_iter()
            .map(|raw| {
                let service = &service;
                scope.spawn(move || parse(service, raw, None))
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });
    let regions: Vec<_> = numbers
        .iter()
        .filter_map(|number| number.region().map(|region| region.as_str().to_owned()))
        .collect();
    assert_eq!(regions, ["US", "FR", "GB"]);
}
