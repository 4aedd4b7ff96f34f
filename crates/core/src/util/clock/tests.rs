// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn now_is_truncated_to_millis() {
    let now = UtcDateTimeMs::now();
    assert_eq!(0, now.to_timestamp().subsec_nanosecond() % 1_000_000);
}

#[test]
fn display_and_parse() {
    let dt = UtcDateTimeMs::from_unix_timestamp_millis(1_700_000_000_123);
    let formatted = dt.to_string();
    assert_eq!("2023-11-14T22:13:20.123Z", formatted);
    assert_eq!(dt, formatted.parse().unwrap());
}

#[test]
fn parse_truncates_sub_millis() {
    let parsed: UtcDateTimeMs = "2023-11-14T22:13:20.123456Z".parse().unwrap();
    assert_eq!(1_700_000_000_123, parsed.unix_timestamp_millis());
}

#[test]
fn checked_add_days() {
    let dt = UtcDateTimeMs::from_unix_timestamp_millis(0);
    let later = dt.checked_add(SignedDuration::from_hours(24)).unwrap();
    assert_eq!(86_400_000, later.unix_timestamp_millis());
    let earlier = dt.checked_add(SignedDuration::from_hours(-24)).unwrap();
    assert_eq!(-86_400_000, earlier.unix_timestamp_millis());
}

#[test]
fn ordering_is_chronological() {
    let earlier = UtcDateTimeMs::from_unix_timestamp_millis(1);
    let later = UtcDateTimeMs::from_unix_timestamp_millis(2);
    assert!(earlier < later);
}
