// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn trim_in_place_whitespace() {
    let mut s = " \n \t \r ".into();
    trim_in_place(&mut s);
    assert_eq!(String::new(), s);
}

#[test]
fn trim_in_place_start_end() {
    let mut s = " \n \tThe Hobbit\r ".into();
    trim_in_place(&mut s);
    assert_eq!("The Hobbit", s);
}

#[test]
fn trimmed_non_empty_discards_blank() {
    assert_eq!(None, trimmed_non_empty(String::new()));
    assert_eq!(None, trimmed_non_empty("  \t".to_owned()));
    assert_eq!(
        Some("Fantasy".to_owned()),
        trimmed_non_empty(" Fantasy ".to_owned())
    );
}

#[test]
fn contains_lowercase_ignores_case_of_haystack() {
    assert!(contains_lowercase("The Hobbit", "hob"));
    assert!(contains_lowercase("J.R.R. TOLKIEN", "tolkien"));
    assert!(!contains_lowercase("Dune", "hobbit"));
}

#[test]
fn capitalize_first_char() {
    assert_eq!("", capitalize_first(""));
    assert_eq!("Alice", capitalize_first("alice"));
    assert_eq!("Bob", capitalize_first("Bob"));
    assert_eq!("Émile", capitalize_first("émile"));
}
