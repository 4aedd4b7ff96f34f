// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub fn trim_in_place(s: &mut String) {
    s.truncate(s.trim_end().len());
    let drain_start_len = s.len() - s.trim_start().len();
    drop(s.drain(0..drain_start_len));
}

#[must_use]
pub fn non_empty_from(s: impl AsRef<str> + Into<String>) -> Option<String> {
    if s.as_ref().is_empty() {
        None
    } else {
        Some(s.into())
    }
}

/// Trim an optional text and discard it if nothing remains.
#[must_use]
pub fn trimmed_non_empty(mut s: String) -> Option<String> {
    trim_in_place(&mut s);
    non_empty_from(s)
}

#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Case-insensitive substring matching.
///
/// The `lowercase_needle` is expected to be lowercased by the caller
/// to avoid repeating the conversion for every haystack.
#[must_use]
pub fn contains_lowercase(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Upper-case the first character and keep the rest as is.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    first.to_uppercase().chain(chars).collect()
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
