// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn next_header_preserves_id_and_creation_time() {
    let created_at = UtcDateTimeMs::from_unix_timestamp_millis(1_000);
    let updated_at = UtcDateTimeMs::from_unix_timestamp_millis(2_000);
    let initial = EntityHeader::initial(7_u64, created_at);
    assert_eq!(initial.created_at, initial.updated_at);
    let next = initial.next(updated_at);
    assert_eq!(7, next.id);
    assert_eq!(created_at, next.created_at);
    assert_eq!(updated_at, next.updated_at);
}
