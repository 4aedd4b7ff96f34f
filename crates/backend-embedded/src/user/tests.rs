// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::user::Role;

use super::*;
use crate::storage::{StorageConfig, commission_storage};

#[tokio::test]
async fn manage_users() {
    let db_gatekeeper = commission_storage(&StorageConfig::default());
    let actor = Some(UserId::new(1));
    let created = create(
        &db_gatekeeper,
        actor,
        User {
            email: "bob@example.com".into(),
            name: "Bob".into(),
            role: Role::User,
        },
    )
    .await
    .unwrap();
    let updated = update(
        &db_gatekeeper,
        actor,
        created.hdr.id,
        Changes {
            name: Some("Robert".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!("Robert", updated.body.name);
    assert_eq!(vec![updated], load_all(&db_gatekeeper).await.unwrap());
    purge(&db_gatekeeper, actor, created.hdr.id).await.unwrap();
    assert!(load_one(&db_gatekeeper, created.hdr.id).await.unwrap().is_none());
}
