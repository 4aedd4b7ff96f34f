// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::{settings::SystemSettings, user::UserId};

use crate::{prelude::*, read_task, write_task};

pub async fn load(db_gatekeeper: &Gatekeeper) -> Result<SystemSettings> {
    read_task(db_gatekeeper, |db| bookshelf_usecases::settings::load(db)).await
}

pub async fn update(
    db_gatekeeper: &Gatekeeper,
    actor: Option<UserId>,
    new_settings: SystemSettings,
) -> Result<SystemSettings> {
    write_task(db_gatekeeper, move |db| {
        bookshelf_usecases::settings::update(db, actor, new_settings, UtcDateTimeMs::now())
    })
    .await
}
