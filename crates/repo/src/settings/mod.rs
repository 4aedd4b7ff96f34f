// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::settings::SystemSettings;

use crate::prelude::*;

pub trait Repo {
    fn load_system_settings(&self) -> RepoResult<SystemSettings>;

    fn store_system_settings(&mut self, settings: &SystemSettings) -> RepoResult<()>;
}
