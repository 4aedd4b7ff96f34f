// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::{
    audit::{Action, AuditEvent},
    settings::SystemSettings,
    user::UserId,
};
use bookshelf_repo::settings::Repo as SettingsRepo;

use crate::prelude::*;

pub fn load<Repo>(repo: &Repo) -> Result<SystemSettings>
where
    Repo: SettingsRepo + ?Sized,
{
    repo.load_system_settings().map_err(Into::into)
}

/// Replace the system settings.
///
/// Returns the stored settings. Nothing is stored or audited if
/// the new settings are invalid.
pub fn update<Repo>(
    repo: &mut Repo,
    actor: Option<UserId>,
    mut new_settings: SystemSettings,
    now: UtcDateTimeMs,
) -> Result<SystemSettings>
where
    Repo: SettingsRepo + AuditSink + ?Sized,
{
    new_settings.app_name = new_settings.app_name.trim().to_owned();
    if let Err(err) = new_settings.validate() {
        return Err(InputError(anyhow::anyhow!("Invalid system settings: {err:?}")).into());
    }
    let old_settings = repo.load_system_settings()?;
    repo.store_system_settings(&new_settings)?;
    log::info!("Updated system settings: {new_settings:?}");
    record_audit_event(
        repo,
        AuditEvent::system(Action::SystemSettingsUpdated, now)
            .with_actor(actor)
            .with_snapshots(Some(&old_settings), Some(&new_settings)),
    );
    Ok(new_settings)
}

#[cfg(test)]
mod tests;
