// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_backend_embedded::{self as backend, Result};
use bookshelf_core::{
    AuditEntry,
    settings::SystemSettings,
    user::{Entity, Role, User, UserId},
    util::clock::UtcDateTimeMs,
};
use bookshelf_usecases::{
    audit::RECENT_ENTRIES_LIMIT,
    user::{Changes, created_since},
};
use discro::Subscriber;
use jiff::SignedDuration;

use crate::{Environment, LoadingScope, LoadingState, Observable, ObservableRef};

pub mod tasklet;

/// Users created within this period are considered recent.
pub const RECENT_USERS_PERIOD: SignedDuration = SignedDuration::from_hours(7 * 24);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_users: usize,
    pub total_books: usize,
    pub active_users: usize,
    pub recent_activity: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    users: Vec<Entity>,
    system_settings: SystemSettings,
    // Newest first
    audit_logs: Vec<AuditEntry>,
    stats: Stats,
    actor: Option<UserId>,
    is_loading: bool,
    error: Option<String>,
}

impl State {
    #[must_use]
    pub fn users(&self) -> &[Entity] {
        &self.users
    }

    #[must_use]
    pub const fn system_settings(&self) -> &SystemSettings {
        &self.system_settings
    }

    /// All fetched audit log entries, newest first.
    #[must_use]
    pub fn audit_logs(&self) -> &[AuditEntry] {
        &self.audit_logs
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub const fn actor(&self) -> Option<UserId> {
        self.actor
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub fn total_users(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn admin_users(&self) -> Vec<&Entity> {
        self.users_with_role(Role::Admin)
    }

    #[must_use]
    pub fn regular_users(&self) -> Vec<&Entity> {
        self.users_with_role(Role::User)
    }

    fn users_with_role(&self, role: Role) -> Vec<&Entity> {
        self.users
            .iter()
            .filter(|entity| entity.body.role == role)
            .collect()
    }

    /// Users created within [`RECENT_USERS_PERIOD`] before `now`.
    #[must_use]
    pub fn recent_users(&self, now: UtcDateTimeMs) -> Vec<&Entity> {
        let since = now
            .checked_add(-RECENT_USERS_PERIOD)
            .unwrap_or(UtcDateTimeMs::from_unix_timestamp_millis(i64::MIN));
        created_since(&self.users, since)
    }

    #[must_use]
    pub fn recent_audit_logs(&self) -> &[AuditEntry] {
        &self.audit_logs[..self.audit_logs.len().min(RECENT_ENTRIES_LIMIT)]
    }

    #[must_use]
    pub fn user_by_id(&self, id: UserId) -> Option<&Entity> {
        self.users.iter().find(|entity| entity.hdr.id == id)
    }

    #[must_use]
    pub fn user_by_email(&self, email: &str) -> Option<&Entity> {
        self.users.iter().find(|entity| entity.body.email == email)
    }

    pub fn clear_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    pub fn set_actor(&mut self, actor: Option<UserId>) -> bool {
        if self.actor == actor {
            return false;
        }
        log::debug!("Actor updated: {actor:?}");
        self.actor = actor;
        true
    }

    fn begin_request(&mut self) -> bool {
        self.error.take().is_some()
    }

    fn request_failed(&mut self, err: &backend::Error) -> bool {
        log::warn!("Request failed: {err}");
        self.error = Some(err.to_string());
        true
    }

    fn users_fetched(&mut self, users: &[Entity]) -> bool {
        if self.users == users {
            return false;
        }
        self.users = users.to_vec();
        true
    }

    fn user_created(&mut self, entity: &Entity) -> bool {
        self.users.push(entity.clone());
        true
    }

    fn user_updated(&mut self, entity: &Entity) -> bool {
        let Some(user) = self
            .users
            .iter_mut()
            .find(|user| user.hdr.id == entity.hdr.id)
        else {
            log::warn!("Updated user {id} not found", id = entity.hdr.id);
            self.users.push(entity.clone());
            return true;
        };
        *user = entity.clone();
        true
    }

    fn user_deleted(&mut self, id: UserId) -> bool {
        let len_before = self.users.len();
        self.users.retain(|entity| entity.hdr.id != id);
        self.users.len() < len_before
    }

    fn system_settings_fetched(&mut self, system_settings: &SystemSettings) -> bool {
        if self.system_settings == *system_settings {
            return false;
        }
        self.system_settings = system_settings.clone();
        true
    }

    fn audit_logs_fetched(&mut self, audit_logs: &[AuditEntry]) -> bool {
        if self.audit_logs == audit_logs {
            return false;
        }
        self.audit_logs = audit_logs.to_vec();
        true
    }

    fn stats_fetched(&mut self, stats: &Stats) -> bool {
        if self.stats == *stats {
            return false;
        }
        self.stats = *stats;
        true
    }
}

impl LoadingState for State {
    fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn set_loading(&mut self, is_loading: bool) -> bool {
        if self.is_loading == is_loading {
            return false;
        }
        self.is_loading = is_loading;
        true
    }
}

async fn load_stats(env: &Environment) -> Result<Stats> {
    let users = backend::user::load_all(env.db_gatekeeper()).await?;
    let books = backend::book::load_all(env.db_gatekeeper()).await?;
    let audit_logs = backend::audit::load_recent(env.db_gatekeeper(), None).await?;
    Ok(Stats {
        total_users: users.len(),
        total_books: books.len(),
        // Every known user counts as active
        active_users: users.len(),
        recent_activity: audit_logs.len(),
    })
}

/// Manages the mutable, observable state
#[derive(Debug, Default)]
pub struct ObservableState(Observable<State>);

impl ObservableState {
    #[must_use]
    pub fn new(initial_state: State) -> Self {
        Self(Observable::new(initial_state))
    }

    #[must_use]
    pub fn read(&self) -> ObservableRef<'_, State> {
        self.0.read()
    }

    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<State> {
        self.0.subscribe_changed()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn clear_error(&self) -> bool {
        self.0.modify(State::clear_error)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_actor(&self, actor: Option<UserId>) -> bool {
        self.0.modify(|state| state.set_actor(actor))
    }

    fn finish_request<T>(
        &self,
        result: Result<T>,
        on_success: impl FnOnce(&mut State, &T) -> bool,
    ) -> Result<T> {
        match result {
            Ok(value) => {
                self.0.modify(|state| on_success(state, &value));
                Ok(value)
            }
            Err(err) => {
                self.0.modify(|state| state.request_failed(&err));
                Err(err)
            }
        }
    }

    /// Reload the audit log after a mutation.
    ///
    /// Failures are only logged.
    async fn refresh_audit_logs(&self, env: &Environment) {
        match backend::audit::load_recent(env.db_gatekeeper(), None).await {
            Ok(audit_logs) => {
                self.0.modify(|state| state.audit_logs_fetched(&audit_logs));
            }
            Err(err) => {
                log::warn!("Failed to reload audit log: {err}");
            }
        }
    }

    pub async fn fetch_users(&self, env: &Environment) -> Result<()> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let result = backend::user::load_all(env.db_gatekeeper()).await;
        self.finish_request(result, |state, users| state.users_fetched(users))?;
        Ok(())
    }

    pub async fn create_user(&self, env: &Environment, new_user: User) -> Result<Entity> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let actor = self.read().actor;
        let result = backend::user::create(env.db_gatekeeper(), actor, new_user).await;
        let created = self.finish_request(result, State::user_created)?;
        self.refresh_audit_logs(env).await;
        Ok(created)
    }

    pub async fn update_user(
        &self,
        env: &Environment,
        id: UserId,
        changes: Changes,
    ) -> Result<Entity> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let actor = self.read().actor;
        let result = backend::user::update(env.db_gatekeeper(), actor, id, changes).await;
        let updated = self.finish_request(result, State::user_updated)?;
        self.refresh_audit_logs(env).await;
        Ok(updated)
    }

    /// Returns the deleted user.
    pub async fn delete_user(&self, env: &Environment, id: UserId) -> Result<Entity> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let actor = self.read().actor;
        let result = backend::user::purge(env.db_gatekeeper(), actor, id).await;
        let deleted = self.finish_request(result, |state, _| state.user_deleted(id))?;
        self.refresh_audit_logs(env).await;
        Ok(deleted)
    }

    pub async fn fetch_system_settings(&self, env: &Environment) -> Result<()> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let result = backend::settings::load(env.db_gatekeeper()).await;
        self.finish_request(result, State::system_settings_fetched)?;
        Ok(())
    }

    pub async fn update_system_settings(
        &self,
        env: &Environment,
        new_settings: SystemSettings,
    ) -> Result<SystemSettings> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let actor = self.read().actor;
        let result = backend::settings::update(env.db_gatekeeper(), actor, new_settings).await;
        let updated = self.finish_request(result, State::system_settings_fetched)?;
        self.refresh_audit_logs(env).await;
        Ok(updated)
    }

    pub async fn fetch_audit_logs(&self, env: &Environment) -> Result<()> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let result = backend::audit::load_recent(env.db_gatekeeper(), None).await;
        self.finish_request(result, |state, audit_logs| {
            state.audit_logs_fetched(audit_logs)
        })?;
        Ok(())
    }

    pub async fn fetch_stats(&self, env: &Environment) -> Result<Stats> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let result = load_stats(env).await;
        self.finish_request(result, State::stats_fetched)
    }
}

#[cfg(test)]
mod tests;
