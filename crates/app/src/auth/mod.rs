// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::{
    user::{Entity, UserId},
    util::clock::UtcDateTimeMs,
};
use bookshelf_usecases::{
    InputResult,
    auth::{self, Session},
    user::Changes,
};
use discro::Subscriber;

use crate::{LoadingScope, LoadingState, Observable, ObservableRef};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    user: Option<Entity>,
    token: Option<String>,
    is_loading: bool,
    error: Option<String>,
}

impl State {
    #[must_use]
    pub const fn user(&self) -> Option<&Entity> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|entity| entity.hdr.id)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|entity| entity.body.is_admin())
    }

    #[must_use]
    pub fn can_manage_users(&self) -> bool {
        self.is_admin()
    }

    #[must_use]
    pub const fn can_manage_books(&self) -> bool {
        self.is_authenticated()
    }

    fn signed_in(&mut self, session: Session) -> bool {
        let Session { user, token } = session;
        log::debug!("Signed in: {user:?}");
        self.user = Some(user);
        self.token = Some(token);
        self.error = None;
        true
    }

    fn signed_out(&mut self) -> bool {
        if self.user.is_none() && self.token.is_none() {
            return false;
        }
        log::debug!("Signed out");
        self.user = None;
        self.token = None;
        true
    }

    pub fn clear_error(&mut self) -> bool {
        self.error.take().is_some()
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

    /// Sign in with any pair of non-empty credentials.
    ///
    /// A failed attempt keeps the current session.
    pub fn login(&self, username: &str, password: &str) -> InputResult<()> {
        let _loading = LoadingScope::enter(&self.0);
        match auth::login(username, password, UtcDateTimeMs::now()) {
            Ok(session) => {
                self.0.modify(|state| state.signed_in(session));
                Ok(())
            }
            Err(err) => {
                log::warn!("Login failed: {err}");
                self.0.modify(|state| {
                    state.error = Some(err.to_string());
                    true
                });
                Err(err)
            }
        }
    }

    #[allow(clippy::must_use_candidate)]
    pub fn logout(&self) -> bool {
        self.0.modify(State::signed_out)
    }

    /// Keep the current session alive.
    ///
    /// Returns `false` if nobody is signed in.
    #[allow(clippy::must_use_candidate)]
    pub fn refresh_token(&self) -> bool {
        let is_authenticated = self.read().is_authenticated();
        if is_authenticated {
            log::debug!("Keeping the current session");
        }
        is_authenticated
    }

    /// Modify the profile of the signed-in user.
    ///
    /// Returns `Ok(false)` if nobody is signed in.
    pub fn update_profile(&self, changes: Changes) -> InputResult<bool> {
        let Some(user) = self.read().user.clone() else {
            return Ok(false);
        };
        let _loading = LoadingScope::enter(&self.0);
        match auth::update_profile(user, changes, UtcDateTimeMs::now()) {
            Ok(updated) => {
                self.0.modify(|state| {
                    state.error = None;
                    state.user = Some(updated);
                    true
                });
                Ok(true)
            }
            Err(err) => {
                self.0.modify(|state| {
                    state.error = Some(err.to_string());
                    true
                });
                Err(err)
            }
        }
    }

    #[allow(clippy::must_use_candidate)]
    pub fn clear_error(&self) -> bool {
        self.0.modify(State::clear_error)
    }
}

#[cfg(test)]
mod tests;
