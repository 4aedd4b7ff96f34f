// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    future::Future,
    sync::{Arc, Weak},
};

use crate::{WeakHandle, auth};

use super::ObservableState;

/// Propagate the signed-in user into the library.
///
/// The user becomes the owner of new books and the actor of all
/// audited mutations.
pub fn on_auth_state_changed(
    auth_state: &auth::ObservableState,
    observable_state: Weak<ObservableState>,
) -> impl Future<Output = ()> + Send + 'static {
    let mut auth_state_sub = auth_state.subscribe_changed();
    async move {
        log::debug!("Starting on_auth_state_changed");
        loop {
            {
                let observable_state = upgrade_or_break!(observable_state);
                let actor = auth_state_sub.read_ack().user_id();
                observable_state.set_actor(actor);
            }
            if auth_state_sub.changed().await.is_err() {
                // Publisher has been dropped.
                break;
            }
        }
        log::debug!("Stopping on_auth_state_changed");
    }
}

/// Reload all books after the signed-in user has changed.
pub fn on_actor_changed_fetch_books(
    observable_state: &Arc<ObservableState>,
    handle: WeakHandle,
) -> impl Future<Output = ()> + Send + 'static {
    let mut state_sub = observable_state.subscribe_changed();
    let observable_state = Arc::downgrade(observable_state);
    // Read the initial value immediately before spawning the async task
    let mut actor = state_sub.read_ack().actor();
    async move {
        log::debug!("Starting on_actor_changed_fetch_books");
        loop {
            if state_sub.changed().await.is_err() {
                // Publisher has been dropped.
                break;
            }
            let new_actor = state_sub.read_ack().actor();
            if new_actor == actor {
                continue;
            }
            actor = new_actor;
            let observable_state = upgrade_or_break!(observable_state);
            let handle = upgrade_or_break!(handle);
            if let Err(err) = observable_state.fetch_books(&handle).await {
                log::warn!("Failed to fetch books: {err}");
            }
        }
        log::debug!("Stopping on_actor_changed_fetch_books");
    }
}
