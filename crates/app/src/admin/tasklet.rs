// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{future::Future, sync::Weak};

use crate::auth;

use super::ObservableState;

/// Propagate the signed-in user as the actor of all administrative
/// mutations.
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
