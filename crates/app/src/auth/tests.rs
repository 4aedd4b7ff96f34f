// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn signed_out_initially() {
    let auth = ObservableState::default();
    let state = auth.read();
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
    assert!(!state.can_manage_books());
    assert!(!state.can_manage_users());
}

#[test]
fn login_as_admin() {
    let auth = ObservableState::default();
    auth.login("admin", "password").unwrap();
    let state = auth.read();
    assert!(state.is_authenticated());
    assert!(state.is_admin());
    assert!(state.can_manage_users());
    assert!(state.can_manage_books());
    assert_eq!(Some(UserId::new(1)), state.user_id());
    assert!(state.token().unwrap().starts_with("mock-jwt-token-"));
    assert!(!state.is_loading());
}

#[test]
fn login_as_regular_user() {
    let auth = ObservableState::default();
    auth.login("bob", "secret").unwrap();
    let state = auth.read();
    assert!(state.can_manage_books());
    assert!(!state.can_manage_users());
    assert_eq!("Bob", state.user().unwrap().body.name);
}

#[test]
fn failed_login_records_error() {
    let auth = ObservableState::default();
    assert!(auth.login("", "secret").is_err());
    assert_eq!(Some("Invalid username or password"), auth.read().error());
    assert!(!auth.read().is_authenticated());
    assert!(!auth.read().is_loading());
    assert!(auth.clear_error());
    assert!(auth.read().error().is_none());
}

#[test]
fn logout_clears_session() {
    let auth = ObservableState::default();
    assert!(!auth.logout());
    auth.login("bob", "secret").unwrap();
    assert!(auth.refresh_token());
    assert!(auth.logout());
    assert!(!auth.read().is_authenticated());
    assert!(!auth.refresh_token());
}

#[test]
fn update_profile() {
    let auth = ObservableState::default();
    assert!(!auth.update_profile(Changes::default()).unwrap());
    auth.login("bob", "secret").unwrap();
    assert!(
        auth.update_profile(Changes {
            name: Some("Robert".into()),
            ..Default::default()
        })
        .unwrap()
    );
    assert_eq!("Robert", auth.read().user().unwrap().body.name);
    assert!(
        auth.update_profile(Changes {
            email: Some("robert".into()),
            ..Default::default()
        })
        .is_err()
    );
    assert!(auth.read().error().is_some());
    assert_eq!(
        "bob@books-library.local",
        auth.read().user().unwrap().body.email
    );
}
