// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{sync::Arc, time::Duration};

use bookshelf_backend_embedded::storage::StorageConfig;
use bookshelf_core::{audit::Action, book::Book, settings::ThemeMode};

use super::*;
use crate::auth;

fn new_env() -> Environment {
    Environment::commission(StorageConfig::default())
}

fn new_user(name: &str, role: Role) -> User {
    User {
        email: format!("{}@example.com", name.to_lowercase()),
        name: name.into(),
        role,
    }
}

#[tokio::test]
async fn manage_users() {
    let env = new_env();
    let admin = ObservableState::default();
    admin.set_actor(Some(UserId::new(1)));
    let alice = admin
        .create_user(&env, new_user("Alice", Role::Admin))
        .await
        .unwrap();
    let bob = admin
        .create_user(&env, new_user("Bob", Role::User))
        .await
        .unwrap();
    assert_eq!(UserId::new(1), alice.hdr.id);
    assert_eq!(UserId::new(2), bob.hdr.id);
    {
        let state = admin.read();
        assert_eq!(2, state.total_users());
        assert_eq!(1, state.admin_users().len());
        assert_eq!(1, state.regular_users().len());
        assert_eq!(Some(&bob), state.user_by_email("bob@example.com"));
        assert_eq!(Some(&alice), state.user_by_id(UserId::new(1)));
        assert_eq!(2, state.recent_users(UtcDateTimeMs::now()).len());
        assert!(!state.is_loading());
    }

    admin
        .update_user(
            &env,
            bob.hdr.id,
            Changes {
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(2, admin.read().admin_users().len());

    admin.delete_user(&env, alice.hdr.id).await.unwrap();
    assert_eq!(1, admin.read().total_users());

    let actions: Vec<_> = admin
        .read()
        .audit_logs()
        .iter()
        .map(|entry| entry.event.action)
        .collect();
    assert_eq!(
        vec![
            Action::UserDeleted,
            Action::UserUpdated,
            Action::UserCreated,
            Action::UserCreated,
            Action::SystemStartup,
        ],
        actions
    );
    assert!(
        admin
            .read()
            .audit_logs()
            .iter()
            .filter(|entry| entry.event.action != Action::SystemStartup)
            .all(|entry| entry.event.actor == Some(UserId::new(1)))
    );
}

#[tokio::test]
async fn invalid_user_is_rejected() {
    let env = new_env();
    let admin = ObservableState::default();
    let err = admin
        .create_user(
            &env,
            User {
                email: "invalid".into(),
                ..new_user("Carol", Role::User)
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_input());
    assert!(admin.read().has_error());
    assert!(admin.read().users().is_empty());
    assert!(admin.clear_error());
    assert!(!admin.read().has_error());
}

#[tokio::test]
async fn deleting_missing_user_fails() {
    let env = new_env();
    let admin = ObservableState::default();
    assert!(
        admin
            .delete_user(&env, UserId::new(5))
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(admin.read().has_error());
}

#[tokio::test]
async fn recent_audit_logs_are_limited() {
    let env = new_env();
    let admin = ObservableState::default();
    for i in 0..12 {
        admin
            .create_user(&env, new_user(&format!("User{i}"), Role::User))
            .await
            .unwrap();
    }
    admin.fetch_audit_logs(&env).await.unwrap();
    let state = admin.read();
    assert_eq!(13, state.audit_logs().len());
    assert_eq!(RECENT_ENTRIES_LIMIT, state.recent_audit_logs().len());
    assert_eq!(
        state.audit_logs()[0].id,
        state.recent_audit_logs()[0].id
    );
}

#[tokio::test]
async fn system_settings() {
    let env = new_env();
    let admin = ObservableState::default();
    admin.fetch_system_settings(&env).await.unwrap();
    assert_eq!(&SystemSettings::default(), admin.read().system_settings());
    let new_settings = SystemSettings {
        theme_mode: ThemeMode::Dark,
        ..Default::default()
    };
    admin
        .update_system_settings(&env, new_settings.clone())
        .await
        .unwrap();
    assert_eq!(&new_settings, admin.read().system_settings());
    assert_eq!(
        Some(Action::SystemSettingsUpdated),
        admin
            .read()
            .audit_logs()
            .first()
            .map(|entry| entry.event.action)
    );
    let err = admin
        .update_system_settings(
            &env,
            SystemSettings {
                app_name: String::new(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_input());
    assert_eq!(&new_settings, admin.read().system_settings());
}

#[tokio::test]
async fn stats() {
    let env = new_env();
    let admin = ObservableState::default();
    admin
        .create_user(&env, new_user("Alice", Role::User))
        .await
        .unwrap();
    bookshelf_backend_embedded::book::create(
        env.db_gatekeeper(),
        None,
        Book {
            title: "Title".into(),
            author: "Author".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let stats = admin.fetch_stats(&env).await.unwrap();
    assert_eq!(
        Stats {
            total_users: 1,
            total_books: 1,
            active_users: 1,
            recent_activity: 3,
        },
        stats
    );
    assert_eq!(&stats, admin.read().stats());
}

#[tokio::test]
async fn auth_state_is_propagated() {
    crate::tests::init_logger();
    let auth = auth::ObservableState::default();
    let admin = Arc::new(ObservableState::default());
    let _task = tokio::spawn(tasklet::on_auth_state_changed(
        &auth,
        Arc::downgrade(&admin),
    ));
    auth.login("admin", "password").unwrap();
    for _ in 0..100 {
        if admin.read().actor().is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(Some(UserId::new(1)), admin.read().actor());
}
