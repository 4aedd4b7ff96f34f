// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{env, process, time::Duration};

use super::*;

fn new_temp_dir(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push(format!("bookshelf-settings-{name}-{pid}", pid = process::id()));
    dir
}

#[test]
fn defaults() {
    let state = State::default();
    assert_eq!(12, state.items_per_page.get());
    assert_eq!(None, state.dark_mode);
    assert_eq!(
        100,
        state.create_storage_config().database.audit_log_capacity.get()
    );
}

#[test]
fn initial_store_states() {
    let state = State {
        items_per_page: NonZeroUsize::new(24).unwrap(),
        dark_mode: Some(true),
        ..Default::default()
    };
    assert_eq!(24, state.create_library_state().page_size().get());
    assert!(state.create_ui_state().is_dark_mode());
    assert!(!State::default().create_ui_state().is_dark_mode());
}

#[test]
fn load_missing_file_returns_defaults() {
    let dir = new_temp_dir("missing");
    assert_eq!(State::default(), State::load(&dir).unwrap());
    assert_eq!(State::default(), State::restore_from_parent_dir(&dir));
}

#[test]
fn save_and_load() {
    let dir = new_temp_dir("save");
    let mut state = State::default();
    assert!(state.update_items_per_page(NonZeroUsize::new(24).unwrap()));
    assert!(state.update_dark_mode(Some(true)));
    assert!(!state.update_dark_mode(Some(true)));
    state.save(&dir).unwrap();
    assert_eq!(state, State::load(&dir).unwrap());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let state: State = ron::de::from_str("(dark_mode: Some(false))").unwrap();
    assert_eq!(
        State {
            dark_mode: Some(false),
            ..Default::default()
        },
        state
    );
}

#[tokio::test]
async fn save_changed_settings() {
    crate::tests::init_logger();
    let dir = new_temp_dir("tasklet");
    let observable = ObservableState::default();
    let task = tokio::spawn(tasklet::on_state_changed_save_to_file(
        observable.subscribe_changed(),
        dir.clone(),
        |err| panic!("{err}"),
    ));
    assert!(observable.update_dark_mode(Some(true)));
    let mut saved = None;
    for _ in 0..100 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        if let Ok(state) = State::load(&dir)
            && state.dark_mode.is_some()
        {
            saved = Some(state);
            break;
        }
    }
    assert_eq!(Some(true), saved.and_then(|state| state.dark_mode));
    drop(observable);
    task.await.unwrap();
    fs::remove_dir_all(&dir).unwrap();
}
