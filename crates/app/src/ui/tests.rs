// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn toggles() {
    let ui = ObservableState::new(State::new(true));
    assert!(ui.read().is_dark_mode());
    ui.toggle_dark_mode();
    assert!(!ui.read().is_dark_mode());
    ui.toggle_mobile_menu();
    assert!(ui.read().is_mobile_menu_open());
    assert!(ui.set_loading(true));
    assert!(!ui.set_loading(true));
    assert!(ui.read().is_loading());
}

#[test]
fn notifications_get_unique_ids() {
    let ui = ObservableState::default();
    let first = ui.show_success("Saved", "Book saved");
    let second = ui.show_info("Hint", "Try searching");
    assert_ne!(first, second);
    let state = ui.read();
    assert!(state.has_notifications());
    assert_eq!(2, state.notifications().len());
    assert_eq!(
        DEFAULT_NOTIFICATION_DURATION_MILLIS,
        state.notifications()[0].duration_millis
    );
}

#[test]
fn errors_are_persistent() {
    let ui = ObservableState::default();
    ui.show_warning("Careful", "Unsaved changes");
    let error_id = ui.show_error("Failed", "Could not save");
    {
        let state = ui.read();
        let persistent: Vec<_> = state.persistent_notifications().iter().map(|n| n.id).collect();
        assert_eq!(vec![error_id], persistent);
        assert_eq!(1, state.temporary_notifications().len());
    }
    assert!(ui.clear_temporary_notifications());
    assert_eq!(1, ui.read().notifications().len());
    assert!(ui.dismiss_notification(error_id));
    assert!(!ui.dismiss_notification(error_id));
    assert!(!ui.read().has_notifications());
}

#[test]
fn custom_duration_and_persistence() {
    let ui = ObservableState::default();
    let id = ui.show_notification(NewNotification {
        duration_millis: NonZeroU64::new(1_000),
        persistent: true,
        ..NewNotification::new(NotificationKind::Info, "Info", "Sticky")
    });
    let state = ui.read();
    let notification = state.notifications().iter().find(|n| n.id == id).unwrap();
    assert_eq!(1_000, notification.duration_millis.get());
    assert!(notification.persistent);
}

#[test]
fn clear_all_notifications() {
    let ui = ObservableState::default();
    assert!(!ui.clear_all_notifications());
    ui.show_error("Failed", "Oops");
    ui.show_success("Done", "Ok");
    assert!(ui.clear_all_notifications());
    assert!(!ui.read().has_notifications());
}

#[test]
fn opening_a_modal_closes_all_others() {
    let ui = ObservableState::default();
    assert!(!ui.read().is_any_modal_open());
    assert!(ui.open_modal(Modal::AddBook));
    assert!(ui.open_modal(Modal::DeleteConfirm));
    {
        let state = ui.read();
        assert!(!state.is_modal_open(Modal::AddBook));
        assert!(state.is_modal_open(Modal::DeleteConfirm));
    }
    assert!(!ui.close_modal(Modal::AddBook));
    assert!(ui.close_modal(Modal::DeleteConfirm));
    assert!(!ui.read().is_any_modal_open());
    ui.open_modal(Modal::UserSettings);
    assert!(ui.close_all_modals());
    assert_eq!(None, ui.read().open_modal_kind());
}
