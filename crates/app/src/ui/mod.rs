// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::NonZeroU64;

use bookshelf_core::util::clock::UtcDateTimeMs;
use discro::Subscriber;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::{Observable, ObservableRef};

/// Display duration of temporary notifications.
///
/// Dismissing expired notifications is up to the presentation layer.
pub const DEFAULT_NOTIFICATION_DURATION_MILLIS: NonZeroU64 =
    NonZeroU64::new(5_000).expect("non-zero");

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Errors stay until dismissed.
    #[must_use]
    pub const fn is_persistent_by_default(self) -> bool {
        matches!(self, Self::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration_millis: Option<NonZeroU64>,
    pub persistent: bool,
}

impl NewNotification {
    #[must_use]
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration_millis: None,
            persistent: kind.is_persistent_by_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration_millis: NonZeroU64,
    pub persistent: bool,
    pub created_at: UtcDateTimeMs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Modal {
    AddBook,
    EditBook,
    DeleteConfirm,
    UserSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    dark_mode: bool,
    mobile_menu_open: bool,
    is_loading: bool,
    notifications: Vec<Notification>,
    open_modal: Option<Modal>,
    last_notification_id: NotificationId,
}

impl State {
    #[must_use]
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub const fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// All notifications in order of appearance.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    #[must_use]
    pub fn persistent_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| n.persistent).collect()
    }

    #[must_use]
    pub fn temporary_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.persistent).collect()
    }

    #[must_use]
    pub fn is_modal_open(&self, modal: Modal) -> bool {
        self.open_modal == Some(modal)
    }

    #[must_use]
    pub const fn is_any_modal_open(&self) -> bool {
        self.open_modal.is_some()
    }

    /// At most one modal is open at any time.
    #[must_use]
    pub const fn open_modal_kind(&self) -> Option<Modal> {
        self.open_modal
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        true
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        true
    }

    pub fn set_loading(&mut self, is_loading: bool) -> bool {
        if self.is_loading == is_loading {
            return false;
        }
        self.is_loading = is_loading;
        true
    }

    fn push_notification(
        &mut self,
        new_notification: NewNotification,
        created_at: UtcDateTimeMs,
    ) -> NotificationId {
        let NewNotification {
            kind,
            title,
            message,
            duration_millis,
            persistent,
        } = new_notification;
        self.last_notification_id = self.last_notification_id.wrapping_add(1);
        let id = self.last_notification_id;
        self.notifications.push(Notification {
            id,
            kind,
            title,
            message,
            duration_millis: duration_millis.unwrap_or(DEFAULT_NOTIFICATION_DURATION_MILLIS),
            persistent,
            created_at,
        });
        id
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        let len_before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() < len_before
    }

    pub fn clear_all_notifications(&mut self) -> bool {
        if self.notifications.is_empty() {
            return false;
        }
        self.notifications.clear();
        true
    }

    pub fn clear_temporary_notifications(&mut self) -> bool {
        let len_before = self.notifications.len();
        self.notifications.retain(|n| n.persistent);
        self.notifications.len() < len_before
    }

    /// Open a modal and close all others.
    pub fn open_modal(&mut self, modal: Modal) -> bool {
        if self.open_modal == Some(modal) {
            return false;
        }
        self.open_modal = Some(modal);
        true
    }

    pub fn close_modal(&mut self, modal: Modal) -> bool {
        if self.open_modal != Some(modal) {
            return false;
        }
        self.open_modal = None;
        true
    }

    pub fn close_all_modals(&mut self) -> bool {
        self.open_modal.take().is_some()
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

    #[allow(clippy::must_use_candidate)]
    pub fn toggle_dark_mode(&self) -> bool {
        self.0.modify(State::toggle_dark_mode)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn toggle_mobile_menu(&self) -> bool {
        self.0.modify(State::toggle_mobile_menu)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_loading(&self, is_loading: bool) -> bool {
        self.0.modify(|state| state.set_loading(is_loading))
    }

    /// Returns the id of the new notification.
    #[allow(clippy::must_use_candidate)]
    pub fn show_notification(&self, new_notification: NewNotification) -> NotificationId {
        let created_at = UtcDateTimeMs::now();
        let mut id = 0;
        self.0.modify(|state| {
            id = state.push_notification(new_notification, created_at);
            true
        });
        log::debug!("Showing notification {id}");
        id
    }

    #[allow(clippy::must_use_candidate)]
    pub fn show_success(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show_notification(NewNotification::new(
            NotificationKind::Success,
            title,
            message,
        ))
    }

    /// Error notifications are persistent.
    #[allow(clippy::must_use_candidate)]
    pub fn show_error(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show_notification(NewNotification::new(
            NotificationKind::Error,
            title,
            message,
        ))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn show_warning(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show_notification(NewNotification::new(
            NotificationKind::Warning,
            title,
            message,
        ))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn show_info(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show_notification(NewNotification::new(
            NotificationKind::Info,
            title,
            message,
        ))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn dismiss_notification(&self, id: NotificationId) -> bool {
        self.0.modify(|state| state.dismiss_notification(id))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn clear_all_notifications(&self) -> bool {
        self.0.modify(State::clear_all_notifications)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn clear_temporary_notifications(&self) -> bool {
        self.0.modify(State::clear_temporary_notifications)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn open_modal(&self, modal: Modal) -> bool {
        self.0.modify(|state| state.open_modal(modal))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn close_modal(&self, modal: Modal) -> bool {
        self.0.modify(|state| state.close_modal(modal))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn close_all_modals(&self) -> bool {
        self.0.modify(State::close_all_modals)
    }
}

#[cfg(test)]
mod tests;
