// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use discro::{Publisher, Ref, Subscriber};

#[macro_use]
mod macros;

mod environment;
pub use self::environment::{Environment, Handle, WeakHandle};

/// Admin console
pub mod admin;

/// Authentication
pub mod auth;

/// Book library catalog
pub mod library;

/// Settings management
pub mod settings;

/// UI chrome
pub mod ui;

pub type ObservableRef<'a, T> = Ref<'a, T>;

/// Manages the mutable, observable state
#[derive(Debug, Default)]
pub struct Observable<T> {
    publisher: Publisher<T>,
}

impl<T> Observable<T> {
    #[must_use]
    pub fn new(initial_value: T) -> Self {
        let publisher = Publisher::new(initial_value);
        Self { publisher }
    }

    #[must_use]
    pub fn read(&self) -> ObservableRef<'_, T> {
        self.publisher.read()
    }

    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<T> {
        self.publisher.subscribe_changed()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn modify(&self, modify: impl FnOnce(&mut T) -> bool) -> bool {
        self.publisher.modify(modify)
    }
}

/// Observable state with a loading flag.
pub trait LoadingState {
    fn is_loading(&self) -> bool;

    /// Returns `true` if the flag has been changed.
    fn set_loading(&mut self, is_loading: bool) -> bool;
}

/// Keeps the loading flag raised while in scope.
///
/// The flag is cleared when dropped, i.e. both on success and on failure.
#[derive(Debug)]
pub struct LoadingScope<'a, T: LoadingState> {
    observable: &'a Observable<T>,
}

impl<'a, T: LoadingState> LoadingScope<'a, T> {
    #[must_use]
    pub fn enter(observable: &'a Observable<T>) -> Self {
        if !observable.modify(|state| state.set_loading(true)) {
            log::debug!("Loading flag has already been raised");
        }
        Self { observable }
    }
}

impl<T: LoadingState> Drop for LoadingScope<'_, T> {
    fn drop(&mut self) {
        self.observable.modify(|state| state.set_loading(false));
    }
}
