// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use bookshelf_backend_embedded::storage::StorageConfig;
use bookshelf_core_api::DEFAULT_PAGE_SIZE;
use bookshelf_storage_inmemory::{
    database::{Config as DatabaseConfig, DEFAULT_AUDIT_LOG_CAPACITY},
    gatekeeper::Config as GatekeeperConfig,
};
use discro::Subscriber;
use serde::{Deserialize, Serialize};

use crate::{Observable, ObservableRef, library, ui};

pub const FILE_NAME: &str = "bookshelf_settings";

pub const FILE_SUFFIX: &str = "ron";

pub mod tasklet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    /// Page size of the library catalog.
    pub items_per_page: NonZeroUsize,

    /// Initial appearance.
    ///
    /// Follows the system preference if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,

    /// Maximum number of retained audit log entries.
    pub audit_log_capacity: NonZeroUsize,

    pub gatekeeper: GatekeeperConfig,
}

impl Default for State {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_PAGE_SIZE,
            dark_mode: None,
            audit_log_capacity: DEFAULT_AUDIT_LOG_CAPACITY,
            gatekeeper: Default::default(),
        }
    }
}

impl State {
    /// Load the settings or fall back to the defaults.
    ///
    /// Never fails. Errors are only logged.
    #[must_use]
    pub fn restore_from_parent_dir(parent_dir: &Path) -> Self {
        log::info!("Loading saved settings from: {}", parent_dir.display());
        Self::load(parent_dir)
            .map_err(|err| {
                log::warn!("Failed to load saved settings: {err}");
            })
            .unwrap_or_default()
    }

    pub fn load(parent_dir: &Path) -> anyhow::Result<State> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Loading settings from file: {}", file_path.display());
        match fs::read(&file_path) {
            Ok(bytes) => ron::de::from_bytes(&bytes).map_err(Into::into),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, parent_dir: &Path) -> anyhow::Result<()> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Saving current settings into file: {}", file_path.display());
        let text = ron::ser::to_string_pretty(self, Default::default())?;
        if let Some(parent_path) = file_path.parent() {
            fs::create_dir_all(parent_path)?;
        }
        fs::write(&file_path, text)?;
        Ok(())
    }

    pub async fn save_spawn_blocking(self, parent_dir: PathBuf) -> anyhow::Result<()> {
        match tokio::runtime::Handle::current()
            .spawn_blocking(move || self.save(&parent_dir))
            .await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                anyhow::bail!("failed to save: {err}");
            }
            Err(err) => {
                anyhow::bail!("failed to join blocking task after saving: {err}");
            }
        }
    }

    #[must_use]
    pub fn create_storage_config(&self) -> StorageConfig {
        StorageConfig {
            database: DatabaseConfig {
                audit_log_capacity: self.audit_log_capacity,
            },
            gatekeeper: self.gatekeeper,
        }
    }

    /// An empty library catalog paged by [`Self::items_per_page`].
    #[must_use]
    pub fn create_library_state(&self) -> library::State {
        library::State::new(self.items_per_page)
    }

    #[must_use]
    pub fn create_ui_state(&self) -> ui::State {
        ui::State::new(self.dark_mode.unwrap_or_default())
    }

    pub fn update_items_per_page(&mut self, items_per_page: NonZeroUsize) -> bool {
        if self.items_per_page == items_per_page {
            // No effect
            return false;
        }
        log::info!("Updating items per page: {items_per_page}");
        self.items_per_page = items_per_page;
        true
    }

    pub fn update_dark_mode(&mut self, dark_mode: Option<bool>) -> bool {
        if self.dark_mode == dark_mode {
            return false;
        }
        log::info!("Updating dark mode: {dark_mode:?}");
        self.dark_mode = dark_mode;
        true
    }
}

#[must_use]
fn new_settings_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut path_buf = parent_dir;
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    path_buf
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
    pub fn update_items_per_page(&self, items_per_page: NonZeroUsize) -> bool {
        self.0
            .modify(|state| state.update_items_per_page(items_per_page))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn update_dark_mode(&self, dark_mode: Option<bool>) -> bool {
        self.0.modify(|state| state.update_dark_mode(dark_mode))
    }
}

#[cfg(test)]
mod tests;
