// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::prelude::*;

pub const DEFAULT_APP_NAME: &str = "Books Library";

pub const DEFAULT_APP_DESCRIPTION: &str = "A self-hosted personal books library management system";

pub const DEFAULT_MAX_BOOKS_PER_USER: u32 = 1000;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BackupFrequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// System-wide settings managed by administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub app_name: String,
    pub app_description: String,
    pub allow_registration: bool,
    pub require_email_verification: bool,
    pub max_books_per_user: u32,
    pub backup_frequency: BackupFrequency,
    pub theme_mode: ThemeMode,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            app_description: DEFAULT_APP_DESCRIPTION.to_owned(),
            allow_registration: false,
            require_email_verification: false,
            max_books_per_user: DEFAULT_MAX_BOOKS_PER_USER,
            backup_frequency: Default::default(),
            theme_mode: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemSettingsInvalidity {
    AppNameEmpty,
    MaxBooksPerUserZero,
}

impl Validate for SystemSettings {
    type Invalidity = SystemSettingsInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                self.app_name.trim().is_empty(),
                Self::Invalidity::AppNameEmpty,
            )
            .invalidate_if(
                self.max_books_per_user == 0,
                Self::Invalidity::MaxBooksPerUserZero,
            )
            .into()
    }
}
