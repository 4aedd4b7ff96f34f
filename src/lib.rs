// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Personal books library management.
//!
//! The individual layers are enabled by features.

pub use bookshelf_core::*;

#[cfg(feature = "api")]
pub mod api {
    pub use bookshelf_core_api::*;
}

#[cfg(feature = "repo")]
pub mod repo {
    pub use bookshelf_repo::*;
}

#[cfg(feature = "usecases")]
pub mod usecases {
    pub use bookshelf_usecases::*;
}

#[cfg(feature = "storage-inmemory")]
pub mod storage {
    pub use bookshelf_storage_inmemory::*;
}

#[cfg(feature = "backend-embedded")]
pub mod backend {
    pub use bookshelf_backend_embedded::*;
}

#[cfg(feature = "app")]
pub mod app {
    pub use bookshelf_app::*;
}
