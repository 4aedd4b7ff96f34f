// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

macro_rules! entity_id_newtype {
    ($type_name:ident) => {
        #[derive(
            Copy,
            Clone,
            Debug,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $type_name($crate::EntityId);

        impl $type_name {
            #[must_use]
            pub const fn new(inner: $crate::EntityId) -> Self {
                Self(inner)
            }

            #[must_use]
            pub const fn to_inner(self) -> $crate::EntityId {
                let Self(inner) = self;
                inner
            }

            /// The successor of the greatest id in use.
            ///
            /// Starts at 1 if no ids are in use.
            #[must_use]
            pub fn next_after(used: impl IntoIterator<Item = Self>) -> Self {
                let max_inner = used.into_iter().map(Self::to_inner).max().unwrap_or(0);
                Self(max_inner.saturating_add(1))
            }
        }

        impl From<$crate::EntityId> for $type_name {
            fn from(from: $crate::EntityId) -> Self {
                Self::new(from)
            }
        }

        impl From<$type_name> for $crate::EntityId {
            fn from(from: $type_name) -> Self {
                from.to_inner()
            }
        }

        impl std::fmt::Display for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
