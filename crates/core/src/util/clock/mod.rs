// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use jiff::{SignedDuration, Timestamp};

pub type TimestampMillis = i64;

/// An _UTC_ timestamp with truncated millisecond precision.
#[derive(Clone, Debug, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTimeMs {
    unix_timestamp_millis: TimestampMillis,
}

impl UtcDateTimeMs {
    #[must_use]
    pub const fn from_unix_timestamp_millis(unix_timestamp_millis: TimestampMillis) -> Self {
        Self {
            unix_timestamp_millis,
        }
    }

    #[must_use]
    pub const fn unix_timestamp_millis(&self) -> TimestampMillis {
        self.unix_timestamp_millis
    }

    #[must_use]
    pub fn from_timestamp(timestamp: &Timestamp) -> Self {
        Self::from_unix_timestamp_millis(timestamp.as_millisecond())
    }

    /// Convert into a [`Timestamp`].
    ///
    /// Values outside of the supported range saturate.
    #[must_use]
    pub fn to_timestamp(&self) -> Timestamp {
        Timestamp::from_millisecond(self.unix_timestamp_millis).unwrap_or(
            if self.unix_timestamp_millis < 0 {
                Timestamp::MIN
            } else {
                Timestamp::MAX
            },
        )
    }

    #[must_use]
    pub fn now() -> Self {
        Self::from_timestamp(&Timestamp::now())
    }

    /// Shift by a signed duration.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(self, duration: SignedDuration) -> Option<Self> {
        let millis = TimestampMillis::try_from(duration.as_millis()).ok()?;
        self.unix_timestamp_millis
            .checked_add(millis)
            .map(Self::from_unix_timestamp_millis)
    }
}

impl From<Timestamp> for UtcDateTimeMs {
    fn from(from: Timestamp) -> Self {
        Self::from_timestamp(&from)
    }
}

impl From<UtcDateTimeMs> for Timestamp {
    fn from(from: UtcDateTimeMs) -> Self {
        from.to_timestamp()
    }
}

impl fmt::Display for UtcDateTimeMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // RFC 3339 with exactly 3 fractional digits
        write!(f, "{:.3}", self.to_timestamp())
    }
}

impl FromStr for UtcDateTimeMs {
    type Err = jiff::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input.parse::<Timestamp>().map(Into::into)
    }
}

// Serialize (and deserialize) as string for maximum compatibility and portability
impl serde::Serialize for UtcDateTimeMs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for UtcDateTimeMs {
    fn deserialize<D>(deserializer: D) -> Result<UtcDateTimeMs, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        input.parse().map_err(serde::de::Error::custom)
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
