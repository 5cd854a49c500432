//! Read-only user directory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A user known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    /// Preferred display locale, if the user ever picked one.
    pub locale: Option<String>,
    /// Preferred timezone. Stored as entered and validated at resolution
    /// time, so an unusable name here is not an error.
    pub timezone: Option<String>,
}

impl UserRecord {
    /// Creates a record with no stored preferences.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            locale: None,
            timezone: None,
        }
    }

    /// Sets the stored locale preference.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the stored timezone preference.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

/// Mapping from user id to record, seeded once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: BTreeMap<u32, UserRecord>,
}

impl UserDirectory {
    /// Builds a directory from a collection of records.
    ///
    /// On duplicate ids the later record wins.
    pub fn new(records: impl IntoIterator<Item = UserRecord>) -> Self {
        Self {
            users: records
                .into_iter()
                .map(|record| (record.id, record))
                .collect(),
        }
    }

    /// Looks up a user by id. Absent is a normal result, not a failure.
    pub fn lookup(&self, id: u32) -> Option<&UserRecord> {
        self.users.get(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
