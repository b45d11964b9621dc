// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Records returned by the remote directory search.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Field names requested for every search, as the server names them.
///
/// The server calls the external identifier `lark_guid`; it decodes into
/// [`Record::external_id`].
pub const RECORD_FIELDS: [&str; 4] = ["id", "name", "lark_guid", "member_count"];

/// A directory entry as returned by the remote search backend.
///
/// The backend may report absent optional values as `false`, so those
/// fields accept it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    #[serde(
        default,
        alias = "externalId",
        alias = "lark_guid",
        deserialize_with = "falsy_as_none"
    )]
    pub external_id: Option<String>,
    #[serde(default, alias = "memberCount", deserialize_with = "falsy_as_none")]
    pub member_count: Option<u32>,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Record {
            id,
            name: name.into(),
            external_id: None,
            member_count: None,
        }
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn with_member_count(mut self, count: u32) -> Self {
        self.member_count = Some(count);
        self
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(count) = self.member_count {
            write!(f, " ({} members)", count)?;
        }
        Ok(())
    }
}

fn falsy_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => Ok(None),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
