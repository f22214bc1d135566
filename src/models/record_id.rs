use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Server-assigned row identifier. Handlers never interpret it; it is read
/// from the database as text and matched as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column type of the `id` primary key in both tables.
///
/// Filters compare the bare column against a cast parameter so the primary
/// key index stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyType {
    #[default]
    Integer,
    Uuid,
    Text,
}

impl KeyType {
    /// Whether a row keyed by this type could carry `id` at all.
    pub fn accepts(&self, id: &RecordId) -> bool {
        match self {
            KeyType::Integer => id.as_str().parse::<i64>().is_ok(),
            KeyType::Uuid => Uuid::parse_str(id.as_str()).is_ok(),
            KeyType::Text => true,
        }
    }

    /// Placeholder `$n` cast to the key type.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            KeyType::Integer => format!("${}::bigint", index),
            KeyType::Uuid => format!("${}::uuid", index),
            KeyType::Text => format!("${}", index),
        }
    }
}

impl FromStr for KeyType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" | "serial" | "bigint" => Ok(KeyType::Integer),
            "uuid" => Ok(KeyType::Uuid),
            "text" => Ok(KeyType::Text),
            other => Err(format!("unknown key type {}", other)),
        }
    }
}

// Clients send ids either as the string they received or as a bare number.
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => RecordId(text),
            Raw::Number(number) => RecordId(number.to_string()),
        })
    }
}
