use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered mapping of a field or rule identifier to a user-facing message.
///
/// Insertion order is display order. A set is rebuilt fresh on every
/// validation pass and never merged across passes. Serializes as a JSON
/// object and decodes one back preserving key order, which is the shape the
/// detect/translate endpoints use for rejection bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet(Vec<(String, String)>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message under `key`. An existing key keeps its position and
    /// gets its message replaced.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        let message = message.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = message,
            None => self.0.push((key, message)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, message)| message.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, m)| (k.as_str(), m.as_str()))
    }
}

impl Serialize for ErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, message) in &self.0 {
            map.serialize_entry(key, message)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ErrorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ErrorSetVisitor;

        impl<'de> Visitor<'de> for ErrorSetVisitor {
            type Value = ErrorSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field identifiers to error messages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = ErrorSet::new();
                while let Some((key, message)) = access.next_entry::<String, String>()? {
                    set.insert(key, message);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ErrorSetVisitor)
    }
}

/// Error type for the detect/translate API boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the request with a field-to-message error object
    Rejected(ErrorSet),
    /// The request never produced a response (DNS, connect, timeout, ...)
    Network(String),
    /// The response body could not be decoded
    InvalidResponse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected(errors) => {
                write!(f, "request rejected with {} error(s)", errors.len())
            }
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::InvalidResponse(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
