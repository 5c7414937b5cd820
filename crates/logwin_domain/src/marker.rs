use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum_macros::Display as StrumDisplay;

use crate::{Error, Result};

/// What a marker is used for. Only carried for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum MarkerRole {
    Begin,
    End,
    Search,
}

/// A non-empty literal substring matched against document lines.
///
/// Matching is case-sensitive containment; no pattern syntax is interpreted.
/// An empty marker would match every line, so construction rejects it and
/// every engine entry point can rely on a marker having at least one byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Marker(String);

impl Marker {
    pub fn new(role: MarkerRole, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::EmptyMarker { role });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl TryFrom<String> for Marker {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(MarkerRole::Search, value)
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}
