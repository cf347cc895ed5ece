//! Device log content.

use serde::{Deserialize, Serialize};

/// Opaque text returned by `/log`, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogContent(String);

impl LogContent {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for LogContent {
    fn from(text: String) -> Self {
        Self(text)
    }
}
