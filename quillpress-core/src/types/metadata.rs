//! The editable metadata record

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Book metadata edited by the caller and passed through into the
/// package verbatim. None of the fields are validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    /// Book description/summary
    #[serde(default)]
    pub description: String,

    /// Publisher name
    #[serde(default = "defaults::publisher")]
    pub publisher: String,

    /// Publication date, ISO-like (`YYYY-MM-DD`)
    #[serde(default = "defaults::publication_date")]
    pub publication_date: String,

    /// Copyright/rights statement
    #[serde(default = "defaults::rights")]
    pub rights: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            description: String::new(),
            publisher: defaults::publisher(),
            publication_date: defaults::publication_date(),
            rights: defaults::rights(),
        }
    }
}

mod defaults {
    use super::Utc;

    pub fn publisher() -> String {
        "Self Published".to_string()
    }

    pub fn publication_date() -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }

    pub fn rights() -> String {
        "All rights reserved".to_string()
    }
}
