//! Operating-system release records

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::DomainError;

/// A single supported version of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedVersion {
    pub version: String,
    pub release_date: String,
    pub end_date: String,
}

/// A distribution and its supported versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    pub supported_versions: Vec<SupportedVersion>,
}

impl Release {
    /// Validate an untyped record and convert it.
    ///
    /// The value must be an object carrying both `name` and `supported_versions`.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        let Value::Object(fields) = &value else {
            return Err(DomainError::InvalidRelease("Request must be JSON".into()));
        };
        if !fields.contains_key("name") || !fields.contains_key("supported_versions") {
            return Err(DomainError::InvalidRelease(
                "Missing required fields: name or supported_versions".into(),
            ));
        }
        serde_json::from_value(value).map_err(|e| DomainError::InvalidRelease(e.to_string()))
    }

    /// One-line summary: name, versions and end dates.
    pub fn summary(&self) -> String {
        let versions = self
            .supported_versions
            .iter()
            .map(|v| v.version.as_str())
            .join(", ");
        let end_dates = self
            .supported_versions
            .iter()
            .map(|v| v.end_date.as_str())
            .join(", ");
        format!(
            "Distro Name: {}, Supported Versions: {}, End Dates: {}",
            self.name, versions, end_dates
        )
    }

    pub fn matches(&self, distro: &str) -> bool {
        self.name.to_lowercase() == distro.to_lowercase()
    }
}

/// Capitalize the first char and lowercase the rest (`kali linux` → `Kali linux`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn version(version: &str, release_date: &str, end_date: &str) -> SupportedVersion {
    SupportedVersion {
        version: version.into(),
        release_date: release_date.into(),
        end_date: end_date.into(),
    }
}

/// Records every new catalog starts with.
pub fn default_releases() -> Vec<Release> {
    vec![
        Release {
            name: "Ubuntu".into(),
            supported_versions: vec![
                version("24.04 Noble Numbat (LTS)", "25/04/24", "25/04/29"),
                version("22.04 Jammy Jellyfish (LTS)", "21/04/22", "01/04/27"),
            ],
        },
        Release {
            name: "Kali Linux".into(),
            supported_versions: vec![
                version("Kali 2024.2", "05/06/24", "05/06/29"),
                version("Kali 2023.4", "05/12/23", "05/12/26"),
            ],
        },
        Release {
            name: "CentOS".into(),
            supported_versions: vec![
                version("8", "24/09/19", "31/12/21"),
                version("7", "07/07/14", "06/08/20"),
            ],
        },
    ]
}
