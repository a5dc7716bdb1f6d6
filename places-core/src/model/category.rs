use serde::Serialize;
use std::fmt::Display;

/// a group key for places, such as `pharmacies`. values of this type have
/// already been checked against the configured allow-list, see
/// [`crate::service::RegistryConfig::category`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub(crate) fn new(normalized: String) -> Category {
        Category(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// trims and lowercases a raw category identifier.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_ascii_lowercase()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
