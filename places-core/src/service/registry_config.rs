use super::RegistryError;
use crate::model::Category;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "breweries",
    "universities",
    "pharmacies",
    "emergency-services",
    "supermarkets",
];

pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 5.0;

/// configures a [`super::RegistryService`]: which categories may be used and
/// the fixed radius of nearby searches.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RegistryConfig {
    pub categories: Vec<String>,
    #[serde(default = "default_search_radius_km")]
    pub search_radius_km: f64,
}

fn default_search_radius_km() -> f64 {
    DEFAULT_SEARCH_RADIUS_KM
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            search_radius_km: DEFAULT_SEARCH_RADIUS_KM,
        }
    }
}

impl RegistryConfig {
    pub fn new(categories: &[&str], search_radius_km: f64) -> Result<RegistryConfig, RegistryError> {
        RegistryConfig {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            search_radius_km,
        }
        .validated()
    }

    /// normalizes category names (trimmed, lowercase, deduplicated) and
    /// checks that the configuration is usable.
    pub fn validated(self) -> Result<RegistryConfig, RegistryError> {
        if !self.search_radius_km.is_finite() || self.search_radius_km <= 0.0 {
            return Err(RegistryError::ConfigurationError(format!(
                "search_radius_km must be a positive number, found {}",
                self.search_radius_km
            )));
        }
        let categories = self
            .categories
            .iter()
            .map(|c| Category::normalize(c))
            .unique()
            .collect_vec();
        if categories.is_empty() {
            return Err(RegistryError::ConfigurationError(String::from(
                "at least one category must be configured",
            )));
        }
        if categories.iter().any(|c| c.is_empty()) {
            return Err(RegistryError::ConfigurationError(String::from(
                "category names must not be blank",
            )));
        }
        Ok(RegistryConfig {
            categories,
            search_radius_km: self.search_radius_km,
        })
    }

    /// resolves a raw category identifier against the allow-list.
    pub fn category(&self, raw: &str) -> Result<Category, RegistryError> {
        let normalized = Category::normalize(raw);
        if self.categories.contains(&normalized) {
            Ok(Category::new(normalized))
        } else {
            Err(RegistryError::UnknownCategory {
                category: raw.to_string(),
            })
        }
    }
}

impl TryFrom<&String> for RegistryConfig {
    type Error = RegistryError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let config: RegistryConfig = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RegistryError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                RegistryError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RegistryError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                RegistryError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(RegistryError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        config.validated()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RegistryConfig::default().validated().expect("valid");
        assert_eq!(config.categories.len(), 5);
        assert_eq!(config.search_radius_km, 5.0);
    }

    #[test]
    fn test_category_resolution_normalizes() {
        let config = RegistryConfig::default();
        let category = config.category("  Pharmacies ").expect("known category");
        assert_eq!(category.as_str(), "pharmacies");
        assert!(matches!(
            config.category("bakeries"),
            Err(RegistryError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(RegistryConfig::new(&[], 5.0).is_err());
        assert!(RegistryConfig::new(&["  "], 5.0).is_err());
        assert!(RegistryConfig::new(&["breweries"], 0.0).is_err());
        assert!(RegistryConfig::new(&["breweries"], f64::NAN).is_err());
        let deduped = RegistryConfig::new(&["Breweries", "breweries "], 1.0).expect("valid");
        assert_eq!(deduped.categories, vec![String::from("breweries")]);
    }

    #[test]
    fn test_read_toml_and_json() {
        let dir = std::env::temp_dir().join(format!("places-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");

        let toml_file = dir.join("registry.toml");
        std::fs::write(&toml_file, "categories = [\"cervecerias\", \"farmacias\"]\n")
            .expect("write toml");
        let toml_path = toml_file.to_string_lossy().to_string();
        let config = RegistryConfig::try_from(&toml_path).expect("toml config");
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.search_radius_km, DEFAULT_SEARCH_RADIUS_KM);

        let json_file = dir.join("registry.json");
        std::fs::write(
            &json_file,
            r#"{"categories": ["universidades"], "search_radius_km": 2.5}"#,
        )
        .expect("write json");
        let json_path = json_file.to_string_lossy().to_string();
        let config = RegistryConfig::try_from(&json_path).expect("json config");
        assert_eq!(config.search_radius_km, 2.5);

        let other = String::from("registry.yaml");
        assert!(matches!(
            RegistryConfig::try_from(&other),
            Err(RegistryError::ConfigurationError(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
