//! Inputs for the demonstration drivers.
//!
//! The shipped defaults live in `demo.toml` next to this file and are embedded
//! at compile time. Any section left out of a document falls back to the same
//! defaults.

use serde::Deserialize;

use crate::error::Result;

const EMBEDDED_DEFAULTS: &str = include_str!("demo.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub logging: LoggingSection,
    pub files: FilesSection,
    pub user: UserSection,
    pub shapes: ShapesSection,
    pub payments: PaymentsSection,
    pub notifications: NotificationsSection,
    pub freight: FreightSection,
    pub storage: StorageSection,
    pub controller: ControllerSection,
}

impl DemoConfig {
    pub fn load() -> Result<Self> {
        Self::from_toml(EMBEDDED_DEFAULTS)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub file_name: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file_name: "app.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilesSection {
    pub output: String,
    pub payload: String,
}

impl Default for FilesSection {
    fn default() -> Self {
        Self {
            output: "output.txt".to_string(),
            payload: "Sample payload written by the file manager".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserSection {
    pub name: String,
    pub email: String,
}

impl Default for UserSection {
    fn default() -> Self {
        Self {
            name: "John".to_string(),
            email: "john@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShapesSection {
    pub circle_radius: f64,
    pub rectangle_width: f64,
    pub rectangle_height: f64,
}

impl Default for ShapesSection {
    fn default() -> Self {
        Self {
            circle_radius: 5.0,
            rectangle_width: 3.0,
            rectangle_height: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentsSection {
    pub sberbank_amount: f64,
    pub paypal_amount: f64,
}

impl Default for PaymentsSection {
    fn default() -> Self {
        Self {
            sberbank_amount: 100.50,
            paypal_amount: 200.75,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationsSection {
    pub message: String,
}

impl Default for NotificationsSection {
    fn default() -> Self {
        Self {
            message: "Sample notification".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FreightSection {
    pub truck_weight: u32,
    pub ship_containers: u32,
}

impl Default for FreightSection {
    fn default() -> Self {
        Self {
            truck_weight: 5000,
            ship_containers: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub payload: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            payload: "Sample data".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerSection {
    pub user_id: u64,
}

impl Default for ControllerSection {
    fn default() -> Self {
        Self { user_id: 123 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolidError;

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        let loaded = DemoConfig::load().unwrap();
        assert_eq!(loaded, DemoConfig::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = DemoConfig::from_toml("").unwrap();
        assert_eq!(config.freight.truck_weight, 5000);
        assert_eq!(config.user.email, "john@example.com");
    }

    #[test]
    fn test_partial_section_override() {
        let config = DemoConfig::from_toml("[shapes]\ncircle_radius = 10.0\n").unwrap();
        assert_eq!(config.shapes.circle_radius, 10.0);
        assert_eq!(config.shapes.rectangle_width, 3.0);
        assert_eq!(config.payments.paypal_amount, 200.75);
    }

    #[test]
    fn test_invalid_document_is_config_error() {
        let result = DemoConfig::from_toml("[freight]\ntruck_weight = \"heavy\"\n");
        assert!(matches!(result, Err(SolidError::Config(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = DemoConfig::from_toml("[freight]\ntruck_weight = -1\n");
        assert!(result.is_err());
    }
}
