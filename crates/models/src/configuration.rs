use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Per-country onboarding requirement configuration.
/// - country_code: natural key, stored uppercase
/// - business_name: descriptive label
/// - requirements: ordered list of required onboarding items
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    pub country_code: String,
    pub business_name: String,
    pub requirements: Vec<String>,
}

/// Create input: carries the key alongside the payload fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationCreate {
    pub country_code: String,
    pub business_name: String,
    pub requirements: Vec<String>,
}

/// Update input: the key is immutable and addressed separately,
/// so only the replaceable fields appear here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationUpdate {
    pub business_name: String,
    pub requirements: Vec<String>,
}

/// Country codes compare case-insensitively; canonical form is ASCII uppercase.
pub fn normalize_country_code(code: &str) -> Result<String, ModelError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation("country_code must not be empty".into()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

pub fn validate_business_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("business_name must not be empty".into()));
    }
    Ok(())
}

pub fn validate_requirements(requirements: &[String]) -> Result<(), ModelError> {
    if requirements.is_empty() {
        return Err(ModelError::Validation("requirements list cannot be empty".into()));
    }
    Ok(())
}

impl ConfigurationCreate {
    /// Returns the normalized country code on success.
    /// An empty requirements list is accepted at create time.
    pub fn validate(&self) -> Result<String, ModelError> {
        validate_business_name(&self.business_name)?;
        normalize_country_code(&self.country_code)
    }
}

impl ConfigurationUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_business_name(&self.business_name)?;
        validate_requirements(&self.requirements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_normalized_to_uppercase() {
        assert_eq!(normalize_country_code(" us ").unwrap(), "US");
        assert_eq!(normalize_country_code("De").unwrap(), "DE");
    }

    #[test]
    fn blank_country_code_rejected() {
        assert!(matches!(normalize_country_code("   "), Err(ModelError::Validation(_))));
        assert!(matches!(normalize_country_code(""), Err(ModelError::Validation(_))));
    }

    #[test]
    fn create_allows_empty_requirements() {
        let input = ConfigurationCreate {
            country_code: "us".into(),
            business_name: "Acme Corp".into(),
            requirements: vec![],
        };
        assert_eq!(input.validate().unwrap(), "US");
    }

    #[test]
    fn create_rejects_blank_business_name() {
        let input = ConfigurationCreate {
            country_code: "US".into(),
            business_name: "  ".into(),
            requirements: vec!["tax_id".into()],
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_rejects_empty_requirements() {
        let input = ConfigurationUpdate {
            business_name: "Acme Corp".into(),
            requirements: vec![],
        };
        assert!(matches!(input.validate(), Err(ModelError::Validation(_))));
    }
}
