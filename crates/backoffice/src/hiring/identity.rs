use serde::{Deserialize, Serialize};

/// How thoroughly an identity number gets checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    #[default]
    Detailed,
    Quick,
}

/// Location details reported by a country data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryData {
    pub country: String,
}

pub trait CountryDataProvider {
    fn country_data(&self) -> CountryData;
}

/// Capability the evaluator consults to vet an applicant's identity.
///
/// The validator carries mutable mode state, so one instance must not be
/// shared between concurrent evaluations.
pub trait IdentityValidator {
    fn is_valid(&self, identity_number: &str) -> bool;
    fn country_data_provider(&self) -> &dyn CountryDataProvider;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&mut self, mode: ValidationMode);
}

/// Provider that always reports the same country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCountry(pub String);

impl CountryDataProvider for FixedCountry {
    fn country_data(&self) -> CountryData {
        CountryData {
            country: self.0.clone(),
        }
    }
}

/// Offline validator that accepts every identity number.
#[derive(Debug, Clone)]
pub struct StaticIdentityValidator {
    country: FixedCountry,
    mode: ValidationMode,
}

impl StaticIdentityValidator {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: FixedCountry(country.into()),
            mode: ValidationMode::default(),
        }
    }
}

impl IdentityValidator for StaticIdentityValidator {
    fn is_valid(&self, _identity_number: &str) -> bool {
        true
    }

    fn country_data_provider(&self) -> &dyn CountryDataProvider {
        &self.country
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }
}
