//! Rule-based screening of job applications.

pub mod domain;
pub mod evaluation;
pub mod identity;

#[cfg(test)]
mod tests;

pub use domain::{Applicant, ApplicationResult, JobApplication};
pub use evaluation::{ApplicationEvaluator, EvaluationError, EvaluatorConfig, SimilarityMode};
pub use identity::{
    CountryData, CountryDataProvider, FixedCountry, IdentityValidator, StaticIdentityValidator,
    ValidationMode,
};
