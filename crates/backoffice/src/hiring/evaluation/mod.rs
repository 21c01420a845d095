mod config;
mod rules;

pub use config::{EvaluatorConfig, SimilarityMode};

use tracing::debug;

use super::domain::{ApplicationResult, JobApplication};
use super::identity::{IdentityValidator, ValidationMode};

/// Raised when an application cannot be evaluated at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("application has no applicant")]
    MissingApplicant,
}

/// Classifies job applications using an injected identity validator.
///
/// Evaluation takes `&mut self` because it switches the validator's
/// [`ValidationMode`] before checking the identity number; the chosen mode
/// stays visible through [`ApplicationEvaluator::validator`] afterwards.
pub struct ApplicationEvaluator<V> {
    validator: V,
    config: EvaluatorConfig,
}

impl<V: IdentityValidator> ApplicationEvaluator<V> {
    pub fn new(validator: V) -> Self {
        Self::with_config(validator, EvaluatorConfig::default())
    }

    pub fn with_config(validator: V, config: EvaluatorConfig) -> Self {
        Self { validator, config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn into_validator(self) -> V {
        self.validator
    }

    /// Rules short-circuit in order: age floor, office country, identity,
    /// then tech-stack similarity.
    pub fn evaluate(
        &mut self,
        form: &JobApplication,
    ) -> Result<ApplicationResult, EvaluationError> {
        let applicant = form
            .applicant
            .as_ref()
            .ok_or(EvaluationError::MissingApplicant)?;

        if applicant.age < self.config.minimum_age {
            debug!(age = applicant.age, "rejecting under-age applicant");
            return Ok(ApplicationResult::AutoRejected);
        }

        let country = self
            .validator
            .country_data_provider()
            .country_data()
            .country;
        if country != self.config.home_country {
            debug!(%country, "applicant outside home office region");
            return Ok(ApplicationResult::TransferredToCto);
        }

        let mode = if applicant.age > self.config.detailed_validation_age {
            ValidationMode::Detailed
        } else {
            ValidationMode::Quick
        };
        self.validator.set_validation_mode(mode);

        if !self.validator.is_valid(&applicant.identity_number) {
            debug!(?mode, "identity check failed");
            return Ok(ApplicationResult::TransferredToHr);
        }

        let similarity = rules::similarity_rate(
            &form.tech_stack_list,
            &self.config.reference_stack,
            self.config.similarity_mode,
        );
        if similarity < self.config.rejection_threshold {
            debug!(similarity, "tech stack below rejection threshold");
            return Ok(ApplicationResult::AutoRejected);
        }

        if similarity > self.config.fast_track_threshold
            && form.years_of_experience > self.config.auto_accept_years_of_experience
        {
            debug!(
                similarity,
                years = form.years_of_experience,
                "fast-track acceptance"
            );
            return Ok(ApplicationResult::AutoAccepted);
        }

        Ok(ApplicationResult::AutoAccepted)
    }
}
