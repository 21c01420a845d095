use std::cell::{Cell, RefCell};

use crate::hiring::domain::{Applicant, JobApplication};
use crate::hiring::identity::{FixedCountry, IdentityValidator, ValidationMode};
use crate::hiring::CountryDataProvider;

/// Validator double that records every interaction.
pub(super) struct RecordingValidator {
    country: FixedCountry,
    accepts: bool,
    mode: ValidationMode,
    pub(super) mode_changes: Vec<ValidationMode>,
    validated: RefCell<Vec<String>>,
    country_lookups: Cell<usize>,
}

impl RecordingValidator {
    pub(super) fn new(country: &str, accepts: bool) -> Self {
        Self {
            country: FixedCountry(country.to_string()),
            accepts,
            mode: ValidationMode::default(),
            mode_changes: Vec::new(),
            validated: RefCell::new(Vec::new()),
            country_lookups: Cell::new(0),
        }
    }

    pub(super) fn home(accepts: bool) -> Self {
        Self::new("TURKEY", accepts)
    }

    pub(super) fn validated(&self) -> Vec<String> {
        self.validated.borrow().clone()
    }

    pub(super) fn country_lookups(&self) -> usize {
        self.country_lookups.get()
    }
}

impl IdentityValidator for RecordingValidator {
    fn is_valid(&self, identity_number: &str) -> bool {
        self.validated.borrow_mut().push(identity_number.to_string());
        self.accepts
    }

    fn country_data_provider(&self) -> &dyn CountryDataProvider {
        self.country_lookups.set(self.country_lookups.get() + 1);
        &self.country
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode_changes.push(mode);
        self.mode = mode;
    }
}

pub(super) fn application(
    age: i32,
    tech_stack: &[&str],
    years_of_experience: u32,
) -> JobApplication {
    JobApplication {
        applicant: Some(Applicant {
            age,
            identity_number: "12345678901".to_string(),
        }),
        tech_stack_list: tech_stack.iter().map(|entry| entry.to_string()).collect(),
        years_of_experience,
    }
}

pub(super) const FULL_STACK: [&str; 4] = ["C#", "RabbitMQ", "Microservice", "Visual Studio"];
