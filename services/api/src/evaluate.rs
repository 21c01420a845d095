use backoffice::config::AppConfig;
use backoffice::error::AppError;
use backoffice::hiring::{
    ApplicationEvaluator, ApplicationResult, EvaluatorConfig, IdentityValidator, JobApplication,
    SimilarityMode, StaticIdentityValidator, ValidationMode,
};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON document describing the application
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Country the identity validator reports (defaults to the home country)
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Score tech-stack overlap proportionally instead of the truncating default
    #[arg(long)]
    pub(crate) proportional: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluationReport {
    pub(crate) result: ApplicationResult,
    pub(crate) validation_mode: ValidationMode,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = std::fs::read_to_string(&args.file)?;
    let application: JobApplication = serde_json::from_str(&raw)?;

    let mut evaluator_config = config.hiring.evaluator_config();
    if args.proportional {
        evaluator_config.similarity_mode = SimilarityMode::Proportional;
    }
    let country = args
        .country
        .unwrap_or_else(|| evaluator_config.home_country.clone());

    let report = evaluate_with(
        StaticIdentityValidator::new(country),
        evaluator_config,
        &application,
    )?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn evaluate_with<V: IdentityValidator>(
    validator: V,
    config: EvaluatorConfig,
    application: &JobApplication,
) -> Result<EvaluationReport, AppError> {
    let mut evaluator = ApplicationEvaluator::with_config(validator, config);
    let result = evaluator.evaluate(application)?;
    Ok(EvaluationReport {
        result,
        validation_mode: evaluator.validator().validation_mode(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice::hiring::Applicant;

    fn application(age: i32) -> JobApplication {
        JobApplication {
            applicant: Some(Applicant {
                age,
                identity_number: "98765".to_string(),
            }),
            tech_stack_list: vec![
                "C#".to_string(),
                "RabbitMQ".to_string(),
                "Microservice".to_string(),
                "Visual Studio".to_string(),
            ],
            years_of_experience: 4,
        }
    }

    #[test]
    fn reports_result_and_validation_mode() {
        let report = evaluate_with(
            StaticIdentityValidator::new("TURKEY"),
            EvaluatorConfig::default(),
            &application(55),
        )
        .expect("evaluates");

        assert_eq!(
            report,
            EvaluationReport {
                result: ApplicationResult::AutoAccepted,
                validation_mode: ValidationMode::Detailed,
            }
        );
        let json = serde_json::to_value(&report).expect("serializes");
        assert_eq!(json["result"], "AutoAccepted");
        assert_eq!(json["validationMode"], "Detailed");
    }

    #[test]
    fn foreign_country_goes_to_cto() {
        let report = evaluate_with(
            StaticIdentityValidator::new("SPAIN"),
            EvaluatorConfig::default(),
            &application(30),
        )
        .expect("evaluates");

        assert_eq!(report.result, ApplicationResult::TransferredToCto);
        assert_eq!(
            serde_json::to_value(report.result).expect("serializes"),
            "TransferredToCTO"
        );
    }

    #[test]
    fn missing_applicant_surfaces_as_error() {
        let err = evaluate_with(
            StaticIdentityValidator::new("TURKEY"),
            EvaluatorConfig::default(),
            &JobApplication::default(),
        )
        .expect_err("fails");

        assert!(matches!(err, AppError::Evaluation(_)));
    }
}
