use serde::{Deserialize, Serialize};

/// How the tech-stack overlap is turned into a percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMode {
    /// Integer-divides before scaling, so anything short of a full match is 0%.
    /// Kept as the default for compatibility with existing decisions.
    #[default]
    Truncating,
    /// Scales before dividing: two of four skills yield 50%.
    Proportional,
}

/// Thresholds and reference data driving the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub minimum_age: i32,
    /// Applicants strictly older than this get a detailed identity check.
    pub detailed_validation_age: i32,
    pub home_country: String,
    pub reference_stack: Vec<String>,
    pub auto_accept_years_of_experience: u32,
    pub rejection_threshold: u32,
    pub fast_track_threshold: u32,
    pub similarity_mode: SimilarityMode,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            detailed_validation_age: 50,
            home_country: "TURKEY".to_string(),
            reference_stack: ["C#", "RabbitMQ", "Microservice", "Visual Studio"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            auto_accept_years_of_experience: 15,
            rejection_threshold: 25,
            fast_track_threshold: 75,
            similarity_mode: SimilarityMode::Truncating,
        }
    }
}
