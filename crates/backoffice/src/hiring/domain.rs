use std::fmt;

use serde::{Deserialize, Serialize};

/// Candidate submitted for a position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(default)]
    pub applicant: Option<Applicant>,
    #[serde(default)]
    pub tech_stack_list: Vec<String>,
    #[serde(default)]
    pub years_of_experience: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub age: i32,
    #[serde(default)]
    pub identity_number: String,
}

/// Routing decision for an evaluated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationResult {
    AutoRejected,
    #[serde(rename = "TransferredToHR")]
    TransferredToHr,
    TransferredToLead,
    #[serde(rename = "TransferredToCTO")]
    TransferredToCto,
    AutoAccepted,
}

impl ApplicationResult {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationResult::AutoRejected => "AutoRejected",
            ApplicationResult::TransferredToHr => "TransferredToHR",
            ApplicationResult::TransferredToLead => "TransferredToLead",
            ApplicationResult::TransferredToCto => "TransferredToCTO",
            ApplicationResult::AutoAccepted => "AutoAccepted",
        }
    }
}

impl fmt::Display for ApplicationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
