//! Back-office building blocks: an item catalog exposed over HTTP and a
//! rule-based evaluator for incoming job applications.

pub mod catalog;
pub mod config;
pub mod error;
pub mod hiring;
pub mod telemetry;
