//! CrediScope backend library.
//!
//! Misinformation-detection pipeline: fan out to external evidence
//! services, tolerate partial failure, fold whatever came back into a
//! scored verdict with a narrative report.

pub mod domains;
pub mod kernel;
pub mod server;
