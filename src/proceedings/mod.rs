//! Proceedings — document retrieval and LLM-backed analysis.
//!
//! `scraper` produces the proceeding text (stubbed); `service` owns the
//! lookup-cache-analyze flow that the HTTP handlers call into.

pub mod scraper;
pub mod service;

pub use service::{ChatOutcome, ProceedingsService, SummaryOutcome};
