//! pf-mcdm - Pythagorean Fuzzy Multi-Criteria Decision Analysis
//!
//! This crate derives criterion weights from pairwise linguistic judgments
//! (FAHP) and ranks alternatives against those weighted criteria (FTOPSIS),
//! with multi-expert aggregation, agreement analysis, and summary statistics.

pub mod application;
pub mod config;
pub mod domain;
