//! Mentra Algo - Prospect scoring and search core for the Mentra sales platform
//!
//! This library provides the criteria normalization, scoring and ranking
//! pipeline used to turn raw company and contact records into ranked,
//! explainable prospect lists.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{
    calculate_company_score, calculate_contact_relevance, calculate_prospect_score,
    is_relevant_for_outreach, rank, validate_criteria, DEFAULT_RANK_LIMIT,
};
pub use crate::models::{
    CandidateCompany, CandidateContact, Criteria, Prospect, ScoreResult, ScoringWeights,
    SearchProspectsRequest, SearchProspectsResponse,
};
pub use crate::services::{ApolloClient, ProspectSearch};
