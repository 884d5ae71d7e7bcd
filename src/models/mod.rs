// Model exports
pub mod apollo;
pub mod domain;
pub mod requests;
pub mod responses;
pub mod sources;

pub use domain::{CandidateCompany, CandidateContact, Criteria, Prospect, ScoreResult, ScoringWeights};
pub use requests::SearchProspectsRequest;
pub use responses::{CompanyEnrichmentResponse, EnrichedContact, SearchProspectsResponse};
pub use sources::{AiProspect, OpenWebCompany};
