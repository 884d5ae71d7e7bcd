use serde::{Deserialize, Serialize};

use crate::models::domain::{CandidateCompany, CandidateContact, Criteria, Prospect};

/// Response for a prospect search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProspectsResponse {
    pub criteria: Criteria,
    /// Prospects assembled before ranking cut the list down.
    #[serde(rename = "totalFound")]
    pub total_found: usize,
    pub returned: usize,
    pub prospects: Vec<Prospect>,
}

/// A contact scored for relevance within one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedContact {
    pub contact: CandidateContact,
    #[serde(rename = "relevanceScore")]
    pub relevance_score: u32,
    #[serde(rename = "relevantForOutreach")]
    pub relevant_for_outreach: bool,
}

/// Full enrichment report for one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyEnrichmentResponse {
    pub company: CandidateCompany,
    #[serde(rename = "idealCustomerScore")]
    pub ideal_customer_score: u32,
    pub contacts: Vec<EnrichedContact>,
    #[serde(rename = "totalContacts")]
    pub total_contacts: usize,
    #[serde(rename = "relevantContacts")]
    pub relevant_contacts: usize,
}
