use serde::{Deserialize, Serialize};

/// Search criteria after normalization. Every category is a flat list
/// of strings; an empty list means the category is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(rename = "jobTitles", alias = "job_titles", default)]
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub seniorities: Vec<String>,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(rename = "companySizes", alias = "company_sizes", default)]
    pub company_sizes: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(rename = "fundingStages", alias = "funding_stages", default)]
    pub funding_stages: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Criteria {
    /// True when no category constrains the search.
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
            && self.job_titles.is_empty()
            && self.seniorities.is_empty()
            && self.departments.is_empty()
            && self.company_sizes.is_empty()
            && self.locations.is_empty()
            && self.funding_stages.is_empty()
            && self.technologies.is_empty()
            && self.keywords.is_empty()
    }
}

/// Candidate company in canonical form. Source adapters in
/// `models::sources` produce this from Apollo, AI generated or
/// open-web records; the scorers only ever read this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateCompany {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "primary_domain", default)]
    pub domain: Option<String>,
    #[serde(rename = "websiteUrl", alias = "website_url", default)]
    pub website_url: Option<String>,
    #[serde(rename = "linkedinUrl", alias = "linkedin_url", default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(rename = "subIndustry", alias = "sub_industry", default)]
    pub sub_industry: Option<String>,
    /// Canonical size bucket label, e.g. "51-200".
    #[serde(rename = "companySize", alias = "size_range", default)]
    pub company_size: Option<String>,
    #[serde(rename = "employeeCount", alias = "estimated_num_employees", default)]
    pub employee_count: Option<u32>,
    #[serde(rename = "foundedYear", alias = "founded_year", default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "fundingStage", alias = "funding_stage", default)]
    pub funding_stage: Option<String>,
    #[serde(rename = "totalFunding", alias = "total_funding", default)]
    pub total_funding: Option<f64>,
    #[serde(rename = "latestFundingRound", alias = "latest_funding_round", default)]
    pub latest_funding_round: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "latestFundingAmount", alias = "latest_funding_amount", default)]
    pub latest_funding_amount: Option<f64>,
    /// Pre-joined location string from sources that do not split it.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "technologiesUsed", alias = "technologies", default)]
    pub technologies_used: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "logoUrl", alias = "logo_url", default)]
    pub logo_url: Option<String>,
    #[serde(rename = "growthSignals", alias = "growth_signals", default)]
    pub growth_signals: Vec<String>,
    #[serde(rename = "apolloId", alias = "apollo_id", default)]
    pub apollo_id: Option<String>,
    #[serde(rename = "lastEnrichedAt", alias = "last_enriched_at", default)]
    pub last_enriched_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl CandidateCompany {
    /// Location as a single comparable string. Uses the pre-joined
    /// field when present, otherwise joins city, state and country.
    pub fn location_string(&self) -> String {
        if let Some(location) = self.location.as_deref() {
            if !location.is_empty() {
                return location.to_string();
            }
        }
        [&self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Candidate contact in canonical form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateContact {
    #[serde(rename = "firstName", alias = "first_name", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", alias = "last_name", default)]
    pub last_name: Option<String>,
    #[serde(rename = "fullName", alias = "name", default)]
    pub full_name: Option<String>,
    #[serde(rename = "jobTitle", alias = "title", default)]
    pub job_title: Option<String>,
    #[serde(alias = "seniority_level", default)]
    pub seniority: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "emailStatus", alias = "email_status", default)]
    pub email_status: Option<String>,
    #[serde(rename = "emailVerified", alias = "email_verified", default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "personalEmails", alias = "personal_emails", default)]
    pub personal_emails: Vec<String>,
    #[serde(rename = "linkedinUrl", alias = "linkedin_url", default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "photoUrl", alias = "photo_url", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "apolloId", alias = "apollo_id", default)]
    pub apollo_id: Option<String>,
}

impl CandidateContact {
    /// Helper to check whether the email was verified by any source.
    pub fn verified_email(&self) -> bool {
        self.email_verified.unwrap_or(false)
            || self.email_status.as_deref() == Some("verified")
    }
}

/// A scored company/contact pair flowing through the search pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prospect {
    #[serde(default)]
    pub company: CandidateCompany,
    #[serde(default)]
    pub contact: CandidateContact,
    #[serde(rename = "matchScore", alias = "match_score", default)]
    pub match_score: u32,
    #[serde(rename = "matchReasons", alias = "match_reasons", default)]
    pub match_reasons: Vec<String>,
}

/// Outcome of scoring one prospect against criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Points awarded per matched criteria category.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub job_title_exact: u32,
    pub job_title_partial: u32,
    pub seniority: u32,
    pub industry: u32,
    pub company_size: u32,
    pub location: u32,
    pub funding_stage: u32,
    pub technology: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            job_title_exact: 30,
            job_title_partial: 15,
            seniority: 20,
            industry: 15,
            company_size: 10,
            location: 10,
            funding_stage: 10,
            technology: 5,
        }
    }
}
