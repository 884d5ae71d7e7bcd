//! Adapters from per-source record shapes to the canonical models.
//!
//! Key reconciliation happens here and nowhere else: each source maps
//! its own field names onto `CandidateCompany` / `CandidateContact`
//! once, so the scorers never chase fallback chains.

use serde::{Deserialize, Serialize};

use crate::core::signals::{bucket_for_employee_count, extract_growth_signals};
use crate::models::apollo::{Organization, Person};
use crate::models::domain::{CandidateCompany, CandidateContact, Prospect};

impl CandidateCompany {
    /// Builds the canonical company from an Apollo organization,
    /// deriving the size bucket and growth signals along the way.
    pub fn from_organization(
        org: &Organization,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            name: org.name.clone(),
            domain: org.primary_domain.clone(),
            website_url: org.website_url.clone(),
            linkedin_url: org.linkedin_url.clone(),
            industry: org.industry.clone(),
            sub_industry: org.sub_industry.clone(),
            company_size: bucket_for_employee_count(org.estimated_num_employees),
            employee_count: org.estimated_num_employees,
            founded_year: org.founded_year,
            description: org.short_description.clone(),
            funding_stage: org.funding_stage.clone(),
            total_funding: org.total_funding,
            latest_funding_round: org.latest_funding_round_date,
            latest_funding_amount: org.latest_funding_stage_amount,
            location: None,
            city: org.city.clone(),
            state: org.state.clone(),
            country: org.country.clone(),
            technologies_used: org.technologies.clone(),
            phone: org.phone.clone(),
            logo_url: org.logo_url.clone(),
            growth_signals: extract_growth_signals(org, now),
            apollo_id: org.id.clone(),
            last_enriched_at: Some(now),
        }
    }
}

impl CandidateContact {
    /// Builds the canonical contact from an Apollo person. Apollo can
    /// attach several departments; the first one is the primary.
    pub fn from_person(person: &Person) -> Self {
        Self {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            full_name: person.name.clone(),
            job_title: person.title.clone(),
            seniority: person.seniority.clone(),
            department: person.departments.first().cloned(),
            email: person.email.clone(),
            email_status: person.email_status.clone(),
            email_verified: None,
            phone: person.primary_phone(),
            personal_emails: person.personal_emails.clone(),
            linkedin_url: person.linkedin_url.clone(),
            city: person.city.clone(),
            state: person.state.clone(),
            country: person.country.clone(),
            photo_url: person.photo_url.clone(),
            apollo_id: person.id.clone(),
        }
    }
}

/// Prospect as produced by the AI generation path: a single flat
/// object mixing company and contact attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiProspect {
    #[serde(rename = "companyId", default)]
    pub company_id: Option<String>,
    #[serde(rename = "companyName", default)]
    pub company_name: Option<String>,
    #[serde(rename = "companyDomain", default)]
    pub company_domain: Option<String>,
    #[serde(rename = "companyIndustry", default)]
    pub company_industry: Option<String>,
    #[serde(rename = "companySize", default)]
    pub company_size: Option<String>,
    #[serde(rename = "companyLocation", default)]
    pub company_location: Option<String>,
    #[serde(rename = "companyFunding", default)]
    pub company_funding: Option<String>,
    #[serde(rename = "companyWebsite", default)]
    pub company_website: Option<String>,
    #[serde(rename = "companyLinkedIn", default)]
    pub company_linkedin: Option<String>,
    #[serde(rename = "contactId", default)]
    pub contact_id: Option<String>,
    #[serde(rename = "contactFirstName", default)]
    pub contact_first_name: Option<String>,
    #[serde(rename = "contactLastName", default)]
    pub contact_last_name: Option<String>,
    #[serde(rename = "contactFullName", default)]
    pub contact_full_name: Option<String>,
    #[serde(rename = "contactTitle", default)]
    pub contact_title: Option<String>,
    #[serde(rename = "contactSeniority", default)]
    pub contact_seniority: Option<String>,
    #[serde(rename = "contactEmail", default)]
    pub contact_email: Option<String>,
    #[serde(rename = "contactPhone", default)]
    pub contact_phone: Option<String>,
    #[serde(rename = "contactEmailVerified", default)]
    pub contact_email_verified: Option<bool>,
    #[serde(rename = "contactLinkedIn", default)]
    pub contact_linkedin: Option<String>,
    #[serde(rename = "matchScore", default)]
    pub match_score: u32,
    #[serde(rename = "matchReasons", default)]
    pub match_reasons: Vec<String>,
}

impl AiProspect {
    /// Regroups the flat record into the canonical company/contact
    /// pair so it can be scored and ranked like any other prospect.
    pub fn into_prospect(self) -> Prospect {
        Prospect {
            company: CandidateCompany {
                name: self.company_name,
                domain: self.company_domain,
                website_url: self.company_website,
                linkedin_url: self.company_linkedin,
                industry: self.company_industry,
                company_size: self.company_size,
                funding_stage: self.company_funding,
                location: self.company_location,
                apollo_id: self.company_id,
                ..Default::default()
            },
            contact: CandidateContact {
                first_name: self.contact_first_name,
                last_name: self.contact_last_name,
                full_name: self.contact_full_name,
                job_title: self.contact_title,
                seniority: self.contact_seniority,
                email: self.contact_email,
                email_verified: self.contact_email_verified,
                phone: self.contact_phone,
                linkedin_url: self.contact_linkedin,
                apollo_id: self.contact_id,
                ..Default::default()
            },
            match_score: self.match_score,
            match_reasons: self.match_reasons,
        }
    }
}

/// Company assembled from an open-web search hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenWebCompany {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "websiteUrl", default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "industrySearch", default)]
    pub industry_search: Option<String>,
    #[serde(rename = "locationCountry", default)]
    pub location_country: Option<String>,
    #[serde(rename = "rolesMatched", default)]
    pub roles_matched: Vec<String>,
}

impl OpenWebCompany {
    /// The industry and country here come from the search criteria
    /// that surfaced the hit, not from verified company data.
    pub fn into_company(self) -> CandidateCompany {
        CandidateCompany {
            name: self.name,
            domain: self.domain,
            website_url: self.website_url,
            description: self.description,
            industry: self.industry_search,
            country: self.location_country,
            ..Default::default()
        }
    }
}
