use std::collections::HashSet;

use crate::config::Settings;
use crate::core::criteria::validate_criteria;
use crate::core::ranker::{rank, DEFAULT_RANK_LIMIT};
use crate::core::scoring::calculate_prospect_score;
use crate::models::apollo::{Organization, Person};
use crate::models::requests::SearchProspectsRequest;
use crate::models::responses::SearchProspectsResponse;
use crate::models::{CandidateCompany, CandidateContact, Criteria, Prospect, ScoringWeights};
use crate::services::apollo::{ApolloClient, ApolloError, OrganizationFilters, PeopleFilters};
use crate::services::enrichment::enrich_prospects;

/// Companies fetched per search when the request does not say.
pub const DEFAULT_COMPANY_LIMIT: u32 = 50;

/// Contacts fetched per company during a search.
pub const DEFAULT_CONTACT_PAGE_SIZE: u32 = 10;

/// Prospect search orchestrator - runs the full search pipeline
///
/// # Pipeline Stages
/// 1. Criteria normalization
/// 2. Company search against the firmographic criteria
/// 3. Contact search per company
/// 4. Scoring and ranking
/// 5. Contact enrichment for the ranked winners
pub struct ProspectSearch {
    client: ApolloClient,
    weights: ScoringWeights,
    company_limit: u32,
    contact_page_size: u32,
    default_limit: usize,
}

impl ProspectSearch {
    pub fn new(client: ApolloClient, weights: ScoringWeights) -> Self {
        Self {
            client,
            weights,
            company_limit: DEFAULT_COMPANY_LIMIT,
            contact_page_size: DEFAULT_CONTACT_PAGE_SIZE,
            default_limit: DEFAULT_RANK_LIMIT,
        }
    }

    pub fn with_default_weights(client: ApolloClient) -> Self {
        Self::new(client, ScoringWeights::default())
    }

    /// Wire the orchestrator from the loaded configuration.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            client: ApolloClient::from_settings(&settings.apollo),
            weights: settings.scoring.weights.to_weights(),
            company_limit: settings
                .search
                .company_limit
                .unwrap_or(DEFAULT_COMPANY_LIMIT),
            contact_page_size: settings
                .search
                .contact_page_size
                .unwrap_or(DEFAULT_CONTACT_PAGE_SIZE),
            default_limit: settings.search.default_limit.unwrap_or(DEFAULT_RANK_LIMIT),
        }
    }

    /// Run a prospect search end to end.
    ///
    /// The company search is load-bearing and its failure fails the
    /// search; per-company contact searches and the final enrichment
    /// degrade gracefully instead.
    pub async fn search(
        &self,
        request: &SearchProspectsRequest,
    ) -> Result<SearchProspectsResponse, ApolloError> {
        // Stage 1: normalize whatever the caller sent
        let criteria = validate_criteria(&request.criteria);
        let company_limit = request.company_limit.unwrap_or(self.company_limit);
        let limit = request.limit.unwrap_or(self.default_limit);

        tracing::info!(
            "Searching prospects: {} industries, {} titles, limit {}",
            criteria.industries.len(),
            criteria.job_titles.len(),
            limit
        );

        // Stage 2: companies matching the firmographic criteria
        let organizations = self.search_companies(&criteria, company_limit).await?;
        let now = chrono::Utc::now();
        let companies: Vec<CandidateCompany> = organizations
            .iter()
            .map(|org| CandidateCompany::from_organization(org, now))
            .collect();

        // Stage 3: contacts per company
        let mut prospects: Vec<Prospect> = Vec::new();
        for company in &companies {
            for person in self.contacts_for_company(company, &criteria).await {
                prospects.push(Prospect {
                    company: company.clone(),
                    contact: CandidateContact::from_person(&person),
                    match_score: 0,
                    match_reasons: Vec::new(),
                });
            }
        }

        let total_found = prospects.len();

        // Stage 4: score and rank
        for prospect in &mut prospects {
            let result = calculate_prospect_score(prospect, &criteria, &self.weights);
            prospect.match_score = result.score;
            prospect.match_reasons = result.reasons;
        }
        let ranked = rank(prospects, limit);

        // Stage 5: reveal contact details for the winners
        let prospects = enrich_prospects(&self.client, ranked).await;

        tracing::info!(
            "Search returned {} prospects ({} assembled before ranking)",
            prospects.len(),
            total_found
        );

        Ok(SearchProspectsResponse {
            criteria,
            total_found,
            returned: prospects.len(),
            prospects,
        })
    }

    async fn search_companies(
        &self,
        criteria: &Criteria,
        limit: u32,
    ) -> Result<Vec<Organization>, ApolloError> {
        let filters = OrganizationFilters {
            per_page: limit,
            company_sizes: criteria.company_sizes.clone(),
            locations: criteria.locations.clone(),
            technologies: criteria.technologies.clone(),
            keywords: criteria.keywords.clone(),
            industry_tag_ids: map_industries_to_tag_ids(&criteria.industries),
            ..Default::default()
        };

        let response = self.client.search_organizations(&filters).await?;
        Ok(response.organizations)
    }

    /// Contact search failures degrade to an empty list so one
    /// company cannot sink the whole search. Companies without a
    /// domain are skipped for the same reason.
    async fn contacts_for_company(
        &self,
        company: &CandidateCompany,
        criteria: &Criteria,
    ) -> Vec<Person> {
        let domain = match company.domain.as_deref().filter(|d| !d.is_empty()) {
            Some(domain) => domain,
            None => return Vec::new(),
        };

        let filters = PeopleFilters {
            per_page: self.contact_page_size,
            job_titles: criteria.job_titles.clone(),
            seniorities: criteria.seniorities.clone(),
            company_domains: vec![domain.to_string()],
            ..Default::default()
        };

        match self.client.search_people(&filters).await {
            Ok(response) => response.people,
            Err(error) => {
                tracing::warn!("Contact search failed for {}: {}", domain, error);
                Vec::new()
            }
        }
    }
}

/// Apollo taxonomy tag IDs for the industries the product targets.
/// Unknown industries contribute no tags; the keyword filters still
/// carry them.
fn map_industries_to_tag_ids(industries: &[String]) -> Vec<String> {
    const INDUSTRY_TAG_IDS: [(&str, &[&str]); 10] = [
        ("SaaS", &["5567cd4773696439b10b0000"]),
        (
            "Technology",
            &["5567cd4773696439b10b0000", "5567cd4773696439b10c0000"],
        ),
        ("E-commerce", &["5567cd4773696439b10d0000"]),
        ("FinTech", &["5567cd4773696439b10e0000"]),
        ("Healthcare", &["5567cd4773696439b10f0000"]),
        ("Professional Services", &["5567cd4773696439b1100000"]),
        ("Manufacturing", &["5567cd4773696439b1110000"]),
        ("Retail", &["5567cd4773696439b1120000"]),
        ("Education", &["5567cd4773696439b1130000"]),
        ("Real Estate", &["5567cd4773696439b1140000"]),
    ];

    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for industry in industries {
        let entry = INDUSTRY_TAG_IDS
            .iter()
            .find(|(name, _)| *name == industry.as_str());
        if let Some((_, tag_ids)) = entry {
            for id in *tag_ids {
                if seen.insert(*id) {
                    ids.push(id.to_string());
                }
            }
        }
    }
    ids
}
