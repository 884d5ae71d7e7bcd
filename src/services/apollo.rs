use crate::config::ApolloSettings;
use crate::models::apollo::{
    BulkMatch, BulkMatchResponse, EnrichResponse, Organization, OrganizationSearchResponse,
    PeopleSearchResponse, Person,
};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Default Apollo API root.
pub const APOLLO_BASE_URL: &str = "https://api.apollo.io/api/v1";

/// Titles used when a company contact search gives no filters of its
/// own. They skew towards the people who answer cold outreach.
const DEFAULT_CONTACT_TITLES: [&str; 8] = [
    "Chief",
    "VP",
    "Director",
    "Head of",
    "Sales",
    "Customer Success",
    "HR",
    "Talent",
];

const DEFAULT_CONTACT_SENIORITIES: [&str; 4] = ["senior", "director", "vp", "c_suite"];

/// Errors that can occur when talking to Apollo
#[derive(Debug, Error)]
pub enum ApolloError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Rate limit exceeded, please retry later")]
    RateLimited,

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Apollo temporarily unavailable")]
    Unavailable,

    #[error("API returned error: {0}")]
    ApiError(String),
}

/// Filters for an organization search.
#[derive(Debug, Clone)]
pub struct OrganizationFilters {
    pub page: u32,
    pub per_page: u32,
    pub company_sizes: Vec<String>,
    pub locations: Vec<String>,
    pub technologies: Vec<String>,
    pub keywords: Vec<String>,
    pub industry_tag_ids: Vec<String>,
}

impl Default for OrganizationFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            company_sizes: Vec::new(),
            locations: Vec::new(),
            technologies: Vec::new(),
            keywords: Vec::new(),
            industry_tag_ids: Vec::new(),
        }
    }
}

/// Filters for a people search.
#[derive(Debug, Clone)]
pub struct PeopleFilters {
    pub page: u32,
    pub per_page: u32,
    pub job_titles: Vec<String>,
    pub seniorities: Vec<String>,
    pub locations: Vec<String>,
    pub keywords: Option<String>,
    pub organization_ids: Vec<String>,
    pub company_domains: Vec<String>,
}

impl Default for PeopleFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
            job_titles: Vec::new(),
            seniorities: Vec::new(),
            locations: Vec::new(),
            keywords: None,
            organization_ids: Vec::new(),
            company_domains: Vec::new(),
        }
    }
}

/// One entry of a bulk match request. Absent fields are omitted from
/// the payload so Apollo does not try to match on them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnrichmentDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Apollo API client
///
/// Handles all communication with Apollo including:
/// - Searching organizations and people
/// - Enriching a single organization by domain
/// - Bulk matching people to reveal emails and phone numbers
pub struct ApolloClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ApolloClient {
    /// Create a new Apollo client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Create a client from the loaded configuration
    pub fn from_settings(settings: &ApolloSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.unwrap_or(30)))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            client,
        }
    }

    /// Search organizations matching the given filters
    pub async fn search_organizations(
        &self,
        filters: &OrganizationFilters,
    ) -> Result<OrganizationSearchResponse, ApolloError> {
        let url = format!(
            "{}/mixed_companies/search",
            self.base_url.trim_end_matches('/')
        );

        let page = filters.page.max(1);
        let per_page = filters.per_page.min(100);
        // Explicit keywords replace the technology tags entirely
        let keyword_tags = if filters.keywords.is_empty() {
            &filters.technologies
        } else {
            &filters.keywords
        };

        let payload = serde_json::json!({
            "page": page,
            "per_page": per_page,
            "organization_num_employees_ranges": filters.company_sizes,
            "organization_locations": filters.locations,
            "q_organization_keyword_tags": keyword_tags,
            "organization_not_null": ["linkedin_url"],
            "organization_industry_tag_ids": filters.industry_tag_ids,
        });

        tracing::debug!("Searching organizations: page {}, per_page {}", page, per_page);

        let response = self
            .client
            .post(&url)
            .header("X-Api-Key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let parsed: OrganizationSearchResponse = response.json().await?;

        tracing::debug!(
            "Found {} organizations (total: {})",
            parsed.organizations.len(),
            parsed.pagination.total_entries
        );

        Ok(parsed)
    }

    /// Enrich a single organization by its domain. Returns `None`
    /// when Apollo has no record for it.
    pub async fn enrich_organization(
        &self,
        domain: &str,
    ) -> Result<Option<Organization>, ApolloError> {
        let url = format!(
            "{}/organizations/enrich?domain={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(domain)
        );

        tracing::debug!("Enriching organization: {}", domain);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let parsed: EnrichResponse = response.json().await?;

        Ok(parsed.organization)
    }

    /// Search people matching the given filters
    pub async fn search_people(
        &self,
        filters: &PeopleFilters,
    ) -> Result<PeopleSearchResponse, ApolloError> {
        let url = format!(
            "{}/mixed_people/api_search",
            self.base_url.trim_end_matches('/')
        );

        let page = filters.page.max(1);
        let per_page = filters.per_page.min(100);

        let mut payload = serde_json::json!({
            "page": page,
            "per_page": per_page,
            "person_titles": filters.job_titles,
            "person_seniorities": filters.seniorities,
            "person_locations": filters.locations,
            "q_keywords": filters.keywords,
        });
        if !filters.organization_ids.is_empty() {
            payload["organization_ids"] = serde_json::json!(filters.organization_ids);
        }
        if !filters.company_domains.is_empty() {
            payload["q_organization_domains"] =
                serde_json::json!(filters.company_domains.join(","));
        }

        tracing::debug!("Searching people: page {}, per_page {}", page, per_page);

        let response = self
            .client
            .post(&url)
            .header("X-Api-Key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let parsed: PeopleSearchResponse = response.json().await?;

        tracing::debug!(
            "Found {} people (total: {})",
            parsed.people.len(),
            parsed.pagination.total_entries
        );

        Ok(parsed)
    }

    /// Bulk match people to reveal emails and phone numbers. The
    /// response keeps one slot per submitted detail, in order.
    pub async fn bulk_enrich_people(
        &self,
        details: &[EnrichmentDetail],
    ) -> Result<Vec<BulkMatch>, ApolloError> {
        let url = format!("{}/people/bulk_match", self.base_url.trim_end_matches('/'));

        let payload = serde_json::json!({
            "details": details,
            "reveal_personal_emails": true,
            "reveal_phone_number": true,
        });

        tracing::debug!("Bulk matching {} people", details.len());

        let response = self
            .client
            .post(&url)
            .header("X-Api-Key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let parsed: BulkMatchResponse = response.json().await?;

        Ok(parsed.matches)
    }

    /// Fetch likely decision makers at one company, using the default
    /// title and seniority filters.
    pub async fn contacts_by_company(
        &self,
        domain: &str,
        per_page: u32,
    ) -> Result<Vec<Person>, ApolloError> {
        let filters = PeopleFilters {
            per_page,
            job_titles: DEFAULT_CONTACT_TITLES.iter().map(|t| t.to_string()).collect(),
            seniorities: DEFAULT_CONTACT_SENIORITIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            company_domains: vec![domain.to_string()],
            ..Default::default()
        };

        let response = self.search_people(&filters).await?;
        Ok(response.people)
    }
}

/// Map Apollo's failure statuses onto typed errors.
async fn ensure_success(response: Response) -> Result<Response, ApolloError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::TOO_MANY_REQUESTS => Err(ApolloError::RateLimited),
        StatusCode::UNAUTHORIZED => Err(ApolloError::Unauthorized),
        StatusCode::BAD_REQUEST => {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| "Bad request".to_string());
            Err(ApolloError::BadRequest(message))
        }
        status if status.is_server_error() => Err(ApolloError::Unavailable),
        status => Err(ApolloError::ApiError(format!(
            "Unexpected status: {}",
            status
        ))),
    }
}
