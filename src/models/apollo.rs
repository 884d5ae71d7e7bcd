use serde::{Deserialize, Serialize};

/// Organization record as returned by the Apollo API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub primary_domain: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sub_industry: Option<String>,
    #[serde(default)]
    pub estimated_num_employees: Option<u32>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub funding_stage: Option<String>,
    #[serde(default)]
    pub total_funding: Option<f64>,
    #[serde(default)]
    pub latest_funding_round_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub latest_funding_stage_amount: Option<f64>,
    #[serde(default)]
    pub num_current_jobs: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Person record as returned by the Apollo API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub seniority: Option<String>,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_status: Option<String>,
    #[serde(default)]
    pub personal_emails: Vec<String>,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
}

impl Person {
    /// Helper to get the first sanitized phone number, if any.
    pub fn primary_phone(&self) -> Option<String> {
        self.phone_numbers
            .first()
            .and_then(|number| number.sanitized_number.clone())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(default)]
    pub sanitized_number: Option<String>,
    #[serde(default)]
    pub raw_number: Option<String>,
}

/// Paging block shared by the Apollo search endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_entries: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationSearchResponse {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeopleSearchResponse {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrichResponse {
    #[serde(default)]
    pub organization: Option<Organization>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkMatchResponse {
    #[serde(default)]
    pub matches: Vec<BulkMatch>,
}

/// One slot of a bulk match response; `person` is absent when Apollo
/// found no match for the submitted details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkMatch {
    #[serde(default)]
    pub person: Option<Person>,
}
