use serde::{Deserialize, Serialize};

use crate::models::domain::Criteria;

/// Request to run a prospect search. Limits fall back to the
/// service-level defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchProspectsRequest {
    #[serde(default)]
    pub criteria: Criteria,
    #[serde(alias = "company_limit", rename = "companyLimit", default)]
    pub company_limit: Option<u32>,
    #[serde(default)]
    pub limit: Option<usize>,
}
