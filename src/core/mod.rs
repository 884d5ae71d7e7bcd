// Core algorithm exports
pub mod criteria;
pub mod ranker;
pub mod scoring;
pub mod signals;

pub use criteria::{clean_values, normalize_company_sizes, validate_criteria};
pub use ranker::{rank, DEFAULT_RANK_LIMIT};
pub use scoring::{
    calculate_company_score, calculate_contact_relevance, calculate_prospect_score,
    is_relevant_for_outreach,
};
pub use signals::{bucket_for_employee_count, extract_growth_signals};
